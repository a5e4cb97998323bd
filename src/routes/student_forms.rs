use crate::{
    data::student::Student,
    error::RosterResult,
    maud_conveniences::{
        form_submit_button, link_button, simple_form_element, student_url, title,
    },
    state::RosterState,
    validation::{NewStudentForm, UpdateStudentForm},
};
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

fn form_card(markup: Markup) -> Markup {
    html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-md w-full" {
            (markup)
        }
    }
}

pub async fn get_new_student_form(State(state): State<RosterState>) -> Markup {
    state.render(form_card(html! {
        (title("Add New Student"))
        form method="post" action="/students/new" class="p-4" {
            (simple_form_element("control_number", "Control Number", true, None, None))
            (simple_form_element("first_name", "First Name", false, None, None))
            (simple_form_element("paternal_surname", "Paternal Surname", false, None, None))
            (simple_form_element("maternal_surname", "Maternal Surname", false, None, None))
            (simple_form_element("semester", "Semester", false, Some("number"), None))

            (form_submit_button(Some("Add Student")))
        }
    }))
}

pub async fn post_new_student(
    State(state): State<RosterState>,
    Form(form): Form<NewStudentForm>,
) -> RosterResult<Redirect> {
    let student = state.create(form.validate()?).await?;
    info!(control_number = ?student.control_number, "Added student");

    Ok(Redirect::to("/"))
}

pub async fn get_update_student_form(
    State(state): State<RosterState>,
    Path(control_number): Path<String>,
) -> RosterResult<Response> {
    let Some(student) = state.get(&control_number).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let Student {
        control_number,
        first_name,
        paternal_surname,
        maternal_surname,
        semester,
    } = student;
    let semester = semester.map(|semester| semester.to_string());
    let action = student_url("update", &control_number);

    Ok(state
        .render(form_card(html! {
            (title(html! { "Edit Student " span class="font-mono" {(control_number)} }))
            form method="post" action=(action) class="p-4" {
                (simple_form_element("first_name", "First Name", false, None, first_name.as_deref()))
                (simple_form_element("paternal_surname", "Paternal Surname", false, None, paternal_surname.as_deref()))
                (simple_form_element("maternal_surname", "Maternal Surname", false, None, maternal_surname.as_deref()))
                (simple_form_element("semester", "Semester", false, Some("number"), semester.as_deref()))

                (form_submit_button(Some("Save Changes")))
            }
        }))
        .into_response())
}

pub async fn post_update_student(
    State(state): State<RosterState>,
    Path(control_number): Path<String>,
    Form(form): Form<UpdateStudentForm>,
) -> RosterResult<Redirect> {
    let patch = form.validate()?;

    if state.update_fields(&control_number, patch).await?.is_some() {
        info!(?control_number, "Updated student");
    } else {
        debug!(?control_number, "Tried to update missing student");
    }

    Ok(Redirect::to("/"))
}

pub async fn get_delete_confirmation(
    State(state): State<RosterState>,
    Path(control_number): Path<String>,
) -> RosterResult<Response> {
    let Some(student) = state.get(&control_number).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    let action = student_url("delete", &control_number);

    Ok(state
        .render(form_card(html! {
            (title("Delete Student?"))
            p class="text-gray-200 mb-4" {
                "This will permanently remove " (student) "."
            }
            form method="post" action=(action) class="flex flex-row space-x-4" {
                button type="submit" class="bg-red-600 hover:bg-red-800 font-bold py-2 px-4 rounded" {
                    "Delete"
                }
                (link_button("/", "Cancel", "slate"))
            }
        }))
        .into_response())
}

pub async fn post_delete_student(
    State(state): State<RosterState>,
    Path(control_number): Path<String>,
) -> RosterResult<Redirect> {
    if state.delete(&control_number).await? {
        info!(?control_number, "Deleted student");
    }

    Ok(Redirect::to("/"))
}
