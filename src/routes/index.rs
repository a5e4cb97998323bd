use crate::{
    error::RosterResult,
    maud_conveniences::{link_button, render_table, student_url},
    state::RosterState,
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<RosterState>) -> RosterResult<Markup> {
    let students = state.list_all().await?;

    let rows = students
        .into_iter()
        .map(|student| {
            let edit_link = student_url("update", &student.control_number);
            let delete_link = student_url("delete", &student.control_number);
            [
                html! { (student.control_number) },
                html! { (student.first_name.unwrap_or_default()) },
                html! { (student.paternal_surname.unwrap_or_default()) },
                html! { (student.maternal_surname.unwrap_or_default()) },
                html! {
                    @if let Some(semester) = student.semester {
                        (semester)
                    } @else {
                        p class="italic" {"-"}
                    }
                },
                html! {
                    div class="flex flex-row space-x-2" {
                        a href=(edit_link) class="hover:text-blue-300 underline" {"Edit"}
                        a href=(delete_link) class="hover:text-red-300 underline" {"Delete"}
                    }
                },
            ]
        })
        .collect();

    Ok(state.render(html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
            (render_table(
                "Students",
                ["Control Number", "First Name", "Paternal Surname", "Maternal Surname", "Semester", ""],
                rows,
            ))
            div class="flex flex-row space-x-4 justify-center" {
                (link_button("/students/new", "Add Student", "blue"))
            }
        }
    }))
}
