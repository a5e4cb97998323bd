use crate::{
    routes::{
        api::{create_student, delete_student, get_student, list_students, patch_student},
        index::get_index_route,
        student_forms::{
            get_delete_confirmation, get_new_student_form, get_update_student_form,
            post_delete_student, post_new_student, post_update_student,
        },
    },
    state::RosterState,
};
use axum::{Router, routing::get};

pub mod api;
pub mod index;
pub mod student_forms;

pub fn router(state: RosterState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/new",
            get(get_new_student_form).post(post_new_student),
        )
        .route(
            "/students/{id}",
            get(get_student).patch(patch_student).delete(delete_student),
        )
        .route(
            "/students/update/{id}",
            get(get_update_student_form).post(post_update_student),
        )
        .route(
            "/students/delete/{id}",
            get(get_delete_confirmation).post(post_delete_student),
        )
        .with_state(state)
}
