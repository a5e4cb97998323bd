//! The JSON API. Every failure is answered with a `{"msg": ...}` body.

use crate::{
    data::student::{Student, StudentPatch},
    error::{JsonError, JsonResult, Message, MissingStudentSnafu},
    state::RosterState,
    validation::{NewStudentBody, normalise_patch},
};
use axum::{
    Json,
    extract::{FromRequest, Path, State},
};
use snafu::OptionExt;

/// [`axum::Json`], with rejections rendered like every other API error.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonError))]
pub struct ApiJson<T>(pub T);

pub async fn list_students(State(state): State<RosterState>) -> JsonResult<Json<Vec<Student>>> {
    Ok(Json(state.list_all().await?))
}

pub async fn get_student(
    State(state): State<RosterState>,
    Path(control_number): Path<String>,
) -> JsonResult<Json<Student>> {
    let student = state
        .get(&control_number)
        .await?
        .context(MissingStudentSnafu { control_number })?;
    Ok(Json(student))
}

pub async fn create_student(
    State(state): State<RosterState>,
    ApiJson(body): ApiJson<NewStudentBody>,
) -> JsonResult<Json<Message>> {
    let student = state.create(body.validate()?).await?;
    info!(control_number = ?student.control_number, "Added student");

    Ok(Json(Message::new("student added successfully")))
}

/// The student is looked up before the body is checked, so a missing id is a 404 whatever
/// the body looks like.
pub async fn patch_student(
    State(state): State<RosterState>,
    Path(control_number): Path<String>,
    body: Result<ApiJson<StudentPatch>, JsonError>,
) -> JsonResult<Json<Message>> {
    if state.get(&control_number).await?.is_none() {
        return Err(MissingStudentSnafu { control_number }.build().into());
    }
    let ApiJson(patch) = body?;

    state
        .update_fields(&control_number, normalise_patch(patch))
        .await?
        .context(MissingStudentSnafu {
            control_number: control_number.as_str(),
        })?;
    info!(?control_number, "Updated student");

    Ok(Json(Message::new("student updated successfully")))
}

pub async fn delete_student(
    State(state): State<RosterState>,
    Path(control_number): Path<String>,
) -> JsonResult<Json<Message>> {
    if !state.delete(&control_number).await? {
        return Err(MissingStudentSnafu { control_number }.build().into());
    }
    info!(?control_number, "Deleted student");

    Ok(Json(Message::new("student deleted successfully")))
}
