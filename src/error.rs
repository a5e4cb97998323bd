use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use serde::Serialize;
use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse max connections {:?}", original))]
    ParseMaxConnections {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("student not found"))]
    MissingStudent { control_number: String },
    #[snafu(display("control number is required"))]
    MissingControlNumber,
    #[snafu(display("semester must be a whole number, got {:?}", original))]
    InvalidSemester {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("a student with control number {:?} already exists", control_number))]
    DuplicateControlNumber { control_number: String },
    #[snafu(display("{}", source.body_text()))]
    JsonBody { source: JsonRejection },
}

impl RosterError {
    #[allow(clippy::match_same_arms)]
    pub fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        match self {
            Self::OpenDatabase { .. } | Self::GetDatabaseConnection { .. } => ISE,
            Self::MigrateError { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                _ => ISE,
            },
            Self::BadEnvVar { .. } | Self::ParseMaxConnections { .. } => ISE,
            Self::MissingStudent { .. } => NF,
            Self::MissingControlNumber => BI,
            Self::InvalidSemester { .. } => BI,
            Self::DuplicateControlNumber { .. } => StatusCode::CONFLICT,
            Self::JsonBody { source } => source.status(),
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Roster Error: "}
                    span {(desc)}
                    a href="/" class="underline ml-2" {"Back"}
                }
            }
        };

        let status_code = self.status_code();
        error!(?self, "Error!");
        (status_code, Html(basic_error(self.to_string()))).into_response()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub msg: String,
}

impl Message {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Error rendering for the JSON API: the status from [`RosterError::status_code`] and a
/// `{"msg": ...}` body.
#[derive(Debug)]
pub struct JsonError(pub RosterError);

pub type JsonResult<T> = Result<T, JsonError>;

impl From<RosterError> for JsonError {
    fn from(value: RosterError) -> Self {
        Self(value)
    }
}

impl From<JsonRejection> for JsonError {
    fn from(source: JsonRejection) -> Self {
        Self(RosterError::JsonBody { source })
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let status_code = self.0.status_code();
        if status_code.is_server_error() {
            error!(error = ?self.0, "Error!");
        } else {
            warn!(error = ?self.0, "Rejected API request");
        }
        (status_code, Json(Message::new(self.0.to_string()))).into_response()
    }
}
