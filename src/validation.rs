//! Turns raw form and JSON input into typed student values.
//!
//! Text fields are normalised the same way whichever route they arrive through: surrounding
//! whitespace is trimmed and a blank value means "no value". Web forms also need the semester
//! parsed, while the JSON API carries it typed already.

use crate::{
    data::{
        FieldUpdate,
        student::{NewStudent, StudentPatch},
    },
    error::{InvalidSemesterSnafu, MissingControlNumberSnafu, RosterResult},
};
use serde::Deserialize;
use snafu::{OptionExt, ResultExt};

/// Trims the input; whitespace-only input counts as absent.
pub fn optional_text(input: Option<String>) -> Option<String> {
    let input = input?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == input.len() {
        Some(input)
    } else {
        Some(trimmed.to_string())
    }
}

pub fn control_number(input: Option<String>) -> RosterResult<String> {
    optional_text(input).context(MissingControlNumberSnafu)
}

pub fn semester(input: Option<String>) -> RosterResult<Option<i32>> {
    let Some(original) = optional_text(input) else {
        return Ok(None);
    };
    original
        .parse::<i32>()
        .map(Some)
        .context(InvalidSemesterSnafu { original })
}

/// The creation form. Every key is optional so that a missing control number is reported
/// as a validation error rather than a form rejection.
#[derive(Deserialize, Debug, Default)]
pub struct NewStudentForm {
    #[serde(default)]
    pub control_number: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub paternal_surname: Option<String>,
    #[serde(default)]
    pub maternal_surname: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
}

impl NewStudentForm {
    pub fn validate(self) -> RosterResult<NewStudent> {
        let Self {
            control_number: cn,
            first_name,
            paternal_surname,
            maternal_surname,
            semester: sem,
        } = self;

        Ok(NewStudent {
            control_number: control_number(cn)?,
            first_name: optional_text(first_name),
            paternal_surname: optional_text(paternal_surname),
            maternal_surname: optional_text(maternal_surname),
            semester: semester(sem)?,
        })
    }
}

/// The edit form. A key that was submitted overwrites the field (blank clears it), a key
/// that was not submitted leaves the field alone.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateStudentForm {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub paternal_surname: Option<String>,
    #[serde(default)]
    pub maternal_surname: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
}

impl UpdateStudentForm {
    pub fn validate(self) -> RosterResult<StudentPatch> {
        let text = |input: Option<String>| match input {
            None => FieldUpdate::Unchanged,
            Some(value) => FieldUpdate::Set(optional_text(Some(value))),
        };

        let sem = match self.semester {
            None => FieldUpdate::Unchanged,
            Some(value) => FieldUpdate::Set(semester(Some(value))?),
        };

        Ok(StudentPatch {
            first_name: text(self.first_name),
            paternal_surname: text(self.paternal_surname),
            maternal_surname: text(self.maternal_surname),
            semester: sem,
        })
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct NewStudentBody {
    #[serde(default)]
    pub control_number: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub paternal_surname: Option<String>,
    #[serde(default)]
    pub maternal_surname: Option<String>,
    #[serde(default)]
    pub semester: Option<i32>,
}

impl NewStudentBody {
    pub fn validate(self) -> RosterResult<NewStudent> {
        let Self {
            control_number: cn,
            first_name,
            paternal_surname,
            maternal_surname,
            semester,
        } = self;

        Ok(NewStudent {
            control_number: control_number(cn)?,
            first_name: optional_text(first_name),
            paternal_surname: optional_text(paternal_surname),
            maternal_surname: optional_text(maternal_surname),
            semester,
        })
    }
}

/// Applies the form text rules to a JSON patch, so `"first_name": " "` clears the field.
pub fn normalise_patch(patch: StudentPatch) -> StudentPatch {
    let StudentPatch {
        first_name,
        paternal_surname,
        maternal_surname,
        semester,
    } = patch;

    StudentPatch {
        first_name: first_name.map(optional_text),
        paternal_surname: paternal_surname.map(optional_text),
        maternal_surname: maternal_surname.map(optional_text),
        semester,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(optional_text(None), None);
        assert_eq!(optional_text(Some("   ".to_string())), None);
        assert_eq!(optional_text(Some(" Ana ".to_string())).as_deref(), Some("Ana"));
    }

    #[test]
    fn semester_parsing() {
        assert_eq!(semester(Some(String::new())).unwrap(), None);
        assert_eq!(semester(Some(" 4 ".to_string())).unwrap(), Some(4));
        let err = semester(Some("fourth".to_string())).unwrap_err();
        assert!(
            matches!(err, RosterError::InvalidSemester { ref original, .. } if original == "fourth")
        );
    }

    #[test]
    fn new_form_requires_control_number() {
        let form = NewStudentForm {
            control_number: Some("  ".to_string()),
            ..NewStudentForm::default()
        };
        assert!(matches!(
            form.validate(),
            Err(RosterError::MissingControlNumber)
        ));
    }

    #[test]
    fn new_form_blanks_become_none() {
        let form = NewStudentForm {
            control_number: Some("C001".to_string()),
            first_name: Some("Ana".to_string()),
            paternal_surname: Some(String::new()),
            maternal_surname: None,
            semester: Some(String::new()),
        };
        assert_eq!(
            form.validate().unwrap(),
            NewStudent {
                control_number: "C001".to_string(),
                first_name: Some("Ana".to_string()),
                paternal_surname: None,
                maternal_surname: None,
                semester: None,
            }
        );
    }

    #[test]
    fn update_form_translates_into_patch() {
        let form = UpdateStudentForm {
            first_name: Some("Ana".to_string()),
            paternal_surname: Some(String::new()),
            maternal_surname: None,
            semester: Some("7".to_string()),
        };
        assert_eq!(
            form.validate().unwrap(),
            StudentPatch {
                first_name: FieldUpdate::Set(Some("Ana".to_string())),
                paternal_surname: FieldUpdate::Set(None),
                maternal_surname: FieldUpdate::Unchanged,
                semester: FieldUpdate::Set(Some(7)),
            }
        );
    }

    #[test]
    fn body_text_follows_form_rules() {
        let body: NewStudentBody = serde_json::from_str(
            r#"{"control_number": " C001 ", "first_name": " Ana ", "paternal_surname": ""}"#,
        )
        .unwrap();
        let student = body.validate().unwrap();
        assert_eq!(student.control_number, "C001");
        assert_eq!(student.first_name.as_deref(), Some("Ana"));
        assert_eq!(student.paternal_surname, None);
    }

    #[test]
    fn patch_blanks_clear_and_missing_keys_stay_unchanged() {
        let patch: StudentPatch =
            serde_json::from_str(r#"{"first_name": "", "paternal_surname": " Lopez "}"#).unwrap();
        assert_eq!(
            normalise_patch(patch),
            StudentPatch {
                first_name: FieldUpdate::Set(None),
                paternal_surname: FieldUpdate::Set(Some("Lopez".to_string())),
                maternal_surname: FieldUpdate::Unchanged,
                semester: FieldUpdate::Unchanged,
            }
        );
    }

    #[test]
    fn body_without_control_number_is_rejected() {
        let body: NewStudentBody = serde_json::from_str(r#"{"first_name": "Ana"}"#).unwrap();
        assert!(matches!(
            body.validate(),
            Err(RosterError::MissingControlNumber)
        ));
    }
}
