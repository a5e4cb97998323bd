use crate::data::FieldUpdate;
use maud::{Markup, Render, html};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub control_number: String,
    pub first_name: Option<String>,
    pub paternal_surname: Option<String>,
    pub maternal_surname: Option<String>,
    pub semester: Option<i32>,
}

impl Student {
    pub fn apply(&mut self, patch: StudentPatch) {
        let StudentPatch {
            first_name,
            paternal_surname,
            maternal_surname,
            semester,
        } = patch;

        first_name.apply_to(&mut self.first_name);
        paternal_surname.apply_to(&mut self.paternal_surname);
        maternal_surname.apply_to(&mut self.maternal_surname);
        semester.apply_to(&mut self.semester);
    }
}

impl From<NewStudent> for Student {
    fn from(value: NewStudent) -> Self {
        let NewStudent {
            control_number,
            first_name,
            paternal_surname,
            maternal_surname,
            semester,
        } = value;

        Self {
            control_number,
            first_name,
            paternal_surname,
            maternal_surname,
            semester,
        }
    }
}

impl Render for Student {
    fn render(&self) -> Markup {
        let names = [
            self.first_name.as_deref(),
            self.paternal_surname.as_deref(),
            self.maternal_surname.as_deref(),
        ];
        let full_name = names
            .into_iter()
            .flatten()
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        html! {
            @if full_name.is_empty() {
                span class="italic" {(self.control_number)}
            } @else {
                (full_name) " (" (self.control_number) ")"
            }
        }
    }
}

/// A validated student, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub control_number: String,
    pub first_name: Option<String>,
    pub paternal_surname: Option<String>,
    pub maternal_surname: Option<String>,
    pub semester: Option<i32>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    #[serde(default)]
    pub first_name: FieldUpdate<Option<String>>,
    #[serde(default)]
    pub paternal_surname: FieldUpdate<Option<String>>,
    #[serde(default)]
    pub maternal_surname: FieldUpdate<Option<String>>,
    #[serde(default)]
    pub semester: FieldUpdate<Option<i32>>,
}

impl StudentPatch {
    pub const fn is_empty(&self) -> bool {
        !(self.first_name.is_set()
            || self.paternal_surname.is_set()
            || self.maternal_surname.is_set()
            || self.semester.is_set())
    }
}
