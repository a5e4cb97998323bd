use crate::{
    data::student::{NewStudent, Student, StudentPatch},
    error::{DuplicateControlNumberSnafu, RosterResult},
    store::StudentStore,
};
use async_trait::async_trait;
use std::collections::{BTreeMap, btree_map::Entry};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    students: RwLock<BTreeMap<String, Student>>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list_all(&self) -> RosterResult<Vec<Student>> {
        Ok(self.students.read().await.values().cloned().collect())
    }

    async fn get(&self, control_number: &str) -> RosterResult<Option<Student>> {
        Ok(self.students.read().await.get(control_number).cloned())
    }

    async fn create(&self, student: NewStudent) -> RosterResult<Student> {
        match self
            .students
            .write()
            .await
            .entry(student.control_number.clone())
        {
            Entry::Occupied(occ) => DuplicateControlNumberSnafu {
                control_number: occ.key().clone(),
            }
            .fail(),
            Entry::Vacant(vac) => Ok(vac.insert(student.into()).clone()),
        }
    }

    async fn update_fields(
        &self,
        control_number: &str,
        patch: StudentPatch,
    ) -> RosterResult<Option<Student>> {
        let mut students = self.students.write().await;
        let Some(student) = students.get_mut(control_number) else {
            return Ok(None);
        };
        student.apply(patch);
        Ok(Some(student.clone()))
    }

    async fn delete(&self, control_number: &str) -> RosterResult<bool> {
        Ok(self.students.write().await.remove(control_number).is_some())
    }
}
