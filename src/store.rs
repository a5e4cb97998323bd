use crate::{
    data::student::{NewStudent, Student, StudentPatch},
    error::RosterResult,
};
use async_trait::async_trait;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStudentStore;
pub use postgres::PostgresStudentStore;

/// Storage for student records, keyed by control number.
///
/// `list_all` returns records sorted by control number.
#[async_trait]
pub trait StudentStore: Send + Sync + std::fmt::Debug {
    async fn list_all(&self) -> RosterResult<Vec<Student>>;
    async fn get(&self, control_number: &str) -> RosterResult<Option<Student>>;
    /// Fails with `DuplicateControlNumber` if the control number is taken.
    async fn create(&self, student: NewStudent) -> RosterResult<Student>;
    /// Returns `None` if there is no such student.
    async fn update_fields(
        &self,
        control_number: &str,
        patch: StudentPatch,
    ) -> RosterResult<Option<Student>>;
    /// Returns whether a row was actually removed.
    async fn delete(&self, control_number: &str) -> RosterResult<bool>;

    async fn close(&self) {}
}
