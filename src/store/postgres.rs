use crate::{
    data::student::{NewStudent, Student, StudentPatch},
    error::{
        DuplicateControlNumberSnafu, GetDatabaseConnectionSnafu, MakeQuerySnafu, MigrateSnafu,
        OpenDatabaseSnafu, RosterError, RosterResult,
    },
    store::StudentStore,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use sqlx::{Pool, Postgres, pool::PoolConnection, postgres::PgPoolOptions};

#[derive(Debug, Clone)]
pub struct PostgresStudentStore {
    pool: Pool<Postgres>,
}

impl PostgresStudentStore {
    pub async fn connect(options: PgPoolOptions, url: &SecretString) -> RosterResult<Self> {
        let pool = options
            .connect(url.expose_secret())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self { pool })
    }

    async fn get_connection(&self) -> RosterResult<PoolConnection<Postgres>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }
}

#[async_trait]
impl StudentStore for PostgresStudentStore {
    async fn list_all(&self) -> RosterResult<Vec<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM public.students ORDER BY control_number")
            .fetch(&self.pool)
            .try_collect()
            .await
            .context(MakeQuerySnafu)
    }

    async fn get(&self, control_number: &str) -> RosterResult<Option<Student>> {
        let mut conn = self.get_connection().await?;
        sqlx::query_as::<_, Student>("SELECT * FROM public.students WHERE control_number = $1")
            .bind(control_number)
            .fetch_optional(&mut *conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn create(&self, student: NewStudent) -> RosterResult<Student> {
        let NewStudent {
            control_number,
            first_name,
            paternal_surname,
            maternal_surname,
            semester,
        } = student;

        let mut conn = self.get_connection().await?;
        let result = sqlx::query_as::<_, Student>(
            "INSERT INTO public.students (control_number, first_name, paternal_surname, maternal_surname, semester) VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&control_number)
        .bind(first_name)
        .bind(paternal_surname)
        .bind(maternal_surname)
        .bind(semester)
        .fetch_one(&mut *conn)
        .await;

        match result {
            Ok(student) => Ok(student),
            Err(sqlx::Error::Database(db_error)) if db_error.is_unique_violation() => {
                DuplicateControlNumberSnafu { control_number }.fail()
            }
            Err(source) => Err(RosterError::MakeQuery { source }),
        }
    }

    async fn update_fields(
        &self,
        control_number: &str,
        patch: StudentPatch,
    ) -> RosterResult<Option<Student>> {
        if patch.is_empty() {
            return self.get(control_number).await;
        }

        let StudentPatch {
            first_name,
            paternal_surname,
            maternal_surname,
            semester,
        } = patch;

        //each column is only overwritten when its flag is set, so one statement covers every patch
        let mut conn = self.get_connection().await?;
        sqlx::query_as::<_, Student>(
            "UPDATE public.students SET \
                first_name = CASE WHEN $2 THEN $3 ELSE first_name END, \
                paternal_surname = CASE WHEN $4 THEN $5 ELSE paternal_surname END, \
                maternal_surname = CASE WHEN $6 THEN $7 ELSE maternal_surname END, \
                semester = CASE WHEN $8 THEN $9 ELSE semester END \
            WHERE control_number = $1 RETURNING *",
        )
        .bind(control_number)
        .bind(first_name.is_set())
        .bind(first_name.into_option().flatten())
        .bind(paternal_surname.is_set())
        .bind(paternal_surname.into_option().flatten())
        .bind(maternal_surname.is_set())
        .bind(maternal_surname.into_option().flatten())
        .bind(semester.is_set())
        .bind(semester.into_option().flatten())
        .fetch_optional(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }

    async fn delete(&self, control_number: &str) -> RosterResult<bool> {
        let mut conn = self.get_connection().await?;
        let result = sqlx::query("DELETE FROM public.students WHERE control_number = $1")
            .bind(control_number)
            .execute(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;
        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
