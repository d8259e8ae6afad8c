use expense_calculator_core::errors::{DatabaseError, Error, Result};
use expense_calculator_core::expenses::{
    Person, PersonalExpense, PersonalExpenseCorrection, PersonalExpenseRepositoryTrait,
};

use super::model::{
    to_domain_correction, CategoryDB, PersonDB, PersonalExpenseCorrectionChangesetDB,
    PersonalExpenseCorrectionDB,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{categories, personal_expense_corrections, persons};
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::SqliteConnection;
use futures::future::try_join_all;
use log::{debug, warn};

use std::sync::Arc;
use uuid::Uuid;

type CorrectionRow = (
    PersonalExpenseCorrectionDB,
    Option<PersonDB>,
    Option<CategoryDB>,
);

pub struct PersonalExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PersonalExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PersonalExpenseRepository { pool, writer }
    }

    fn load_personal_expense_impl(
        pool: &DbPool,
        calculation_id: Uuid,
        person_id: Uuid,
    ) -> Result<Option<PersonalExpense>> {
        let mut conn = get_connection(pool)?;
        let rows = personal_expense_corrections::table
            .left_join(persons::table)
            .left_join(categories::table)
            .filter(
                personal_expense_corrections::monthly_calculation_id
                    .eq(calculation_id.to_string()),
            )
            .filter(personal_expense_corrections::person_id.eq(person_id.to_string()))
            .order(sql::<BigInt>("personal_expense_corrections.rowid"))
            .load::<CorrectionRow>(&mut conn)
            .map_err(StorageError::from)?;

        Self::assemble_personal_expense(rows)
    }

    /// Every row belongs to the same person; the first one names them.
    fn assemble_personal_expense(rows: Vec<CorrectionRow>) -> Result<Option<PersonalExpense>> {
        let person = match rows.first() {
            None => return Ok(None),
            Some((correction, person, _)) => person.clone().ok_or_else(|| {
                Error::Database(DatabaseError::Internal(format!(
                    "Correction {} references missing person {}",
                    correction.id, correction.person_id
                )))
            })?,
        };

        let corrections = rows
            .into_iter()
            .map(|(correction, _, category)| to_domain_correction(correction, category))
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(PersonalExpense {
            person: Person::try_from(person)?,
            corrections,
        }))
    }
}

#[async_trait]
impl PersonalExpenseRepositoryTrait for PersonalExpenseRepository {
    async fn upsert_personal_expense(
        &self,
        calculation_id: Uuid,
        personal_expense: PersonalExpense,
    ) -> Result<PersonalExpense> {
        let person_id = personal_expense.person.id;

        try_join_all(
            personal_expense
                .corrections
                .into_iter()
                .map(|correction| self.upsert_correction(calculation_id, person_id, correction)),
        )
        .await?;

        self.get_personal_expense(calculation_id, person_id)
            .await?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "No corrections stored for person {} in calculation {}",
                    person_id, calculation_id
                )))
            })
    }

    async fn upsert_correction(
        &self,
        calculation_id: Uuid,
        person_id: Uuid,
        correction: PersonalExpenseCorrection,
    ) -> Result<()> {
        match correction.id {
            None => {
                let new_row =
                    PersonalExpenseCorrectionDB::new(calculation_id, person_id, &correction);
                debug!(
                    "Inserting correction {} for person {} in calculation {}",
                    new_row.id, person_id, calculation_id
                );
                self.writer
                    .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                        diesel::insert_into(personal_expense_corrections::table)
                            .values(&new_row)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        Ok(())
                    })
                    .await
            }
            Some(correction_id) => {
                let changes = PersonalExpenseCorrectionChangesetDB::from(&correction);
                debug!("Updating correction {}", correction_id);
                let affected = self
                    .writer
                    .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                        Ok(diesel::update(
                            personal_expense_corrections::table.find(correction_id.to_string()),
                        )
                        .set(&changes)
                        .execute(conn)
                        .map_err(StorageError::from)?)
                    })
                    .await?;
                if affected == 0 {
                    warn!(
                        "Update of correction {} matched no rows; nothing was changed",
                        correction_id
                    );
                }
                Ok(())
            }
        }
    }

    async fn get_personal_expense(
        &self,
        calculation_id: Uuid,
        person_id: Uuid,
    ) -> Result<Option<PersonalExpense>> {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || {
            Self::load_personal_expense_impl(&pool, calculation_id, person_id)
        })
        .await
        .map_err(|e| Error::Unexpected(format!("Personal expense read task failed: {}", e)))?
    }
}
