use crate::errors::Result;
use crate::expenses::expenses_model::{PersonalExpense, PersonalExpenseCorrection};
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use uuid::Uuid;

/// Trait for personal expense repository operations
#[async_trait]
pub trait PersonalExpenseRepositoryTrait: Send + Sync {
    /// Upserts every expense, yielding the stored view of each in input order.
    ///
    /// All entries are in flight at once; an entry that finishes early is held
    /// back until the ones before it have been yielded.
    fn upsert_personal_expenses(
        &self,
        calculation_id: Uuid,
        personal_expenses: Vec<PersonalExpense>,
    ) -> BoxStream<'_, Result<PersonalExpense>> {
        let in_flight = personal_expenses.len().max(1);
        stream::iter(personal_expenses)
            .map(move |expense| self.upsert_personal_expense(calculation_id, expense))
            .buffered(in_flight)
            .boxed()
    }

    async fn upsert_personal_expense(
        &self,
        calculation_id: Uuid,
        personal_expense: PersonalExpense,
    ) -> Result<PersonalExpense>;

    /// Inserts the correction when it has no id, otherwise updates its amount and comment.
    async fn upsert_correction(
        &self,
        calculation_id: Uuid,
        person_id: Uuid,
        correction: PersonalExpenseCorrection,
    ) -> Result<()>;

    /// Returns `None` when the person has no corrections in the calculation.
    async fn get_personal_expense(
        &self,
        calculation_id: Uuid,
        person_id: Uuid,
    ) -> Result<Option<PersonalExpense>>;
}

/// Trait for personal expense service operations
#[async_trait]
pub trait PersonalExpenseServiceTrait: Send + Sync {
    fn create_update_personal_expenses(
        &self,
        calculation_id: Uuid,
        personal_expenses: Vec<PersonalExpense>,
    ) -> BoxStream<'_, Result<PersonalExpense>>;

    async fn create_or_update_personal_expense(
        &self,
        calculation_id: Uuid,
        personal_expense: PersonalExpense,
    ) -> Result<PersonalExpense>;

    async fn get_personal_expense(
        &self,
        calculation_id: Uuid,
        person_id: Uuid,
    ) -> Result<PersonalExpense>;
}
