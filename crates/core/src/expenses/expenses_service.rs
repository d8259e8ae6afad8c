use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use log::debug;
use uuid::Uuid;

use crate::errors::{DatabaseError, Error, Result};

use super::expenses_model::PersonalExpense;
use super::expenses_traits::{PersonalExpenseRepositoryTrait, PersonalExpenseServiceTrait};

pub struct PersonalExpenseService {
    repository: Arc<dyn PersonalExpenseRepositoryTrait>,
}

impl PersonalExpenseService {
    pub fn new(repository: Arc<dyn PersonalExpenseRepositoryTrait>) -> Self {
        PersonalExpenseService { repository }
    }
}

#[async_trait]
impl PersonalExpenseServiceTrait for PersonalExpenseService {
    fn create_update_personal_expenses(
        &self,
        calculation_id: Uuid,
        personal_expenses: Vec<PersonalExpense>,
    ) -> BoxStream<'_, Result<PersonalExpense>> {
        debug!(
            "Upserting {} personal expenses for calculation {}",
            personal_expenses.len(),
            calculation_id
        );
        self.repository
            .upsert_personal_expenses(calculation_id, personal_expenses)
    }

    async fn create_or_update_personal_expense(
        &self,
        calculation_id: Uuid,
        personal_expense: PersonalExpense,
    ) -> Result<PersonalExpense> {
        debug!(
            "Upserting personal expense of person {} for calculation {}",
            personal_expense.person.id, calculation_id
        );
        self.repository
            .upsert_personal_expense(calculation_id, personal_expense)
            .await
    }

    async fn get_personal_expense(
        &self,
        calculation_id: Uuid,
        person_id: Uuid,
    ) -> Result<PersonalExpense> {
        debug!(
            "Loading personal expense of person {} for calculation {}",
            person_id, calculation_id
        );
        self.repository
            .get_personal_expense(calculation_id, person_id)
            .await?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "No personal expense for person {} in calculation {}",
                    person_id, calculation_id
                )))
            })
    }
}
