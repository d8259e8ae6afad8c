//! Personal expenses module - domain models, services, and traits.

mod expenses_model;
mod expenses_service;
mod expenses_traits;

pub use expenses_model::{Category, Person, PersonalExpense, PersonalExpenseCorrection};
pub use expenses_service::PersonalExpenseService;
pub use expenses_traits::{PersonalExpenseRepositoryTrait, PersonalExpenseServiceTrait};
