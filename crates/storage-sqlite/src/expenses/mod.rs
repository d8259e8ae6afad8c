//! SQLite storage implementation for personal expenses.

mod model;
mod repository;

pub use model::{
    CategoryDB, PersonDB, PersonalExpenseCorrectionChangesetDB, PersonalExpenseCorrectionDB,
};
pub use repository::PersonalExpenseRepository;
