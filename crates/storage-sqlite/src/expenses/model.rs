//! Database models for personal expense corrections and their dimension tables.

use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use expense_calculator_core::errors::{DatabaseError, Error, Result};
use expense_calculator_core::expenses::{Category, Person, PersonalExpenseCorrection};

/// Database model for persons
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::persons)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PersonDB {
    pub id: String,
    pub name: String,
}

/// Database model for categories
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub name: String,
    pub comment: Option<String>,
}

/// Database model for personal expense corrections.
///
/// `amount` holds the decimal's text form so no precision is lost.
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::personal_expense_corrections)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PersonalExpenseCorrectionDB {
    pub id: String,
    pub monthly_calculation_id: String,
    pub person_id: String,
    pub amount: String,
    pub comment: Option<String>,
    pub category_id: String,
}

/// The columns an update may touch; the category, person and calculation
/// bindings of a stored correction never change.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::personal_expense_corrections)]
#[diesel(treat_none_as_null = true)]
pub struct PersonalExpenseCorrectionChangesetDB {
    pub amount: String,
    pub comment: Option<String>,
}

impl PersonalExpenseCorrectionDB {
    pub fn new(
        calculation_id: Uuid,
        person_id: Uuid,
        correction: &PersonalExpenseCorrection,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            monthly_calculation_id: calculation_id.to_string(),
            person_id: person_id.to_string(),
            amount: correction.amount.to_string(),
            comment: correction.comment.clone(),
            category_id: correction.category.id.to_string(),
        }
    }
}

impl From<&PersonalExpenseCorrection> for PersonalExpenseCorrectionChangesetDB {
    fn from(domain: &PersonalExpenseCorrection) -> Self {
        Self {
            amount: domain.amount.to_string(),
            comment: domain.comment.clone(),
        }
    }
}

fn parse_id(value: &str, field_name: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| {
        log::error!("Failed to parse {} '{}' as UUID: {}", field_name, value, e);
        Error::from(e)
    })
}

fn parse_amount(value: &str, correction_id: &str) -> Result<Decimal> {
    Decimal::from_str(value).map_err(|e| {
        log::error!(
            "Failed to parse amount '{}' of correction {}: {}",
            value,
            correction_id,
            e
        );
        Error::from(e)
    })
}

// Conversion to domain models

impl TryFrom<PersonDB> for Person {
    type Error = Error;

    fn try_from(db: PersonDB) -> Result<Self> {
        Ok(Self {
            id: parse_id(&db.id, "person id")?,
            name: db.name,
        })
    }
}

impl TryFrom<CategoryDB> for Category {
    type Error = Error;

    fn try_from(db: CategoryDB) -> Result<Self> {
        Ok(Self {
            id: parse_id(&db.id, "category id")?,
            name: db.name,
            comment: db.comment,
        })
    }
}

/// Builds a domain correction from a correction row and its left-joined category.
pub fn to_domain_correction(
    db: PersonalExpenseCorrectionDB,
    category: Option<CategoryDB>,
) -> Result<PersonalExpenseCorrection> {
    let category = category.ok_or_else(|| {
        Error::Database(DatabaseError::Internal(format!(
            "Correction {} references missing category {}",
            db.id, db.category_id
        )))
    })?;

    Ok(PersonalExpenseCorrection {
        id: Some(parse_id(&db.id, "correction id")?),
        amount: parse_amount(&db.amount, &db.id)?,
        comment: db.comment,
        category: Category::try_from(category)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use expense_calculator_core::errors::ValidationError;
    use rust_decimal_macros::dec;

    fn category_db() -> CategoryDB {
        CategoryDB {
            id: Uuid::new_v4().to_string(),
            name: "Food".to_string(),
            comment: Some("groceries and restaurants".to_string()),
        }
    }

    fn correction_db(amount: &str) -> PersonalExpenseCorrectionDB {
        PersonalExpenseCorrectionDB {
            id: Uuid::new_v4().to_string(),
            monthly_calculation_id: Uuid::new_v4().to_string(),
            person_id: Uuid::new_v4().to_string(),
            amount: amount.to_string(),
            comment: Some("lunch".to_string()),
            category_id: Uuid::new_v4().to_string(),
        }
    }

    #[test]
    fn test_amount_text_keeps_exact_decimal() {
        let correction = PersonalExpenseCorrection {
            id: None,
            amount: dec!(0.10),
            comment: None,
            category: Category {
                id: Uuid::new_v4(),
                name: "Food".to_string(),
                comment: None,
            },
        };
        let row = PersonalExpenseCorrectionDB::new(Uuid::new_v4(), Uuid::new_v4(), &correction);
        assert_eq!(row.amount, "0.10");
        assert_eq!(row.category_id, correction.category.id.to_string());

        let domain = to_domain_correction(row, Some(category_db())).unwrap();
        assert_eq!(domain.amount, dec!(0.10));
        assert!(domain.id.is_some());
    }

    #[test]
    fn test_malformed_amount_is_validation_error() {
        let result = to_domain_correction(correction_db("twelve"), Some(category_db()));
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::DecimalParse(_)))
        ));
    }

    #[test]
    fn test_missing_category_is_internal_error() {
        let result = to_domain_correction(correction_db("1.00"), None);
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::Internal(_)))
        ));
    }
}
