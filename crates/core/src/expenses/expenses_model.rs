//! Personal expense domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A participant of a monthly calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Uuid,
    pub name: String,
}

/// Expense category reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub comment: Option<String>,
}

/// A single expense line item of one person within a calculation.
///
/// `id` is `None` until the correction has been persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalExpenseCorrection {
    pub id: Option<Uuid>,
    pub amount: Decimal,
    pub comment: Option<String>,
    pub category: Category,
}

/// A person together with their corrections for one calculation.
///
/// Not stored as such; reassembled from correction rows on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalExpense {
    pub person: Person,
    pub corrections: Vec<PersonalExpenseCorrection>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn food() -> Category {
        Category {
            id: Uuid::new_v4(),
            name: "Food".to_string(),
            comment: None,
        }
    }

    #[test]
    fn test_serializes_camel_case_with_exact_amount() {
        let expense = PersonalExpense {
            person: Person {
                id: Uuid::nil(),
                name: "Alice".to_string(),
            },
            corrections: vec![PersonalExpenseCorrection {
                id: None,
                amount: dec!(12.50),
                comment: None,
                category: food(),
            }],
        };

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["person"]["name"], "Alice");
        assert_eq!(json["corrections"][0]["amount"], "12.50");
        assert!(json["corrections"][0]["id"].is_null());

        let back: PersonalExpense = serde_json::from_value(json).unwrap();
        assert_eq!(back, expense);
    }
}
