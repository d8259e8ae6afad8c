// Tables are owned by the calculator's migrations; only the columns read or
// written here are declared.

diesel::table! {
    persons (id) {
        id -> Text,
        name -> Text,
    }
}

diesel::table! {
    categories (id) {
        id -> Text,
        name -> Text,
        comment -> Nullable<Text>,
    }
}

diesel::table! {
    personal_expense_corrections (id) {
        id -> Text,
        monthly_calculation_id -> Text,
        person_id -> Text,
        amount -> Text,
        comment -> Nullable<Text>,
        category_id -> Text,
    }
}

diesel::joinable!(personal_expense_corrections -> persons (person_id));
diesel::joinable!(personal_expense_corrections -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(
    persons,
    categories,
    personal_expense_corrections,
);
