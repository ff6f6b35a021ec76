// Only the columns the toolkit reads or writes. The CVKing backend owns the
// full schema; everything else is reached through `SchemaInspector`.

diesel::table! {
    users (id) {
        id -> Integer,
        email -> Varchar,
        password -> Varchar,
        role -> Varchar,
    }
}

diesel::table! {
    subscription_plans (id) {
        id -> Integer,
        name -> Varchar,
        price -> Decimal,
        duration_days -> Integer,
        is_active -> Bool,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    users,
    subscription_plans,
);
