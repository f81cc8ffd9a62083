//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Companies owning parking lots. `email` is unique.
    companies (id) {
        id -> Int8,
        #[max_length = 255]
        name -> Varchar,
        #[max_length = 254]
        email -> Varchar,
        /// Write-only credential.
        secret -> Text,
        capacity -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Parking lots. `location` is unique.
    parking_lots (id) {
        id -> Int8,
        company_id -> Int8,
        #[max_length = 255]
        location -> Varchar,
        active -> Bool,
    }
}

diesel::table! {
    /// Occupancy intervals recorded per parking lot.
    occupancy_states (id) {
        id -> Int8,
        parking_lot_id -> Int8,
        entered_at -> Timestamptz,
        exited_at -> Nullable<Timestamptz>,
    }
}

diesel::joinable!(parking_lots -> companies (company_id));
diesel::joinable!(occupancy_states -> parking_lots (parking_lot_id));

diesel::allow_tables_to_appear_in_same_query!(companies, parking_lots, occupancy_states);
