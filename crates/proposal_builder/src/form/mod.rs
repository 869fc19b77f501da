//! Per-kind form definitions and the add-transaction state machine.

pub mod fields;
pub mod state;

pub use fields::{
    fields, fields_for_name, is_ready, is_ready_for_name, validate_address, validate_amount,
    validate_calldata, validate_edition_size, validate_field, validate_fields,
    validate_mint_limit, validate_positive_amount, validate_recipient_count, validate_royalty,
    validate_text, validate_timestamp, validate_token_id, validate_uri, FieldErrors, FieldDef,
    ValidationError, Validator,
};
pub use state::*;
