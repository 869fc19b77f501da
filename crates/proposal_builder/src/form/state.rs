use thiserror::Error;

use crate::{
    form::{fields, validate_field, validate_fields, FieldErrors},
    internal::{encode, EncodeContext, EncodingError},
    state::{EncodedCall, RawFields, TransactionDescriptor, TransactionKind},
};

/// The add-transaction flow. Each action produces a new value; the previous
/// one is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    /// List view.
    #[default]
    Idle,
    /// Kind picker shown.
    ChoosingType,
    /// Form of `kind` shown.
    EditingFields(EditingForm),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingForm {
    pub kind: TransactionKind,
    pub values: RawFields,
    /// Errors of fields the user has touched.
    pub errors: FieldErrors,
    /// Set when the last submit validated but could not be encoded.
    pub encoding_error: Option<EncodingError>,
}

impl EditingForm {
    fn new(kind: TransactionKind) -> Self {
        Self {
            kind,
            values: RawFields::new(),
            errors: FieldErrors::new(),
            encoding_error: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        validate_fields(self.kind, &self.values).is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    StartAdd,
    SelectKind(TransactionKind),
    Input { field: String, value: String },
    Submit,
    Cancel,
}

/// A row produced by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedTransaction {
    pub descriptor: TransactionDescriptor,
    pub call: EncodedCall,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub added: Option<AddedTransaction>,
}

impl Transition {
    fn to(state: FormState) -> Self {
        Self { state, added: None }
    }
}

impl FormState {
    pub fn is_idle(&self) -> bool {
        matches!(self, FormState::Idle)
    }

    pub fn editing(&self) -> Option<&EditingForm> {
        match self {
            FormState::EditingFields(form) => Some(form),
            _ => None,
        }
    }

    /// Computes the state following `action`. Invalid actions leave `self`
    /// as it was and report why.
    pub fn apply(&self, action: FormAction, ctx: &EncodeContext) -> Result<Transition, FormError> {
        match (self, action) {
            (_, FormAction::Cancel) => Ok(Transition::to(FormState::Idle)),

            (FormState::Idle, FormAction::StartAdd) => Ok(Transition::to(FormState::ChoosingType)),

            (FormState::ChoosingType, FormAction::SelectKind(kind)) => Ok(Transition::to(
                FormState::EditingFields(EditingForm::new(kind)),
            )),

            (FormState::EditingFields(form), FormAction::Input { field, value }) => {
                let def = fields(form.kind)
                    .iter()
                    .find(|def| def.name == field)
                    .ok_or_else(|| FormError::UnknownField {
                        kind: form.kind,
                        field: field.clone(),
                    })?;

                let mut next = form.clone();
                match validate_field(def, Some(&value)) {
                    Ok(()) => next.errors.remove(def.name),
                    Err(err) => next.errors.insert(def.name, err),
                };
                next.values.insert(field, value);
                next.encoding_error = None;

                Ok(Transition::to(FormState::EditingFields(next)))
            }

            (FormState::EditingFields(form), FormAction::Submit) => {
                let descriptor = match TransactionDescriptor::from_fields(form.kind, &form.values) {
                    Ok(descriptor) => descriptor,
                    Err(errors) => {
                        // Surface every error, touched or not, and stay put.
                        let mut next = form.clone();
                        next.errors = errors;
                        return Ok(Transition::to(FormState::EditingFields(next)));
                    }
                };

                match encode(&descriptor, ctx) {
                    Ok(call) => Ok(Transition {
                        state: FormState::Idle,
                        added: Some(AddedTransaction { descriptor, call }),
                    }),
                    Err(err) => {
                        let mut next = form.clone();
                        next.encoding_error = Some(err);
                        Ok(Transition::to(FormState::EditingFields(next)))
                    }
                }
            }

            (state, action) => Err(FormError::InvalidTransition {
                state: state.name(),
                action: action.name(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            FormState::Idle => "Idle",
            FormState::ChoosingType => "ChoosingType",
            FormState::EditingFields(_) => "EditingFields",
        }
    }
}

impl FormAction {
    fn name(&self) -> &'static str {
        match self {
            FormAction::StartAdd => "StartAdd",
            FormAction::SelectKind(_) => "SelectKind",
            FormAction::Input { .. } => "Input",
            FormAction::Submit => "Submit",
            FormAction::Cancel => "Cancel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{action} is not allowed while {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },
    #[error("{kind} has no field `{field}`")]
    UnknownField {
        kind: TransactionKind,
        field: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        form::ValidationError,
        test_utils::{test_context, valid_fields, RECIPIENT},
    };

    fn input(field: &str, value: &str) -> FormAction {
        FormAction::Input {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    fn editing(kind: TransactionKind) -> FormState {
        let ctx = test_context();
        let state = FormState::Idle
            .apply(FormAction::StartAdd, &ctx)
            .unwrap()
            .state;
        state.apply(FormAction::SelectKind(kind), &ctx).unwrap().state
    }

    #[test]
    fn test_happy_path_adds_one_transaction() {
        let ctx = test_context();
        let mut state = editing(TransactionKind::SendEth);

        for action in [input("amount", "0.1"), input("recipient", RECIPIENT)] {
            state = state.apply(action, &ctx).unwrap().state;
        }
        assert!(state.editing().unwrap().is_ready());

        let transition = state.apply(FormAction::Submit, &ctx).unwrap();
        assert_eq!(transition.state, FormState::Idle);
        let added = transition.added.unwrap();
        assert_eq!(added.descriptor.kind(), TransactionKind::SendEth);
        assert_eq!(added.call.value_string(), "100000000000000000");
    }

    #[test]
    fn test_input_validates_the_touched_field_only() {
        let ctx = test_context();
        let state = editing(TransactionKind::SendEth)
            .apply(input("recipient", "0x123"), &ctx)
            .unwrap()
            .state;

        let form = state.editing().unwrap();
        assert_eq!(form.errors.len(), 1);
        assert_eq!(
            form.errors.get("recipient"),
            Some(&ValidationError::InvalidAddress)
        );

        let state = state.apply(input("recipient", RECIPIENT), &ctx).unwrap().state;
        assert!(state.editing().unwrap().errors.is_empty());
    }

    #[test]
    fn test_submit_with_invalid_fields_stays_editing() {
        let ctx = test_context();
        let state = editing(TransactionKind::SendNft)
            .apply(input("tokenId", "abc"), &ctx)
            .unwrap()
            .state;

        let transition = state.apply(FormAction::Submit, &ctx).unwrap();
        assert!(transition.added.is_none());
        let form = transition.state.editing().unwrap();
        assert_eq!(form.errors.get("tokenId"), Some(&ValidationError::InvalidInteger));
        assert_eq!(form.errors.get("recipient"), Some(&ValidationError::Required));
    }

    #[test]
    fn test_cancel_from_any_state_returns_idle() {
        let ctx = test_context();
        for state in [
            FormState::Idle,
            FormState::ChoosingType,
            editing(TransactionKind::Custom),
        ] {
            let transition = state.apply(FormAction::Cancel, &ctx).unwrap();
            assert_eq!(transition.state, FormState::Idle);
            assert!(transition.added.is_none());
        }
    }

    #[test]
    fn test_invalid_transitions_are_rejected() {
        let ctx = test_context();
        assert_eq!(
            FormState::Idle.apply(FormAction::Submit, &ctx),
            Err(FormError::InvalidTransition {
                state: "Idle",
                action: "Submit",
            })
        );
        assert!(FormState::ChoosingType
            .apply(FormAction::StartAdd, &ctx)
            .is_err());
        assert!(editing(TransactionKind::SendEth)
            .apply(FormAction::SelectKind(TransactionKind::Custom), &ctx)
            .is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let ctx = test_context();
        let result = editing(TransactionKind::AirdropRandomNft).apply(input("amount", "1"), &ctx);
        assert_eq!(
            result,
            Err(FormError::UnknownField {
                kind: TransactionKind::AirdropRandomNft,
                field: "amount".to_string(),
            })
        );
    }

    #[test]
    fn test_encoding_error_keeps_form_open() {
        let ctx = test_context();
        let mut state = editing(TransactionKind::MintBatchDroposal);
        for (name, value) in valid_fields(TransactionKind::MintBatchDroposal) {
            state = state.apply(input(&name, &value), &ctx).unwrap().state;
        }
        // Above uint104, the widest price the edition contract accepts.
        state = state
            .apply(input("price", &"9".repeat(40)), &ctx)
            .unwrap()
            .state;

        let transition = state.apply(FormAction::Submit, &ctx).unwrap();
        assert!(transition.added.is_none());
        let form = transition.state.editing().unwrap();
        assert!(matches!(
            form.encoding_error,
            Some(EncodingError::AmountOutOfRange { .. })
        ));
        assert_eq!(form.values.get("price"), Some(&"9".repeat(40)));
    }
}
