//! Input rules for the write side of the service: turning requests into
//! domain records and guarding event lifecycle transitions.
//!
//! Field-level checks live on the request types as `validator` derives;
//! the functions here add the rules that need the parsed times or the
//! current state of an event.

pub mod availability;
pub mod event;
pub mod preferred_slot;

use validator::{Validate, ValidateEmail, ValidationErrors, ValidationErrorsKind};

use crate::errors::{MeetError, MeetResult};

/// Runs the derived field checks of a request, reporting the first failing
/// field in name order.
pub fn validate_request<T: Validate>(request: &T) -> MeetResult<()> {
    request.validate().map_err(|errors| {
        MeetError::Validation(
            first_message(&errors).unwrap_or_else(|| "invalid request".to_string()),
        )
    })
}

fn first_message(errors: &ValidationErrors) -> Option<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields.into_iter().find_map(|(_, kind)| match kind {
        ValidationErrorsKind::Field(errors) => errors.first().map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        }),
        ValidationErrorsKind::Struct(inner) => first_message(inner),
        ValidationErrorsKind::List(items) => items.values().find_map(|inner| first_message(inner)),
    })
}

pub fn validate_email(email: &str) -> MeetResult<()> {
    if !email.validate_email() {
        return Err(MeetError::Validation(format!(
            "invalid email address: {email}"
        )));
    }
    Ok(())
}
