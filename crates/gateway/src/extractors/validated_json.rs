//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use common::AppError;

/// Field names of a validated payload in declaration order.
///
/// When several fields fail, the first of these is reported.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// JSON extractor that validates the payload before the handler runs.
///
/// Malformed JSON is a `BadRequest`; a well-formed body that breaks a field
/// rule is a `Validation` error carrying that rule's message.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + FieldOrder,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(first_message(T::FIELDS, &e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Message of the first failing field in `order`. Fields missing from
/// `order` come after it, alphabetically.
fn first_message(order: &[&str], errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut unlisted: Vec<_> = field_errors
        .keys()
        .copied()
        .filter(|field| !order.contains(field))
        .collect();
    unlisted.sort();

    order
        .iter()
        .copied()
        .chain(unlisted)
        .find_map(|field| field_errors.get(field))
        .and_then(|errors| errors.first())
        .and_then(|error| error.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| "Validation failed".to_string())
}
