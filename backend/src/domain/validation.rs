//! Field validation primitives shared by the entity validators.
//!
//! Each entity declares, per input field, an ordered list of [`Rule`]s. A
//! [`FieldReader`] pulls raw JSON values out of an [`InputPayload`], checks
//! their presence and type, then evaluates every rule independently. All
//! failures accumulate into an [`ErrorSet`] keyed by field name; nothing
//! short-circuits, so callers see every problem in one round trip.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value, json};

use super::Error;

/// Raw request body: a mapping from field name to arbitrary JSON value.
pub type InputPayload = Map<String, Value>;

/// How an update treats fields missing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Every field is required, as on creation.
    #[default]
    Replace,
    /// Only supplied fields are validated and applied.
    Partial,
}

impl UpdateMode {
    /// Whether omitted fields fall back to the stored values.
    #[must_use]
    pub fn is_partial(self) -> bool {
        matches!(self, Self::Partial)
    }
}

/// Category of a single field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A mandatory field was absent or `null`.
    Required,
    /// The value has the wrong type or shape.
    FormatInvalid,
    /// The value is well formed but breaks a semantic rule.
    ValueInvalid,
    /// The value collides with another record's unique field.
    UniquenessConflict,
    /// A foreign reference does not resolve.
    ReferenceNotFound,
}

/// One failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    kind: FieldErrorKind,
    code: &'static str,
    message: String,
}

impl FieldError {
    /// Build a field error from its parts.
    pub fn new(kind: FieldErrorKind, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
        }
    }

    /// Absent mandatory field.
    #[must_use]
    pub fn required() -> Self {
        Self::new(FieldErrorKind::Required, "required", "This field is required.")
    }

    /// Explicit `null` for a mandatory field.
    #[must_use]
    pub fn null() -> Self {
        Self::new(FieldErrorKind::Required, "null", "This field may not be null.")
    }

    /// Failure category.
    #[must_use]
    pub fn kind(&self) -> FieldErrorKind {
        self.kind
    }

    /// Stable machine-readable code, e.g. `invalid_email`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Structured validation failure: field name → list of errors.
///
/// # Examples
/// ```
/// use smartparking::domain::{ErrorSet, FieldError, FieldErrorKind};
///
/// let mut errors = ErrorSet::default();
/// errors.push("name", FieldError::required());
/// assert!(errors.contains("name"));
/// assert_eq!(errors.kinds("name"), vec![FieldErrorKind::Required]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet(BTreeMap<&'static str, Vec<FieldError>>);

impl ErrorSet {
    /// Record a failure against `field`.
    pub fn push(&mut self, field: &'static str, error: FieldError) {
        self.0.entry(field).or_default().push(error);
    }

    /// Record several failures against `field`.
    pub fn extend(&mut self, field: &'static str, errors: impl IntoIterator<Item = FieldError>) {
        for error in errors {
            self.push(field, error);
        }
    }

    /// Whether no failure was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `field` has at least one failure.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Failures recorded against `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> &[FieldError] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Failure categories recorded against `field`, in recording order.
    #[must_use]
    pub fn kinds(&self, field: &str) -> Vec<FieldErrorKind> {
        self.get(field).iter().map(FieldError::kind).collect()
    }

    /// Names of every failing field, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// `Ok(value)` when empty, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "validation failed for: {}", fields.join(", "))
    }
}

impl std::error::Error for ErrorSet {}

impl From<ErrorSet> for Error {
    fn from(value: ErrorSet) -> Self {
        Self::invalid_request("request failed validation").with_details(json!({
            "fields": value,
        }))
    }
}

/// Reasons a validator could not produce a draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure<E> {
    /// One or more field constraints failed.
    #[error("{0}")]
    Invalid(ErrorSet),
    /// A persistence lookup needed by a constraint failed.
    #[error("validation lookup failed: {0}")]
    Repository(E),
}

impl<E> ValidationFailure<E> {
    /// Error set carried by an [`ValidationFailure::Invalid`] failure.
    #[must_use]
    pub fn errors(&self) -> Option<&ErrorSet> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Repository(_) => None,
        }
    }
}

/// A single predicate + message pair evaluated against a field value.
pub struct Rule<T: ?Sized> {
    kind: FieldErrorKind,
    code: &'static str,
    message: &'static str,
    holds: fn(&T) -> bool,
}

impl<T: ?Sized> Rule<T> {
    /// Declare a rule that fails with `code`/`message` when `holds` is false.
    pub const fn new(
        kind: FieldErrorKind,
        code: &'static str,
        message: &'static str,
        holds: fn(&T) -> bool,
    ) -> Self {
        Self {
            kind,
            code,
            message,
            holds,
        }
    }

    /// Evaluate the rule, returning the failure if it does not hold.
    pub fn check(&self, value: &T) -> Option<FieldError> {
        if (self.holds)(value) {
            None
        } else {
            Some(FieldError::new(self.kind, self.code, self.message))
        }
    }
}

/// Evaluate every rule independently and collect the failures.
pub fn check_rules<T: ?Sized>(rules: &[Rule<T>], value: &T) -> Vec<FieldError> {
    rules.iter().filter_map(|rule| rule.check(value)).collect()
}

/// Presence and type checks over an [`InputPayload`].
///
/// Each accessor returns `None` when the field is absent or invalid. Absence
/// is an error only when the reader requires all fields; invalid values are
/// always recorded.
pub struct FieldReader<'a> {
    input: &'a InputPayload,
    require_all: bool,
    errors: ErrorSet,
}

impl<'a> FieldReader<'a> {
    /// Reader over `input`. `require_all` is false for partial updates.
    #[must_use]
    pub fn new(input: &'a InputPayload, require_all: bool) -> Self {
        Self {
            input,
            require_all,
            errors: ErrorSet::default(),
        }
    }

    /// Record an additional failure found by a later check.
    pub fn reject(&mut self, field: &'static str, error: FieldError) {
        self.errors.push(field, error);
    }

    /// Consume the reader, yielding every recorded failure.
    #[must_use]
    pub fn finish(self) -> ErrorSet {
        self.errors
    }

    /// Whether `field` already failed a check.
    #[must_use]
    pub fn has_failed(&self, field: &str) -> bool {
        self.errors.contains(field)
    }

    fn present(&mut self, field: &'static str) -> Option<&'a Value> {
        let input = self.input;
        match input.get(field) {
            None if self.require_all => {
                self.errors.push(field, FieldError::required());
                None
            }
            None => None,
            Some(Value::Null) => {
                self.errors.push(field, FieldError::null());
                None
            }
            Some(value) => Some(value),
        }
    }

    fn accept<T: ?Sized>(&mut self, field: &'static str, rules: &[Rule<T>], value: &T) -> bool {
        let failures = check_rules(rules, value);
        let accepted = failures.is_empty();
        self.errors.extend(field, failures);
        accepted
    }

    /// Mandatory string field, trimmed of surrounding whitespace before the
    /// rules run.
    pub fn string(&mut self, field: &'static str, rules: &[Rule<str>]) -> Option<String> {
        let text = self.text(field)?.trim();
        self.accept(field, rules, text).then(|| text.to_owned())
    }

    /// Mandatory string field taken verbatim.
    pub fn raw_string(&mut self, field: &'static str, rules: &[Rule<str>]) -> Option<String> {
        let text = self.text(field)?;
        self.accept(field, rules, text).then(|| text.to_owned())
    }

    fn text(&mut self, field: &'static str) -> Option<&'a str> {
        let value = self.present(field)?;
        let text = value.as_str();
        if text.is_none() {
            self.errors.push(
                field,
                FieldError::new(FieldErrorKind::FormatInvalid, "invalid", "Not a valid string."),
            );
        }
        text
    }

    /// Mandatory integer field. Floats and numeric strings are rejected.
    pub fn integer(&mut self, field: &'static str, rules: &[Rule<i64>]) -> Option<i64> {
        let value = self.present(field)?;
        // Saturate past i64 so range rules, not the type check, report it.
        let number = value.as_i64().or_else(|| value.as_u64().map(|_| i64::MAX));
        let Some(number) = number else {
            self.errors.push(
                field,
                FieldError::new(
                    FieldErrorKind::FormatInvalid,
                    "invalid_integer",
                    "A valid integer is required.",
                ),
            );
            return None;
        };
        self.accept(field, rules, &number).then_some(number)
    }

    /// Mandatory reference to another record by positive integer id.
    pub fn reference(&mut self, field: &'static str) -> Option<i64> {
        let value = self.present(field)?;
        match value.as_i64() {
            Some(id) if id > 0 => Some(id),
            _ => {
                self.errors.push(
                    field,
                    FieldError::new(
                        FieldErrorKind::FormatInvalid,
                        "invalid_reference",
                        "Incorrect type. Expected a positive integer id.",
                    ),
                );
                None
            }
        }
    }

    /// Optional boolean field. Only genuine JSON booleans are accepted, so an
    /// explicit `null` is rejected even though absence is not.
    pub fn boolean(&mut self, field: &'static str) -> Option<bool> {
        let input = self.input;
        let value = match input.get(field) {
            None => return None,
            Some(Value::Null) => {
                self.errors.push(field, FieldError::null());
                return None;
            }
            Some(value) => value,
        };
        let flag = value.as_bool();
        if flag.is_none() {
            self.errors.push(
                field,
                FieldError::new(
                    FieldErrorKind::FormatInvalid,
                    "invalid_boolean",
                    "Must be a valid boolean.",
                ),
            );
        }
        flag
    }

    /// Mandatory RFC 3339 timestamp.
    pub fn timestamp(&mut self, field: &'static str) -> Option<DateTime<Utc>> {
        let value = self.present(field)?;
        self.parse_timestamp(field, value)
    }

    /// Optional, nullable RFC 3339 timestamp.
    ///
    /// `None` means the field was absent, `Some(None)` an explicit `null`.
    pub fn nullable_timestamp(&mut self, field: &'static str) -> Option<Option<DateTime<Utc>>> {
        let input = self.input;
        match input.get(field) {
            None => None,
            Some(Value::Null) => Some(None),
            Some(value) => self.parse_timestamp(field, value).map(Some),
        }
    }

    fn parse_timestamp(&mut self, field: &'static str, value: &Value) -> Option<DateTime<Utc>> {
        let parsed = value
            .as_str()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|timestamp| timestamp.with_timezone(&Utc));
        if parsed.is_none() {
            self.errors.push(
                field,
                FieldError::new(
                    FieldErrorKind::FormatInvalid,
                    "invalid_datetime",
                    "Datetime has wrong format. Use an RFC 3339 timestamp.",
                ),
            );
        }
        parsed
    }
}

#[cfg(test)]
mod tests;
