//! Company data model and its input validator.
//!
//! A company owns parking lots. Its contact email is unique across all
//! companies and its credential is write-only: it is accepted on input,
//! stored, and never part of any output projection.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;
use zeroize::Zeroize;

use super::ports::{CompanyRepository, CompanyUniqueField, RepositoryError};
use super::validation::{
    FieldError, FieldErrorKind, FieldReader, InputPayload, Rule, ValidationFailure,
};
use super::CompanyId;

/// Minimum company name length, counted in characters.
pub const COMPANY_NAME_MIN: usize = 3;
/// Maximum company name length, counted in characters.
pub const COMPANY_NAME_MAX: usize = 255;
/// Maximum email length accepted by the mail transport.
pub const COMPANY_EMAIL_MAX: usize = 254;

/// Credential text that is wiped from memory on drop.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a credential.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the credential for persistence.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Validated company fields that have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDraft {
    pub name: String,
    pub email: String,
    pub secret: Secret,
    pub capacity: i32,
}

/// Stored company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    id: CompanyId,
    name: String,
    email: String,
    secret: Secret,
    capacity: i32,
}

impl Company {
    /// Attach a persistence identifier to validated fields.
    #[must_use]
    pub fn new(id: CompanyId, draft: CompanyDraft) -> Self {
        let CompanyDraft {
            name,
            email,
            secret,
            capacity,
        } = draft;
        Self {
            id,
            name,
            email,
            secret,
            capacity,
        }
    }

    #[must_use]
    pub fn id(&self) -> CompanyId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    #[must_use]
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Current fields as a draft, the starting point for updates.
    #[must_use]
    pub fn to_draft(&self) -> CompanyDraft {
        CompanyDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            secret: self.secret.clone(),
            capacity: self.capacity,
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Company: {} - Capacity: {}", self.name, self.capacity)
    }
}

/// Public projection of a company.
///
/// Carries exactly `name`, `email` and `capacity`; the credential and the
/// identifier are never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyView {
    #[schema(example = "Empresa 5")]
    pub name: String,
    #[schema(example = "empresa5@example.com")]
    pub email: String,
    #[schema(example = 25)]
    pub capacity: i32,
}

impl From<&Company> for CompanyView {
    fn from(value: &Company) -> Self {
        Self {
            name: value.name.clone(),
            email: value.email.clone(),
            capacity: value.capacity,
        }
    }
}

static EMAIL_LOCAL_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_DOMAIN_RE: OnceLock<Regex> = OnceLock::new();

fn email_local_regex() -> &'static Regex {
    EMAIL_LOCAL_RE.get_or_init(|| {
        // Dot-atom or quoted-string local part.
        match Regex::new(
            r#"(?i)^(?:[-!#$%&'*+/=?^_`{}|~0-9a-z]+(?:\.[-!#$%&'*+/=?^_`{}|~0-9a-z]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f!#-\[\]-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")$"#,
        ) {
            Ok(regex) => regex,
            Err(error) => panic!("email local-part regex failed to compile: {error}"),
        }
    })
}

fn email_domain_regex() -> &'static Regex {
    EMAIL_DOMAIN_RE.get_or_init(|| {
        match Regex::new(
            r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,63}|xn--[a-z0-9-]{1,59})$",
        ) {
            Ok(regex) => regex,
            Err(error) => panic!("email domain regex failed to compile: {error}"),
        }
    })
}

/// Syntactic email check: one `@`, a dot-atom or quoted local part, and a
/// dotted host name or `localhost`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    email_local_regex().is_match(local)
        && (domain.eq_ignore_ascii_case("localhost") || email_domain_regex().is_match(domain))
}

const NAME_RULES: [Rule<str>; 2] = [
    Rule::new(
        FieldErrorKind::FormatInvalid,
        "min_length",
        "Ensure this field has at least 3 characters.",
        |value: &str| value.chars().count() >= COMPANY_NAME_MIN,
    ),
    Rule::new(
        FieldErrorKind::FormatInvalid,
        "max_length",
        "Ensure this field has no more than 255 characters.",
        |value: &str| value.chars().count() <= COMPANY_NAME_MAX,
    ),
];

const EMAIL_RULES: [Rule<str>; 2] = [
    Rule::new(
        FieldErrorKind::FormatInvalid,
        "invalid_email",
        "Enter a valid email address.",
        is_valid_email,
    ),
    Rule::new(
        FieldErrorKind::FormatInvalid,
        "max_length",
        "Ensure this field has no more than 254 characters.",
        |value: &str| value.chars().count() <= COMPANY_EMAIL_MAX,
    ),
];

const SECRET_RULES: [Rule<str>; 1] = [Rule::new(
    FieldErrorKind::FormatInvalid,
    "blank",
    "This field may not be blank.",
    |value: &str| !value.trim().is_empty(),
)];

const CAPACITY_RULES: [Rule<i64>; 2] = [
    Rule::new(
        FieldErrorKind::ValueInvalid,
        "min_value",
        "Ensure this value is greater than or equal to 0.",
        |value: &i64| *value >= 0,
    ),
    Rule::new(
        FieldErrorKind::ValueInvalid,
        "max_value",
        "Ensure this value is less than or equal to 2147483647.",
        |value: &i64| *value <= i64::from(i32::MAX),
    ),
];

/// Turns raw input into a [`CompanyDraft`].
///
/// # Examples
/// ```
/// use serde_json::json;
/// use smartparking::domain::CompanyValidator;
/// use smartparking::outbound::memory::InMemoryStore;
///
/// # async fn example() {
/// let store = InMemoryStore::default();
/// let input = json!({
///     "name": "Empresa 5",
///     "email": "empresa5@example.com",
///     "secret": "s3cret",
///     "capacity": 25,
/// });
/// let input = input.as_object().cloned().unwrap_or_default();
/// let draft = CompanyValidator::new(&store)
///     .validate_and_build(None, &input, false)
///     .await
///     .expect("valid company");
/// assert_eq!(draft.capacity, 25);
/// # }
/// ```
pub struct CompanyValidator<'r, R: ?Sized> {
    repository: &'r R,
}

impl<'r, R> CompanyValidator<'r, R>
where
    R: CompanyRepository + ?Sized,
{
    pub fn new(repository: &'r R) -> Self {
        Self { repository }
    }

    /// Validate `input` against `existing` and build the fields to persist.
    ///
    /// With `partial` set, fields absent from `input` keep the values of
    /// `existing`; without an existing company every field is required.
    pub async fn validate_and_build(
        &self,
        existing: Option<&Company>,
        input: &InputPayload,
        partial: bool,
    ) -> Result<CompanyDraft, ValidationFailure<RepositoryError>> {
        let fallback = existing.filter(|_| partial);
        let mut reader = FieldReader::new(input, fallback.is_none());

        let name = reader.string("name", &NAME_RULES);
        let email = reader.string("email", &EMAIL_RULES);
        let secret = reader.raw_string("secret", &SECRET_RULES).map(Secret::new);
        let capacity = reader
            .integer("capacity", &CAPACITY_RULES)
            .and_then(|value| i32::try_from(value).ok());

        if let Some(email) = email.as_deref() {
            let taken = self
                .repository
                .exists_by_unique(CompanyUniqueField::Email, email, existing.map(Company::id))
                .await
                .map_err(ValidationFailure::Repository)?;
            if taken {
                reader.reject(
                    "email",
                    FieldError::new(
                        FieldErrorKind::UniquenessConflict,
                        "unique",
                        "company with this email already exists.",
                    ),
                );
            }
        }

        let errors = reader.finish();
        let stored = fallback.map(Company::to_draft);
        let draft = match stored {
            Some(stored) => Some(CompanyDraft {
                name: name.unwrap_or(stored.name),
                email: email.unwrap_or(stored.email),
                secret: secret.unwrap_or(stored.secret),
                capacity: capacity.unwrap_or(stored.capacity),
            }),
            None => match (name, email, secret, capacity) {
                (Some(name), Some(email), Some(secret), Some(capacity)) => Some(CompanyDraft {
                    name,
                    email,
                    secret,
                    capacity,
                }),
                _ => None,
            },
        };

        match draft {
            Some(draft) if errors.is_empty() => Ok(draft),
            _ => Err(ValidationFailure::Invalid(errors)),
        }
    }
}
