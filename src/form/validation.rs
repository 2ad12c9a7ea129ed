//! Contact form validation rules.
//!
//! DESIGN
//! ======
//! Checks run in a fixed order: required fields, email shape, phone length.
//! The first failing stage decides the message shown to the user, so a blank
//! required field always reports the generic message even when the email is
//! also malformed.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Form fields in the order focus moves through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];
}

/// Raw field values as read from the page at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Whether the phone input carries the `required` attribute.
    pub phone_required: bool,
}

impl FormInput {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    fn is_required(&self, field: Field) -> bool {
        field != Field::Phone || self.phone_required
    }
}

/// A submission that passed every check.
///
/// The page builds a fresh one from the name field when the simulated send
/// completes, so edits made during the delay show up in the thank you text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
}

impl Submission {
    /// Build from the raw name field value.
    pub fn new(raw_name: &str) -> Self {
        Self {
            name: raw_name.trim().to_owned(),
        }
    }

    pub fn success_message(&self) -> String {
        format!("Obrigado, {}! Mensagem enviada com sucesso.", self.name)
    }
}

/// User-input failures. `Display` is the text shown in the modal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Por favor, preencha todos os campos obrigatórios.")]
    MissingRequired(Vec<Field>),
    #[error("Digite um e-mail válido (ex.: usuario@dominio.com).")]
    InvalidEmail,
    #[error("Informe um telefone válido com DDD.")]
    InvalidPhone,
}

impl ValidationError {
    /// Fields to flag as invalid, in field order.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::MissingRequired(fields) => fields.clone(),
            Self::InvalidEmail => vec![Field::Email],
            Self::InvalidPhone => vec![Field::Phone],
        }
    }

    /// Field that should receive focus.
    pub fn focus(&self) -> Option<Field> {
        self.fields().first().copied()
    }
}

/// Validate a form snapshot.
pub fn validate(input: &FormInput) -> Result<Submission, ValidationError> {
    let missing: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|&field| input.is_required(field) && input.value(field).trim().is_empty())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequired(missing));
    }

    if !is_valid_email(&input.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if input.phone_required && phone_digit_count(&input.phone) < MIN_PHONE_DIGITS {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(Submission::new(&input.name))
}

/// Permissive `local@domain.tld` check on the trimmed value.
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw.trim())
}

/// Number of ASCII digits left once punctuation and spaces are stripped.
pub fn phone_digit_count(raw: &str) -> usize {
    raw.chars().filter(char::is_ascii_digit).count()
}
