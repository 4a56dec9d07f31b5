use std::collections::BTreeMap;
use std::fmt;

/// Maximum length of the recipe name, counted in chars after trimming.
pub const NAME_MAX_CHARS: usize = 50;
/// Maximum length of the optional details, counted in chars after trimming.
pub const DETAILS_MAX_CHARS: usize = 200;

pub(crate) const MSG_NAME_REQUIRED: &str = "O nome da receita é obrigatório.";
pub(crate) const MSG_NAME_TOO_LONG: &str =
    "O nome da receita é muito longo (máximo 50 caracteres).";
pub(crate) const MSG_DETAILS_TOO_LONG: &str =
    "Os detalhes da receita são muito longos (máximo 200 caracteres).";

/// Raw form input as handed over by the form collaborator, before validation.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub name: String,
    pub details: Option<String>,
}

impl FormInput {
    pub fn new(name: impl Into<String>) -> Self {
        FormInput {
            name: name.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// A validated recipe request.
///
/// Immutable once built; consumed by a single pipeline run. Both fields are
/// trimmed, `name` is 1..=50 chars and `details`, when present, is non-empty
/// and at most 200 chars.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRequest {
    name: String,
    details: Option<String>,
}

impl RecipeRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for one field, if it failed validation.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn push(&mut self, field: &'static str, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl std::error::Error for FieldErrors {}

/// Validate raw form input into a [`RecipeRequest`].
///
/// Pure, no cross-field rules. Fields are trimmed before the length checks;
/// whitespace-only `details` collapses to `None` rather than erroring.
pub fn validate(input: &FormInput) -> Result<RecipeRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = input.name.trim();
    if name.is_empty() {
        errors.push("name", MSG_NAME_REQUIRED);
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors.push("name", MSG_NAME_TOO_LONG);
    }

    let details = input
        .details
        .as_deref()
        .map(str::trim)
        .filter(|details| !details.is_empty());
    if let Some(details) = details {
        if details.chars().count() > DETAILS_MAX_CHARS {
            errors.push("details", MSG_DETAILS_TOO_LONG);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(RecipeRequest {
        name: name.to_string(),
        details: details.map(str::to_string),
    })
}
