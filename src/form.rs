//! Display configuration handed to the external form collaborator.
//!
//! The collaborator renders a form from this schema, shows the validation
//! messages produced by [`crate::request::validate`] next to the offending
//! fields, and emits the raw input back as a [`crate::request::FormInput`].
//! No rendering happens in this crate.

use crate::request::{DETAILS_MAX_CHARS, NAME_MAX_CHARS};

/// Widget the form renderer should use for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Single-line text input
    Text,
    /// Multi-line text area
    Textarea,
}

/// Per-field display configuration.
#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    /// Field name, matching the keys of `FieldErrors`
    pub name: &'static str,
    pub label: &'static str,
    /// Example text shown under the field
    pub description: &'static str,
    pub widget: WidgetKind,
    pub max_length: usize,
    pub required: bool,
}

/// The recipe request form, field by field, in display order.
pub fn form_fields() -> [FieldConfig; 2] {
    [
        FieldConfig {
            name: "name",
            label: "Nome da receita",
            description: "Ex.: Brownie; Pizza; Bolo de cenoura com brigadeiro;",
            widget: WidgetKind::Text,
            max_length: NAME_MAX_CHARS,
            required: true,
        },
        FieldConfig {
            name: "details",
            label: "Detalhes da receita",
            description: "Ex.: Receita sem gluten; Em menos de 30 minutos; Para 10 pessoas;",
            widget: WidgetKind::Textarea,
            max_length: DETAILS_MAX_CHARS,
            required: false,
        },
    ]
}
