//! Controlled-input wrapper around the masks.
//!
//! Parent forms read `event.target.value` and always receive the canonical
//! digits; the rendered text travels alongside as `formattedValue`.

use serde::{Deserialize, Serialize};

use super::keys::{on_key_input, KeyDecision, KeyInput};
use super::mask::{on_paste, MaskKind, MaskedValue};
use super::tax_id::validate_tax_id;

/// Synthetic change event emitted to the parent form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub target: ChangeTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTarget {
    pub name: String,
    /// Canonical digits.
    pub value: String,
    pub formatted_value: String,
}

/// Inline badge shown next to a tax-id input. Never blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityHint {
    Valid,
    Invalid,
}

impl ValidityHint {
    pub fn label(self) -> &'static str {
        match self {
            ValidityHint::Valid => "CNPJ válido",
            ValidityHint::Invalid => "CNPJ inválido",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MaskedInput {
    name: String,
    kind: MaskKind,
    value: MaskedValue,
    placeholder: Option<String>,
}

impl MaskedInput {
    pub fn new(name: impl Into<String>, kind: MaskKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: MaskedValue::default(),
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MaskKind {
        self.kind
    }

    pub fn value(&self) -> &MaskedValue {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder
            .as_deref()
            .unwrap_or_else(|| self.kind.placeholder())
    }

    /// Parent-driven update: the form owns the canonical value.
    pub fn set_value(&mut self, canonical: &str) {
        self.value = MaskedValue::from_raw(self.kind, canonical);
    }

    pub fn on_change(&mut self, raw: &str) -> ChangeEvent {
        self.value = MaskedValue::from_raw(self.kind, raw);
        self.event()
    }

    pub fn on_paste(&mut self, text: &str) -> ChangeEvent {
        self.value = on_paste(self.kind, text);
        self.event()
    }

    pub fn on_key(&self, input: &KeyInput) -> KeyDecision {
        on_key_input(input)
    }

    pub fn validity_hint(&self) -> Option<ValidityHint> {
        if self.kind != MaskKind::TaxId || self.value.is_empty() {
            return None;
        }
        if validate_tax_id(&self.value.canonical) {
            Some(ValidityHint::Valid)
        } else {
            Some(ValidityHint::Invalid)
        }
    }

    fn event(&self) -> ChangeEvent {
        ChangeEvent {
            target: ChangeTarget {
                name: self.name.clone(),
                value: self.value.canonical.clone(),
                formatted_value: self.value.display.clone(),
            },
        }
    }
}
