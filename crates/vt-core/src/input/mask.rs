use serde::{Deserialize, Serialize};

/// Which mask an input applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskKind {
    /// CNPJ: `DD.DDD.DDD/DDDD-DD`
    TaxId,
    /// `(DD) DDDDD-DDDD`, or `(DD) DDDD-DDDD` for ten digits
    Phone,
}

impl MaskKind {
    pub fn max_digits(self) -> usize {
        match self {
            MaskKind::TaxId => 14,
            MaskKind::Phone => 11,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            MaskKind::TaxId => "00.000.000/0000-00",
            MaskKind::Phone => "(00) 00000-0000",
        }
    }
}

/// Canonical digits plus their rendered form.
///
/// Invariant: `digits_only(&display) == canonical`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedValue {
    pub canonical: String,
    pub display: String,
}

impl MaskedValue {
    pub fn from_raw(kind: MaskKind, raw: &str) -> Self {
        let canonical = truncated_digits(kind, raw);
        let display = render(kind, &canonical);
        Self { canonical, display }
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

/// Strips every character that is not an ASCII decimal digit.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats free-form input progressively for `kind`.
///
/// Only the digit count decides where separators go, so partial input
/// renders as a valid prefix of the full template (`"123"` → `"12.3"`).
pub fn format(kind: MaskKind, raw: &str) -> String {
    render(kind, &truncated_digits(kind, raw))
}

/// Pasted text goes through the same strip, truncate and format pipeline.
pub fn on_paste(kind: MaskKind, text: &str) -> MaskedValue {
    MaskedValue::from_raw(kind, text)
}

fn truncated_digits(kind: MaskKind, raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(kind.max_digits())
        .collect()
}

// `digits` holds ASCII digits only, so byte slicing is char-aligned.
fn render(kind: MaskKind, digits: &str) -> String {
    match kind {
        MaskKind::TaxId => render_tax_id(digits),
        MaskKind::Phone => render_phone(digits),
    }
}

fn render_tax_id(d: &str) -> String {
    match d.len() {
        0..=2 => d.to_string(),
        3..=5 => format!("{}.{}", &d[..2], &d[2..]),
        6..=8 => format!("{}.{}.{}", &d[..2], &d[2..5], &d[5..]),
        9..=12 => format!("{}.{}.{}/{}", &d[..2], &d[2..5], &d[5..8], &d[8..]),
        _ => format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        ),
    }
}

fn render_phone(d: &str) -> String {
    match d.len() {
        0 => String::new(),
        1..=2 => format!("({}", d),
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        // Mobile numbers carry a five digit prefix.
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}
