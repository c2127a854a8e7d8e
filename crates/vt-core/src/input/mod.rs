//! Masked numeric inputs.
//!
//! Raw keystrokes and pasted text are reduced to a canonical digit string and
//! re-rendered with literal separators. Two masks exist: the Brazilian
//! company tax id (CNPJ) and the phone number.
//!
//! ```text
//! keydown ──► on_key_input ──► Accept / Reject        (UX only)
//! change  ──► format ─────────► MaskedValue ──► ChangeEvent
//! paste   ──► on_paste ───────► MaskedValue ──► ChangeEvent
//! ```
//!
//! The canonical value is always recomputed from the resulting text, so the
//! key filter is never relied upon for correctness.

mod keys;
mod mask;
mod masked_input;
mod tax_id;

pub use keys::{on_key_input, Key, KeyDecision, KeyInput};
pub use mask::{digits_only, format, on_paste, MaskKind, MaskedValue};
pub use masked_input::{ChangeEvent, ChangeTarget, MaskedInput, ValidityHint};
pub use tax_id::validate_tax_id;
