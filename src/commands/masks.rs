use vt_core::{MaskKind, MaskedInput};

use super::dto::MaskOutput;

/// Runs `raw` through the same pipeline as a pasted value.
pub fn mask_value(kind: MaskKind, raw: &str) -> MaskOutput {
    let mut input = MaskedInput::new("value", kind);
    let event = input.on_paste(raw);
    let hint = input.validity_hint();

    MaskOutput {
        kind,
        canonical: event.target.value,
        display: event.target.formatted_value,
        hint,
        hint_label: hint.map(|h| h.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vt_core::ValidityHint;

    #[test]
    fn test_mask_tax_id_reports_hint() {
        let out = mask_value(MaskKind::TaxId, "11222333000181");
        assert_eq!(out.display, "11.222.333/0001-81");
        assert_eq!(out.hint, Some(ValidityHint::Valid));
        assert_eq!(out.hint_label, Some("CNPJ válido"));
    }

    #[test]
    fn test_mask_phone_has_no_hint() {
        let out = mask_value(MaskKind::Phone, "11999998888");
        assert_eq!(out.display, "(11) 99999-8888");
        assert_eq!(out.canonical, "11999998888");
        assert_eq!(out.hint, None);
    }
}
