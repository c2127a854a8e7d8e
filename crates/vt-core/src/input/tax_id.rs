use super::mask::digits_only;

const TAX_ID_LEN: usize = 14;

/// Validates a CNPJ given in any rendering (masked or bare digits).
///
/// A value passes when it has exactly 14 digits, is not one digit repeated,
/// and both trailing check digits match the weighted modulo-11 scheme.
pub fn validate_tax_id(text: &str) -> bool {
    let digits: Vec<u32> = digits_only(text)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != TAX_ID_LEN {
        return false;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits[..12]) == digits[12] && check_digit(&digits[..13]) == digits[13]
}

/// Weights run from the last digit backwards: 2, 3, ..., 9, then 2 again.
fn check_digit(body: &[u32]) -> u32 {
    let sum: u32 = body
        .iter()
        .rev()
        .zip((2..=9).cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();

    let check = 11 - (sum % 11);
    if check > 9 {
        0
    } else {
        check
    }
}
