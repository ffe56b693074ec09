//! Field formatting and validation
//!
//! Each recognized field kind maps raw input text to its canonical display
//! form plus a validity verdict. The WASM layer re-runs these on every
//! input event and mirrors the verdict into the DOM.

use crate::limits::{MIN_YEAR, VIN_LENGTH};

/// Outcome of formatting/validating one field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Canonical display text to write back into the input
    pub value: String,
    pub is_valid: bool,
    /// Human-readable message, set only when invalid
    pub message: Option<String>,
}

impl Verdict {
    pub fn ok(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_valid: true,
            message: None,
        }
    }

    pub fn fail(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Formatting/validation behavior attached to a named input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Price,
    Mileage,
    Year,
    Phone,
    Email,
    Vin,
    /// No transform, no rule beyond `required`
    Text,
}

/// Run the formatter for `kind` over raw input text.
///
/// `current_year` parameterizes the year range check so callers (and
/// tests) control the clock.
pub fn apply(kind: FieldKind, raw: &str, current_year: i32) -> Verdict {
    match kind {
        FieldKind::Price => format_price(raw),
        FieldKind::Mileage => format_mileage(raw),
        FieldKind::Year => check_year(raw, current_year),
        FieldKind::Phone => Verdict::ok(format_phone(raw)),
        FieldKind::Email => check_email(raw),
        FieldKind::Vin => format_vin(raw),
        FieldKind::Text => Verdict::ok(raw),
    }
}

/// Formatter plus the required-field check used by the submit gate.
pub fn validate(kind: FieldKind, raw: &str, required: bool, current_year: i32) -> Verdict {
    if required && raw.trim().is_empty() {
        return Verdict::fail(raw, "This field is required.");
    }
    apply(kind, raw, current_year)
}

/// Group a digit string with thousands separators, dropping leading zeros.
fn group_thousands(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
    let mut out = String::with_capacity(trimmed.len() + trimmed.len() / 3);
    let len = trimmed.len();
    for (i, c) in trimmed.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Strip everything but digits and dots, then render a grouped number.
/// Invalid unless the result parses to a value greater than zero.
pub fn format_price(raw: &str) -> Verdict {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return Verdict::fail("", "Price must be greater than 0");
    }

    // Second and later dots are discarded, like a lenient float parse.
    let mut parts = cleaned.splitn(3, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");

    let numeric: f64 = format!(
        "{}.{}",
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part }
    )
    .parse()
    .unwrap_or(0.0);

    let mut display = group_thousands(int_part);
    if !frac_part.is_empty() {
        display.push('.');
        display.push_str(frac_part);
    }

    if numeric > 0.0 {
        Verdict::ok(display)
    } else {
        Verdict::fail(display, "Price must be greater than 0")
    }
}

/// Strip non-digits and render a grouped integer. Never invalid.
pub fn format_mileage(raw: &str) -> Verdict {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Verdict::ok("");
    }
    Verdict::ok(group_thousands(&digits))
}

/// Year is left untouched; out-of-range values get a custom message.
pub fn check_year(raw: &str, current_year: i32) -> Verdict {
    let max_year = current_year + 1;
    match raw.trim().parse::<i32>() {
        Ok(year) if year < MIN_YEAR || year > max_year => Verdict::fail(
            raw,
            format!("Year must be between {} and {}", MIN_YEAR, max_year),
        ),
        _ => Verdict::ok(raw),
    }
}

/// Progressive phone formatting over the first ten digits typed.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        0..=2 => digits,
        3..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => {
            let end = digits.len().min(10);
            format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..end])
        }
    }
}

/// Empty is fine; otherwise require a `local@domain.tld` shape.
pub fn check_email(raw: &str) -> Verdict {
    if raw.is_empty() || is_plausible_email(raw) {
        Verdict::ok(raw)
    } else {
        Verdict::fail(raw, "Please enter a valid email address")
    }
}

fn is_plausible_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Uppercase, alphanumeric-only; non-empty VINs must be exactly 17 chars.
pub fn format_vin(raw: &str) -> Verdict {
    let cleaned: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if cleaned.is_empty() || cleaned.len() == VIN_LENGTH {
        Verdict::ok(cleaned)
    } else {
        Verdict::fail(cleaned, "VIN must be exactly 17 characters")
    }
}

/// Compose `"{year} {make} {model}"` for the title field, only when all
/// three parts are present.
pub fn compose_title(year: &str, make: &str, model: &str) -> Option<String> {
    let (year, make, model) = (year.trim(), make.trim(), model.trim());
    if year.is_empty() || make.is_empty() || model.is_empty() {
        return None;
    }
    Some(format!("{} {} {}", year, make, model))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_groups_thousands() {
        let v = format_price("25000");
        assert!(v.is_valid);
        assert_eq!(v.value, "25,000");
    }

    #[test]
    fn test_price_strips_junk_and_stays_parseable() {
        let v = format_price("$1,234.50");
        assert!(v.is_valid);
        assert_eq!(v.value, "1,234.50");
        let reparsed: f64 = v.value.replace(',', "").parse().unwrap();
        assert_eq!(reparsed, 1234.50);
    }

    #[test]
    fn test_price_zero_invalid() {
        let v = format_price("0");
        assert!(!v.is_valid);
        assert_eq!(v.message.as_deref(), Some("Price must be greater than 0"));
    }

    #[test]
    fn test_price_empty_invalid() {
        assert!(!format_price("").is_valid);
        assert!(!format_price("abc").is_valid);
    }

    #[test]
    fn test_price_leading_dot() {
        let v = format_price(".5");
        assert!(v.is_valid);
        assert_eq!(v.value, "0.5");
    }

    #[test]
    fn test_mileage_grouped_integer() {
        let v = format_mileage("45000 miles");
        assert!(v.is_valid);
        assert_eq!(v.value, "45,000");
    }

    #[test]
    fn test_mileage_empty_ok() {
        let v = format_mileage("");
        assert!(v.is_valid);
        assert_eq!(v.value, "");
    }

    #[test]
    fn test_year_in_range() {
        assert!(check_year("2020", 2026).is_valid);
        assert!(check_year("1990", 2026).is_valid);
        assert!(check_year("2027", 2026).is_valid);
    }

    #[test]
    fn test_year_1985_message() {
        let v = check_year("1985", 2026);
        assert!(!v.is_valid);
        assert_eq!(
            v.message.as_deref(),
            Some("Year must be between 1990 and 2027")
        );
    }

    #[test]
    fn test_year_unparseable_passes() {
        assert!(check_year("", 2026).is_valid);
        assert!(check_year("soon", 2026).is_valid);
    }

    #[test]
    fn test_phone_full_ten_digits() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn test_phone_uses_first_ten_digits() {
        assert_eq!(format_phone("555123456789"), "(555) 123-4567");
    }

    #[test]
    fn test_phone_partial() {
        assert_eq!(format_phone("55"), "55");
        assert_eq!(format_phone("5551"), "(555) 1");
        assert_eq!(format_phone("555-123.45"), "(555) 123-45");
    }

    #[test]
    fn test_email_rules() {
        assert!(check_email("").is_valid);
        assert!(check_email("sales@dealer.example").is_valid);
        assert!(!check_email("sales@dealer").is_valid);
        assert!(!check_email("sales dealer@x.com").is_valid);
        assert!(!check_email("@dealer.com").is_valid);
        assert!(!check_email("a@.com").is_valid);
        assert!(!check_email("a@b.").is_valid);
    }

    #[test]
    fn test_vin_uppercases_and_strips() {
        let v = format_vin("1hgcm82633a-00435 2");
        assert!(v.is_valid);
        assert_eq!(v.value, "1HGCM82633A004352");
        assert_eq!(v.value.len(), 17);
    }

    #[test]
    fn test_vin_wrong_length_invalid() {
        let v = format_vin("1HGCM82633");
        assert!(!v.is_valid);
        assert_eq!(
            v.message.as_deref(),
            Some("VIN must be exactly 17 characters")
        );
    }

    #[test]
    fn test_vin_empty_ok() {
        assert!(format_vin("").is_valid);
    }

    #[test]
    fn test_validate_required_empty() {
        let v = validate(FieldKind::Text, "  ", true, 2026);
        assert!(!v.is_valid);
        assert_eq!(v.message.as_deref(), Some("This field is required."));
    }

    #[test]
    fn test_validate_required_cleared_after_edit() {
        // Mileage formatting alone accepts empty text; the required rule
        // must still flag it so live feedback never shows a cleared
        // required field as valid.
        assert!(validate(FieldKind::Mileage, "45000", true, 2026).is_valid);
        let v = validate(FieldKind::Mileage, "", true, 2026);
        assert!(!v.is_valid);
        assert_eq!(v.message.as_deref(), Some("This field is required."));
    }

    #[test]
    fn test_validate_optional_empty() {
        assert!(validate(FieldKind::Vin, "", false, 2026).is_valid);
    }

    #[test]
    fn test_compose_title() {
        assert_eq!(
            compose_title("2020", "Toyota", "Camry").as_deref(),
            Some("2020 Toyota Camry")
        );
        assert_eq!(compose_title("2020", "", "Camry"), None);
    }
}
