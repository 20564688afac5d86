//! Identifier cleanup helpers.

/// Literal tokens a float-typed export round-trips "missing" through.
const PLACEHOLDERS: [&str; 4] = ["nan", "none", "null", "n/a"];

/// Longest digit run still plausible as a tax/identity number.
const MAX_IDENTIFIER_DIGITS: usize = 15;

/// Cleans a raw identifier value: placeholder tokens become empty,
/// trailing colons are stripped, and integral decimals render without
/// the `.0` suffix.
pub fn clean_identifier(raw: &str) -> String {
    let trimmed = raw.trim();
    if PLACEHOLDERS.contains(&trimmed.to_ascii_lowercase().as_str()) {
        return String::new();
    }
    let stripped = trimmed.trim_end_matches(':').trim_end();
    if let Ok(value) = stripped.parse::<f64>()
        && value.fract() == 0.0
        && value.abs() < 1e15
    {
        return format!("{}", value as i64);
    }
    stripped.to_string()
}

/// Extracts a numeric-looking identifier token from arbitrary cell
/// text: after cleanup and separator removal the value must be all
/// digits and at most [`MAX_IDENTIFIER_DIGITS`] long.
pub fn numeric_identifier_token(raw: &str) -> Option<String> {
    let cleaned = clean_identifier(raw);
    let digits: String = cleaned
        .chars()
        .filter(|ch| !matches!(ch, '.' | ',' | ' ' | '-'))
        .collect();
    if digits.is_empty() || digits.len() > MAX_IDENTIFIER_DIGITS {
        return None;
    }
    if digits.chars().all(|ch| ch.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_placeholders_and_trailing_colons() {
        assert_eq!(clean_identifier("nan"), "");
        assert_eq!(clean_identifier("  None "), "");
        assert_eq!(clean_identifier("N/A"), "");
        assert_eq!(clean_identifier("123456:"), "123456");
        assert_eq!(clean_identifier("123456 : "), "123456");
    }

    #[test]
    fn defloats_integral_identifiers() {
        assert_eq!(clean_identifier("123456.0"), "123456");
        assert_eq!(clean_identifier("123456.5"), "123456.5");
        assert_eq!(clean_identifier("EMPRESA SRL"), "EMPRESA SRL");
    }

    #[test]
    fn numeric_token_respects_length_and_content() {
        assert_eq!(
            numeric_identifier_token("76.543.210"),
            Some("76543210".to_string())
        );
        assert_eq!(
            numeric_identifier_token("123456.0"),
            Some("123456".to_string())
        );
        assert_eq!(numeric_identifier_token("Producto X"), None);
        assert_eq!(numeric_identifier_token("1234567890123456"), None);
        assert_eq!(numeric_identifier_token(""), None);
    }
}
