//! Locale-tolerant amount parsing.
//!
//! Spreadsheet exports mix Swedish (`1 234,56`), English (`1,234.56`) and
//! continental (`1.234.567,89`) conventions, often with currency symbols.
//! Cells are interpreted leniently: a single malformed cell must not block
//! sampling of an entire dataset, so unparseable text becomes `0`.

/// Parse a cell to an amount, returning `None` when no number can be read.
///
/// Handles:
/// - Currency symbols and letters: "1 234,56 kr" -> 1234.56
/// - Space thousands separators: "1 234 567" -> 1234567
/// - Comma thousands separators: "1,234.56" -> 1234.56
/// - Comma decimal separators: "12,5" -> 12.5
/// - Repeated periods: "1.234.567,89" -> 1234567.89
///
/// A comma followed by exactly three digits and then a non-digit (or the
/// end) is a thousands separator; every other comma is a decimal point.
/// When several periods remain, only the last one is the decimal point.
pub fn parse_amount(value: &str) -> Option<f64> {
    // Keep digits, separators and signs; whitespace goes too
    let kept: Vec<char> = value
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    let mut resolved = String::with_capacity(kept.len());
    for (idx, &c) in kept.iter().enumerate() {
        if c != ',' {
            resolved.push(c);
        } else if !is_thousands_comma(&kept, idx) {
            resolved.push('.');
        }
    }

    let periods = resolved.matches('.').count();
    let cleaned = if periods > 1 {
        collapse_periods(&resolved)
    } else {
        resolved
    };

    parse_leading_float(&cleaned).filter(|parsed| parsed.is_finite())
}

/// Parse a cell to an amount, defaulting to `0` when unparseable.
pub fn normalize_amount(value: &str) -> f64 {
    parse_amount(value).unwrap_or(0.0)
}

/// Absolute amount of a cell; the sign of a transaction does not change
/// its materiality.
pub fn absolute_amount(value: &str) -> f64 {
    normalize_amount(value).abs()
}

/// Evidence that a cell belongs to a numeric column.
///
/// A literal `"0"` counts, so a column of zeros is not mistaken for text.
pub fn looks_numeric(value: &str) -> bool {
    normalize_amount(value) != 0.0 || value.trim() == "0"
}

fn is_thousands_comma(chars: &[char], comma: usize) -> bool {
    let digits = chars
        .iter()
        .skip(comma + 1)
        .take_while(|c| c.is_ascii_digit())
        .count();
    digits == 3
}

/// Removes every period except the last one.
fn collapse_periods(value: &str) -> String {
    match value.rfind('.') {
        Some(last) => {
            let (head, tail) = value.split_at(last);
            let mut collapsed: String = head.chars().filter(|c| *c != '.').collect();
            collapsed.push_str(tail);
            collapsed
        }
        None => value.to_string(),
    }
}

/// Parses the longest numeric prefix: optional minus, digits, optional
/// fraction. Trailing garbage is ignored; no digits at all is a failure.
fn parse_leading_float(value: &str) -> Option<f64> {
    let bytes = value.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    value[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
