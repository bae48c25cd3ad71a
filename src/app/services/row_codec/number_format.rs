//! Numeric text conversions compatible with existing record files
//!
//! Doubles in existing files look like `1.0`, `1.0E7`, `NaN` or `Infinity`;
//! rendering reproduces that form and decimal parsing accepts its grammar.

/// Render a double in the shortest round-trip form used by record files.
///
/// Magnitudes in `[1e-3, 1e7)` (and zero) use plain decimal notation with at
/// least one fraction digit; all others use `<mantissa>E<exponent>`.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

/// Parse decimal text, returning `None` when it is not a number.
///
/// Surrounding whitespace and a trailing `d`/`f` type suffix are ignored,
/// `NaN` and `Infinity` may carry a sign. Other spellings (`inf`,
/// `nan`, `1_000`) are rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| c <= ' ');
    let body = match trimmed.strip_suffix(['d', 'D', 'f', 'F']) {
        Some(rest) if !rest.is_empty() => rest,
        _ => trimmed,
    };

    let (negative, unsigned) = match body.as_bytes().first() {
        Some(b'-') => (true, &body[1..]),
        Some(b'+') => (false, &body[1..]),
        _ => (false, body),
    };
    match unsigned {
        "NaN" => return Some(f64::NAN),
        "Infinity" if negative => return Some(f64::NEG_INFINITY),
        "Infinity" => return Some(f64::INFINITY),
        _ => {}
    }

    if body.is_empty()
        || !body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }

    body.parse::<f64>().ok()
}

/// Round to a fixed number of fraction digits, half-up.
///
/// Rounding works on the shortest decimal representation of the value, so
/// `0.125` becomes `0.13` rather than following the binary expansion.
/// Negative values keep their sign even when they round to zero.
pub fn format_fixed_half_up(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return format_double(value);
    }

    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);

    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    // Integer digit count; left-pad so there is at least one
    let mut point = exponent + 1;
    if point < 1 {
        let padding = (1 - point) as usize;
        digits.splice(0..0, std::iter::repeat_n(0, padding));
        point = 1;
    }
    let mut point = point as usize;

    let keep = point + fraction_digits;
    if digits.len() > keep {
        let round_up = digits[keep] >= 5;
        digits.truncate(keep);
        if round_up {
            let mut index = keep;
            loop {
                if index == 0 {
                    digits.insert(0, 1);
                    point += 1;
                    break;
                }
                index -= 1;
                if digits[index] == 9 {
                    digits[index] = 0;
                } else {
                    digits[index] += 1;
                    break;
                }
            }
        }
    } else {
        digits.resize(keep, 0);
    }

    let mut text = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        text.push('-');
    }
    for (position, digit) in digits.iter().enumerate() {
        if position == point {
            text.push('.');
        }
        text.push(char::from(b'0' + digit));
    }
    text
}
