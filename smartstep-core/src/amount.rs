//! Numeric quantities as they are written in instructions.

/// Parse a quantity string into a decimal value.
///
/// Handles:
/// - Integers: "12" → 12.0
/// - Decimals: "2.5" → 2.5
/// - Fractions: "1/2" → 0.5
/// - Mixed numbers: "1 1/2" → 1.5
pub fn parse_amount(amount: &str) -> Option<f64> {
    let amount = amount.trim();

    if amount.is_empty() {
        return None;
    }

    let parts: Vec<&str> = amount.split_whitespace().collect();
    if parts.len() == 2 {
        let whole: f64 = parts[0].parse().ok()?;
        let frac = parse_fraction(parts[1])?;
        return Some(whole + frac);
    }
    if parts.len() > 2 {
        return None;
    }

    if amount.contains('/') {
        return parse_fraction(amount);
    }

    let value: f64 = amount.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse a fraction string like "1/2" or "3/4".
fn parse_fraction(s: &str) -> Option<f64> {
    let (num, denom) = s.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let denom: f64 = denom.trim().parse().ok()?;
    if denom == 0.0 {
        return None;
    }
    Some(num / denom)
}
