use thiserror::Error;

/// Money is stored as integer cents so balance arithmetic stays exact.
/// 5000 cents = 50.00 in the display currency.
pub type Cents = i64;

/// Render cents as a decimal string: 5000 -> "50.00", -70 -> "-0.70".
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents.abs() / 100, cents.abs() % 100)
}

/// Parse a decimal string into cents. Accepts "120", "120.5" and "120.50";
/// anything past two decimal digits is truncated.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units_str, decimals_str) = match digits.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (digits, ""),
    };

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::Invalid)?
    };

    let decimals: i64 = match decimals_str.len() {
        0 => 0,
        1 => {
            decimals_str
                .parse::<i64>()
                .map_err(|_| ParseCentsError::Invalid)?
                * 10
        }
        _ => decimals_str[..2]
            .parse()
            .map_err(|_| ParseCentsError::Invalid)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimals))
        .ok_or(ParseCentsError::Overflow)?;

    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCentsError {
    #[error("invalid money format")]
    Invalid,
    #[error("amount out of range")]
    Overflow,
}
