use crate::{entry::Pence, error::Error};

/// Placeholder used by the export when a column carries no amount.
const NO_AMOUNT: &str = "-";
const CURRENCY_SYMBOL: char = '£';
const THOUSANDS_SEPARATOR: char = ',';

/// Parse a statement amount such as `£3,624.57` into pence.
///
/// The value is parsed as a float, scaled by 100 and truncated toward zero,
/// so `£0.29` becomes 28 pence.
pub fn parse_money(money: &str) -> Result<Pence, Error> {
    if money == NO_AMOUNT {
        return Ok(0);
    }

    let digits: String = money
        .chars()
        .filter(|c| *c != CURRENCY_SYMBOL && *c != THOUSANDS_SEPARATOR)
        .collect();
    let value = digits
        .parse::<f64>()
        .map_err(|_| Error::InvalidAmount(money.to_string()))?;
    if !value.is_finite() {
        return Err(Error::InvalidAmount(money.to_string()));
    }

    Ok((value * 100.0) as Pence)
}
