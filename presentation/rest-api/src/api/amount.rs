//! Conversions between domain decimals and the JSON numbers exposed by the API.

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};

/// Decimal places kept for prices and percentages coming from clients.
const SCALE: i64 = 2;

pub fn to_amount(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Returns `None` for NaN or infinite input.
pub fn from_amount(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_f64(value).map(|d| d.round(SCALE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_client_amounts_to_cents() {
        assert_eq!(from_amount(19.99), Some("19.99".parse().unwrap()));
        assert_eq!(from_amount(0.1 + 0.2), Some("0.30".parse().unwrap()));
    }

    #[test]
    fn should_reject_non_finite_amounts() {
        assert_eq!(from_amount(f64::NAN), None);
        assert_eq!(from_amount(f64::INFINITY), None);
    }

    #[test]
    fn should_expose_decimals_as_numbers() {
        assert_eq!(to_amount(&"56.48".parse().unwrap()), 56.48);
    }
}
