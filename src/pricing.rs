//! Discount price calculation

use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

/// Apply a percentage discount to a price.
///
/// The discount must lie in [0, 100]. The result is rounded to two decimal
/// places with banker's rounding.
pub fn discounted_price(price: Decimal, discount_percent: Decimal) -> AppResult<Decimal> {
    if price.is_sign_negative() {
        return Err(AppError::Validation(
            "Price must not be negative".to_string(),
        ));
    }
    if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
        return Err(AppError::Validation(
            "Discount must be between 0 and 100".to_string(),
        ));
    }
    let factor = (Decimal::ONE_HUNDRED - discount_percent) / Decimal::ONE_HUNDRED;
    Ok((price * factor).round_dp(2))
}
