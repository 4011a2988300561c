//! Money arithmetic for cart summaries and order totals.
//!
//! Prices are stored as whole currency units (`i64`). Tax is GST applied as
//! a percentage of the pre-tax amount. All derived amounts use
//! [`rust_decimal::Decimal`] so the arithmetic is exact, rounded to two
//! decimal places only at the end.

use rust_decimal::Decimal;

/// GST amount for a pre-tax subtotal at `rate_percent`.
pub fn gst_amount(subtotal: i64, rate_percent: Decimal) -> Decimal {
    money(Decimal::from(subtotal) * rate_percent / Decimal::from(100))
}

/// Grand total: subtotal plus GST.
pub fn cart_total(subtotal: i64, rate_percent: Decimal) -> Decimal {
    money(Decimal::from(subtotal) + gst_amount(subtotal, rate_percent))
}

/// Tax-inclusive price of a single unit.
pub fn taxed_unit_price(unit_price: i64, rate_percent: Decimal) -> Decimal {
    let price = Decimal::from(unit_price);
    money(price + price * rate_percent / Decimal::from(100))
}

/// Tax-inclusive total of an order given `(qty, unit_price)` line snapshots.
pub fn order_total(lines: &[(i32, i64)], rate_percent: Decimal) -> Decimal {
    money(
        lines
            .iter()
            .map(|&(qty, unit_price)| {
                taxed_unit_price(unit_price, rate_percent) * Decimal::from(qty)
            })
            .sum::<Decimal>(),
    )
}

/// Round to 2 decimal places and pin the scale there, so amounts always
/// serialize as `1180.00`, never `1180`.
fn money(amount: Decimal) -> Decimal {
    let mut amount = amount.round_dp(2);
    amount.rescale(2);
    amount
}
