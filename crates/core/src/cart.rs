//! Cart quantity rules.

use crate::error::CoreError;

/// Maximum quantity a single cart line may hold.
pub const MAX_LINE_QTY: i32 = 10;

/// Validate a quantity supplied directly by the client (add / set-qty).
///
/// Quantities must be between 1 and [`MAX_LINE_QTY`] inclusive.
pub fn validate_line_qty(qty: i32) -> Result<(), CoreError> {
    if qty < 1 {
        return Err(CoreError::Validation(
            "Quantity must be at least 1".to_string(),
        ));
    }
    if qty > MAX_LINE_QTY {
        return Err(CoreError::Validation(format!(
            "Quantity cannot exceed {MAX_LINE_QTY}"
        )));
    }
    Ok(())
}

/// Merge an added quantity into an existing cart line, clamping the result
/// at [`MAX_LINE_QTY`].
///
/// Used when an add-to-cart, move-to-cart, or size change lands on a
/// (product, size) line the customer already has.
pub fn merge_line_qty(existing: i32, added: i32) -> i32 {
    (existing + added).min(MAX_LINE_QTY)
}
