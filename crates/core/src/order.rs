//! Order status lifecycle and public order references.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Prefix used in customer-facing order references.
const ORDER_REF_PREFIX: &str = "HL-";

/// Fulfilment status of an order.
///
/// Orders are created as `Packing`; status moves forward as the warehouse
/// processes them. Stored in `orders.status` as the serialized string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Packing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Packing => "Packing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "Packing" => Ok(Self::Packing),
            "Shipped" => Ok(Self::Shipped),
            "Delivered" => Ok(Self::Delivered),
            other => Err(CoreError::Validation(format!(
                "Unknown order status: {other}"
            ))),
        }
    }
}

/// Render a sequential order number as the customer-facing reference,
/// e.g. `1042` -> `"HL-1042"`.
pub fn format_order_ref(order_number: i64) -> String {
    format!("{ORDER_REF_PREFIX}{order_number}")
}

/// Parse a customer-facing order reference back to the sequential number.
///
/// Accepts both the prefixed form (`"HL-1042"`) and the bare number
/// (`"1042"`) so order lookups are forgiving about how the reference was
/// copied around.
pub fn parse_order_ref(reference: &str) -> Result<i64, CoreError> {
    let digits = reference.strip_prefix(ORDER_REF_PREFIX).unwrap_or(reference);
    digits
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| CoreError::Validation(format!("Invalid order reference: {reference}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_status_round_trip() {
        for s in [
            OrderStatus::Packing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ] {
            assert_eq!(OrderStatus::parse(s.as_str()).unwrap(), s);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert_matches!(OrderStatus::parse("Returned"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_order_ref_round_trip() {
        assert_eq!(format_order_ref(1042), "HL-1042");
        assert_eq!(parse_order_ref("HL-1042").unwrap(), 1042);
    }

    #[test]
    fn test_order_ref_accepts_bare_number() {
        assert_eq!(parse_order_ref("1042").unwrap(), 1042);
    }

    #[test]
    fn test_order_ref_rejects_garbage() {
        assert_matches!(parse_order_ref("HL-"), Err(CoreError::Validation(_)));
        assert_matches!(parse_order_ref("HL-abc"), Err(CoreError::Validation(_)));
        assert_matches!(parse_order_ref("-5"), Err(CoreError::Validation(_)));
    }
}
