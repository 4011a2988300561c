//! Product taxonomy: product types and the size groups they sell in.
//!
//! The store carries two sizing schemes. Topwear (shirts) uses letter sizes,
//! bottomwear (pants, joggers) uses waist measurements. Inventory rows,
//! cart lines, and admin inventory updates all key on these labels, so the
//! mapping lives here rather than in the handlers.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Size labels sold for topwear products.
pub const TOPWEAR_SIZES: &[&str] = &["s", "m", "l", "xl", "xxl"];

/// Size labels sold for bottomwear products.
pub const BOTTOMWEAR_SIZES: &[&str] = &["32", "34", "36", "38", "40"];

/// The kinds of product the store sells.
///
/// Stored in the `products.product_type` column as the serialized string
/// (`"Shirt"`, `"Pants"`, `"Joggers"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    Shirt,
    Pants,
    Joggers,
}

impl ProductType {
    /// The database / wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shirt => "Shirt",
            Self::Pants => "Pants",
            Self::Joggers => "Joggers",
        }
    }

    /// Parse the database representation back into the enum.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "Shirt" => Ok(Self::Shirt),
            "Pants" => Ok(Self::Pants),
            "Joggers" => Ok(Self::Joggers),
            other => Err(CoreError::Validation(format!(
                "Unknown product type: {other}"
            ))),
        }
    }

    /// Which sizing scheme this product type sells in.
    pub const fn size_group(self) -> SizeGroup {
        match self {
            Self::Shirt => SizeGroup::Topwear,
            Self::Pants | Self::Joggers => SizeGroup::Bottomwear,
        }
    }
}

/// Sizing scheme for a product type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeGroup {
    Topwear,
    Bottomwear,
}

impl SizeGroup {
    /// The ordered size labels belonging to this group.
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Topwear => TOPWEAR_SIZES,
            Self::Bottomwear => BOTTOMWEAR_SIZES,
        }
    }

    /// Whether `label` is a member of this group.
    pub fn contains(self, label: &str) -> bool {
        self.labels().contains(&label)
    }
}

/// Whether `label` is a valid size label for any product type.
pub fn is_known_size_label(label: &str) -> bool {
    SizeGroup::Topwear.contains(label) || SizeGroup::Bottomwear.contains(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_round_trip_product_types() {
        for t in [ProductType::Shirt, ProductType::Pants, ProductType::Joggers] {
            assert_eq!(ProductType::parse(t.as_str()).unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_product_type_rejected() {
        assert_matches!(
            ProductType::parse("Hoodie"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn test_size_groups() {
        assert_eq!(ProductType::Shirt.size_group(), SizeGroup::Topwear);
        assert_eq!(ProductType::Pants.size_group(), SizeGroup::Bottomwear);
        assert_eq!(ProductType::Joggers.size_group(), SizeGroup::Bottomwear);
    }

    #[test]
    fn test_label_membership() {
        assert!(SizeGroup::Topwear.contains("xl"));
        assert!(!SizeGroup::Topwear.contains("34"));
        assert!(SizeGroup::Bottomwear.contains("34"));
        assert!(!SizeGroup::Bottomwear.contains("xl"));
    }

    #[test]
    fn test_known_labels() {
        assert!(is_known_size_label("s"));
        assert!(is_known_size_label("40"));
        assert!(!is_known_size_label("42"));
        assert!(!is_known_size_label("S"));
    }
}
