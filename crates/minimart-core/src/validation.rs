//! # Validation Module
//!
//! Input validation for cart and checkout operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP body shape (serde deserialization in the server)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - domain rules on the decoded values             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart/checkout operations (catalog lookup, line lookup)       │
//! │                                                                         │
//! │  An operation that fails validation never touches the cart.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};

/// Largest quantity a single line may hold, and the magnitude limit on a
/// single adjustment. Keeps every line total and cart total far inside
/// i64 range, so quantity and money arithmetic can never overflow.
pub const MAX_LINE_QTY: i64 = 1_000_000;

/// Validates a cart quantity adjustment.
///
/// ## Rules
/// - Must be nonzero. Zero would be an ambiguous "do nothing"; removal is
///   its own operation.
/// - Negative values are allowed (partial removal of an existing line).
/// - Magnitude is capped at [`MAX_LINE_QTY`]; anything beyond it is a
///   client error, not a quantity a shop cart holds.
pub fn validate_adjustment(qty: i64) -> CoreResult<()> {
    if qty == 0 {
        return Err(CoreError::invalid(
            "productId (number) and qty (positive number) required",
        ));
    }
    if !(-MAX_LINE_QTY..=MAX_LINE_QTY).contains(&qty) {
        return Err(CoreError::invalid("qty out of range"));
    }
    Ok(())
}

/// Parses a product id from an external path segment.
///
/// Non-numeric identifiers are rejected, never coerced to a sentinel.
pub fn parse_product_id(raw: &str) -> CoreResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CoreError::invalid(format!("invalid product id: {raw}")))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_adjustment() {
        assert!(validate_adjustment(1).is_ok());
        assert!(validate_adjustment(-3).is_ok());
        assert!(validate_adjustment(0).is_err());
    }

    #[test]
    fn test_validate_adjustment_magnitude_capped() {
        assert!(validate_adjustment(MAX_LINE_QTY).is_ok());
        assert!(validate_adjustment(-MAX_LINE_QTY).is_ok());

        for qty in [MAX_LINE_QTY + 1, i64::MAX, -MAX_LINE_QTY - 1, i64::MIN] {
            let err = validate_adjustment(qty).unwrap_err();
            assert_eq!(err.to_string(), "qty out of range");
        }
    }

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("3").unwrap(), 3);
        assert_eq!(parse_product_id(" 12 ").unwrap(), 12);
        assert!(parse_product_id("abc").is_err());
        assert!(parse_product_id("").is_err());
        assert!(parse_product_id("1.5").is_err());
    }
}
