//! # Checkout Module
//!
//! Converts client-submitted line items into a receipt.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                                     │
//! │                                                                         │
//! │  POST /api/checkout { cartItems, name?, email? }                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  validate: cartItems non-empty ── invalid ──► InvalidRequest,          │
//! │         │                                     no state change          │
//! │         ▼                                                               │
//! │  total = Σ price × qty over the SUBMITTED items                        │
//! │         │   (the client's snapshot is trusted; it may diverge from     │
//! │         │    the server cart - accepted contract, see DESIGN.md)       │
//! │         ▼                                                               │
//! │  Receipt { customer, total, timestamp, items echoed verbatim }         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  caller clears the server cart unconditionally and persists            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::GUEST_CUSTOMER_NAME;

// =============================================================================
// Submitted Item
// =============================================================================

/// A line item as submitted by the client at checkout.
///
/// Only `price` and `qty` are interpreted; any additional fields the
/// client sent (name, id, ...) are carried through `extra` and echoed
/// verbatim on the receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedItem {
    /// Unit price in minor units.
    #[serde(rename = "price")]
    pub price_cents: i64,

    /// Quantity purchased.
    pub qty: i64,

    /// Untouched passthrough of every other submitted field.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SubmittedItem {
    /// Line total for this submitted item.
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.price_cents).multiply_quantity(self.qty)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The customer block on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer name; "Guest" when the client supplied none.
    pub name: String,

    /// Customer email; null when absent.
    pub email: Option<String>,
}

/// The ephemeral result of a successful checkout.
///
/// Returned once and discarded, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Receipt identifier (UUID v4).
    pub id: Uuid,

    /// Fixed confirmation message.
    pub message: String,

    /// Customer details with guest defaulting applied.
    pub customer: Customer,

    /// Total in minor units, computed from the submitted items.
    pub total: Money,

    /// ISO-8601 instant of checkout.
    pub timestamp: DateTime<Utc>,

    /// The submitted line items, echoed verbatim.
    pub items: Vec<SubmittedItem>,
}

// =============================================================================
// Checkout Operation
// =============================================================================

/// Validates submitted items and produces a receipt.
///
/// ## Behavior
/// - empty `items` → [`CoreError::InvalidRequest`]; the caller must not
///   change any state in that case
/// - `total` is Σ price × qty over the *submitted* items, not the server
///   cart
/// - `name` falls back to "Guest" only when absent or the empty string;
///   a whitespace-only name is kept verbatim. `email` is `None` when
///   absent or empty.
///
/// Clearing the server cart is the caller's unconditional side effect
/// after success; this function is pure.
pub fn checkout(
    items: Vec<SubmittedItem>,
    name: Option<String>,
    email: Option<String>,
) -> CoreResult<Receipt> {
    if items.is_empty() {
        return Err(CoreError::invalid("cartItems array required"));
    }

    let total: Money = items.iter().map(SubmittedItem::line_total).sum();

    Ok(Receipt {
        id: Uuid::new_v4(),
        message: "Checkout successful".to_string(),
        customer: Customer {
            name: name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| GUEST_CUSTOMER_NAME.to_string()),
            email: email.filter(|e| !e.is_empty()),
        },
        total,
        timestamp: Utc::now(),
        items,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
