//! # Pricing Module
//!
//! The shipping rule and checkout totals.
//!
//! ## The Shipping Rule
//! ```text
//! subtotal >  $50.00  →  shipping FREE
//! subtotal <= $50.00  →  shipping $5.99 flat
//! ```
//!
//! The comparison is STRICT: a subtotal of exactly $50.00 still pays the
//! flat fee. The boundary is pinned by tests on 4999 / 5000 / 5001 cents.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{FLAT_SHIPPING_FEE_CENTS, FREE_SHIPPING_THRESHOLD_CENTS};

/// Computes the shipping cost for a cart subtotal.
///
/// ## Example
/// ```rust
/// use bookstand_core::money::Money;
/// use bookstand_core::pricing::shipping_for_subtotal;
///
/// assert_eq!(shipping_for_subtotal(Money::from_cents(4999)).cents(), 599);
/// assert_eq!(shipping_for_subtotal(Money::from_cents(5001)).cents(), 0);
/// ```
#[inline]
pub fn shipping_for_subtotal(subtotal: Money) -> Money {
    if subtotal.cents() > FREE_SHIPPING_THRESHOLD_CENTS {
        Money::zero()
    } else {
        Money::from_cents(FLAT_SHIPPING_FEE_CENTS)
    }
}

/// Subtotal, shipping and grand total for a checkout.
///
/// Derived purely from the subtotal; the store computes the subtotal from
/// cart line items and everything else follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTotals {
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
}

impl CheckoutTotals {
    /// Applies the shipping rule to a subtotal.
    pub fn from_subtotal(subtotal: Money) -> Self {
        let shipping = shipping_for_subtotal(subtotal);
        CheckoutTotals {
            subtotal_cents: subtotal.cents(),
            shipping_cents: shipping.cents(),
            total_cents: (subtotal + shipping).cents(),
        }
    }

    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    #[inline]
    pub fn shipping(&self) -> Money {
        Money::from_cents(self.shipping_cents)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
