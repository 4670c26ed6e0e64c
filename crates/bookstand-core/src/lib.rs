//! # bookstand-core: Pure Business Logic for Bookstand
//!
//! This crate is the **heart** of the Bookstand storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   Bookstand Architecture                     │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │                Storefront UI (TypeScript)              │  │
//! │  │   Catalog ──► Cart ──► Checkout ──► Orders ──► Admin   │  │
//! │  └───────────────────────────┬────────────────────────────┘  │
//! │                              │ direct calls                  │
//! │  ┌───────────────────────────▼────────────────────────────┐  │
//! │  │            bookstand-store (domain store)              │  │
//! │  │   Store, Cart, catalog views, dashboard reports        │  │
//! │  └───────────────────────────┬────────────────────────────┘  │
//! │                              │                               │
//! │  ┌───────────────────────────▼────────────────────────────┐  │
//! │  │             ★ bookstand-core (THIS CRATE) ★            │  │
//! │  │                                                        │  │
//! │  │   ┌────────┐ ┌────────┐ ┌─────────┐ ┌────────────┐     │  │
//! │  │   │ types  │ │ money  │ │ pricing │ │ validation │     │  │
//! │  │   │ Book   │ │ Money  │ │shipping │ │   rules    │     │  │
//! │  │   │ Order  │ │ cents  │ │ totals  │ │   checks   │     │  │
//! │  │   └────────┘ └────────┘ └─────────┘ └────────────┘     │  │
//! │  │                                                        │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS   │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, User, Order, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Shipping rule and checkout totals
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstand_core::money::Money;
//! use bookstand_core::pricing::shipping_for_subtotal;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(4999); // $49.99
//!
//! // One cent short of free shipping: flat fee applies
//! let shipping = shipping_for_subtotal(subtotal);
//! assert_eq!(shipping.cents(), 599);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bookstand_core::Money` instead of
// `use bookstand_core::money::Money`

pub use error::{StoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Orders with a subtotal STRICTLY greater than this ship for free.
///
/// The boundary is deliberate: a $50.00 subtotal still pays the flat fee.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 50_00;

/// Flat shipping fee charged below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE_CENTS: i64 = 5_99;

/// Minimum accepted password length at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Maximum quantity of a single book in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// The live stock level is usually the tighter bound.
pub const MAX_ITEM_QUANTITY: i64 = 999;
