//! # Error Types
//!
//! Domain-specific error types for bookstand-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Error Types                           │
//! │                                                              │
//! │  bookstand-core errors (this file)                           │
//! │  ├── StoreError       - Domain operation failures            │
//! │  └── ValidationError  - Input validation failures            │
//! │                                                              │
//! │  Flow: ValidationError → StoreError → inline UI message      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (title, id, quantities)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! All of these are recovered at the point of the user action; none are
//! fatal to the process.

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Domain operation errors.
///
/// These represent business rule violations surfaced as inline messages
/// next to the form or button that triggered them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Book cannot be found in the catalog.
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Order cannot be found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Book is not in the cart.
    #[error("Book {0} is not in the cart")]
    NotInCart(String),

    /// Book has no stock left.
    #[error("\"{title}\" is out of stock")]
    OutOfStock { title: String },

    /// Requested quantity exceeds the available stock.
    #[error("Only {available} of \"{title}\" in stock, requested {requested}")]
    QuantityExceedsStock {
        title: String,
        available: i64,
        requested: i64,
    },

    /// Login failed. Deliberately silent about WHICH field mismatched.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup or profile update with an email that is already registered.
    #[error("Email already exists")]
    EmailTaken,

    /// Operation requires a logged-in user.
    #[error("Please log in first")]
    NotLoggedIn,

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements.
/// Used for early validation before domain logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be non-negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
