//! # Validation Module
//!
//! Input validation utilities for Bookstand.
//!
//! ## Validation Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Validation Layers                        │
//! │                                                              │
//! │  Layer 1: Storefront form (TypeScript)                       │
//! │  ├── Basic format checks (empty, length)                     │
//! │  └── Immediate user feedback                                 │
//! │           │                                                  │
//! │           ▼                                                  │
//! │  Layer 2: THIS MODULE (Rust)                                 │
//! │  └── Business rule validation before any state change        │
//! │                                                              │
//! │  Defense in depth: the store never trusts the form           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstand_core::validation::{validate_email, validate_password};
//!
//! assert!(validate_email("john@example.com").is_ok());
//! assert!(validate_password("john123").is_ok());
//! assert!(validate_password("short").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::MIN_PASSWORD_LEN;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a non-empty display name (user name, book title, author).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a login email.
///
/// ## Rules
/// - Must not be empty
/// - Must contain `@` with a non-empty local part and a domain containing `.`
///
/// Shape check only; deliverability is out of scope.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let looks_like_email = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };

    if !looks_like_email {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain.tld".to_string(),
        });
    }

    Ok(())
}

/// Validates a signup password.
///
/// ## Rules
/// - Must not be empty
/// - Must be at least `MIN_PASSWORD_LEN` (6) characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

/// Validates a delivery address.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 500 characters
pub fn validate_address(address: &str) -> ValidationResult<()> {
    let address = address.trim();

    if address.is_empty() {
        return Err(ValidationError::Required {
            field: "address".to_string(),
        });
    }

    if address.len() > 500 {
        return Err(ValidationError::TooLong {
            field: "address".to_string(),
            max: 500,
        });
    }

    Ok(())
}

/// Validates a catalog search query.
///
/// ## Rules
/// - Can be empty (returns the full catalog)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free books)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a review star rating.
///
/// ## Rules
/// - Must be an integer between 1 and 5 inclusive
pub fn validate_review_rating(rating: u8) -> ValidationResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: 5,
        });
    }

    Ok(())
}

/// Validates a headline catalog rating.
///
/// ## Rules
/// - Must be between 0.0 and 5.0 inclusive (fractional values allowed)
pub fn validate_catalog_rating(rating: f32) -> ValidationResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("title", "The Midnight Library").is_ok());
        assert!(validate_name("title", "").is_err());
        assert!(validate_name("title", "   ").is_err());
        assert!(validate_name("title", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("john@example.com").is_ok());
        assert!(validate_email("admin@bookstore.com").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("john@nodot").is_err());
        assert!(validate_email("john@dot.").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("john123").is_ok());
        assert!(validate_password("123456").is_ok());

        assert!(validate_password("").is_err());
        assert!(validate_password("12345").is_err());
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("42 Elm Street, Springfield").is_ok());
        assert!(validate_address("").is_err());
        assert!(validate_address(&"x".repeat(600)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  gatsby  ").unwrap(), "gatsby");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(150)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1299).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(25).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_review_rating() {
        assert!(validate_review_rating(1).is_ok());
        assert!(validate_review_rating(5).is_ok());
        assert!(validate_review_rating(0).is_err());
        assert!(validate_review_rating(6).is_err());
    }

    #[test]
    fn test_validate_catalog_rating() {
        assert!(validate_catalog_rating(0.0).is_ok());
        assert!(validate_catalog_rating(4.5).is_ok());
        assert!(validate_catalog_rating(5.0).is_ok());
        assert!(validate_catalog_rating(-0.1).is_err());
        assert!(validate_catalog_rating(5.1).is_err());
    }
}
