//! # Domain Types
//!
//! Core domain types used throughout Bookstand.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Domain Types                          │
//! │                                                              │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐      │
//! │  │    Book      │   │    Order     │   │    User      │      │
//! │  │  ──────────  │   │  ──────────  │   │  ──────────  │      │
//! │  │  id (UUID)   │   │  id (UUID)   │   │  id (UUID)   │      │
//! │  │  price_cents │   │  status      │   │  email       │      │
//! │  │  stock       │   │  items[]     │   │  is_admin    │      │
//! │  │  reviews[]   │   │  total_cents │   │  password    │      │
//! │  └──────────────┘   └──────────────┘   └──────────────┘      │
//! │                                                              │
//! │  ┌──────────────┐   ┌────────────────┐   ┌──────────────┐    │
//! │  │   Review     │   │  OrderStatus   │   │PaymentMethod │    │
//! │  │  ──────────  │   │  ────────────  │   │  ──────────  │    │
//! │  │  rating 1-5  │   │  Pending       │   │  Cod         │    │
//! │  │  comment     │   │  Confirmed     │   │  Esewa       │    │
//! │  └──────────────┘   │  Shipped       │   │  Khalti      │    │
//! │                     │  Delivered     │   │  Card        │    │
//! │                     └────────────────┘   └──────────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `OrderItem` freezes title, author and unit price at checkout time.
//! Deleting or repricing a book never corrupts historical orders.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Book
// =============================================================================

/// A book in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Book {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display title.
    pub title: String,

    /// Author display name.
    pub author: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Cover image reference (URL or asset key).
    pub image: String,

    /// Blurb shown on the details page; also searched by the catalog filter.
    pub description: String,

    /// Category tag (free-form string, e.g. "fiction", "self-help").
    pub category: String,

    /// Units in stock. Never negative.
    pub stock: i64,

    /// Headline rating shown in the catalog (0.0 - 5.0).
    ///
    /// This is catalog data managed by the admin, not an aggregate of
    /// `reviews` - the two are independent in this system.
    pub rating: f32,

    /// Customer reviews, oldest first. Append-only.
    pub reviews: Vec<Review>,

    /// Publication date, used by the "newest" sort.
    #[ts(as = "String")]
    pub published_date: NaiveDate,
}

impl Book {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks if the book has any stock left.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Fields for creating a new catalog entry. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub price_cents: i64,
    pub image: String,
    pub description: String,
    pub category: String,
    pub stock: i64,
    pub rating: f32,
    #[ts(as = "String")]
    pub published_date: NaiveDate,
}

/// Partial update for a book; `None` fields are left untouched.
///
/// Reviews are append-only through `add_review` and deliberately absent here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub price_cents: Option<i64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i64>,
    pub rating: Option<f32>,
    #[ts(as = "Option<String>")]
    pub published_date: Option<NaiveDate>,
}

// =============================================================================
// Review
// =============================================================================

/// A customer review, owned by exactly one book.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Review {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name of the reviewer at the time of writing (frozen).
    pub user_name: String,

    /// Star rating, 1-5 inclusive.
    pub rating: u8,

    /// Free-text comment.
    pub comment: String,

    /// Date the review was posted.
    #[ts(as = "String")]
    pub date: NaiveDate,
}

// =============================================================================
// User
// =============================================================================

/// A registered customer or administrator.
///
/// ## Credential Handling
/// The password is stored and compared as a plain string, faithful to the
/// reference system. Hardening this would be a different auth design.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Login email. Unique across all users at all times.
    pub email: String,

    /// Opaque credential (plain string comparison).
    pub password: String,

    /// Contact phone number.
    pub phone: Option<String>,

    /// Default delivery address.
    pub address: Option<String>,

    /// Administrator flag. Gates the admin dashboard in the view layer.
    pub is_admin: bool,

    /// When the account was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Partial profile update for the logged-in user; `None` fields are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

// =============================================================================
// Order Status
// =============================================================================

/// The fulfilment status of an order.
///
/// ## Transitions
/// Any status may be set to any other via `update_order_status` - the admin
/// dropdown in the reference UI has no workflow guard and this is treated as
/// intentional simplicity, not modeled as a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    Pending,
    /// Accepted by the store.
    Confirmed,
    /// Handed to the courier.
    Shipped,
    /// Received by the customer.
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[serde(rename = "COD")]
    Cod,
    /// eSewa digital wallet.
    #[serde(rename = "eSewa")]
    Esewa,
    /// Khalti digital wallet.
    #[serde(rename = "Khalti")]
    Khalti,
    /// Credit/debit card.
    #[serde(rename = "Card")]
    Card,
}

// =============================================================================
// Order
// =============================================================================

/// A placed order. Immutable except for `status`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The customer who placed the order.
    pub user_id: String,

    /// Line items, snapshotted from the cart at checkout.
    pub items: Vec<OrderItem>,

    /// Delivery address as entered at checkout.
    pub address: String,

    /// Selected payment method.
    pub payment_method: PaymentMethod,

    /// Fulfilment status. The only mutable field.
    pub status: OrderStatus,

    /// Sum of line totals at checkout time.
    pub subtotal_cents: i64,

    /// Shipping charged at checkout time.
    pub shipping_cents: i64,

    /// subtotal + shipping.
    pub total_cents: i64,

    /// When the order was placed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Sum of `unit price x quantity` over the line items.
    ///
    /// Always equals `subtotal_cents`; kept as a method so tests can check
    /// the snapshot against the stored figure.
    pub fn item_total(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item in an order.
/// Uses the snapshot pattern to freeze book data at time of purchase.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    /// The book this line refers to. May dangle after a catalog delete;
    /// the snapshot fields below keep the order renderable regardless.
    pub book_id: String,

    /// Title at time of purchase (frozen).
    pub title_snapshot: String,

    /// Author at time of purchase (frozen).
    pub author_snapshot: String,

    /// Unit price in cents at time of purchase (frozen).
    pub unit_price_cents: i64,

    /// Quantity purchased.
    pub quantity: i64,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total (unit price x quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents * self.quantity)
    }
}

// =============================================================================
// Catalog Sort Key
// =============================================================================

/// Sort order for the catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SortKey {
    /// Published date, newest first. The default.
    #[serde(rename = "newest")]
    Newest,
    /// Price ascending.
    #[serde(rename = "price-low")]
    PriceLow,
    /// Price descending.
    #[serde(rename = "price-high")]
    PriceHigh,
    /// Headline rating descending.
    #[serde(rename = "rating")]
    Rating,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Newest
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
