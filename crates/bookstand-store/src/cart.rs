//! # Cart
//!
//! The shopping cart: line items with frozen prices, plus derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   Cart State Operations                      │
//! │                                                              │
//! │  Storefront Action       Store Operation     Cart Change     │
//! │  ─────────────────       ───────────────     ───────────     │
//! │  "Add to Cart"      ───► add_to_cart()  ───► qty+1 / insert  │
//! │  Quantity stepper   ───► update_cart_   ───► qty = n         │
//! │                          quantity()          (0 removes)     │
//! │  Remove button      ───► remove_from_   ───► item removed    │
//! │                          cart()                              │
//! │  Checkout           ───► create_order() ───► snapshot+clear  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `book_id` (adding the same book increments quantity)
//! - Quantity is always >= 1 (setting 0 removes the item)
//! - Quantity never exceeds the book's stock at the time of the action

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookstand_core::error::{StoreError, StoreResult};
use bookstand_core::money::Money;
use bookstand_core::pricing::CheckoutTotals;
use bookstand_core::{Book, MAX_ITEM_QUANTITY};

/// An item in the shopping cart.
///
/// ## Design Notes
/// - `book_id`: reference to the catalog entry (for stock checks)
/// - title/author/price: frozen copies taken when the item was added,
///   so the cart displays consistent data even if the book is edited
///   in the catalog afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Book ID (UUID)
    pub book_id: String,

    /// Title at time of adding (frozen)
    pub title: String,

    /// Author at time of adding (frozen)
    pub author: String,

    /// Price in cents at time of adding (frozen)
    /// This is critical: we lock in the price when added to cart
    pub unit_price_cents: i64,

    /// Quantity in cart
    pub quantity: i64,

    /// When this item was added to cart
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item from a book and quantity.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the book is repriced in
    /// the catalog, this cart item retains the original price.
    pub fn from_book(book: &Book, quantity: i64) -> Self {
        CartItem {
            book_id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            unit_price_cents: book.price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price x quantity).
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one copy of a book, or increments its quantity if present.
    ///
    /// ## Behavior
    /// - Book not in cart, stock > 0: inserted with quantity 1
    /// - Book not in cart, stock == 0: `OutOfStock`
    /// - Book in cart, quantity < stock: quantity incremented
    /// - Book in cart, quantity >= stock: `QuantityExceedsStock`
    pub fn add_one(&mut self, book: &Book) -> StoreResult<()> {
        let cap = book.stock.min(MAX_ITEM_QUANTITY);

        if let Some(item) = self.items.iter_mut().find(|i| i.book_id == book.id) {
            if item.quantity + 1 > cap {
                return Err(StoreError::QuantityExceedsStock {
                    title: book.title.clone(),
                    available: book.stock,
                    requested: item.quantity + 1,
                });
            }
            item.quantity += 1;
            return Ok(());
        }

        if !book.in_stock() {
            return Err(StoreError::OutOfStock {
                title: book.title.clone(),
            });
        }

        self.items.push(CartItem::from_book(book, 1));
        Ok(())
    }

    /// Sets the quantity of a book already in the cart.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the item
    /// - otherwise: clamps to `[1, stock]` and sets it
    /// - book not in cart: `NotInCart`
    ///
    /// ## Returns
    /// The effective quantity after clamping (0 when removed).
    pub fn set_quantity(&mut self, book: &Book, quantity: i64) -> StoreResult<i64> {
        if quantity <= 0 {
            // Item must exist for the removal to make sense here; the
            // store's remove_from_cart is the explicit no-op path.
            if self.remove(&book.id) {
                return Ok(0);
            }
            return Err(StoreError::NotInCart(book.id.clone()));
        }

        let effective = quantity.min(book.stock).min(MAX_ITEM_QUANTITY);

        if let Some(item) = self.items.iter_mut().find(|i| i.book_id == book.id) {
            item.quantity = effective;
            Ok(effective)
        } else {
            Err(StoreError::NotInCart(book.id.clone()))
        }
    }

    /// Removes an item from the cart by book ID.
    ///
    /// ## Returns
    /// `true` if an item was removed, `false` if the book was not in the
    /// cart (removal is a no-op, not an error).
    pub fn remove(&mut self, book_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.book_id != book_id);
        self.items.len() != initial_len
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the quantity of a book in the cart (0 if absent).
    pub fn quantity_of(&self, book_id: &str) -> i64 {
        self.items
            .iter()
            .find(|i| i.book_id == book_id)
            .map_or(0, |i| i.quantity)
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal (before shipping).
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Derives subtotal, shipping and grand total for the current contents.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart totals summary for the order-summary panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let checkout = CheckoutTotals::from_subtotal(cart.subtotal());
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: checkout.subtotal_cents,
            shipping_cents: checkout.shipping_cents,
            total_cents: checkout.total_cents,
        }
    }
}
