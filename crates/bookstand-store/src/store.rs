//! # Domain Store
//!
//! The single source of truth for the storefront. Holds the canonical
//! collections (books, users, orders) and the per-process client state
//! (cart, wishlist, session), and applies every mutation atomically from
//! the caller's perspective - single-threaded, no interleaving.
//!
//! ## Operation Map
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Store Operations                         │
//! │                                                              │
//! │  Catalog (admin)     Cart / Wishlist       Auth / Session    │
//! │  ───────────────     ───────────────       ───────────────   │
//! │  add_book            add_to_cart           login             │
//! │  update_book         update_cart_quantity  signup            │
//! │  delete_book         remove_from_cart      logout            │
//! │                      add_to_wishlist       update_profile    │
//! │  Orders              remove_from_wishlist                    │
//! │  ───────────────                           Reviews           │
//! │  create_order                              ───────────────   │
//! │  update_order_status                       add_review        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle Notes
//! - Logout clears the session ONLY; cart and wishlist survive it.
//! - Deleting a book cascades into the live cart and wishlist; orders are
//!   untouched because their line items are full snapshots.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use bookstand_core::error::{StoreError, StoreResult};
use bookstand_core::validation;
use bookstand_core::{
    Book, BookPatch, NewBook, Order, OrderItem, OrderStatus, PaymentMethod, ProfilePatch, Review,
    SortKey, User,
};

use crate::cart::{Cart, CartTotals};
use crate::catalog;
use crate::reports::{self, DashboardStats};

/// The domain store.
///
/// All fields are private; views read through the accessor methods and
/// mutate through the operations, which keeps every state transition
/// auditable and testable in isolation.
#[derive(Debug, Clone, Default)]
pub struct Store {
    books: Vec<Book>,
    users: Vec<User>,
    orders: Vec<Order>,
    cart: Cart,
    /// Book ids, at most one entry per book.
    wishlist: Vec<String>,
    /// Id of the logged-in user, if any.
    session: Option<String>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store::default()
    }

    // =========================================================================
    // Snapshots & Accessors
    // =========================================================================

    /// The full catalog.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Looks up a book by id.
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// All registered users.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All orders, across all users.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Orders placed by one user, for the order-history page.
    pub fn orders_for_user(&self, user_id: &str) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.user_id == user_id).collect()
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Subtotal, shipping and total for the current cart.
    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        let id = self.session.as_deref()?;
        self.users.iter().find(|u| u.id == id)
    }

    /// Books currently on the wishlist, in insertion order.
    pub fn wishlist_books(&self) -> Vec<&Book> {
        self.wishlist
            .iter()
            .filter_map(|id| self.book(id))
            .collect()
    }

    /// Checks wishlist membership.
    pub fn is_wishlisted(&self, book_id: &str) -> bool {
        self.wishlist.iter().any(|id| id == book_id)
    }

    /// Filtered-then-sorted catalog for a listing page.
    ///
    /// The query is bounds-checked and trimmed before it reaches the
    /// filter; an over-long query is a validation error, not a search.
    pub fn search_books(
        &self,
        query: &str,
        category: Option<&str>,
        sort: SortKey,
    ) -> StoreResult<Vec<Book>> {
        let query = validation::validate_search_query(query)?;
        debug!(query = %query, category = ?category, sort = ?sort, "search_books");
        Ok(catalog::filter_and_sort(&self.books, &query, category, sort))
    }

    /// Distinct category tags for the filter bar.
    pub fn categories(&self) -> Vec<String> {
        catalog::categories(&self.books)
    }

    /// Aggregates for the admin dashboard.
    pub fn dashboard_stats(&self) -> DashboardStats {
        reports::dashboard_stats(&self.books, &self.users, &self.orders)
    }

    // =========================================================================
    // Catalog Mutations (admin)
    // =========================================================================

    /// Adds a new book to the catalog and returns it.
    ///
    /// The store mints the id (UUID v4 - globally unique without
    /// coordination), so duplicate ids cannot occur.
    pub fn add_book(&mut self, new: NewBook) -> StoreResult<Book> {
        validation::validate_name("title", &new.title)?;
        validation::validate_name("author", &new.author)?;
        validation::validate_price_cents(new.price_cents)?;
        validation::validate_stock(new.stock)?;
        validation::validate_catalog_rating(new.rating)?;

        let book = Book {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            author: new.author,
            price_cents: new.price_cents,
            image: new.image,
            description: new.description,
            category: new.category,
            stock: new.stock,
            rating: new.rating,
            reviews: Vec::new(),
            published_date: new.published_date,
        };

        info!(id = %book.id, title = %book.title, "Book added");
        self.books.push(book.clone());
        Ok(book)
    }

    /// Merges patch fields into the book matching `id`.
    pub fn update_book(&mut self, id: &str, patch: BookPatch) -> StoreResult<Book> {
        if let Some(price) = patch.price_cents {
            validation::validate_price_cents(price)?;
        }
        if let Some(stock) = patch.stock {
            validation::validate_stock(stock)?;
        }
        if let Some(rating) = patch.rating {
            validation::validate_catalog_rating(rating)?;
        }
        if let Some(ref title) = patch.title {
            validation::validate_name("title", title)?;
        }

        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::BookNotFound(id.to_string()))?;

        if let Some(title) = patch.title {
            book.title = title;
        }
        if let Some(author) = patch.author {
            book.author = author;
        }
        if let Some(price_cents) = patch.price_cents {
            book.price_cents = price_cents;
        }
        if let Some(image) = patch.image {
            book.image = image;
        }
        if let Some(description) = patch.description {
            book.description = description;
        }
        if let Some(category) = patch.category {
            book.category = category;
        }
        if let Some(stock) = patch.stock {
            book.stock = stock;
        }
        if let Some(rating) = patch.rating {
            book.rating = rating;
        }
        if let Some(published_date) = patch.published_date {
            book.published_date = published_date;
        }

        debug!(id = %id, "Book updated");
        Ok(book.clone())
    }

    /// Removes a book from the catalog.
    ///
    /// Cascades into the live cart and wishlist so no dangling references
    /// remain. Existing orders keep their snapshots and are untouched.
    pub fn delete_book(&mut self, id: &str) -> StoreResult<()> {
        let initial_len = self.books.len();
        self.books.retain(|b| b.id != id);

        if self.books.len() == initial_len {
            return Err(StoreError::BookNotFound(id.to_string()));
        }

        self.cart.remove(id);
        self.wishlist.retain(|w| w != id);

        info!(id = %id, "Book deleted (cart/wishlist entries cascaded)");
        Ok(())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one copy of a book to the cart, or increments its quantity.
    pub fn add_to_cart(&mut self, book_id: &str) -> StoreResult<CartTotals> {
        debug!(book_id = %book_id, "add_to_cart");

        let book = self
            .books
            .iter()
            .find(|b| b.id == book_id)
            .ok_or_else(|| StoreError::BookNotFound(book_id.to_string()))?
            .clone();

        self.cart.add_one(&book)?;
        Ok(self.cart.totals())
    }

    /// Sets the quantity of a book in the cart.
    ///
    /// `quantity <= 0` removes the item (a no-op when it is not there);
    /// otherwise the value is clamped to the book's stock.
    pub fn update_cart_quantity(&mut self, book_id: &str, quantity: i64) -> StoreResult<CartTotals> {
        debug!(book_id = %book_id, quantity = %quantity, "update_cart_quantity");

        if quantity <= 0 {
            self.cart.remove(book_id);
            return Ok(self.cart.totals());
        }

        let book = self
            .books
            .iter()
            .find(|b| b.id == book_id)
            .ok_or_else(|| StoreError::BookNotFound(book_id.to_string()))?
            .clone();

        self.cart.set_quantity(&book, quantity)?;
        Ok(self.cart.totals())
    }

    /// Removes a book from the cart. No-op if it is not there.
    pub fn remove_from_cart(&mut self, book_id: &str) -> CartTotals {
        debug!(book_id = %book_id, "remove_from_cart");
        self.cart.remove(book_id);
        self.cart.totals()
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Adds a book to the wishlist. Idempotent.
    pub fn add_to_wishlist(&mut self, book_id: &str) -> StoreResult<()> {
        debug!(book_id = %book_id, "add_to_wishlist");

        if self.book(book_id).is_none() {
            return Err(StoreError::BookNotFound(book_id.to_string()));
        }
        if !self.is_wishlisted(book_id) {
            self.wishlist.push(book_id.to_string());
        }
        Ok(())
    }

    /// Removes a book from the wishlist. No-op if it is not there.
    pub fn remove_from_wishlist(&mut self, book_id: &str) {
        debug!(book_id = %book_id, "remove_from_wishlist");
        self.wishlist.retain(|id| id != book_id);
    }

    // =========================================================================
    // Auth & Session
    // =========================================================================

    /// Logs a user in.
    ///
    /// Succeeds iff a user with matching email and credential exists; the
    /// failure never reveals which field mismatched. Email comparison is
    /// exact, credential comparison is a plain string match.
    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<User> {
        let user = self
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
            .ok_or(StoreError::InvalidCredentials)?;

        info!(user_id = %user.id, "Login");
        self.session = Some(user.id.clone());
        Ok(user)
    }

    /// Registers a new non-admin user and logs them in.
    ///
    /// The email is trimmed once up front; the uniqueness check and the
    /// stored record both see the normalized form, so a padded variant of
    /// a registered email cannot slip past the check.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> StoreResult<User> {
        let email = email.trim();

        validation::validate_name("name", name)?;
        validation::validate_email(email)?;
        validation::validate_password(password)?;

        if self.users.iter().any(|u| u.email == email) {
            return Err(StoreError::EmailTaken);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.to_string(),
            password: password.to_string(),
            phone: None,
            address: None,
            is_admin: false,
            created_at: Utc::now(),
        };

        info!(user_id = %user.id, "Signup");
        self.session = Some(user.id.clone());
        self.users.push(user.clone());
        Ok(user)
    }

    /// Clears the session. Cart and wishlist are left as-is.
    pub fn logout(&mut self) {
        if let Some(id) = self.session.take() {
            info!(user_id = %id, "Logout");
        }
    }

    /// Merges profile fields into the logged-in user's record.
    ///
    /// Emails are normalized (trimmed) before the uniqueness check and the
    /// write; login compares exactly, so a padded email stored verbatim
    /// would lock the user out of their own account.
    pub fn update_profile(&mut self, patch: ProfilePatch) -> StoreResult<User> {
        let session_id = self
            .session
            .clone()
            .ok_or(StoreError::NotLoggedIn)?;

        if let Some(ref name) = patch.name {
            validation::validate_name("name", name)?;
        }
        let email = patch.email.as_deref().map(str::trim);
        if let Some(email) = email {
            validation::validate_email(email)?;
            // Uniqueness must hold across everyone else
            if self.users.iter().any(|u| u.id != session_id && u.email == email) {
                return Err(StoreError::EmailTaken);
            }
        }

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == session_id)
            .ok_or(StoreError::NotLoggedIn)?;

        if let Some(name) = patch.name {
            user.name = name.trim().to_string();
        }
        if let Some(email) = email {
            user.email = email.to_string();
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(address) = patch.address {
            user.address = Some(address);
        }

        debug!(user_id = %user.id, "Profile updated");
        Ok(user.clone())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Places an order from the current cart.
    ///
    /// ## Behavior
    /// - Fails with `NotLoggedIn` / `EmptyCart` without touching anything
    /// - Snapshots every cart line (title, author, frozen price, quantity)
    /// - Applies the shipping rule to the cart subtotal
    /// - Decrements each ordered book's stock (saturating at zero)
    /// - Clears the cart and returns the new `pending` order
    pub fn create_order(
        &mut self,
        address: &str,
        payment_method: PaymentMethod,
    ) -> StoreResult<Order> {
        let user_id = self.session.clone().ok_or(StoreError::NotLoggedIn)?;

        if self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        validation::validate_address(address)?;

        let items: Vec<OrderItem> = self
            .cart
            .items
            .iter()
            .map(|item| OrderItem {
                book_id: item.book_id.clone(),
                title_snapshot: item.title.clone(),
                author_snapshot: item.author.clone(),
                unit_price_cents: item.unit_price_cents,
                quantity: item.quantity,
            })
            .collect();

        let totals = self.cart.totals();

        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_id,
            items,
            address: address.trim().to_string(),
            payment_method,
            status: OrderStatus::Pending,
            subtotal_cents: totals.subtotal_cents,
            shipping_cents: totals.shipping_cents,
            total_cents: totals.total_cents,
            created_at: Utc::now(),
        };

        // Stock moves at checkout. Saturating keeps the invariant even if
        // an admin lowered stock below a carted quantity in the meantime.
        for item in &order.items {
            if let Some(book) = self.books.iter_mut().find(|b| b.id == item.book_id) {
                book.stock = book.stock.saturating_sub(item.quantity).max(0);
            }
        }

        self.cart.clear();

        info!(
            order_id = %order.id,
            total = %order.total(),
            items = order.items.len(),
            "Order created"
        );
        self.orders.push(order.clone());
        Ok(order)
    }

    /// Overwrites an order's status.
    ///
    /// Administrator-only in intent; like the reference system the store
    /// does not check the session's admin flag itself - the view layer
    /// gates the control. Any status may be set from any other.
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) -> StoreResult<Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| StoreError::OrderNotFound(order_id.to_string()))?;

        info!(order_id = %order_id, from = ?order.status, to = ?status, "Order status updated");
        order.status = status;
        Ok(order.clone())
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// Appends a review to a book. Requires a session; the reviewer's
    /// display name is frozen from the session user.
    pub fn add_review(&mut self, book_id: &str, rating: u8, comment: &str) -> StoreResult<Review> {
        let user_name = self
            .current_user()
            .map(|u| u.name.clone())
            .ok_or(StoreError::NotLoggedIn)?;

        validation::validate_review_rating(rating)?;
        validation::validate_name("comment", comment)?;

        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or_else(|| StoreError::BookNotFound(book_id.to_string()))?;

        let review = Review {
            id: Uuid::new_v4().to_string(),
            user_name,
            rating,
            comment: comment.trim().to_string(),
            date: Utc::now().date_naive(),
        };

        info!(book_id = %book_id, rating = %rating, "Review added");
        book.reviews.push(review.clone());
        Ok(review)
    }

    // =========================================================================
    // Seeding
    // =========================================================================

    /// Replaces the catalog and user collections. Used by the seed module
    /// and by tests; existing cart/wishlist/session/orders are preserved.
    pub(crate) fn load(&mut self, books: Vec<Book>, users: Vec<User>) {
        self.books = books;
        self.users = users;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn seeded() -> Store {
        crate::seed::demo_store()
    }

    fn sample_book(title: &str, price_cents: i64, stock: i64) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Test Author".to_string(),
            price_cents,
            image: String::new(),
            description: "A test description".to_string(),
            category: "fiction".to_string(),
            stock,
            rating: 4.0,
            published_date: NaiveDate::from_ymd_opt(2022, 3, 14).unwrap(),
        }
    }

    fn login_customer(store: &mut Store) -> User {
        store.login("john@example.com", "john123").unwrap()
    }

    // -------------------------------------------------------------------------
    // Auth
    // -------------------------------------------------------------------------

    #[test]
    fn test_login_demo_admin() {
        let mut store = seeded();
        let user = store.login("admin@bookstore.com", "admin123").unwrap();
        assert!(user.is_admin);
        assert_eq!(store.current_user().unwrap().email, "admin@bookstore.com");
    }

    #[test]
    fn test_login_demo_customer_not_admin() {
        let mut store = seeded();
        let user = login_customer(&mut store);
        assert!(!user.is_admin);
    }

    #[test]
    fn test_login_wrong_password_leaves_session_unchanged() {
        let mut store = seeded();
        login_customer(&mut store);

        let err = store.login("john@example.com", "wrong").unwrap_err();
        assert!(matches!(err, StoreError::InvalidCredentials));
        // Previous session still intact
        assert_eq!(store.current_user().unwrap().email, "john@example.com");
    }

    #[test]
    fn test_signup_sets_session() {
        let mut store = seeded();
        let user = store.signup("Ada", "ada@example.com", "secret1").unwrap();
        assert!(!user.is_admin);
        assert_eq!(store.current_user().unwrap().id, user.id);
    }

    #[test]
    fn test_signup_duplicate_email_changes_nothing() {
        let mut store = seeded();
        let users_before = store.users().len();

        let err = store.signup("Imposter", "john@example.com", "hunter2").unwrap_err();

        assert!(matches!(err, StoreError::EmailTaken));
        assert_eq!(store.users().len(), users_before);
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_signup_padded_email_is_still_a_duplicate() {
        let mut store = seeded();
        let users_before = store.users().len();

        // Whitespace around a registered email must not defeat uniqueness
        let err = store
            .signup("Imposter", " john@example.com ", "hunter22")
            .unwrap_err();

        assert!(matches!(err, StoreError::EmailTaken));
        assert_eq!(store.users().len(), users_before);
        assert_eq!(
            store
                .users()
                .iter()
                .filter(|u| u.email == "john@example.com")
                .count(),
            1
        );
    }

    #[test]
    fn test_signup_stores_trimmed_email() {
        let mut store = seeded();
        let user = store.signup("Ada", "  ada@example.com ", "secret1").unwrap();
        assert_eq!(user.email, "ada@example.com");

        // A second signup with the canonical form collides with it
        store.logout();
        let err = store.signup("Ada Two", "ada@example.com", "secret2").unwrap_err();
        assert!(matches!(err, StoreError::EmailTaken));
    }

    #[test]
    fn test_signup_short_password_rejected() {
        let mut store = seeded();
        let err = store.signup("Ada", "ada@example.com", "12345").unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_logout_clears_session_only() {
        let mut store = seeded();
        login_customer(&mut store);
        let book_id = store.books()[0].id.clone();
        store.add_to_cart(&book_id).unwrap();
        store.add_to_wishlist(&book_id).unwrap();

        store.logout();

        assert!(store.current_user().is_none());
        // Cart and wishlist survive logout (reference behavior)
        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(store.wishlist_books().len(), 1);
    }

    #[test]
    fn test_update_profile_phone_round_trip() {
        let mut store = seeded();
        let before = login_customer(&mut store);

        store
            .update_profile(ProfilePatch {
                phone: Some("555-0100".to_string()),
                ..Default::default()
            })
            .unwrap();

        let after = store.current_user().unwrap();
        assert_eq!(after.phone.as_deref(), Some("555-0100"));
        // Untouched fields identical
        assert_eq!(after.name, before.name);
        assert_eq!(after.email, before.email);
        assert_eq!(after.address, before.address);
    }

    #[test]
    fn test_update_profile_email_uniqueness() {
        let mut store = seeded();
        login_customer(&mut store);

        let err = store
            .update_profile(ProfilePatch {
                email: Some("admin@bookstore.com".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::EmailTaken));

        // Keeping your own email is fine
        store
            .update_profile(ProfilePatch {
                email: Some("john@example.com".to_string()),
                ..Default::default()
            })
            .unwrap();
    }

    #[test]
    fn test_update_profile_trims_email_before_check_and_write() {
        let mut store = seeded();
        login_customer(&mut store);

        // Padded variant of another user's email is still a collision
        let err = store
            .update_profile(ProfilePatch {
                email: Some(" admin@bookstore.com ".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::EmailTaken));

        // Padded new email is stored in canonical form, so the exact-match
        // login keeps working
        store
            .update_profile(ProfilePatch {
                email: Some(" john.doe@example.com ".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            store.current_user().unwrap().email,
            "john.doe@example.com"
        );

        store.logout();
        store.login("john.doe@example.com", "john123").unwrap();
    }

    #[test]
    fn test_update_profile_requires_session() {
        let mut store = seeded();
        let err = store.update_profile(ProfilePatch::default()).unwrap_err();
        assert!(matches!(err, StoreError::NotLoggedIn));
    }

    // -------------------------------------------------------------------------
    // Catalog search
    // -------------------------------------------------------------------------

    #[test]
    fn test_search_books_trims_query() {
        let store = seeded();
        let found = store
            .search_books("  dune  ", None, SortKey::Newest)
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Dune");
    }

    #[test]
    fn test_search_books_rejects_oversized_query() {
        let store = seeded();
        let err = store
            .search_books(&"q".repeat(150), None, SortKey::Newest)
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    // -------------------------------------------------------------------------
    // Catalog mutations
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_book_mints_unique_ids() {
        let mut store = Store::new();
        let a = store.add_book(sample_book("One", 999, 5)).unwrap();
        let b = store.add_book(sample_book("Two", 999, 5)).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.books().len(), 2);
    }

    #[test]
    fn test_add_book_rejects_negative_price() {
        let mut store = Store::new();
        let err = store.add_book(sample_book("Bad", -1, 5)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_update_book_merges_partial_fields() {
        let mut store = Store::new();
        let book = store.add_book(sample_book("One", 999, 5)).unwrap();

        let updated = store
            .update_book(
                &book.id,
                BookPatch {
                    price_cents: Some(1299),
                    stock: Some(7),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price_cents, 1299);
        assert_eq!(updated.stock, 7);
        assert_eq!(updated.title, "One"); // untouched
    }

    #[test]
    fn test_update_book_not_found() {
        let mut store = Store::new();
        let err = store.update_book("missing", BookPatch::default()).unwrap_err();
        assert!(matches!(err, StoreError::BookNotFound(_)));
    }

    #[test]
    fn test_delete_book_cascades_cart_and_wishlist() {
        let mut store = seeded();
        login_customer(&mut store);
        let book_id = store.books()[0].id.clone();

        store.add_to_cart(&book_id).unwrap();
        store.add_to_wishlist(&book_id).unwrap();
        store.delete_book(&book_id).unwrap();

        assert!(store.book(&book_id).is_none());
        assert_eq!(store.cart().quantity_of(&book_id), 0);
        assert!(!store.is_wishlisted(&book_id));
    }

    #[test]
    fn test_delete_book_leaves_orders_intact() {
        let mut store = seeded();
        login_customer(&mut store);
        let book_id = store.books()[0].id.clone();

        store.add_to_cart(&book_id).unwrap();
        let order = store.create_order("42 Elm Street", PaymentMethod::Cod).unwrap();
        store.delete_book(&book_id).unwrap();

        let kept = &store.orders()[0];
        assert_eq!(kept.id, order.id);
        assert_eq!(kept.items[0].book_id, book_id);
        assert!(!kept.items[0].title_snapshot.is_empty());
    }

    // -------------------------------------------------------------------------
    // Cart through the store
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_to_cart_unknown_book() {
        let mut store = seeded();
        let err = store.add_to_cart("missing").unwrap_err();
        assert!(matches!(err, StoreError::BookNotFound(_)));
    }

    #[test]
    fn test_add_to_cart_increments_not_duplicates() {
        let mut store = seeded();
        let book_id = store.books()[0].id.clone();

        store.add_to_cart(&book_id).unwrap();
        store.add_to_cart(&book_id).unwrap();

        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(store.cart().quantity_of(&book_id), 2);
    }

    #[test]
    fn test_update_cart_quantity_zero_removes() {
        let mut store = seeded();
        let book_id = store.books()[0].id.clone();

        store.add_to_cart(&book_id).unwrap();
        store.update_cart_quantity(&book_id, 0).unwrap();

        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_update_cart_quantity_clamps_to_stock() {
        let mut store = Store::new();
        let book = store.add_book(sample_book("Scarce", 999, 3)).unwrap();

        store.add_to_cart(&book.id).unwrap();
        store.update_cart_quantity(&book.id, 50).unwrap();

        assert_eq!(store.cart().quantity_of(&book.id), 3);
    }

    #[test]
    fn test_remove_from_cart_noop_when_absent() {
        let mut store = seeded();
        let totals = store.remove_from_cart("missing");
        assert_eq!(totals.item_count, 0);
    }

    // -------------------------------------------------------------------------
    // Wishlist
    // -------------------------------------------------------------------------

    #[test]
    fn test_wishlist_membership_is_idempotent() {
        let mut store = seeded();
        let book_id = store.books()[0].id.clone();

        store.add_to_wishlist(&book_id).unwrap();
        store.add_to_wishlist(&book_id).unwrap();
        assert_eq!(store.wishlist_books().len(), 1);

        store.remove_from_wishlist(&book_id);
        store.remove_from_wishlist(&book_id);
        assert!(store.wishlist_books().is_empty());
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    #[test]
    fn test_create_order_requires_login() {
        let mut store = seeded();
        let err = store.create_order("42 Elm Street", PaymentMethod::Cod).unwrap_err();
        assert!(matches!(err, StoreError::NotLoggedIn));
        assert!(store.orders().is_empty());
    }

    #[test]
    fn test_create_order_empty_cart_creates_nothing() {
        let mut store = seeded();
        login_customer(&mut store);

        let err = store.create_order("42 Elm Street", PaymentMethod::Cod).unwrap_err();
        assert!(matches!(err, StoreError::EmptyCart));
        assert!(store.orders().is_empty());
    }

    #[test]
    fn test_create_order_snapshots_and_clears_cart() {
        let mut store = seeded();
        let user = login_customer(&mut store);
        let book_id = store.books()[0].id.clone();

        store.add_to_cart(&book_id).unwrap();
        store.add_to_cart(&book_id).unwrap();
        let subtotal_before = store.cart().subtotal();

        let order = store.create_order("42 Elm Street", PaymentMethod::Esewa).unwrap();

        assert!(store.cart().is_empty());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.user_id, user.id);
        assert_eq!(order.payment_method, PaymentMethod::Esewa);
        // Item total equals the pre-checkout subtotal
        assert_eq!(order.item_total(), subtotal_before);
        assert_eq!(order.subtotal_cents, subtotal_before.cents());
        assert_eq!(
            order.total_cents,
            order.subtotal_cents + order.shipping_cents
        );
    }

    #[test]
    fn test_create_order_decrements_stock() {
        let mut store = seeded();
        login_customer(&mut store);
        let book_id = store.books()[0].id.clone();
        let stock_before = store.book(&book_id).unwrap().stock;

        store.add_to_cart(&book_id).unwrap();
        store.add_to_cart(&book_id).unwrap();
        store.create_order("42 Elm Street", PaymentMethod::Cod).unwrap();

        assert_eq!(store.book(&book_id).unwrap().stock, stock_before - 2);
    }

    #[test]
    fn test_stock_never_negative_after_checkout() {
        let mut store = Store::new();
        let book = store.add_book(sample_book("Scarce", 999, 2)).unwrap();
        store.signup("Ada", "ada@example.com", "secret1").unwrap();

        store.add_to_cart(&book.id).unwrap();
        store.add_to_cart(&book.id).unwrap();
        // Stock drops below the carted quantity before checkout
        store
            .update_book(&book.id, BookPatch { stock: Some(1), ..Default::default() })
            .unwrap();
        store.create_order("42 Elm Street", PaymentMethod::Card).unwrap();

        assert_eq!(store.book(&book.id).unwrap().stock, 0);
    }

    #[test]
    fn test_create_order_rejects_empty_address() {
        let mut store = seeded();
        login_customer(&mut store);
        let book_id = store.books()[0].id.clone();
        store.add_to_cart(&book_id).unwrap();

        let err = store.create_order("   ", PaymentMethod::Cod).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        // Cart untouched on failure
        assert_eq!(store.cart().item_count(), 1);
    }

    #[test]
    fn test_update_order_status_any_transition() {
        let mut store = seeded();
        login_customer(&mut store);
        let book_id = store.books()[0].id.clone();
        store.add_to_cart(&book_id).unwrap();
        let order = store.create_order("42 Elm Street", PaymentMethod::Cod).unwrap();

        let shipped = store.update_order_status(&order.id, OrderStatus::Shipped).unwrap();
        assert_eq!(shipped.status, OrderStatus::Shipped);

        // No transition table: delivered back to pending is allowed
        let back = store.update_order_status(&order.id, OrderStatus::Pending).unwrap();
        assert_eq!(back.status, OrderStatus::Pending);
    }

    #[test]
    fn test_update_order_status_not_found() {
        let mut store = seeded();
        let err = store
            .update_order_status("missing", OrderStatus::Confirmed)
            .unwrap_err();
        assert!(matches!(err, StoreError::OrderNotFound(_)));
    }

    #[test]
    fn test_orders_for_user_filters_by_owner() {
        let mut store = seeded();
        let john = login_customer(&mut store);
        let book_id = store.books()[0].id.clone();
        store.add_to_cart(&book_id).unwrap();
        store.create_order("42 Elm Street", PaymentMethod::Cod).unwrap();

        store.signup("Ada", "ada@example.com", "secret1").unwrap();
        let second_book = store.books()[1].id.clone();
        store.add_to_cart(&second_book).unwrap();
        store.create_order("7 Oak Lane", PaymentMethod::Card).unwrap();

        assert_eq!(store.orders().len(), 2);
        assert_eq!(store.orders_for_user(&john.id).len(), 1);
    }

    // -------------------------------------------------------------------------
    // Reviews
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_review_appends_to_book() {
        let mut store = seeded();
        let user = login_customer(&mut store);
        let book_id = store.books()[0].id.clone();
        let reviews_before = store.book(&book_id).unwrap().reviews.len();

        let review = store.add_review(&book_id, 5, "Loved it").unwrap();

        let book = store.book(&book_id).unwrap();
        assert_eq!(book.reviews.len(), reviews_before + 1);
        assert_eq!(book.reviews.last().unwrap().id, review.id);
        assert_eq!(review.user_name, user.name);
    }

    #[test]
    fn test_add_review_requires_session() {
        let mut store = seeded();
        let book_id = store.books()[0].id.clone();
        let err = store.add_review(&book_id, 4, "Nice").unwrap_err();
        assert!(matches!(err, StoreError::NotLoggedIn));
    }

    #[test]
    fn test_add_review_rejects_out_of_range_rating() {
        let mut store = seeded();
        login_customer(&mut store);
        let book_id = store.books()[0].id.clone();

        assert!(store.add_review(&book_id, 0, "meh").is_err());
        assert!(store.add_review(&book_id, 6, "!!").is_err());
    }

    #[test]
    fn test_add_review_unknown_book() {
        let mut store = seeded();
        login_customer(&mut store);
        let err = store.add_review("missing", 4, "Nice").unwrap_err();
        assert!(matches!(err, StoreError::BookNotFound(_)));
    }
}
