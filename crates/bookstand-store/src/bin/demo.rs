//! # Storefront Walkthrough
//!
//! Exercises the store end to end against the demo data: browse, cart,
//! checkout, admin dashboard. Useful for eyeballing behavior and log
//! output during development.
//!
//! ## Usage
//! ```bash
//! cargo run -p bookstand-store --bin demo
//!
//! # With operation-level logs
//! RUST_LOG=debug cargo run -p bookstand-store --bin demo
//! ```

use bookstand_core::{Money, PaymentMethod, SortKey};
use bookstand_store::seed;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut store = seed::demo_store();

    println!("Bookstand Walkthrough");
    println!("=====================");
    println!();

    // Browse
    let scifi = store.search_books("", Some("sci-fi"), SortKey::PriceLow)?;
    println!("sci-fi, cheapest first:");
    for book in &scifi {
        println!("  {} by {} - {}", book.title, book.author, book.price());
    }
    println!();

    // Sign in as the demo customer
    let user = store.login("john@example.com", "john123")?;
    println!("Logged in as {} <{}>", user.name, user.email);

    // Fill the cart: two copies of the cheapest sci-fi title plus a thriller
    let pick = scifi
        .first()
        .map(|b| b.id.clone())
        .ok_or("demo catalog has no sci-fi")?;
    store.add_to_cart(&pick)?;
    store.add_to_cart(&pick)?;

    let thriller = store
        .search_books("", Some("thriller"), SortKey::Newest)?
        .into_iter()
        .next()
        .ok_or("demo catalog has no thriller")?;
    store.add_to_cart(&thriller.id)?;

    let totals = store.cart_totals();
    println!();
    println!("Cart: {} titles, {} copies", totals.item_count, totals.total_quantity);
    println!("  Subtotal: {}", Money::from_cents(totals.subtotal_cents));
    println!("  Shipping: {}", Money::from_cents(totals.shipping_cents));
    println!("  Total:    {}", Money::from_cents(totals.total_cents));

    // Checkout
    let order = store.create_order("123 Main Street, Springfield", PaymentMethod::Esewa)?;
    println!();
    println!("Order {} placed ({:?}, total {})", order.id, order.status, order.total());
    println!("Cart is now empty: {}", store.cart().is_empty());

    // Admin side
    store.logout();
    store.login("admin@bookstore.com", "admin123")?;
    let order = store.update_order_status(&order.id, bookstand_core::OrderStatus::Confirmed)?;
    println!();
    println!("Admin confirmed order {} -> {:?}", order.id, order.status);

    let stats = store.dashboard_stats();
    println!();
    println!("Dashboard");
    println!("  Books:     {}", stats.total_books);
    println!("  Orders:    {}", stats.total_orders);
    println!("  Customers: {}", stats.total_customers);
    println!("  Revenue:   {}", stats.total_revenue());

    Ok(())
}
