//! # bookstand-store: The Domain Store
//!
//! Holds the canonical collections (books, users, orders) and the
//! per-process client state (cart, wishlist, session), and exposes every
//! mutation the storefront performs. View components render snapshots of
//! this state and call the operations here on user interaction.
//!
//! ## Module Map
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      bookstand-store                         │
//! │                                                              │
//! │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐          │
//! │  │  store  │  │  cart   │  │ catalog │  │ reports │          │
//! │  │  Store  │  │  Cart   │  │ filter+ │  │dashboard│          │
//! │  │  + ops  │  │  items  │  │  sort   │  │  stats  │          │
//! │  └────┬────┘  └─────────┘  └─────────┘  └─────────┘          │
//! │       │                                                      │
//! │  ┌────▼────┐  ┌─────────┐                                    │
//! │  │  state  │  │  seed   │                                    │
//! │  │ Arc<Mtx>│  │  demo   │                                    │
//! │  │ wrapper │  │  data   │                                    │
//! │  └─────────┘  └─────────┘                                    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Model
//! Single logical thread of control: every mutation is synchronous and
//! applied immediately. [`state::StoreState`] wraps the store in
//! `Arc<Mutex<_>>` purely so UI frameworks with multi-threaded runtimes can
//! share one instance; there is no contention to arbitrate beyond that.

pub mod cart;
pub mod catalog;
pub mod reports;
pub mod seed;
pub mod state;
pub mod store;

pub use cart::{Cart, CartItem, CartTotals};
pub use reports::DashboardStats;
pub use state::StoreState;
pub use store::Store;
