//! # Demo Data
//!
//! Seeds the store with a small catalog and the two demo accounts so the
//! storefront is usable out of the box.
//!
//! ## Demo Accounts
//! - `admin@bookstore.com` / `admin123` (administrator)
//! - `john@example.com` / `john123` (customer)
//!
//! The catalog spans several categories and a wide price range, including
//! one title above the free-shipping threshold and one out-of-stock title.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use bookstand_core::{Book, Review, User};

use crate::store::Store;

struct SeedBook {
    title: &'static str,
    author: &'static str,
    price_cents: i64,
    category: &'static str,
    stock: i64,
    rating: f32,
    published: (i32, u32, u32),
    description: &'static str,
}

const CATALOG: &[SeedBook] = &[
    SeedBook {
        title: "The Silent Patient",
        author: "Alex Michaelides",
        price_cents: 14_99,
        category: "thriller",
        stock: 12,
        rating: 4.5,
        published: (2019, 2, 5),
        description: "A psychotherapist becomes obsessed with a famous painter who shot her husband and then never spoke another word.",
    },
    SeedBook {
        title: "Atomic Habits",
        author: "James Clear",
        price_cents: 16_99,
        category: "self-help",
        stock: 20,
        rating: 4.8,
        published: (2018, 10, 16),
        description: "A proven framework for building good habits and breaking bad ones, one tiny change at a time.",
    },
    SeedBook {
        title: "Project Hail Mary",
        author: "Andy Weir",
        price_cents: 18_99,
        category: "sci-fi",
        stock: 8,
        rating: 4.7,
        published: (2021, 5, 4),
        description: "A lone astronaut wakes up on a spaceship with no memory of how he got there and a mission to save the Earth.",
    },
    SeedBook {
        title: "The Midnight Library",
        author: "Matt Haig",
        price_cents: 13_99,
        category: "fiction",
        stock: 15,
        rating: 4.2,
        published: (2020, 8, 13),
        description: "Between life and death there is a library where every book is a different life you could have lived.",
    },
    SeedBook {
        title: "Educated",
        author: "Tara Westover",
        price_cents: 12_99,
        category: "memoir",
        stock: 10,
        rating: 4.6,
        published: (2018, 2, 20),
        description: "A memoir about a young woman who leaves her survivalist family and goes on to earn a PhD from Cambridge.",
    },
    SeedBook {
        title: "The Complete Annotated Sherlock Holmes",
        author: "Arthur Conan Doyle",
        price_cents: 64_99,
        category: "classics",
        stock: 4,
        rating: 4.9,
        published: (2005, 11, 1),
        description: "Every Holmes story and novel in one annotated hardcover edition.",
    },
    SeedBook {
        title: "Dune",
        author: "Frank Herbert",
        price_cents: 10_99,
        category: "sci-fi",
        stock: 18,
        rating: 4.4,
        published: (1965, 8, 1),
        description: "The desert planet Arrakis, the spice melange, and the boy who would become Muad'Dib.",
    },
    SeedBook {
        title: "It Ends with Us",
        author: "Colleen Hoover",
        price_cents: 11_99,
        category: "fiction",
        stock: 0,
        rating: 4.1,
        published: (2016, 8, 2),
        description: "A bold and deeply personal novel about love, resilience and breaking the cycle.",
    },
];

/// Builds the demo catalog with freshly minted ids.
pub fn demo_books() -> Vec<Book> {
    CATALOG
        .iter()
        .map(|seed| {
            let (y, m, d) = seed.published;
            Book {
                id: Uuid::new_v4().to_string(),
                title: seed.title.to_string(),
                author: seed.author.to_string(),
                price_cents: seed.price_cents,
                image: format!(
                    "/images/{}.jpg",
                    seed.title.to_lowercase().replace(' ', "-")
                ),
                description: seed.description.to_string(),
                category: seed.category.to_string(),
                stock: seed.stock,
                rating: seed.rating,
                reviews: demo_reviews(seed.title),
                published_date: NaiveDate::from_ymd_opt(y, m, d)
                    .unwrap_or_default(),
            }
        })
        .collect()
}

/// A couple of canned reviews so detail pages are not empty.
fn demo_reviews(title: &str) -> Vec<Review> {
    if title != "Atomic Habits" {
        return Vec::new();
    }
    vec![Review {
        id: Uuid::new_v4().to_string(),
        user_name: "Sarah M.".to_string(),
        rating: 5,
        comment: "Changed how I think about small daily routines.".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap_or_default(),
    }]
}

/// The two demo accounts.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: Uuid::new_v4().to_string(),
            name: "Admin".to_string(),
            email: "admin@bookstore.com".to_string(),
            password: "admin123".to_string(),
            phone: None,
            address: None,
            is_admin: true,
            created_at: Utc::now(),
        },
        User {
            id: Uuid::new_v4().to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "john123".to_string(),
            phone: Some("555-0123".to_string()),
            address: Some("123 Main Street, Springfield".to_string()),
            is_admin: false,
            created_at: Utc::now(),
        },
    ]
}

/// A store pre-populated with the demo catalog and accounts.
pub fn demo_store() -> Store {
    let mut store = Store::new();
    store.load(demo_books(), demo_users());
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let books = demo_books();
        assert_eq!(books.len(), 8);
        // One title above the free-shipping threshold
        assert!(books.iter().any(|b| b.price_cents > 50_00));
        // One title out of stock, for add-to-cart error paths
        assert!(books.iter().any(|b| !b.in_stock()));
        // Ids are unique
        let mut ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), books.len());
    }

    #[test]
    fn test_demo_accounts_log_in() {
        let mut store = demo_store();

        let admin = store.login("admin@bookstore.com", "admin123").unwrap();
        assert!(admin.is_admin);

        let customer = store.login("john@example.com", "john123").unwrap();
        assert!(!customer.is_admin);
    }

    #[test]
    fn test_demo_store_has_multiple_categories() {
        let store = demo_store();
        assert!(store.categories().len() >= 4);
    }
}
