//! # Catalog Views
//!
//! Pure, side-effect-free functions over a snapshot of the book collection:
//! free-text search, category filter and sorting. The store never mutates
//! anything here; callers get owned copies to render.
//!
//! ## Matching Rules
//! - Search is a case-insensitive substring match over title, author,
//!   category and description
//! - The category filter is an exact tag match (`None` means "all")
//! - Filter first, then sort

use bookstand_core::{Book, SortKey};

/// Returns the filtered-then-sorted catalog for a listing page.
///
/// ## Arguments
/// * `books` - snapshot of the catalog
/// * `query` - free-text search; empty matches everything
/// * `category` - exact category tag; `None` matches everything
/// * `sort` - ordering applied after filtering
pub fn filter_and_sort(
    books: &[Book],
    query: &str,
    category: Option<&str>,
    sort: SortKey,
) -> Vec<Book> {
    let query = query.trim().to_lowercase();

    let mut result: Vec<Book> = books
        .iter()
        .filter(|book| category.map_or(true, |c| book.category == c))
        .filter(|book| query.is_empty() || matches_query(book, &query))
        .cloned()
        .collect();

    match sort {
        SortKey::Newest => result.sort_by(|a, b| b.published_date.cmp(&a.published_date)),
        SortKey::PriceLow => result.sort_by(|a, b| a.price_cents.cmp(&b.price_cents)),
        SortKey::PriceHigh => result.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortKey::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    result
}

/// Case-insensitive substring match over the searchable fields.
/// `query` must already be lowercased.
fn matches_query(book: &Book, query: &str) -> bool {
    book.title.to_lowercase().contains(query)
        || book.author.to_lowercase().contains(query)
        || book.category.to_lowercase().contains(query)
        || book.description.to_lowercase().contains(query)
}

/// Distinct category tags across the catalog, sorted, for the filter bar.
pub fn categories(books: &[Book]) -> Vec<String> {
    let mut cats: Vec<String> = books.iter().map(|b| b.category.clone()).collect();
    cats.sort();
    cats.dedup();
    cats
}
