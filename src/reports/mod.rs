//! Report computations over the loaded visitor list.
//!
//! Every function here is pure: it borrows the visitors and returns owned
//! values. The text form is the `Display` impl in `render`.

pub mod render;

use crate::models::{Book, SmsKind, SmsMessage, Visitor};
use std::collections::HashSet;

/// Author looked up by the author-presence report
pub const AUTHOR_OF_INTEREST: &str = "Jane Austen";

/// `name surname` for each visitor, in load order.
pub fn visitor_names(visitors: &[Visitor]) -> Vec<String> {
    visitors.iter().map(Visitor::full_name).collect()
}

/// All favorite books across visitors with structural duplicates removed.
///
/// Books keep the position of their first appearance.
pub fn unique_favorite_books(visitors: &[Visitor]) -> Vec<Book> {
    let mut seen: HashSet<&Book> = HashSet::new();
    visitors
        .iter()
        .flat_map(|v| v.favorite_books.iter())
        .filter(|book| seen.insert(*book))
        .cloned()
        .collect()
}

/// Ascending by publishing year. The sort is stable, so equal years keep
/// their incoming order.
pub fn sort_by_publishing_year(books: &[Book]) -> Vec<Book> {
    let mut sorted = books.to_vec();
    sorted.sort_by_key(|book| book.publishing_year);
    sorted
}

/// Whether any visitor has a favorite by `author`, ignoring case.
pub fn has_book_by(visitors: &[Visitor], author: &str) -> bool {
    visitors
        .iter()
        .flat_map(|v| v.favorite_books.iter())
        .any(|book| eq_ignore_case(&book.author, author))
}

/// Char-by-char comparison where a pair matches if equal, equal in upper
/// case, or equal after upper- then lower-casing (so `ſ` matches `s`).
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_match(x, y))
}

fn chars_match(x: char, y: char) -> bool {
    if x == y || x.to_uppercase().eq(y.to_uppercase()) {
        return true;
    }
    let folded = |c: char| c.to_uppercase().flat_map(char::to_lowercase);
    folded(x).eq(folded(y))
}

/// Largest favorites list size; 0 when there are no visitors.
pub fn max_favorites(visitors: &[Visitor]) -> usize {
    visitors
        .iter()
        .map(Visitor::favorite_count)
        .max()
        .unwrap_or(0)
}

/// Mean favorites list size; 0.0 when there are no visitors.
pub fn average_favorites(visitors: &[Visitor]) -> f64 {
    if visitors.is_empty() {
        return 0.0;
    }
    let total: usize = visitors.iter().map(Visitor::favorite_count).sum();
    total as f64 / visitors.len() as f64
}

pub fn classify(favorite_count: usize, mean: f64) -> SmsKind {
    let count = favorite_count as f64;
    if count > mean {
        SmsKind::Bookworm
    } else if count < mean {
        SmsKind::ReadMore
    } else {
        SmsKind::Fine
    }
}

/// One message per visitor, in load order.
pub fn sms_messages(visitors: &[Visitor]) -> Vec<SmsMessage> {
    let mean = average_favorites(visitors);
    visitors
        .iter()
        .map(|v| SmsMessage::new(v.phone.clone(), classify(v.favorite_count(), mean)))
        .collect()
}

/// Results of all six reports, computed once from the same visitor list
#[derive(Debug, Clone)]
pub struct LibraryReport {
    pub visitor_names: Vec<String>,
    pub unique_books: Vec<Book>,
    pub books_by_year: Vec<Book>,
    pub has_author_book: bool,
    pub max_favorites: usize,
    pub sms_messages: Vec<SmsMessage>,
}

impl LibraryReport {
    pub fn build(visitors: &[Visitor]) -> Self {
        let unique_books = unique_favorite_books(visitors);
        let books_by_year = sort_by_publishing_year(&unique_books);

        Self {
            visitor_names: visitor_names(visitors),
            unique_books,
            books_by_year,
            has_author_book: has_book_by(visitors, AUTHOR_OF_INTEREST),
            max_favorites: max_favorites(visitors),
            sms_messages: sms_messages(visitors),
        }
    }

    pub fn visitor_count(&self) -> usize {
        self.visitor_names.len()
    }

    pub fn unique_book_count(&self) -> usize {
        self.unique_books.len()
    }
}
