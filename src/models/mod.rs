use serde::{Deserialize, Serialize};

/// A book as listed in a visitor's favorites.
///
/// Equality and hashing cover every field, so two entries are the same book
/// only when all of them match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub name: String,
    pub author: String,
    pub publishing_year: i32,
    pub isbn: String,
    pub publisher: String,
}

/// Library visitor with their favorite books
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub subscribed: bool,
    pub favorite_books: Vec<Book>,
}

impl Visitor {
    /// `name surname`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorite_books.len()
    }
}

/// Which notification a visitor gets, relative to the average favorites count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsKind {
    Bookworm,
    ReadMore,
    Fine,
}

impl SmsKind {
    pub fn text(self) -> &'static str {
        match self {
            SmsKind::Bookworm => "you are a bookworm",
            SmsKind::ReadMore => "read more",
            SmsKind::Fine => "fine",
        }
    }
}

/// Outgoing SMS notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    pub phone: String,
    pub message: String,
}

impl SmsMessage {
    pub fn new(phone: impl Into<String>, kind: SmsKind) -> Self {
        Self {
            phone: phone.into(),
            message: kind.text().to_string(),
        }
    }
}
