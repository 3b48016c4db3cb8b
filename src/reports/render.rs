use crate::reports::{LibraryReport, AUTHOR_OF_INTEREST};
use std::fmt;

/// Plain-text form printed to stdout.
///
/// Labels and blank-line placement are fixed; downstream tooling diffs this
/// output.
impl fmt::Display for LibraryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Список посетителей:")?;
        for name in &self.visitor_names {
            writeln!(f, "{}", name)?;
        }
        writeln!(f, "Количество посетителей: {}", self.visitor_count())?;

        writeln!(f, "\nСписок уникальных книг в избранном:")?;
        for book in &self.unique_books {
            writeln!(f, "{} - {}", book.name, book.author)?;
        }
        writeln!(f, "Количество уникальных книг: {}", self.unique_book_count())?;

        writeln!(f, "\nСписок книг, отсортированных по году издания:")?;
        for book in &self.books_by_year {
            writeln!(f, "{} - {}", book.name, book.publishing_year)?;
        }

        writeln!(
            f,
            "\nЕсть ли у кого-то в избранном книга автора '{}': {}",
            AUTHOR_OF_INTEREST, self.has_author_book
        )?;
        writeln!(
            f,
            "Максимальное число добавленных в избранное книг: {}",
            self.max_favorites
        )?;

        writeln!(f, "\nSMS сообщения:")?;
        for sms in &self.sms_messages {
            writeln!(f, "Телефон: {}, Сообщение: {}", sms.phone, sms.message)?;
        }

        Ok(())
    }
}
