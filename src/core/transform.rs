use crate::core::{Book, Record};
use crate::domain::defaults::{self, columns};
use crate::utils::error::{EtlError, Result};

/// Turns source rows into [`Book`]s.
///
/// Absent columns, empty cells and null markers always take their default. A present value that cannot be
/// coerced to the field's numeric type also takes the default, unless `strict` is set,
/// in which case it fails the row with [`EtlError::TransformError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BookTransformer {
    strict: bool,
}

impl BookTransformer {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Builds the book for the 1-based data row `row`, returning it with the number
    /// of present values that were replaced by a default.
    pub fn transform(&self, row: usize, record: &Record) -> Result<(Book, usize)> {
        let mut fields = RowReader {
            row,
            record,
            strict: self.strict,
            defaulted: 0,
        };

        let description = record.get(columns::DESCRIPTION);
        let book = Book {
            title: fields.text(columns::TITLE, defaults::DEFAULT_TITLE),
            author: fields.text(columns::AUTHORS, defaults::DEFAULT_AUTHOR),
            description: description
                .unwrap_or(defaults::DEFAULT_DESCRIPTION)
                .to_string(),
            rating: fields.number(columns::AVERAGE_RATING, defaults::DEFAULT_RATING, parse_float)?,
            genre: fields.text(columns::CATEGORIES, defaults::DEFAULT_GENRE),
            year: extract_year(record.get(columns::PUBLISHED_DATE)),
            benefits: benefits_from(description),
            image_url: fields.text(columns::IMAGE_URL, defaults::DEFAULT_IMAGE_URL),
            isbn: fields.text(columns::ISBN, defaults::DEFAULT_ISBN),
            publisher: fields.text(columns::PUBLISHER, defaults::DEFAULT_PUBLISHER),
            language: fields.text(columns::LANGUAGE_CODE, defaults::DEFAULT_LANGUAGE),
            pages: fields.number(columns::NUM_PAGES, defaults::DEFAULT_PAGES, parse_pages)?,
            price: fields.number(columns::PRICE, defaults::DEFAULT_PRICE, parse_float)?,
        };

        Ok((book, fields.defaulted))
    }
}

struct RowReader<'a> {
    row: usize,
    record: &'a Record,
    strict: bool,
    defaulted: usize,
}

impl RowReader<'_> {
    fn text(&self, column: &str, default: &str) -> String {
        self.record.get(column).unwrap_or(default).to_string()
    }

    fn number<T>(&mut self, column: &str, default: T, parse: fn(&str) -> Option<T>) -> Result<T> {
        let Some(raw) = self.record.get(column) else {
            return Ok(default);
        };

        match parse(raw) {
            Some(value) => Ok(value),
            None if self.strict => Err(EtlError::TransformError {
                row: self.row,
                field: column.to_string(),
                value: raw.to_string(),
            }),
            None => {
                tracing::debug!(
                    "Row {}: cannot convert {:?} in '{}', using default",
                    self.row,
                    raw,
                    column
                );
                self.defaulted += 1;
                Ok(default)
            }
        }
    }
}

/// Leading component of a `-` separated date, or `Unknown` when there is no date.
pub fn extract_year(date: Option<&str>) -> String {
    match date {
        Some(date) => date
            .split(defaults::DATE_SEPARATOR)
            .next()
            .unwrap_or_default()
            .to_string(),
        None => defaults::DEFAULT_YEAR.to_string(),
    }
}

pub fn benefits_from(description: Option<&str>) -> String {
    match description {
        Some(description) => {
            let mut benefits: String = description
                .chars()
                .take(defaults::BENEFITS_MAX_CHARS)
                .collect();
            benefits.push_str(defaults::BENEFITS_SUFFIX);
            benefits
        }
        None => defaults::NO_BENEFITS.to_string(),
    }
}

/// Finite floats only; `NaN` and infinities cannot be written as JSON numbers.
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integers, or finite floats truncated toward zero (`"120.5"` is 120 pages).
pub fn parse_pages(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().ok().or_else(|| {
        parse_float(raw)
            .map(f64::trunc)
            .filter(|v| *v >= i64::MIN as f64 && *v < i64::MAX as f64)
            .map(|v| v as i64)
    })
}
