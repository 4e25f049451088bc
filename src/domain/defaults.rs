//! Column names of the source dataset and the values used when a column is
//! absent or empty.

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/saurabhbagchi/books-dataset/main/books.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "src/data";
pub const DEFAULT_OUTPUT_FILE: &str = "books.json";

pub mod columns {
    pub const TITLE: &str = "title";
    pub const AUTHORS: &str = "authors";
    pub const DESCRIPTION: &str = "description";
    pub const AVERAGE_RATING: &str = "average_rating";
    pub const CATEGORIES: &str = "categories";
    pub const PUBLISHED_DATE: &str = "published_date";
    pub const IMAGE_URL: &str = "image_url";
    pub const ISBN: &str = "isbn";
    pub const PUBLISHER: &str = "publisher";
    pub const LANGUAGE_CODE: &str = "language_code";
    pub const NUM_PAGES: &str = "num_pages";
    pub const PRICE: &str = "price";
}

pub const DEFAULT_TITLE: &str = "";
pub const DEFAULT_AUTHOR: &str = "";
pub const DEFAULT_DESCRIPTION: &str = "";
pub const DEFAULT_RATING: f64 = 0.0;
pub const DEFAULT_GENRE: &str = "Fiction";
pub const DEFAULT_YEAR: &str = "Unknown";
pub const DEFAULT_IMAGE_URL: &str = "";
pub const DEFAULT_ISBN: &str = "";
pub const DEFAULT_PUBLISHER: &str = "Unknown";
pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_PAGES: i64 = 0;
pub const DEFAULT_PRICE: f64 = 0.0;

pub const BENEFITS_MAX_CHARS: usize = 200;
pub const BENEFITS_SUFFIX: &str = "...";
pub const NO_BENEFITS: &str = "No benefits listed";

pub const DATE_SEPARATOR: char = '-';

/// Cell values read as a missing value, same as an empty cell.
pub const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(value: &str) -> bool {
    value.is_empty() || NULL_MARKERS.contains(&value)
}
