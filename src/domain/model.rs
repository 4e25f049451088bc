use crate::domain::defaults;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One source row, keyed by column name. Missing cells are never stored by the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, String>,
}

impl Record {
    /// Value of `column`, or `None` when the column is missing or the cell holds a null marker.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.data
            .get(column)
            .map(String::as_str)
            .filter(|v| !defaults::is_missing(v))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The normalized book persisted to the output file. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: f64,
    pub genre: String,
    pub year: String,
    pub benefits: String,
    pub image_url: String,
    pub isbn: String,
    pub publisher: String,
    pub language: String,
    pub pages: i64,
    pub price: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub books: Vec<Book>,
    /// Present values that could not be coerced and were replaced by their default.
    pub defaulted_values: usize,
}
