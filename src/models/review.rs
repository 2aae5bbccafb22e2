// src/models/review.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single review as emitted by the reviews backend.
/// Every field defaults so a partial payload still renders; a missing
/// field shows up as empty text rather than failing the whole list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Review {
    pub title: String,       // Review headline
    pub body: String,        // Review text
    pub rating: Rating,      // Numeric or free-form rating, shown verbatim
    pub reviewer: String,    // Display name of the reviewer
}

/// Backends disagree on whether a rating is a number or a string
/// ("4.5" vs "four stars"); both are accepted and displayed as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Rating {
    Number(f64),
    Text(String),
}

impl Default for Rating {
    fn default() -> Self {
        Rating::Text(String::new())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Number(value) => write!(f, "{}", value),
            Rating::Text(value) => f.write_str(value),
        }
    }
}
