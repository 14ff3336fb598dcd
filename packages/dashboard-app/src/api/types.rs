//! Wire types for the quote provider

use serde::{Deserialize, Serialize};

/// Response of the `SYMBOL_SEARCH` function
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(rename = "bestMatches", default)]
    pub best_matches: Option<Vec<SymbolMatch>>,
}

/// A single symbol search hit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymbolMatch {
    #[serde(rename = "1. symbol")]
    pub symbol: String,
    #[serde(rename = "2. name")]
    pub name: String,
    #[serde(rename = "3. type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "4. region", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "8. currency", default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "9. matchScore", default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<String>,
}

impl SymbolMatch {
    pub fn new(symbol: &str, name: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            kind: None,
            region: None,
            currency: None,
            match_score: None,
        }
    }
}
