//! Home Listing Data Model
//!
//! Value types for property listings and search queries, plus JSON
//! loading from disk.

use crate::error::{EstateError, EstateResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single property listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Home {
    pub id: u64,
    pub title: String,
    pub location: String,
    pub price: String,
    pub beds: u32,
    pub baths: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Structured search query over listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeQuery {
    pub location: Option<String>,
    pub beds: Option<u32>,
    pub baths: Option<u32>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Load listings from a JSON array on disk
pub fn load_homes(path: &Path) -> EstateResult<Vec<Home>> {
    if !path.exists() {
        return Err(EstateError::Data(format!(
            "listings file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let homes: Vec<Home> = serde_json::from_str(&content)?;
    Ok(homes)
}
