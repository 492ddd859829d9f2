//! EstateSearch Library
//!
//! Core modules for the EstateSearch property-search engine.

pub mod config;
pub mod error;
pub mod listing;
pub mod search;
pub mod similarity;
