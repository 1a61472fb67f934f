//! # Songbook Common Library
//!
//! Shared code for the songbook service including:
//! - Song and song detail records
//! - Storage initialization (pool + schema)
//! - Configuration loading
//! - Common error types

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
