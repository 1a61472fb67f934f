//! Database models and storage setup

pub mod init;
pub mod models;

pub use init::*;
pub use models::*;
