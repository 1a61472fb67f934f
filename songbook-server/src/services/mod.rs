//! Service layer: song-info lookup client and catalogue use cases

pub mod catalogue;
pub mod detail_client;

pub use catalogue::{Catalogue, CatalogueError};
pub use detail_client::{DetailClient, DetailError};
