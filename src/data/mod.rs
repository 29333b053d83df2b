pub mod stars;

pub use stars::{StarCatalog, StarRecord, load_catalog};
