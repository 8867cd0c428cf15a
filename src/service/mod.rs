//! Query layer over the bakery tables.

pub mod catalog;

pub use catalog::CatalogService;
