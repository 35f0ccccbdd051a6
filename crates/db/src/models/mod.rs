//! Row structs returned by the repository layer.

pub mod anime;
