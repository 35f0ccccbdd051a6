pub mod anime;
pub mod error;
pub mod status;
pub mod types;
