pub mod header;
pub mod meter;
