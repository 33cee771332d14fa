#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod args;
pub mod collectible;
pub mod collection;
pub mod custody;
