#![forbid(unsafe_code)]

pub mod catalog;
pub mod content;
pub mod delay;
pub mod error;
pub mod play;

pub use chainlab_core::Clock;

pub use catalog::{PackCatalog, load_pack_file};
pub use delay::RevealDelays;
pub use error::CatalogError;
pub use play::PlayService;
