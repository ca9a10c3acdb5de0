//! Dataset loading, caching, and column selection
//!
//! The passenger CSV is fetched once into a local cache
//! ([`ensure_dataset`]), parsed into an immutable [`Dataset`]
//! ([`load_csv`]), and sliced by index from there. IO is injected through
//! explicit paths and URLs so tests never touch the network.

mod fetch;
mod frame;
mod loader;

pub use fetch::ensure_dataset;
pub use frame::Dataset;
pub use loader::load_csv;
