//! Repository implementations.
//!
//! - `local`: In-memory repository over the dataset loaded at startup
pub mod local;

pub use local::LocalRepository;
