//! Persistence: the world snapshot taken after every completed turn.
//!
//! - `snapshot`: the flat text format
//! - `store`: the file it lives in

pub mod snapshot;
pub mod store;

pub use snapshot::{decode, encode};
pub use store::{SaveStore, DEFAULT_SAVE_PATH};
