//! Shared types and errors for the ppinet workspace.

#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{PpiError, PpiResult};
pub use types::{Edge, Interaction, NodeId};
