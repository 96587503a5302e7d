//! Blob field simulation
//!
//! Owns the viewport and the blob collection. Pure and deterministic for a
//! given random source:
//! - Position advances by velocity once per frame
//! - Velocity only ever changes sign
//! - Re-population replaces the whole collection

pub mod blob;
pub mod state;

pub use blob::Blob;
pub use state::{BlobField, Viewport};
