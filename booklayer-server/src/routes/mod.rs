//! Route sets, one per backend.

pub mod document;
pub mod memory;
