//! Core value types and errors for the cellgrid layout engine.
//!
//! This crate provides the foundational types shared by the engine and its hosts:
//! - Pixel geometry (constraints, sizes, bounds)
//! - Units and density for resolving `dp` values
//! - Orientation, layout direction and alignment anchors
//! - Error types

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
