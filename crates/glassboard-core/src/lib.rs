//! Glassboard Core
//!
//! This crate contains the shared building blocks for the Glassboard dashboard:
//! math and geometry types, gesture input primitives, logging and profiling.

pub mod alloc;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod math;
pub mod profiling;
