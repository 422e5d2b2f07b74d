//! Collection types shared across Glassboard crates.
//!
//! Controllers are keyed by widget id in hot per-frame paths, so the maps here
//! use AHash instead of SipHash.

pub use ahash::AHashMap as HashMap;
