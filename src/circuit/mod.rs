//! Gate-level primitives that every block is wired from.
//!
//! This module notably consists of:
//! - **[`Wire`]**: a single mutable signal line.
//! - **[`And`], [`Or`], [`Xor`], [`Not`]**: 1- and 2-input gates which are
//!   recomputed every time `update` is called (never edge-triggered).
//! - **[`And3`]**: a three-input AND built from two 2-input ANDs.

pub use gates::*;
pub use wire::Wire;

mod gates;
mod wire;
