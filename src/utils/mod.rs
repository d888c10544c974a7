//! Internal helpers shared by the graph and traversal modules.

mod bitset;
mod dot;

pub use bitset::{BitSet, BitSetIter};
pub(crate) use dot::escape_dot;
