//! A randomized balanced binary search tree with ordered multiset semantics.
//!
//! The treap keeps values in binary search tree order while maintaining max-heap order over
//! per-node random priorities, so the expected height stays logarithmic without any explicit
//! rebalancing bookkeeping.

pub mod arena;
pub mod treap;
