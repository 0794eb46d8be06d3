//! Lazy enumeration of total-order multi-index sets.
//!
//! A total-order set of dimension `d` and order `p` holds every tuple of `d`
//! non-negative integers whose sum is at most `p`; it has C(d + p, d) members.
//! [`TotalOrder`] produces them one at a time in lexicographic order without
//! materializing the set, and [`const_generic::iterators::total_order::TotalOrder`]
//! does the same with a compile-time dimension.

pub mod const_generic;
pub mod errors;
pub mod iterators;
pub mod utilities;

pub use errors::IndexError;
pub use iterators::total_order::TotalOrder;
pub use utilities::combinatorics::{binomial, lexicographic_rank, simplex_count};
