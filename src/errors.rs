use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndexError
{
    /// Dimension below one, negative order, or a simplex too large to count in a `usize`.
    InvalidArgument,
    /// The enumerator already signalled end-of-sequence.
    ExhaustedIterator,
}
impl std::error::Error for IndexError {}

impl Display for IndexError
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", *self)
    }
}

#[test]
fn display_matches_variant_name()
{
    assert_eq!(IndexError::InvalidArgument.to_string(), "InvalidArgument");
    assert_eq!(IndexError::ExhaustedIterator.to_string(), "ExhaustedIterator");
}
