use std::iter::FusedIterator;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::{errors::IndexError, utilities::combinatorics::lexicographic_rank};

use super::odometer::{advance, validate};

///
/// Lazily enumerates every multi-index of length `dimension` whose components
/// sum to at most `order`, in lexicographic order starting from all zeros.
///
/// ```
/// use totalorder::iterators::total_order::TotalOrder;
///
/// let indices: Vec<Vec<usize>> = TotalOrder::new(2, 2)?.collect();
/// assert_eq!(indices, vec![vec![0, 0], vec![0, 1], vec![0, 2], vec![1, 0], vec![1, 1], vec![2, 0]]);
/// # Ok::<(), totalorder::errors::IndexError>(())
/// ```
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TotalOrderSnapshot", into = "TotalOrderSnapshot")]
pub struct TotalOrder
{
    dimension: usize,
    order: usize,
    count: usize,
    max_indices: Vec<usize>,
    index: Vec<usize>,
    cursor: Option<usize>,
    index_sum: usize,
    emitted: usize,
    start: bool,
    exhausted: bool,
}

impl TotalOrder
{
    ///
    /// Creates an enumerator positioned before the all-zero index. Fails with
    /// `InvalidArgument` if `dimension < 1`, `order < 0`, or the number of
    /// indices does not fit in a `usize`.
    ///
    pub fn new<D: ToPrimitive, P: ToPrimitive>(dimension: D, order: P) -> Result<Self, IndexError>
    {
        let (dimension, order, count) = validate(dimension, order)?;
        tracing::debug!(dimension, order, count, "created total order enumerator");
        Ok(Self
        {
            dimension,
            order,
            count,
            max_indices: vec![order; dimension],
            index: vec![0; dimension],
            cursor: Some(dimension - 1),
            index_sum: 0,
            emitted: 0,
            start: true,
            exhausted: false,
        })
    }

    ///
    /// Produces the next multi-index. Returns `Ok(None)` once, when the simplex
    /// has been fully enumerated, and `Err(ExhaustedIterator)` for any call after
    /// that. An error leaves the enumerator unchanged.
    ///
    pub fn try_next(&mut self) -> Result<Option<Vec<usize>>, IndexError>
    {
        if self.exhausted
        {
            return Err(IndexError::ExhaustedIterator);
        }
        if self.start
        {
            self.start = false;
        }
        else if !advance(&mut self.index, &mut self.cursor, &mut self.index_sum, self.order)
        {
            self.exhausted = true;
            tracing::trace!(dimension = self.dimension, order = self.order, emitted = self.emitted, "total order enumeration exhausted");
            return Ok(None);
        }
        self.emitted += 1;
        Ok(Some(self.index.clone()))
    }

    /// Total number of multi-indices, C(dimension + order, dimension).
    pub fn total_count(&self) -> usize
    {
        self.count
    }

    /// Largest value any single component can take.
    pub fn max_indices(&self) -> &[usize]
    {
        &self.max_indices
    }

    pub fn dimension(&self) -> usize
    {
        self.dimension
    }

    pub fn order(&self) -> usize
    {
        self.order
    }

    /// Number of multi-indices not yet produced.
    pub fn remaining(&self) -> usize
    {
        if self.exhausted { 0 } else { self.count.saturating_sub(self.emitted) }
    }

    pub fn is_exhausted(&self) -> bool
    {
        self.exhausted
    }

    /// The most recently produced index (all zeros before the first call).
    pub fn current(&self) -> &[usize]
    {
        &self.index
    }

    pub fn current_sum(&self) -> usize
    {
        self.index_sum
    }

    ///
    /// Emits the full enumerator state as a debug-level `tracing` event.
    ///
    pub fn log_state(&self)
    {
        tracing::debug!(
            cursor = ?self.cursor,
            last_dimension = self.dimension - 1,
            current_sum = self.index_sum,
            max_sum = self.order,
            current = ?self.index,
            emitted = self.emitted,
            start = self.start,
            exhausted = self.exhausted,
            "total order state"
        );
    }
}

impl Iterator for TotalOrder
{
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TotalOrder {}

impl FusedIterator for TotalOrder {}

///
/// Serialized form of [`TotalOrder`]. Derived values, including the number of
/// indices already produced, are recomputed from the position when converting back.
///
#[derive(Serialize, Deserialize)]
struct TotalOrderSnapshot
{
    dimension: usize,
    order: usize,
    index: Vec<usize>,
    start: bool,
    exhausted: bool,
}

impl From<TotalOrder> for TotalOrderSnapshot
{
    fn from(value: TotalOrder) -> Self {
        Self
        {
            dimension: value.dimension,
            order: value.order,
            index: value.index,
            start: value.start,
            exhausted: value.exhausted,
        }
    }
}

impl TryFrom<TotalOrderSnapshot> for TotalOrder
{
    type Error = IndexError;

    fn try_from(snapshot: TotalOrderSnapshot) -> Result<Self, Self::Error> {
        let mut restored = TotalOrder::new(snapshot.dimension, snapshot.order)?;
        if snapshot.index.len() != restored.dimension || (snapshot.start && snapshot.exhausted)
        {
            return Err(IndexError::InvalidArgument);
        }
        let rank = lexicographic_rank(&snapshot.index, restored.order).ok_or(IndexError::InvalidArgument)?;
        // Before the first call and after exhaustion the index sits at the origin.
        if (snapshot.start || snapshot.exhausted) && rank != 0
        {
            return Err(IndexError::InvalidArgument);
        }
        restored.emitted = if snapshot.start { 0 } else if snapshot.exhausted { restored.count } else { rank + 1 };
        restored.index_sum = snapshot.index.iter().sum();
        restored.index = snapshot.index;
        restored.start = snapshot.start;
        restored.exhausted = snapshot.exhausted;
        Ok(restored)
    }
}

#[test]
fn check_two_d_order_three()
{
    let indices: Vec<Vec<usize>> = TotalOrder::new(2, 3).unwrap().collect();
    let expected = vec![
        vec![0, 0], vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 0],
        vec![1, 1], vec![1, 2], vec![2, 0], vec![2, 1], vec![3, 0],
    ];
    assert_eq!(indices, expected);
}

#[test]
fn check_one_d()
{
    let indices: Vec<Vec<usize>> = TotalOrder::new(1, 2).unwrap().collect();
    assert_eq!(indices, vec![vec![0], vec![1], vec![2]]);
    let indices: Vec<Vec<usize>> = TotalOrder::new(1, 6).unwrap().collect();
    assert_eq!(indices, (0..=6).map(|i| vec![i]).collect::<Vec<_>>());
}

#[test]
fn check_zero_order()
{
    let indices: Vec<Vec<usize>> = TotalOrder::new(4, 0).unwrap().collect();
    assert_eq!(indices, vec![vec![0; 4]]);
}

#[test]
fn check_invalid_arguments()
{
    assert_eq!(TotalOrder::new(0, 3), Err(IndexError::InvalidArgument));
    assert_eq!(TotalOrder::new(2, -1), Err(IndexError::InvalidArgument));
    assert_eq!(TotalOrder::new(-1, 2), Err(IndexError::InvalidArgument));
    assert_eq!(TotalOrder::new(3_u64, 2_i32).map(|t| t.total_count()), Ok(10));
}

#[test]
fn check_exhaustion()
{
    let mut iterator = TotalOrder::new(2, 1).unwrap();
    assert_eq!(iterator.try_next(), Ok(Some(vec![0, 0])));
    assert_eq!(iterator.try_next(), Ok(Some(vec![0, 1])));
    assert_eq!(iterator.try_next(), Ok(Some(vec![1, 0])));
    assert!(!iterator.is_exhausted());
    assert_eq!(iterator.try_next(), Ok(None));
    assert!(iterator.is_exhausted());
    let before = iterator.clone();
    assert_eq!(iterator.try_next(), Err(IndexError::ExhaustedIterator));
    assert_eq!(iterator.try_next(), Err(IndexError::ExhaustedIterator));
    assert_eq!(iterator, before);
    assert_eq!(iterator.next(), None);
    assert_eq!(iterator.current(), &[0, 0]);
    assert_eq!(iterator.current_sum(), 0);
}

#[test]
fn check_accessors()
{
    let mut iterator = TotalOrder::new(3, 5).unwrap();
    assert_eq!(iterator.total_count(), 56);
    assert_eq!(iterator.max_indices(), &[5, 5, 5]);
    assert_eq!(iterator.dimension(), 3);
    assert_eq!(iterator.order(), 5);
    assert_eq!(iterator.len(), 56);
    iterator.next();
    iterator.next();
    assert_eq!(iterator.remaining(), 54);
    assert_eq!(iterator.current(), &[0, 0, 1]);
    assert_eq!(iterator.current_sum(), 1);
    iterator.log_state();
    assert_eq!(iterator.by_ref().count(), 54);
    assert_eq!(iterator.len(), 0);
}

#[test]
fn check_returned_index_is_detached()
{
    let mut iterator = TotalOrder::new(2, 2).unwrap();
    let mut first = iterator.next().unwrap();
    first[0] = 7;
    assert_eq!(iterator.current(), &[0, 0]);
    assert_eq!(iterator.next(), Some(vec![0, 1]));
}

#[test]
fn check_clones_are_independent()
{
    let mut a = TotalOrder::new(3, 2).unwrap();
    a.nth(4);
    let mut b = a.clone();
    let rest_a: Vec<_> = a.by_ref().collect();
    assert!(a.is_exhausted());
    assert!(!b.is_exhausted());
    let rest_b: Vec<_> = b.by_ref().collect();
    assert_eq!(rest_a, rest_b);
}

#[test]
fn check_serde_resume()
{
    let config = bincode::config::standard();
    let mut iterator = TotalOrder::new(3, 3).unwrap();
    iterator.nth(7);
    let bytes = bincode::serde::encode_to_vec(&iterator, config).unwrap();
    let (mut restored, _): (TotalOrder, usize) = bincode::serde::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(restored, iterator);
    assert_eq!(restored.by_ref().collect::<Vec<_>>(), iterator.by_ref().collect::<Vec<_>>());
}

#[test]
fn check_serde_rejects_inconsistent_state()
{
    let config = bincode::config::standard();
    let rejected = [
        TotalOrderSnapshot { dimension: 2, order: 3, index: vec![2, 2], start: false, exhausted: false },
        TotalOrderSnapshot { dimension: 0, order: 3, index: vec![], start: true, exhausted: false },
        TotalOrderSnapshot { dimension: 2, order: 3, index: vec![0, 1, 0], start: false, exhausted: false },
        TotalOrderSnapshot { dimension: 2, order: 3, index: vec![0, 1], start: true, exhausted: false },
        TotalOrderSnapshot { dimension: 2, order: 3, index: vec![1, 0], start: false, exhausted: true },
        TotalOrderSnapshot { dimension: 2, order: 3, index: vec![0, 0], start: true, exhausted: true },
    ];
    for snapshot in rejected
    {
        let bytes = bincode::serde::encode_to_vec(&snapshot, config).unwrap();
        assert!(bincode::serde::decode_from_slice::<TotalOrder, _>(&bytes, config).is_err());
    }
}

#[test]
fn check_serde_position_determines_remaining()
{
    let config = bincode::config::standard();
    let snapshot = TotalOrderSnapshot { dimension: 2, order: 3, index: vec![0, 1], start: false, exhausted: false };
    let bytes = bincode::serde::encode_to_vec(&snapshot, config).unwrap();
    let (mut restored, _): (TotalOrder, usize) = bincode::serde::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(restored.len(), 8);
    let mut expected = 8;
    while let Some(index) = restored.next()
    {
        expected -= 1;
        assert_eq!(restored.remaining(), expected);
        assert!(index.iter().sum::<usize>() <= 3);
    }
    assert_eq!(expected, 0);
    assert_eq!(restored.len(), 0);
}

#[test]
fn check_serde_exhausted_stays_exhausted()
{
    let config = bincode::config::standard();
    let mut iterator = TotalOrder::new(3, 2).unwrap();
    iterator.by_ref().for_each(drop);
    let bytes = bincode::serde::encode_to_vec(&iterator, config).unwrap();
    let (mut restored, _): (TotalOrder, usize) = bincode::serde::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(restored, iterator);
    assert!(restored.is_exhausted());
    assert_eq!(restored.len(), 0);
    assert_eq!(restored.try_next(), Err(IndexError::ExhaustedIterator));
}

#[test]
fn check_serde_every_position_round_trips()
{
    let config = bincode::config::standard();
    let mut iterator = TotalOrder::new(3, 3).unwrap();
    loop
    {
        let bytes = bincode::serde::encode_to_vec(&iterator, config).unwrap();
        let (restored, _): (TotalOrder, usize) = bincode::serde::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(restored, iterator);
        if iterator.next().is_none()
        {
            break;
        }
    }
}
