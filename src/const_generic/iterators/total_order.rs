use std::iter::FusedIterator;

use num_traits::ToPrimitive;

use crate::{errors::IndexError, iterators::odometer::{advance, validate}};

///
/// Total order enumerator with the dimension fixed at compile time. Produces
/// `[usize; D]` by value, so no allocation happens per step.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TotalOrder<const D: usize>
{
    order: usize,
    count: usize,
    index: [usize; D],
    cursor: Option<usize>,
    index_sum: usize,
    emitted: usize,
    start: bool,
    exhausted: bool,
}

impl<const D: usize> TotalOrder<D>
{
    ///
    /// Fails with `InvalidArgument` for `D == 0`, a negative order, or a count that overflows `usize`.
    ///
    pub fn new<P: ToPrimitive>(order: P) -> Result<Self, IndexError>
    {
        let (_, order, count) = validate(D, order)?;
        tracing::debug!(dimension = D, order, count, "created total order enumerator");
        Ok(Self { order, count, index: [0; D], cursor: Some(D.saturating_sub(1)), index_sum: 0, emitted: 0, start: true, exhausted: false })
    }

    pub fn try_next(&mut self) -> Result<Option<[usize; D]>, IndexError>
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
            tracing::trace!(dimension = D, order = self.order, emitted = self.emitted, "total order enumeration exhausted");
            return Ok(None);
        }
        self.emitted += 1;
        Ok(Some(self.index))
    }

    pub fn total_count(&self) -> usize
    {
        self.count
    }

    pub fn max_indices(&self) -> [usize; D]
    {
        [self.order; D]
    }

    pub fn order(&self) -> usize
    {
        self.order
    }

    pub fn remaining(&self) -> usize
    {
        if self.exhausted { 0 } else { self.count.saturating_sub(self.emitted) }
    }

    pub fn is_exhausted(&self) -> bool
    {
        self.exhausted
    }

    pub fn current(&self) -> &[usize; D]
    {
        &self.index
    }

    pub fn current_sum(&self) -> usize
    {
        self.index_sum
    }

    pub fn log_state(&self)
    {
        tracing::debug!(
            cursor = ?self.cursor,
            last_dimension = D.saturating_sub(1),
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

impl<const D: usize> Iterator for TotalOrder<D>
{
    type Item = [usize; D];

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl<const D: usize> ExactSizeIterator for TotalOrder<D> {}

impl<const D: usize> FusedIterator for TotalOrder<D> {}

#[test]
fn check_matches_dynamic()
{
    let fixed: Vec<Vec<usize>> = TotalOrder::<3>::new(5).unwrap().map(|i| i.to_vec()).collect();
    let dynamic: Vec<Vec<usize>> = crate::iterators::total_order::TotalOrder::new(3, 5).unwrap().collect();
    assert_eq!(fixed.len(), 56);
    assert_eq!(fixed, dynamic);
}

#[test]
fn check_two_d_order_three()
{
    let indices: Vec<[usize; 2]> = TotalOrder::<2>::new(3).unwrap().collect();
    assert_eq!(indices, vec![[0, 0], [0, 1], [0, 2], [0, 3], [1, 0], [1, 1], [1, 2], [2, 0], [2, 1], [3, 0]]);
}

#[test]
fn check_invalid_and_exhausted()
{
    assert_eq!(TotalOrder::<0>::new(2), Err(IndexError::InvalidArgument));
    assert_eq!(TotalOrder::<2>::new(-1), Err(IndexError::InvalidArgument));

    let mut iterator = TotalOrder::<4>::new(0).unwrap();
    assert_eq!(iterator.max_indices(), [0; 4]);
    assert_eq!(iterator.len(), 1);
    assert_eq!(iterator.try_next(), Ok(Some([0; 4])));
    assert_eq!(iterator.try_next(), Ok(None));
    assert_eq!(iterator.try_next(), Err(IndexError::ExhaustedIterator));
    assert_eq!(iterator.next(), None);
}

#[test]
fn check_one_d()
{
    let mut iterator = TotalOrder::<1>::new(2).unwrap();
    assert_eq!(iterator.next(), Some([0]));
    assert_eq!(iterator.current_sum(), 0);
    assert_eq!(iterator.next(), Some([1]));
    assert_eq!(iterator.next(), Some([2]));
    assert_eq!(iterator.current(), &[2]);
    assert_eq!(iterator.remaining(), 0);
    iterator.log_state();
    assert_eq!(iterator.next(), None);
    assert!(iterator.is_exhausted());
}
