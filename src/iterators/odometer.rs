use num_traits::ToPrimitive;

use crate::{errors::IndexError, utilities::combinatorics::simplex_count};

///
/// Checks `(dimension, order)` and returns them as `usize` together with the
/// number of multi-indices in the simplex.
///
pub(crate) fn validate<D: ToPrimitive, P: ToPrimitive>(dimension: D, order: P) -> Result<(usize, usize, usize), IndexError>
{
    let dimension = dimension.to_usize().ok_or(IndexError::InvalidArgument)?;
    let order = order.to_usize().ok_or(IndexError::InvalidArgument)?;
    if dimension == 0
    {
        return Err(IndexError::InvalidArgument);
    }
    let count = simplex_count(dimension, order).ok_or(IndexError::InvalidArgument)?;
    Ok((dimension, order, count))
}

///
/// Advances `index` to the next multi-index with component sum at most `order`.
///
/// `cursor` is the active component; `None` plays the role of the position left
/// of component zero. A saturated component is zeroed and the cursor moves left
/// (carry); the first component that still has budget is incremented and the
/// cursor jumps back to the last component. Returns `false` once the carry runs
/// off the left end, in which case `index` is all zeros, `sum` is zero and the
/// cursor is back on the last component.
///
pub(crate) fn advance(index: &mut [usize], cursor: &mut Option<usize>, sum: &mut usize, order: usize) -> bool
{
    let last = index.len() - 1;
    loop
    {
        match *cursor
        {
            Some(dim) if *sum < order =>
            {
                index[dim] += 1;
                *sum += 1;
                *cursor = Some(last);
                return true;
            }
            Some(dim) =>
            {
                *sum -= index[dim];
                index[dim] = 0;
                *cursor = dim.checked_sub(1);
            }
            None =>
            {
                index.fill(0);
                *sum = 0;
                *cursor = Some(last);
                return false;
            }
        }
    }
}

#[test]
fn check_validate()
{
    assert_eq!(validate(2, 3), Ok((2, 3, 10)));
    assert_eq!(validate(1_u8, 0_i64), Ok((1, 0, 1)));
    assert_eq!(validate(0, 3), Err(IndexError::InvalidArgument));
    assert_eq!(validate(-2, 3), Err(IndexError::InvalidArgument));
    assert_eq!(validate(2, -1), Err(IndexError::InvalidArgument));
    assert_eq!(validate(400, 400), Err(IndexError::InvalidArgument));
}

#[test]
fn check_advance_carry()
{
    let mut index = [1, 2];
    let mut cursor = Some(1);
    let mut sum = 3;
    assert!(advance(&mut index, &mut cursor, &mut sum, 3));
    assert_eq!((index, cursor, sum), ([2, 0], Some(1), 2));

    let mut index = [3, 0];
    let mut cursor = Some(1);
    let mut sum = 3;
    assert!(!advance(&mut index, &mut cursor, &mut sum, 3));
    assert_eq!((index, cursor, sum), ([0, 0], Some(1), 0));
}
