use num_traits::ToPrimitive;

///
/// Exact binomial coefficient C(n, k). Returns `None` if the result (or an
/// intermediate product) does not fit.
///
pub fn binomial(n: usize, k: usize) -> Option<usize>
{
    if k > n
    {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut value: u128 = 1;
    for i in 1..=k as u128
    {
        // value * (n - k + i) is always divisible by i here.
        value = value.checked_mul((n - k) as u128 + i)? / i;
    }
    value.to_usize()
}

///
/// Number of lattice points in {x in N^d : sum(x) <= p}, i.e. C(d + p, d).
///
pub fn simplex_count(dimension: usize, order: usize) -> Option<usize>
{
    binomial(dimension.checked_add(order)?, dimension)
}

///
/// Zero-based position of `index` in the lexicographic enumeration of the
/// simplex of the given order. `None` if the index lies outside the simplex or
/// the position does not fit.
///
pub fn lexicographic_rank(index: &[usize], order: usize) -> Option<usize>
{
    let mut budget = order;
    let mut rank: usize = 0;
    for (position, &value) in index.iter().enumerate()
    {
        let trailing = index.len() - position - 1;
        let remaining = budget.checked_sub(value)?;
        // Indices sharing the prefix but with a smaller value here:
        // sum over v < value of simplex_count(trailing, budget - v).
        let skipped = simplex_count(trailing + 1, budget)? - simplex_count(trailing + 1, remaining)?;
        rank = rank.checked_add(skipped)?;
        budget = remaining;
    }
    Some(rank)
}

#[test]
fn check_small_binomials()
{
    assert_eq!(binomial(0, 0), Some(1));
    assert_eq!(binomial(5, 2), Some(10));
    assert_eq!(binomial(5, 3), Some(10));
    assert_eq!(binomial(8, 3), Some(56));
    assert_eq!(binomial(3, 5), Some(0));
    assert_eq!(binomial(52, 5), Some(2_598_960));
}

#[test]
fn check_pascal_rule()
{
    for n in 1..40
    {
        for k in 1..n
        {
            assert_eq!(binomial(n, k), Some(binomial(n - 1, k - 1).unwrap() + binomial(n - 1, k).unwrap()));
        }
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn check_overflow()
{
    assert_eq!(binomial(67, 33), Some(14_226_520_737_620_288_370));
    assert_eq!(binomial(200, 100), None);
    assert_eq!(simplex_count(usize::MAX, 1), None);
}

#[test]
fn check_simplex_count()
{
    assert_eq!(simplex_count(2, 3), Some(10));
    assert_eq!(simplex_count(1, 2), Some(3));
    assert_eq!(simplex_count(4, 0), Some(1));
    assert_eq!(simplex_count(3, 5), Some(56));
}

#[test]
fn check_lexicographic_rank()
{
    let expected = [[0, 0], [0, 1], [0, 2], [0, 3], [1, 0], [1, 1], [1, 2], [2, 0], [2, 1], [3, 0]];
    for (position, index) in expected.iter().enumerate()
    {
        assert_eq!(lexicographic_rank(index, 3), Some(position));
    }
    assert_eq!(lexicographic_rank(&[2, 2], 3), None);
    assert_eq!(lexicographic_rank(&[0, 0, 0], 0), Some(0));
    assert_eq!(lexicographic_rank(&[5, 0, 0], 5), Some(55));
}
