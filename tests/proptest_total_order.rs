//! Property-based tests for total order enumeration over small dimensions and orders.

use std::collections::HashSet;

use proptest::prelude::*;

use totalorder::{lexicographic_rank, simplex_count, IndexError, TotalOrder};

/// Every tuple in [0, order]^dimension with sum <= order, built by brute force.
fn brute_force_simplex(dimension: usize, order: usize) -> HashSet<Vec<usize>>
{
    let mut all = vec![Vec::new()];
    for _ in 0..dimension
    {
        all = all
            .into_iter()
            .flat_map(|prefix: Vec<usize>|
            {
                (0..=order).map(move |v|
                {
                    let mut next = prefix.clone();
                    next.push(v);
                    next
                })
            })
            .collect();
    }
    all.into_iter().filter(|x| x.iter().sum::<usize>() <= order).collect()
}

proptest!
{
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn count_matches_closed_form(dimension in 1usize..6, order in 0usize..7)
    {
        let iterator = TotalOrder::new(dimension, order).unwrap();
        let expected = simplex_count(dimension, order).unwrap();
        prop_assert_eq!(iterator.total_count(), expected);
        prop_assert_eq!(iterator.count(), expected);
    }

    #[test]
    fn indices_stay_inside_simplex(dimension in 1usize..6, order in 0usize..7)
    {
        for index in TotalOrder::new(dimension, order).unwrap()
        {
            prop_assert_eq!(index.len(), dimension);
            prop_assert!(index.iter().all(|&v| v <= order));
            prop_assert!(index.iter().sum::<usize>() <= order);
        }
    }

    #[test]
    fn enumerates_exactly_the_simplex(dimension in 1usize..5, order in 0usize..6)
    {
        let produced: Vec<Vec<usize>> = TotalOrder::new(dimension, order).unwrap().collect();
        let unique: HashSet<Vec<usize>> = produced.iter().cloned().collect();
        prop_assert_eq!(unique.len(), produced.len());
        prop_assert_eq!(unique, brute_force_simplex(dimension, order));
    }

    #[test]
    fn order_is_lexicographic(dimension in 1usize..6, order in 0usize..7)
    {
        let produced: Vec<Vec<usize>> = TotalOrder::new(dimension, order).unwrap().collect();
        prop_assert!(produced.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rank_matches_position(dimension in 1usize..6, order in 0usize..7)
    {
        for (position, index) in TotalOrder::new(dimension, order).unwrap().enumerate()
        {
            prop_assert_eq!(lexicographic_rank(&index, order), Some(position));
        }
    }

    #[test]
    fn running_sum_tracks_current(dimension in 1usize..6, order in 0usize..7)
    {
        let mut iterator = TotalOrder::new(dimension, order).unwrap();
        while let Some(index) = iterator.try_next().unwrap()
        {
            prop_assert_eq!(iterator.current(), index.as_slice());
            prop_assert_eq!(iterator.current_sum(), index.iter().sum::<usize>());
        }
        prop_assert_eq!(iterator.try_next(), Err(IndexError::ExhaustedIterator));
    }

    #[test]
    fn size_hint_counts_down(dimension in 1usize..5, order in 0usize..6)
    {
        let mut iterator = TotalOrder::new(dimension, order).unwrap();
        let mut expected = iterator.total_count();
        prop_assert_eq!(iterator.len(), expected);
        while iterator.next().is_some()
        {
            expected -= 1;
            prop_assert_eq!(iterator.len(), expected);
        }
        prop_assert_eq!(expected, 0);
    }

    #[test]
    fn negative_arguments_are_rejected(dimension in -5i64..1, order in -5i64..0)
    {
        prop_assert_eq!(TotalOrder::new(dimension, 2), Err(IndexError::InvalidArgument));
        prop_assert_eq!(TotalOrder::new(2, order), Err(IndexError::InvalidArgument));
    }
}
