use criterion::{black_box, criterion_group, criterion_main, Criterion};
use totalorder::{const_generic::iterators::total_order::TotalOrder as FixedTotalOrder, IndexError, TotalOrder};

fn sum_dynamic(dimension: usize, order: usize) -> Result<usize, IndexError>
{
    Ok(TotalOrder::new(dimension, order)?.map(|index| index.iter().sum::<usize>()).sum())
}

fn sum_fixed<const D: usize>(order: usize) -> Result<usize, IndexError>
{
    Ok(FixedTotalOrder::<D>::new(order)?.map(|index| index.iter().sum::<usize>()).sum())
}

fn run_six_d(c: &mut Criterion)
{
    // C(16, 6) = 8008 indices per enumeration.
    c.bench_function("6d order 10 dynamic", |b| b.iter(|| sum_dynamic(black_box(6), black_box(10)).unwrap()));
    c.bench_function("6d order 10 const generic", |b| b.iter(|| sum_fixed::<6>(black_box(10)).unwrap()));
}

fn run_twenty_d(c: &mut Criterion)
{
    c.bench_function("20d order 3 dynamic", |b| b.iter(|| sum_dynamic(black_box(20), black_box(3)).unwrap()));
}

criterion_group!(benches, run_six_d, run_twenty_d);
criterion_main!(benches);
