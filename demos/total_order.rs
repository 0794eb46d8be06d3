use totalorder::{errors::IndexError, TotalOrder};

///
/// Prints every multi-index of the given dimension and order.
///
fn print_total_order(dimension: usize, order: usize) -> Result<(), IndexError>
{
    let iterator = TotalOrder::new(dimension, order)?;
    println!("dimension={dimension}, order={order}, count={}", iterator.total_count());
    for index in iterator
    {
        println!("{index:?}");
    }
    Ok(())
}

///
/// Collects the whole set before printing it.
///
fn print_collected(dimension: usize, order: usize) -> Result<(), IndexError>
{
    let iterator = TotalOrder::new(dimension, order)?;
    let max_indices = iterator.max_indices().to_vec();
    let indices: Vec<Vec<usize>> = iterator.collect();
    println!("collected {} indices, max per dimension {:?}", indices.len(), max_indices);
    for index in &indices
    {
        println!("{index:?}");
    }
    Ok(())
}

fn main() -> Result<(), IndexError>
{
    // RUST_LOG=totalorder=debug shows enumerator construction and state.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("Total order 1");
    print_total_order(4, 0)?;
    println!("\nTotal order 2");
    print_total_order(1, 2)?;
    println!("\nTotal order 3");
    print_total_order(3, 5)?;
    println!("\nTotal order 4");
    print_collected(3, 5)?;

    let mut iterator = TotalOrder::new(2, 3)?;
    iterator.nth(4);
    iterator.log_state();
    Ok(())
}
