use clap::Parser;

use sort_measure_rs::generator::DataGenerator;
use sort_measure_rs::{all_sorters, measure, DataError};

/// Measures the classic comparison sorts against one shared random dataset.
#[derive(Debug, Parser)]
struct Args {
    /// Inclusive lower bound for generated values.
    #[arg(long, default_value_t = 0)]
    low: i64,

    /// Inclusive upper bound for generated values.
    #[arg(long, default_value_t = 2000)]
    high: i64,

    /// Number of values to generate.
    #[arg(long, default_value_t = 20_000)]
    count: usize,
}

fn main() -> Result<(), DataError> {
    let args = Args::parse();

    let mut generator = DataGenerator::new(args.low, args.high, args.count)?;
    generator.generate();

    measure::run_suite(&mut all_sorters::<i64>(), generator.data())
}
