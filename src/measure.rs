//! Wall-clock measurement and console reporting for the sort suite.

use std::time::{Duration, Instant};

use crate::{DataError, SortValue, Sorter};

/// Runs `op` once, returning its result together with the elapsed
/// wall-clock time.
pub fn time<R>(op: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = op();
    (result, start.elapsed())
}

/// Assigns a copy of `input` to `sorter`, sorts it and reports one
/// completion line and one timing line on stdout.
///
/// The timed region covers the assignment of the copy plus the sort.
pub fn measure_sort<T: SortValue>(
    sorter: &mut dyn Sorter<T>,
    input: &[T],
) -> Result<Duration, DataError> {
    let (outcome, elapsed) = time(|| -> Result<(), DataError> {
        sorter.set_data(input.to_vec())?;
        sorter.sort();
        Ok(())
    });
    outcome?;

    println!("{} sorted data", sorter.name());
    println!("{} took {:.6} seconds", sorter.name(), elapsed.as_secs_f64());

    Ok(elapsed)
}

/// Measures every sorter in order against its own copy of `input`.
pub fn run_suite<T: SortValue>(
    sorters: &mut [Box<dyn Sorter<T>>],
    input: &[T],
) -> Result<(), DataError> {
    println!("Starting sorting measurements");

    for sorter in sorters {
        measure_sort(sorter.as_mut(), input)?;
    }

    Ok(())
}
