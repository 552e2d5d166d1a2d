//! Random dataset generation for the measurement runs.

use rand::Rng;

use crate::DataError;

/// Produces `count` uniform random integers in `[low, high]`.
///
/// The bounds are fixed at construction; only the generated sequence
/// changes between [`DataGenerator::generate`] calls.
#[derive(Debug)]
pub struct DataGenerator {
    low: i64,
    high: i64,
    count: usize,
    data: Vec<i64>,
}

impl DataGenerator {
    pub fn new(low: i64, high: i64, count: usize) -> Result<Self, DataError> {
        if low > high {
            return Err(DataError::InvalidBounds { low, high });
        }

        Ok(Self {
            low,
            high,
            count,
            data: Vec::new(),
        })
    }

    /// Replaces the held sequence with `count` fresh draws.
    pub fn generate(&mut self) {
        let mut rng = rand::thread_rng();
        self.data = (0..self.count)
            .map(|_| rng.gen_range(self.low..=self.high))
            .collect();
    }

    /// The generated sequence, empty before the first `generate` call.
    pub fn data(&self) -> &[i64] {
        &self.data
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self {
            low: 0,
            high: 100,
            count: 20,
            data: Vec::new(),
        }
    }
}
