//! Input patterns shared by the conformance tests and the benches.
//!
//! All randomness is derived from one process-wide seed so a failing run can
//! be reproduced by setting `OVERRIDE_SEED`.

use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

/// The seed used by every pattern in this process.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(value) => value.parse().expect("OVERRIDE_SEED must be a u64"),
        Err(_) => thread_rng().gen(),
    })
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// `len` independent uniform values over the full `i64` range.
pub fn random(len: usize) -> Vec<i64> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// `len` uniform values drawn from `range`. Narrow ranges produce inputs
/// with many duplicates.
pub fn random_uniform(len: usize, range: RangeInclusive<i64>) -> Vec<i64> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipfian distributed values, most of the mass on a handful of keys.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i64> {
    if len == 0 {
        return Vec::new();
    }
    let mut rng = new_rng();
    let distribution = ZipfDistribution::new(len, exponent).expect("invalid zipf parameters");
    (0..len).map(|_| distribution.sample(&mut rng) as i64).collect()
}

pub fn ascending(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}

pub fn descending(len: usize) -> Vec<i64> {
    (0..len as i64).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i64> {
    vec![66; len]
}
