pub mod classify;
pub mod range;

use tracing::{debug, span, trace, Level};

pub use classify::{first_divisor, is_prime};
pub use range::StrideRange;

/// How the candidates of one walk split between primes and composites.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub primes: i64,
    pub composites: i64,
}

impl Tally {
    pub fn visited(&self) -> i64 {
        self.primes + self.composites
    }
}

pub fn tally(range: StrideRange) -> Tally {
    let span = span!(Level::INFO, "count_primes");
    let _guard = span.enter();
    debug!(?range, "walking candidates");

    let mut tally = Tally::default();
    for candidate in range {
        match first_divisor(candidate) {
            Some(divisor) => {
                trace!(candidate, divisor, "composite");
                tally.composites += 1;
            }
            None => {
                trace!(candidate, "prime");
                tally.primes += 1;
            }
        }
    }

    debug!(
        primes = tally.primes,
        composites = tally.composites,
        "walk finished"
    );
    tally
}

pub fn count_primes(range: StrideRange) -> i64 {
    tally(range).primes
}

/// The figure the coprocessor program leaves in its `h` register.
pub fn count_composites(range: StrideRange) -> i64 {
    tally(range).composites
}
