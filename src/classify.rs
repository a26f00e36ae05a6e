use tracing::trace;

/// Smallest `j >= 2` with `j * j <= i` that divides `i`.
///
/// Values below 4 never enter the loop and so have no divisor, which makes
/// `is_prime` report them as prime. That includes 0 and 1.
pub fn first_divisor(i: i64) -> Option<i64> {
    let mut j: i64 = 2;
    while j * j <= i {
        if i % j == 0 {
            trace!(candidate = i, divisor = j, "divisor found");
            return Some(j);
        }
        j += 1;
    }
    None
}

pub fn is_prime(i: i64) -> bool {
    first_divisor(i).is_none()
}
