pub const START: i64 = 65 * 100 + 100000;
pub const END: i64 = START + 17000;
pub const STRIDE: i64 = 17;

/// Walks `start, start + stride, ...` up to and including `end`.
///
/// The walk stops when the cursor reaches exactly `end + stride`, so `stride`
/// has to divide `end - start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrideRange {
    next: i64,
    stop: i64,
    stride: i64,
}

impl StrideRange {
    pub const DEFAULT: StrideRange = StrideRange::new(START, END, STRIDE);

    pub const fn new(start: i64, end: i64, stride: i64) -> Self {
        debug_assert!(stride > 0 && end >= start && (end - start) % stride == 0);
        StrideRange {
            next: start,
            stop: end + stride,
            stride,
        }
    }
}

impl Default for StrideRange {
    fn default() -> Self {
        StrideRange::DEFAULT
    }
}

impl Iterator for StrideRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.next == self.stop {
            return None;
        }
        let current = self.next;
        self.next += self.stride;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = ((self.stop - self.next) / self.stride) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for StrideRange {}

impl std::iter::FusedIterator for StrideRange {}
