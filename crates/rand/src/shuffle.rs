//! Fisher–Yates shuffle

use crate::csprng::Csprng;
use crate::source::EntropySource;

impl<S: EntropySource> Csprng<S> {
    /// Permute `sequence` in place, uniformly over all orderings
    ///
    /// Walks `i` from the last index down to 1 and swaps `i` with a uniform
    /// `j` in `[0, i]`. Uniformity rests entirely on the bounded sampler
    /// being unbiased. Sequences of length 0 or 1 are left untouched and no
    /// entropy is consumed.
    pub fn shuffle<T>(&mut self, sequence: &mut [T]) {
        for i in (1..sequence.len()).rev() {
            let j = self.uniform_bounded_usize(i + 1);
            sequence.swap(i, j);
        }
    }
}

/// Shuffle `sequence` in place using the operating system CSPRNG
pub fn shuffle<T>(sequence: &mut [T]) {
    Csprng::os().shuffle(sequence)
}
