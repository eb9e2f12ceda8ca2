/// Lexicographic K-subsets of the indices `0..N`.
///
/// ```text
/// [0,1,2,3,4] [0,1,2,3,5] [0,1,2,3,6] [0,1,2,4,5] ... [2,3,4,5,6]
/// ```
pub struct Combinations<const N: usize, const K: usize> {
    indices: [usize; K],
    remaining: usize,
}

/// The 21 ways to pick five of seven cards.
pub type Combinations7Choose5 = Combinations<7, 5>;

const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut acc = 1;
    let mut i = 0;
    while i < k {
        acc = acc * (n - i) / (i + 1);
        i += 1;
    }
    acc
}

impl<const N: usize, const K: usize> Combinations<N, K> {
    pub fn new() -> Self {
        let mut indices = [0; K];
        for (slot, i) in indices.iter_mut().zip(0..) {
            *slot = i;
        }
        Self { indices, remaining: binomial(N, K) }
    }

    fn step(&mut self) {
        // rightmost slot that can still move right
        let Some(i) = (0..K).rev().find(|&i| self.indices[i] < N - K + i) else {
            return;
        };
        self.indices[i] += 1;
        for j in i + 1..K {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl<const N: usize, const K: usize> Default for Combinations<N, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const K: usize> Iterator for Combinations<N, K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.indices;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.step();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize, const K: usize> ExactSizeIterator for Combinations<N, K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seven_choose_five_yields_21_distinct_sorted_subsets() {
        let combos: Vec<[usize; 5]> = Combinations7Choose5::new().collect();
        assert_eq!(combos.len(), 21);
        let unique: HashSet<[usize; 5]> = combos.iter().copied().collect();
        assert_eq!(unique.len(), 21);
        for c in &combos {
            assert!(c.iter().all(|&i| i < 7));
            assert!(c.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn first_and_last_subsets() {
        let combos: Vec<[usize; 5]> = Combinations7Choose5::new().collect();
        assert_eq!(combos.first(), Some(&[0, 1, 2, 3, 4]));
        assert_eq!(combos[1], [0, 1, 2, 3, 5]);
        assert_eq!(combos.last(), Some(&[2, 3, 4, 5, 6]));
    }

    #[test]
    fn lexicographic_order() {
        let combos: Vec<[usize; 5]> = Combinations7Choose5::new().collect();
        assert!(combos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn exact_size_and_exhaustion() {
        let mut iter = Combinations7Choose5::new();
        assert_eq!(iter.len(), 21);
        for _ in 0..21 {
            assert!(iter.next().is_some());
        }
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn other_shapes() {
        assert_eq!(Combinations::<4, 2>::new().count(), 6);
        assert_eq!(Combinations::<5, 5>::new().collect::<Vec<_>>(), vec![[0, 1, 2, 3, 4]]);
    }
}
