// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! k-subsets generation.

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; 8]; 53] {
    let mut t = [[0u32; 8]; 53];
    let mut n = 0;

    while n <= 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 8]; 53] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");
    NCKS[n][k] as usize
}

/// An iterator over the k-subsets of `0..n` in lexicographic order.
///
/// Each item is a slice of k ascending indices, the first subset is
/// `[0, 1, .., k-1]` and the last is `[n-k, .., n-1]`. To move to the next
/// subset the rightmost index that can still be incremented is incremented
/// and the indices that follow it are reset to consecutive values.
///
/// ```
/// # use showdown_eval::Combinations;
/// let mut subsets = Vec::new();
/// let mut combs = Combinations::new(4, 2);
/// while let Some(s) = combs.next_subset() {
///     subsets.push(s.to_vec());
/// }
/// assert_eq!(subsets, [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Creates a generator for the k-subsets of `0..n`.
    ///
    /// If `k > n` there are no subsets, if `k == 0` there is a single empty
    /// subset.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    /// Advances to the next subset and returns its indices.
    ///
    /// This doesn't allocate, use the [Iterator] implementation to get owned
    /// subsets.
    pub fn next_subset(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let k = self.indices.len();
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.done = true;
            return None;
        };

        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(&self.indices)
    }

    /// Calls `f` with each k-subset of `items`.
    pub fn for_each_subset<T: Copy, F>(items: &[T], k: usize, mut f: F)
    where
        F: FnMut(&[T]),
    {
        let mut subset = Vec::with_capacity(k);
        let mut combs = Combinations::new(items.len(), k);
        while let Some(indices) = combs.next_subset() {
            subset.clear();
            subset.extend(indices.iter().map(|&i| items[i]));
            f(&subset);
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_subset().map(<[usize]>::to_vec)
    }
}
