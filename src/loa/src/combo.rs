//! Combination enumeration
//!
//! Lazy lexicographic k-combinations over index ranges. The search
//! driver treats enumeration order as part of its contract (ties keep
//! the first team found), so the order here is fixed: combinations are
//! emitted in lexicographic order of their index vectors, each exactly
//! once, and a fresh iterator always replays the same sequence.

/// Iterator over all k-combinations of the indices `0..n`
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // Find the rightmost index that can still move, then reset
        // everything after it to the run just above.
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - self.k {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..self.k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Exact `C(n, k)` without intermediate overflow for the sizes a roster
/// can reach.
///
/// Each step multiplies then divides, and the running value is always a
/// binomial coefficient, so the division is exact.
pub fn count_combinations(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result
}
