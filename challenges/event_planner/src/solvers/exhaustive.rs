use crate::catalog::Catalog;
use crate::solvers::{Selection, Solver};

/// Tries every subset, smallest first. Exponential, so only usable on small catalogs.
pub struct Exhaustive;

impl Solver for Exhaustive {
    fn label(&self) -> &'static str {
        "BRUTE FORCE ALGORITHM"
    }

    fn solve(&self, catalog: &Catalog) -> Selection {
        let activities = catalog.activities();
        let (best, _) = (0..=activities.len())
            .flat_map(|size| Combinations::new(activities.len(), size))
            .filter_map(|subset| {
                let (time, cost, enjoyment) =
                    subset.iter().fold((0u64, 0u64, 0u64), |(t, c, e), &i| {
                        let a = &activities[i];
                        (t + a.time as u64, c + a.cost as u64, e + a.enjoyment as u64)
                    });
                catalog.fits(time, cost).then_some((subset, enjoyment))
            })
            // strict comparison: the first subset to reach a maximum is the one kept
            .fold((Vec::new(), 0u64), |best, candidate| {
                if candidate.1 > best.1 { candidate } else { best }
            });

        Selection::from_activities(best.into_iter().map(|i| activities[i].clone()).collect())
    }
}

/// Index combinations of `size` out of `n`, in lexicographic order.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    fn new(n: usize, size: usize) -> Self {
        Self {
            n,
            indices: (0..size).collect(),
            done: size > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // advance the rightmost index that still has room, then reset everything after it.
        let size = self.indices.len();
        match (0..size).rev().find(|&i| self.indices[i] < self.n - size + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..size {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}
