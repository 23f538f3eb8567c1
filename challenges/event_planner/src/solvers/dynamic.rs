use crate::catalog::{Activity, Catalog};
use crate::solvers::{Selection, Solver};

/// Exact 0/1 knapsack over the time budget and, when present, the money budget.
///
/// Every layer of the table is kept so the chosen activities can be recovered by walking
/// back from the final cell. A time-only catalog uses a budget axis of width one and treats
/// every cost as zero, which reduces the table to `E[i][t]`.
pub struct Dynamic;

/// Number of cells the table for `catalog` needs, for callers that bound memory use.
pub fn table_cells(catalog: &Catalog) -> u128 {
    let layers = catalog.len() as u128 + 1;
    let times = catalog.max_time() as u128 + 1;
    let budgets = catalog.max_budget().map_or(1, |b| b as u128 + 1);
    layers * times * budgets
}

/// `E[i][t][c]`: best enjoyment from the first `i` activities within time `t` and budget `c`.
struct Table {
    cells: Vec<u64>,
    times: usize,
    budgets: usize,
}

impl Table {
    fn new(layers: usize, max_time: usize, max_budget: usize) -> Self {
        let times = max_time + 1;
        let budgets = max_budget + 1;
        Self {
            cells: vec![0; layers * times * budgets],
            times,
            budgets,
        }
    }

    #[inline(always)]
    fn index(&self, i: usize, t: usize, c: usize) -> usize {
        (i * self.times + t) * self.budgets + c
    }

    #[inline(always)]
    fn get(&self, i: usize, t: usize, c: usize) -> u64 {
        self.cells[self.index(i, t, c)]
    }

    #[inline(always)]
    fn set(&mut self, i: usize, t: usize, c: usize, value: u64) {
        let idx = self.index(i, t, c);
        self.cells[idx] = value;
    }
}

impl Solver for Dynamic {
    fn label(&self) -> &'static str {
        "DYNAMIC PROGRAMMING ALGORITHM"
    }

    fn solve(&self, catalog: &Catalog) -> Selection {
        let activities = catalog.activities();
        let n = activities.len();
        let max_time = catalog.max_time() as usize;
        let max_budget = catalog.max_budget().unwrap_or(0) as usize;
        let cost_of = |a: &Activity| match catalog.max_budget() {
            Some(_) => a.cost as usize,
            None => 0,
        };

        let mut table = Table::new(n + 1, max_time, max_budget);

        // layer 0 is all zeros: nothing chosen yet.
        for (i, activity) in (1..=n).zip(activities) {
            let time = activity.time as usize;
            let cost = cost_of(activity);
            let enjoyment = activity.enjoyment as u64;
            for t in 0..=max_time {
                for c in 0..=max_budget {
                    let skip = table.get(i - 1, t, c);
                    let best = if time <= t && cost <= c {
                        skip.max(table.get(i - 1, t - time, c - cost) + enjoyment)
                    } else {
                        skip
                    };
                    table.set(i, t, c, best);
                }
            }
        }

        // walk back from the final cell: activity i was taken iff its layer differs from the
        // previous one at the remaining budget.
        let (mut t, mut c) = (max_time, max_budget);
        let mut chosen = Vec::new();
        for i in (1..=n).rev() {
            if table.get(i, t, c) != table.get(i - 1, t, c) {
                let activity = &activities[i - 1];
                chosen.push(activity.clone());
                t -= activity.time as usize;
                c -= cost_of(activity);
            }
        }
        chosen.reverse();

        let selection = Selection::from_activities(chosen);
        debug_assert_eq!(selection.enjoyment, table.get(n, max_time, max_budget));
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_only() {
        // the classic book shop layout: prices as hours, pages as enjoyment
        let catalog = Catalog::new(
            vec![
                Activity::new("a", 4, 0, 5),
                Activity::new("b", 8, 0, 12),
                Activity::new("c", 5, 0, 8),
                Activity::new("d", 3, 0, 1),
            ],
            10,
            None,
        );
        let selection = Dynamic.solve(&catalog);
        assert_eq!(selection.enjoyment, 13);
        assert_eq!(selection.names(), vec!["a", "c"]);
    }

    #[test]
    fn test_budget_binds() {
        let activities = vec![
            Activity::new("Spa", 2, 90, 10),
            Activity::new("Museum", 2, 10, 6),
            Activity::new("Park", 2, 0, 4),
        ];
        let catalog = Catalog::new(activities.clone(), 4, Some(50));
        let selection = Dynamic.solve(&catalog);
        assert_eq!(selection.names(), vec!["Museum", "Park"]);
        assert_eq!(selection.enjoyment, 10);

        let unbounded = Catalog::new(activities, 4, None);
        assert_eq!(Dynamic.solve(&unbounded).names(), vec!["Spa", "Museum"]);
    }

    #[test]
    fn test_backtrack_skips_an_activity_the_prefix_can_match() {
        // {Y, Z} and {X} both reach 6. X adds nothing over the first two layers at the
        // final cell, so the walk back leaves it out.
        let catalog = Catalog::new(
            vec![
                Activity::new("Y", 1, 0, 3),
                Activity::new("Z", 1, 0, 3),
                Activity::new("X", 2, 0, 6),
            ],
            2,
            None,
        );
        let selection = Dynamic.solve(&catalog);
        assert_eq!(selection.names(), vec!["Y", "Z"]);
        assert_eq!(selection.enjoyment, 6);
    }

    #[test]
    fn test_zero_time_activities() {
        let catalog = Catalog::new(
            vec![Activity::new("Nap", 0, 0, 2), Activity::new("Film", 3, 12, 7)],
            0,
            Some(20),
        );
        let selection = Dynamic.solve(&catalog);
        assert_eq!(selection.names(), vec!["Nap"]);
    }

    #[test]
    fn test_table_cells() {
        let catalog = Catalog::new(vec![Activity::new("a", 1, 1, 1)], 9, Some(4));
        assert_eq!(table_cells(&catalog), 2 * 10 * 5);
        let catalog = Catalog::new(Vec::new(), 9, None);
        assert_eq!(table_cells(&catalog), 10);
    }
}
