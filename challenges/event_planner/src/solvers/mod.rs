// Solvers for the activity selection problem. Each one maps a read-only catalog to a
// feasible selection; the exact solvers agree on the optimal enjoyment.

pub mod dynamic;
pub mod exhaustive;
pub mod greedy;

use crate::catalog::{Activity, Catalog};

/// A subset of a catalog's activities together with their summed enjoyment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub activities: Vec<Activity>,
    pub enjoyment: u64,
}

impl Selection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a selection from chosen activities, summing their enjoyment.
    pub fn from_activities(activities: Vec<Activity>) -> Self {
        let enjoyment = activities.iter().map(|a| a.enjoyment as u64).sum();
        Self {
            activities,
            enjoyment,
        }
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn total_time(&self) -> u64 {
        self.activities.iter().map(|a| a.time as u64).sum()
    }

    pub fn total_cost(&self) -> u64 {
        self.activities.iter().map(|a| a.cost as u64).sum()
    }

    pub fn names(&self) -> Vec<&str> {
        self.activities.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn is_feasible(&self, catalog: &Catalog) -> bool {
        catalog.fits(self.total_time(), self.total_cost())
    }
}

pub trait Solver {
    /// Heading used for this solver's block in a report.
    fn label(&self) -> &'static str;

    fn solve(&self, catalog: &Catalog) -> Selection;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SolverKind {
    /// Enumerate every subset.
    Exhaustive,
    /// Exact dynamic programming over the resource budgets.
    Dynamic,
    /// Enjoyment-per-hour greedy approximation.
    Greedy,
}

impl SolverKind {
    pub const ALL: [SolverKind; 3] = [
        SolverKind::Exhaustive,
        SolverKind::Dynamic,
        SolverKind::Greedy,
    ];

    pub fn solver(&self) -> Box<dyn Solver> {
        match self {
            SolverKind::Exhaustive => Box::new(exhaustive::Exhaustive),
            SolverKind::Dynamic => Box::new(dynamic::Dynamic),
            SolverKind::Greedy => Box::new(greedy::Greedy),
        }
    }

    /// Whether the solver always returns the optimal enjoyment.
    pub fn is_exact(&self) -> bool {
        !matches!(self, SolverKind::Greedy)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    pub(crate) fn example_catalog() -> Catalog {
        Catalog::new(
            vec![
                Activity::new("A", 2, 3, 5),
                Activity::new("B", 3, 2, 6),
                Activity::new("C", 4, 1, 8),
            ],
            5,
            Some(5),
        )
    }

    fn random_catalog(rng: &mut SmallRng, with_budget: bool) -> Catalog {
        let n = rng.gen_range(0..=10);
        let activities = (0..n)
            .map(|i| {
                Activity::new(
                    format!("a{}", i),
                    rng.gen_range(0..=8),
                    rng.gen_range(0..=8),
                    rng.gen_range(0..=20),
                )
            })
            .collect();
        let budget = with_budget.then(|| rng.gen_range(0..=25));
        Catalog::new(activities, rng.gen_range(0..=25), budget)
    }

    #[test]
    fn test_selection_totals() {
        let catalog = example_catalog();
        let selection = Selection::from_activities(catalog.activities()[..2].to_vec());
        assert_eq!(selection.enjoyment, 11);
        assert_eq!(selection.total_time(), 5);
        assert_eq!(selection.total_cost(), 5);
        assert_eq!(selection.names(), vec!["A", "B"]);
        assert!(selection.is_feasible(&catalog));

        let too_much = Selection::from_activities(catalog.activities().to_vec());
        assert!(!too_much.is_feasible(&catalog));
    }

    #[test]
    fn test_worked_example() {
        let catalog = example_catalog();
        for kind in SolverKind::ALL {
            let selection = kind.solver().solve(&catalog);
            assert_eq!(selection.enjoyment, 11, "{:?}", kind);
            assert_eq!(selection.names(), vec!["A", "B"], "{:?}", kind);
        }
    }

    #[test]
    fn test_empty_catalog() {
        for budget in [None, Some(10)] {
            let catalog = Catalog::new(Vec::new(), 10, budget);
            for kind in SolverKind::ALL {
                assert_eq!(kind.solver().solve(&catalog), Selection::empty(), "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_single_activity_too_long() {
        let catalog = Catalog::new(vec![Activity::new("Cruise", 9, 1, 50)], 8, Some(100));
        for kind in SolverKind::ALL {
            assert_eq!(kind.solver().solve(&catalog), Selection::empty(), "{:?}", kind);
        }
    }

    #[test]
    fn test_solvers_agree_on_random_catalogs() {
        let mut rng = SmallRng::seed_from_u64(7);
        for round in 0..300 {
            let catalog = random_catalog(&mut rng, round % 2 == 0);
            let exhaustive = exhaustive::Exhaustive.solve(&catalog);
            let dynamic = dynamic::Dynamic.solve(&catalog);
            let greedy = greedy::Greedy.solve(&catalog);

            assert_eq!(exhaustive.enjoyment, dynamic.enjoyment, "{:?}", catalog);
            assert!(greedy.enjoyment <= dynamic.enjoyment, "{:?}", catalog);
            for selection in [&exhaustive, &dynamic, &greedy] {
                assert!(selection.is_feasible(&catalog), "{:?}", catalog);
                assert_eq!(
                    selection.enjoyment,
                    Selection::from_activities(selection.activities.clone()).enjoyment
                );
            }
        }
    }

    #[test]
    fn test_solvers_are_idempotent() {
        let mut rng = SmallRng::seed_from_u64(11);
        let catalog = random_catalog(&mut rng, true);
        let before = catalog.clone();
        for kind in SolverKind::ALL {
            let solver = kind.solver();
            assert_eq!(solver.solve(&catalog), solver.solve(&catalog));
        }
        assert_eq!(catalog, before);
    }
}
