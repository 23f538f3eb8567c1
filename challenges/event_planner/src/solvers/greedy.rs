use crate::catalog::Catalog;
use crate::solvers::{Selection, Solver};

/// Approximation: take activities by enjoyment per hour, best first, while they still fit.
///
/// No optimality guarantee. The selection is returned in acceptance order rather than
/// catalog order.
pub struct Greedy;

/// Enjoyment per hour. Activities that take no time score 0.
fn ratio(enjoyment: u32, time: u32) -> f64 {
    if time == 0 {
        0.0
    } else {
        enjoyment as f64 / time as f64
    }
}

impl Solver for Greedy {
    fn label(&self) -> &'static str {
        "GREEDY HEURISTIC"
    }

    fn solve(&self, catalog: &Catalog) -> Selection {
        let mut ranked: Vec<(f64, usize)> = catalog
            .activities()
            .iter()
            .enumerate()
            .map(|(i, a)| (ratio(a.enjoyment, a.time), i))
            .collect();

        // highest ratio first; sort_by is stable so equal ratios keep catalog order
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut time_left = catalog.max_time() as u64;
        let mut budget_left = catalog.max_budget().map(|b| b as u64);
        let mut chosen = Vec::new();

        for (_, i) in ranked {
            let activity = &catalog.activities()[i];
            let time = activity.time as u64;
            let cost = activity.cost as u64;
            if time > time_left || budget_left.is_some_and(|left| cost > left) {
                continue;
            }
            time_left -= time;
            if let Some(left) = budget_left.as_mut() {
                *left -= cost;
            }
            chosen.push(activity.clone());
        }

        Selection::from_activities(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Activity;

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(5, 2), 2.5);
        assert_eq!(ratio(7, 0), 0.0);
    }

    #[test]
    fn test_acceptance_order() {
        let catalog = Catalog::new(
            vec![
                Activity::new("Slow", 4, 0, 4),
                Activity::new("Quick", 1, 0, 3),
                Activity::new("Medium", 2, 0, 4),
            ],
            10,
            Some(10),
        );
        assert_eq!(
            Greedy.solve(&catalog).names(),
            vec!["Quick", "Medium", "Slow"]
        );
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::new(
            vec![
                Activity::new("First", 2, 0, 4),
                Activity::new("Second", 1, 0, 2),
                Activity::new("Third", 3, 0, 6),
            ],
            3,
            None,
        );
        assert_eq!(Greedy.solve(&catalog).names(), vec!["First", "Second"]);
    }

    #[test]
    fn test_can_miss_the_optimum() {
        // the best ratio item blocks the pair that would fill the time exactly
        let catalog = Catalog::new(
            vec![
                Activity::new("Tapas", 1, 0, 3),
                Activity::new("Concert", 5, 0, 10),
                Activity::new("Gallery", 5, 0, 10),
            ],
            10,
            None,
        );
        let selection = Greedy.solve(&catalog);
        assert_eq!(selection.names(), vec!["Tapas", "Concert"]);
        assert_eq!(selection.enjoyment, 13);
    }

    #[test]
    fn test_skipped_activities_are_not_revisited() {
        let catalog = Catalog::new(
            vec![
                Activity::new("Dinner", 1, 8, 5),
                Activity::new("Show", 1, 5, 4),
                Activity::new("Walk", 1, 0, 1),
            ],
            3,
            Some(10),
        );
        let selection = Greedy.solve(&catalog);
        assert_eq!(selection.names(), vec!["Dinner", "Walk"]);
        assert!(selection.is_feasible(&catalog));
    }

    #[test]
    fn test_zero_time_activity_ranks_last() {
        let catalog = Catalog::new(
            vec![Activity::new("Nap", 0, 0, 100), Activity::new("Run", 2, 0, 1)],
            2,
            None,
        );
        assert_eq!(Greedy.solve(&catalog).names(), vec!["Run", "Nap"]);
    }
}
