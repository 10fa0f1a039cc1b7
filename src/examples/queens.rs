//! The n-queens problem: one variable per column, whose value is the row of
//! that column's queen.

use crate::{
    error::Result,
    solver::{
        constraints::{abs_diff_not_equal::AbsDiffNotEqual, not_equal::NotEqual},
        problem::Problem,
    },
};

/// Builds the n-queens problem over `n` columns.
///
/// Distinct rows come from pairwise [`NotEqual`] constraints; distinct
/// diagonals from [`AbsDiffNotEqual`] with the column distance.
pub fn build_problem(n: usize) -> Result<Problem<()>> {
    let mut builder = Problem::builder(n);
    builder.set_uniform_domains(n);
    for a in 0..n {
        for b in (a + 1)..n {
            builder.install(NotEqual::constraint(a, b))?;
            builder.install(AbsDiffNotEqual::constraint(a, b, b - a))?;
        }
    }
    Ok(builder.build())
}

/// Checks that `rows` is a valid placement: one queen per column, no two
/// sharing a row or diagonal.
pub fn is_valid_placement(rows: &[usize]) -> bool {
    let n = rows.len();
    for a in 0..n {
        if rows[a] >= n {
            return false;
        }
        for b in (a + 1)..n {
            if rows[a] == rows[b] || rows[a].abs_diff(rows[b]) == b - a {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::solver::strategy::{BacktrackingSearch, ForwardCheckingSearch, SearchStrategy};

    use super::{build_problem, is_valid_placement};

    #[test]
    fn six_queens_has_a_valid_placement() {
        let _ = tracing_subscriber::fmt::try_init();
        let problem = build_problem(6).unwrap();

        let (bt, _) = BacktrackingSearch::new().solve(&problem, &()).unwrap();
        assert!(is_valid_placement(bt.unwrap().values()));

        let (fc, stats) = ForwardCheckingSearch::new().solve(&problem, &()).unwrap();
        assert!(is_valid_placement(fc.unwrap().values()));
        assert!(stats.nodes_visited > 0);
    }

    #[test]
    fn three_queens_is_unsat() {
        let problem = build_problem(3).unwrap();
        let (bt, _) = BacktrackingSearch::new().solve(&problem, &()).unwrap();
        assert!(bt.is_none());
        let (fc, _) = ForwardCheckingSearch::new().solve(&problem, &()).unwrap();
        assert!(fc.is_none());
    }

    #[test]
    fn both_strategies_are_deterministic() {
        let problem = build_problem(7).unwrap();
        let (first, _) = ForwardCheckingSearch::new().solve(&problem, &()).unwrap();
        let (second, _) = ForwardCheckingSearch::new().solve(&problem, &()).unwrap();
        assert_eq!(first, second);
    }
}
