use prettytable::{Cell, Row, Table};

use crate::solver::{
    engine::{ConstraintId, PerConstraintStats, SearchStats},
    problem::Problem,
};

/// Renders a per-constraint breakdown of a search run as a text table.
pub fn render_stats_table<D>(stats: &SearchStats, problem: &Problem<D>) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Evaluations"),
        Cell::new("Prunings"),
        Cell::new("Time / Call (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();

    sorted_stats.sort_by_key(|a| a.1.time_spent_micros);

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = problem.constraint(*constraint_id).descriptor();
        let avg_time = if constraint_stats.evaluations > 0 {
            constraint_stats.time_spent_micros as f64 / constraint_stats.evaluations as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.evaluations.to_string()),
            Cell::new(&constraint_stats.prunings.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                constraint_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use crate::solver::{
        constraints::not_equal::NotEqual,
        problem::Problem,
        strategy::{ForwardCheckingSearch, SearchStrategy},
    };

    use super::render_stats_table;

    #[test]
    fn table_names_the_constraints_that_ran() {
        let mut builder = Problem::builder(2);
        builder.set_uniform_domains(2);
        builder.install(NotEqual::constraint(0, 1)).unwrap();
        let problem = builder.build();

        let (solution, stats) = ForwardCheckingSearch::new().solve(&problem, &()).unwrap();
        assert!(solution.is_some());

        let rendered = render_stats_table(&stats, &problem);
        assert!(rendered.contains("not_equal"));
        assert!(rendered.contains("Evaluations"));
    }
}
