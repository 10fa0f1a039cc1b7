//! A 9×9 sudoku model: one variable per cell, domain values `0..9` standing
//! for the digits `1..=9`.
//!
//! Givens become unary [`FixedValue`] constraints, which the
//! forward-checking solver's unary seeding collapses before the first
//! search frame. Row, column, and box disequalities are expanded pairwise
//! so forward checking can prune through them.

use crate::{
    error::Result,
    solver::{
        assignment::Assignment,
        constraints::{all_different::all_different, fixed_value::FixedValue},
        problem::Problem,
    },
};

/// A puzzle or solution grid of digits; `0` marks an empty cell.
pub type Grid = [[usize; 9]; 9];

fn cell(row: usize, col: usize) -> usize {
    row * 9 + col
}

/// Builds the CSP for `puzzle`.
pub fn build_problem(puzzle: &Grid) -> Result<Problem<()>> {
    let mut builder = Problem::builder(81);
    builder.set_uniform_domains(9);

    for (row, digits) in puzzle.iter().enumerate() {
        for (col, &digit) in digits.iter().enumerate() {
            if digit != 0 {
                builder.install(FixedValue::constraint(cell(row, col), digit - 1))?;
            }
        }
    }

    for row in 0..9 {
        let vars: Vec<_> = (0..9).map(|col| cell(row, col)).collect();
        builder.install_all(all_different(&vars))?;
    }
    for col in 0..9 {
        let vars: Vec<_> = (0..9).map(|row| cell(row, col)).collect();
        builder.install_all(all_different(&vars))?;
    }
    for band in 0..3 {
        for stack in 0..3 {
            let vars: Vec<_> = (0..3)
                .flat_map(|r| (0..3).map(move |c| cell(band * 3 + r, stack * 3 + c)))
                .collect();
            builder.install_all(all_different(&vars))?;
        }
    }

    Ok(builder.build())
}

/// Converts a complete assignment back into a digit grid.
pub fn solution_to_grid(solution: &Assignment) -> Grid {
    let mut grid = [[0; 9]; 9];
    for (row, digits) in grid.iter_mut().enumerate() {
        for (col, digit) in digits.iter_mut().enumerate() {
            *digit = solution.get(cell(row, col)) + 1;
        }
    }
    grid
}

/// Verifies that `solution` is a complete, legal grid that respects every
/// given of `puzzle`.
pub fn is_valid_solution(puzzle: &Grid, solution: &Grid) -> bool {
    for row in 0..9 {
        for col in 0..9 {
            if puzzle[row][col] != 0 && puzzle[row][col] != solution[row][col] {
                return false;
            }
        }
    }

    for i in 0..9 {
        let mut row_digits = std::collections::HashSet::new();
        let mut col_digits = std::collections::HashSet::new();
        for j in 0..9 {
            let r = solution[i][j];
            let c = solution[j][i];
            if r == 0 || c == 0 || !row_digits.insert(r) || !col_digits.insert(c) {
                return false;
            }
        }
    }

    for band in 0..3 {
        for stack in 0..3 {
            let mut box_digits = std::collections::HashSet::new();
            for r in 0..3 {
                for c in 0..3 {
                    if !box_digits.insert(solution[band * 3 + r][stack * 3 + c]) {
                        return false;
                    }
                }
            }
        }
    }
    true
}


#[cfg(test)]
mod prop_tests {
    use proptest::{
        prelude::*,
        strategy::{Just, NewTree, Strategy},
        test_runner::TestRunner,
    };
    use sudoku::Sudoku;

    use crate::solver::strategy::{ForwardCheckingSearch, SearchStrategy};

    use super::{build_problem, is_valid_solution, solution_to_grid, Grid};

    fn bytes_to_grid(bytes: &[u8; 81]) -> Grid {
        let mut grid = [[0usize; 9]; 9];
        for (index, &digit) in bytes.iter().enumerate() {
            grid[index / 9][index % 9] = digit as usize;
        }
        grid
    }

    #[derive(Debug, Clone)]
    struct SudokuGenerationStrategy;

    impl Strategy for SudokuGenerationStrategy {
        type Tree = <Just<(Grid, Grid)> as Strategy>::Tree;
        type Value = (Grid, Grid);

        fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
            let solved = Sudoku::generate_solved_with_rng(runner.rng());
            let puzzle = Sudoku::generate_with_symmetry_and_rng_from(
                solved,
                sudoku::Symmetry::None,
                runner.rng(),
            );

            let solved_grid = bytes_to_grid(&solved.to_bytes());
            let puzzle_grid = bytes_to_grid(&puzzle.to_bytes());

            Just((puzzle_grid, solved_grid)).new_tree(runner)
        }
    }

    proptest! {
        #[ignore]
        #[test]
        fn can_solve_generated_puzzles((puzzle, _key) in SudokuGenerationStrategy) {
            let problem = build_problem(&puzzle).unwrap();
            let (solution, _) = ForwardCheckingSearch::new().solve(&problem, &()).unwrap();

            let solution = solution.expect("generated puzzles are satisfiable");
            let grid = solution_to_grid(&solution);
            prop_assert!(is_valid_solution(&puzzle, &grid));
        }
    }
}
