use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nodus::{
    examples::{queens, sudoku},
    BacktrackingSearch, ForwardCheckingSearch, SearchStrategy,
};

fn bench_n_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_queens");

    for n in [6usize, 8, 10] {
        let problem = queens::build_problem(n).unwrap();

        group.bench_with_input(BenchmarkId::new("backtracking", n), &n, |b, _| {
            b.iter(|| {
                let (solution, _) = BacktrackingSearch::new()
                    .solve(black_box(&problem), &())
                    .unwrap();
                black_box(solution)
            })
        });

        group.bench_with_input(BenchmarkId::new("forward_checking", n), &n, |b, _| {
            b.iter(|| {
                let (solution, _) = ForwardCheckingSearch::new()
                    .solve(black_box(&problem), &())
                    .unwrap();
                black_box(solution)
            })
        });
    }

    group.finish();
}

fn bench_sudoku(c: &mut Criterion) {
    let puzzle: sudoku::Grid = [
        [5, 3, 0, 0, 7, 0, 0, 0, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 0, 0, 0, 8, 0, 0, 7, 9],
    ];
    let problem = sudoku::build_problem(&puzzle).unwrap();

    c.bench_function("sudoku/forward_checking", |b| {
        b.iter(|| {
            let (solution, _) = ForwardCheckingSearch::new()
                .solve(black_box(&problem), &())
                .unwrap();
            black_box(solution)
        })
    });
}

criterion_group!(benches, bench_n_queens, bench_sudoku);
criterion_main!(benches);
