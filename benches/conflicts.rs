//! Benchmarks for conflict queries.
//!
//! Measures:
//! - Full-board queen check on a clear board (worst case, no short-circuit)
//! - Full-board queen check on a board with an early row conflict
//! - Per-cell queen check over every cell (what a renderer does per frame)
//! - Conflict report construction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use queens_conflicts::conflicts::MovementRule;
use queens_conflicts::core::Board;

/// Boards of side `n` holding a non-attacking queen placement.
///
/// Uses the `2i+1 mod n` staircase, which is conflict-free when `n`
/// is coprime to 6.
fn clear_board(n: usize) -> Board {
    let mut board = Board::empty(n);
    for row in 0..n {
        let col = (2 * row + 1) % n;
        board.toggle(row, col).unwrap();
    }
    assert!(
        !board.conflicts().has_any_queens_conflicts(),
        "staircase on n = {n} is not conflict-free"
    );
    board
}

fn bench_any_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_any_queens_conflicts");

    for n in [5, 11, 25, 49] {
        let clear = clear_board(n);
        group.bench_with_input(BenchmarkId::new("clear", n), &clear, |b, board| {
            b.iter(|| black_box(board.conflicts().has_any_queens_conflicts()))
        });

        let mut early = Board::empty(n);
        early.toggle(0, 0).unwrap();
        early.toggle(0, n - 1).unwrap();
        group.bench_with_input(BenchmarkId::new("row_conflict", n), &early, |b, board| {
            b.iter(|| black_box(board.conflicts().has_any_queens_conflicts()))
        });
    }

    group.finish();
}

fn bench_per_cell(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_any_queen_conflicts_on");

    for n in [5, 11, 25] {
        let board = clear_board(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| {
                let engine = board.conflicts();
                let mut hits = 0usize;
                for row in 0..board.n() {
                    for col in 0..board.n() {
                        if engine.has_any_queen_conflicts_on(row, col).unwrap_or(false) {
                            hits += 1;
                        }
                    }
                }
                black_box(hits)
            })
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    for n in [11, 25] {
        // Every cell on the main diagonal: one long conflicting line.
        let mut board = Board::empty(n);
        for i in 0..n {
            board.toggle(i, i).unwrap();
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| black_box(board.conflicts().report(MovementRule::Queen)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_any_queens, bench_per_cell, bench_report);
criterion_main!(benches);
