use std::time::Instant;

use indicatif::ProgressBar;
use itertools::Itertools;

use range_sum_utils::Grid;

fn main() {
    let matrix = vec![
        vec![1, 2, 3, 4, 5],
        vec![6, 7, 8, 9, 10],
        vec![11, 12, 13, 14, 15],
        vec![16, 17, 18, 19, 20],
        vec![21, 22, 23, 24, 25],
    ];
    let grid = Grid::from_rows(&matrix).expect("Sample matrix is rectangular");
    let query = grid.in_range((0, 1), (1, 2)).expect("Sample rectangle is in bounds");

    println!("{}", query.brute_force_solution());
    println!("{}", query.better_solution());
    println!("{}", query.optimal_solution());

    // Cross-check the three strategies against each other over every
    // rectangle of a larger grid.
    let side = 24usize;
    let rows = (0..side)
        .map(|r| (0..side).map(|c| (side * r + c) as i64).collect())
        .collect_vec();
    let big = Grid::from_rows(&rows).expect("Generated matrix is rectangular");

    let rectangles = (0..side)
        .cartesian_product(0..side)
        .flat_map(|(tl_row, tl_col)| {
            (tl_row..side)
                .cartesian_product(tl_col..side)
                .map(move |br| ((tl_row, tl_col), br))
        })
        .collect_vec();
    let n_rectangles = rectangles.len();

    let bar = ProgressBar::new(n_rectangles as u64);
    let start_time = Instant::now();
    let mut disagreements = 0;
    for (top_left, bottom_right) in rectangles {
        let query = big.in_range(top_left, bottom_right).expect("Enumerated rectangle is in bounds");
        let (brute, better, optimal) = (
            query.brute_force_solution(),
            query.better_solution(),
            query.optimal_solution(),
        );
        if brute != better || brute != optimal {
            println!(
                "Failed: {:?}-{:?} (brute-force {}, row-prefix {}, summed-area {})",
                top_left, bottom_right, brute, better, optimal,
            );
            disagreements += 1;
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    let total_time = start_time.elapsed();

    println!(
        "Checked {} rectangles in {:?} ({:?} per rectangle), {} disagreements",
        n_rectangles,
        total_time,
        total_time / (n_rectangles as u32),
        disagreements,
    );
}
