use rodcut_dp::{MemoSolver, RodSolver, SolveResult, TableSolver};

fn solve_both(length: i64, prices: &[i64]) -> (SolveResult, SolveResult) {
    (
        MemoSolver.solve(length, prices).unwrap(),
        TableSolver.solve(length, prices).unwrap(),
    )
}

fn cuts(result: &SolveResult) -> Vec<usize> {
    result.cuts.to_vec()
}

#[test]
fn empty_rod() {
    let (memo, table) = solve_both(0, &[]);
    for result in [memo, table] {
        assert_eq!(result.max_profit, 0);
        assert!(result.cuts.is_empty());
        assert_eq!(result.number_of_cuts, 0);
    }
}

#[test]
fn selling_whole_beats_any_partition() {
    let (memo, table) = solve_both(3, &[1, 3, 8]);
    for result in [memo, table] {
        assert_eq!(result.max_profit, 8);
        assert_eq!(cuts(&result), vec![3]);
        assert_eq!(result.number_of_cuts, 0);
    }
}

#[test]
fn canonical_tie_resolves_differently() {
    // 1+2+2 in any order is worth 12; no other partition reaches it.
    let (memo, table) = solve_both(5, &[2, 5, 7, 8, 10]);
    assert_eq!(memo.max_profit, 12);
    assert_eq!(table.max_profit, 12);

    // First found while scanning the first cut upward from 1.
    assert_eq!(cuts(&memo), vec![1, 2, 2]);
    // Equal pieces everywhere, so the larger first cut wins at each step.
    assert_eq!(cuts(&table), vec![2, 2, 1]);

    assert_eq!(memo.number_of_cuts, 2);
    assert_eq!(table.number_of_cuts, 2);
}

#[test]
fn unit_pieces_dominate() {
    let (memo, table) = solve_both(4, &[3, 5, 6, 7]);
    for result in [memo, table] {
        assert_eq!(result.max_profit, 12);
        assert_eq!(cuts(&result), vec![1, 1, 1, 1]);
        assert_eq!(result.number_of_cuts, 3);
    }
}

#[test]
fn table_prefers_more_pieces_over_first_found() {
    // {1, 5} and {2, 2, 2} are the only optimal multisets (15).
    let (memo, table) = solve_both(6, &[1, 5, 7, 9, 14, 14]);
    assert_eq!(memo.max_profit, 15);
    assert_eq!(table.max_profit, 15);
    assert_eq!(cuts(&memo), vec![1, 5]);
    assert_eq!(memo.number_of_cuts, 1);
    assert_eq!(cuts(&table), vec![2, 2, 2]);
    assert_eq!(table.number_of_cuts, 2);
}

#[test]
fn larger_first_cut_breaks_equal_piece_ties() {
    // [1, 2] and [2, 1] tie on profit and pieces.
    let (memo, table) = solve_both(3, &[1, 4, 5]);
    assert_eq!(memo.max_profit, 5);
    assert_eq!(table.max_profit, 5);
    assert_eq!(cuts(&memo), vec![1, 2]);
    assert_eq!(cuts(&table), vec![2, 1]);

    // [4], [1, 3], [3, 1] and [2, 2] all reach 10; among the two-piece
    // plans the table takes the largest first cut.
    let (memo, table) = solve_both(4, &[1, 5, 9, 10]);
    assert_eq!(memo.max_profit, 10);
    assert_eq!(table.max_profit, 10);
    assert_eq!(cuts(&memo), vec![1, 3]);
    assert_eq!(cuts(&table), vec![3, 1]);
}

#[test]
fn all_unit_pieces_when_everything_ties() {
    // Linear prices: every partition is optimal, most pieces wins in the table
    // and the smallest first cut wins in the memo.
    let (memo, table) = solve_both(4, &[1, 2, 3, 4]);
    assert_eq!(memo.max_profit, 4);
    assert_eq!(cuts(&memo), vec![1, 1, 1, 1]);
    assert_eq!(cuts(&table), vec![1, 1, 1, 1]);
}

#[test]
fn repeated_solves_are_identical() {
    let prices = [3, 6, 9, 12, 15, 18, 21, 24];
    for solver in [&MemoSolver as &dyn RodSolver, &TableSolver] {
        let first = solver.solve(8, &prices).unwrap();
        let second = solver.solve(8, &prices).unwrap();
        assert_eq!(first, second, "{} is not deterministic", solver.name());
    }
}

#[test]
fn prices_past_the_rod_length_are_ignored() {
    let (memo, table) = solve_both(2, &[1, 1, 1_000]);
    assert_eq!(memo.max_profit, 2);
    assert_eq!(table.max_profit, 2);
}
