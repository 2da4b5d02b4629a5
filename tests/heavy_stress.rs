#![cfg(feature = "heavy")]
use rand::{rngs::StdRng, Rng, SeedableRng};
use rodcut_dp::solvers::MemoSolver;
use rodcut_dp::verify::crosscheck;
use rodcut_dp::{PriceTable, RodInstance};

fn random_prices(rng: &mut StdRng, len: usize) -> Vec<u64> {
    (1..=len as u64)
        .map(|i| i * 3 + rng.gen_range(0..=2 * i))
        .collect()
}

#[test]
fn heavy_stress_long_rods_agree() {
    let mut rng = StdRng::seed_from_u64(123);
    for &len in &[2_000usize, 6_000] {
        let prices = random_prices(&mut rng, len);
        let instance = RodInstance::from_parts(len, PriceTable::new(prices)).unwrap();
        let cmp = crosscheck(&instance).unwrap();
        assert!(cmp.memo.is_consistent_with(len));
        assert!(cmp.table.is_consistent_with(len));
    }
}

#[test]
fn heavy_stress_deep_memo_descent() {
    // Unit prices force a full-depth chain of pending subproblems.
    let len = 30_000;
    let instance = RodInstance::from_parts(len, PriceTable::new(vec![1; len])).unwrap();
    let (result, stats) = MemoSolver.solve_with_stats(&instance).unwrap();
    assert_eq!(result.max_profit, len as u64);
    assert_eq!(stats.computed, len);
}
