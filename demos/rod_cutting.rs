//! Example: solve a few rod-cutting instances with both strategies.
//!
//! Run with:
//! `cargo run --example rod_cutting`

use rodcut_dp::verify::crosscheck;
use rodcut_dp::RodInstance;

fn main() {
    let cases: [(&str, i64, &[i64]); 3] = [
        ("base case", 5, &[2, 5, 7, 8, 10]),
        ("selling whole is optimal", 3, &[1, 3, 8]),
        ("uniform cuts", 4, &[3, 5, 6, 7]),
    ];

    for (name, length, prices) in cases {
        println!("\n{name}: length={length}, prices={prices:?}");
        let instance = match RodInstance::new(length, prices) {
            Ok(instance) => instance,
            Err(err) => {
                eprintln!("  skipped: {err}");
                continue;
            }
        };
        match crosscheck(&instance) {
            Ok(cmp) => {
                for (label, result) in [("memo", &cmp.memo), ("table", &cmp.table)] {
                    println!(
                        "  {label:<5} profit={} cuts={:?} number_of_cuts={}",
                        result.max_profit,
                        &result.cuts[..],
                        result.number_of_cuts
                    );
                }
            }
            Err(err) => eprintln!("  failed: {err}"),
        }
    }
}
