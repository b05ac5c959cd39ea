//! Cog Board Headless Harness
//!
//! Evaluates the bundled board layouts and sweeps randomized boards to check
//! engine invariants. Runs entirely in-process, no rendering beyond text.
//!
//! Usage:
//!   cargo run -p cogboard-simtest
//!   cargo run -p cogboard-simtest -- --verbose
//!   RUST_LOG=debug cargo run -p cogboard-simtest

use cogboard_logic::board::Board;
use cogboard_logic::cogs::Cog;
use cogboard_logic::layout::BoardLayout;
use cogboard_logic::patterns::BoostKind;
use cogboard_logic::rates::{Multipliers, Rates};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

// ── Bundled layouts ─────────────────────────────────────────────────────
const LAYOUTS_JSON: &str = include_str!("../../../data/layouts.json");

/// Boards swept per property in the randomized section.
const SWEEP_BOARDS: u64 = 200;

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(flatten)]
    layout: BoardLayout,
    expected_totals: Option<[f64; 3]>,
    expected_grid: Option<String>,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Cog Board Harness ===\n");

    let mut results = Vec::new();

    // 1. Bundled layouts
    results.extend(validate_layouts(verbose));

    // 2. Boost pattern tables
    results.extend(validate_patterns(verbose));

    // 3. Randomized invariants
    results.extend(validate_random_boards(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn close(a: Rates, b: Rates) -> bool {
    (a.build - b.build).abs() < 1e-6
        && (a.flaggy - b.flaggy).abs() < 1e-6
        && (a.exp - b.exp).abs() < 1e-6
}

// ── 1. Layouts ──────────────────────────────────────────────────────────

fn validate_layouts(verbose: bool) -> Vec<TestResult> {
    println!("--- Bundled Layouts ---");
    let mut results = Vec::new();

    let scenarios: Vec<Scenario> = match serde_json::from_str(LAYOUTS_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "layouts_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "layouts_not_empty".into(),
        passed: !scenarios.is_empty(),
        detail: format!("{} layouts loaded", scenarios.len()),
    });

    for scenario in &scenarios {
        let name = &scenario.layout.name;
        let mut board = match scenario.layout.build() {
            Ok(b) => b,
            Err(e) => {
                log::error!("Layout {} failed to build: {}", name, e);
                results.push(TestResult {
                    name: format!("{}_build", name),
                    passed: false,
                    detail: e.to_string(),
                });
                continue;
            }
        };

        let first = board.evaluate();
        let second = board.evaluate();
        results.push(TestResult {
            name: format!("{}_idempotent", name),
            passed: first == second,
            detail: format!("{:?} then {:?}", first.as_tuple(), second.as_tuple()),
        });

        if let Some([b, f, e]) = scenario.expected_totals {
            let expected = Rates::new(b, f, e);
            results.push(TestResult {
                name: format!("{}_totals", name),
                passed: close(first, expected),
                detail: format!(
                    "expected {:?}, got {:?}",
                    expected.as_tuple(),
                    first.as_tuple()
                ),
            });
        }

        if let Some(grid) = &scenario.expected_grid {
            let rendered = board.render_grid();
            results.push(TestResult {
                name: format!("{}_grid", name),
                passed: &rendered == grid,
                detail: format!("{:?}", rendered),
            });
        }

        if verbose {
            println!("  [{}]", name);
            for line in board.render().lines() {
                println!("    {}", line);
            }
        }
    }

    results
}

// ── 2. Patterns ─────────────────────────────────────────────────────────

fn validate_patterns(verbose: bool) -> Vec<TestResult> {
    println!("--- Boost Patterns ---");
    let mut results = Vec::new();

    let mut symbols: Vec<char> = BoostKind::ALL.iter().map(|k| k.symbol()).collect();
    symbols.extend(['.', 'c', 'p']);
    let count = symbols.len();
    symbols.sort_unstable();
    symbols.dedup();
    results.push(TestResult {
        name: "pattern_symbols_unique".into(),
        passed: symbols.len() == count,
        detail: format!("{} distinct symbols", symbols.len()),
    });

    for kind in BoostKind::ALL {
        let offsets = kind.pattern(8, 12).offsets();
        results.push(TestResult {
            name: format!("pattern_{:?}_no_origin", kind),
            passed: !offsets.is_empty() && !offsets.contains(&(0, 0)),
            detail: format!("{} offsets", offsets.len()),
        });
        if verbose {
            println!("  {:>2} {:15} {:?}", kind.symbol(), kind.label(), offsets);
        }
    }

    results
}

// ── 3. Randomized invariants ────────────────────────────────────────────

fn random_cog(rng: &mut StdRng, height: usize, width: usize, serial: usize) -> Cog {
    let rate = |rng: &mut StdRng| rng.gen_range(0..200) as f64;
    let base = Rates::new(rate(rng), rate(rng), rate(rng));
    match rng.gen_range(0..10) {
        0 => Cog::empty(),
        1 => Cog::player(format!("P{}", serial), base.build, base.flaggy, base.exp),
        2..=5 => Cog::new(base.build, base.flaggy, base.exp),
        _ => {
            let kind = BoostKind::ALL[rng.gen_range(0..BoostKind::ALL.len())];
            let mult = Multipliers::new_unchecked(
                1.0 + rng.gen_range(0..8) as f64 * 0.25,
                1.0 + rng.gen_range(0..8) as f64 * 0.25,
                1.0 + rng.gen_range(0..8) as f64 * 0.25,
            );
            Cog::boosted(kind.pattern(height, width), base, mult)
        }
    }
}

fn random_board(seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let height = rng.gen_range(1..=10);
    let width = rng.gen_range(1..=14);
    let mut board = Board::new(height, width, rng.gen_bool(0.5));
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if rng.gen_bool(0.6) {
                board.unlock(x, y);
            }
        }
    }
    let placements = rng.gen_range(0..height * width * 2);
    for serial in 0..placements {
        let x = rng.gen_range(-2..width as i32 + 2);
        let y = rng.gen_range(-2..height as i32 + 2);
        let cog = random_cog(&mut rng, height, width, serial);
        board.place(x, y, cog);
    }
    board
}

fn validate_random_boards(_verbose: bool) -> Vec<TestResult> {
    println!("--- Randomized Boards ---");
    let mut results = Vec::new();

    let mut not_idempotent = 0;
    let mut player_exp_leaks = 0;
    let mut empty_in_storage = 0;
    let mut clear_failures = 0;
    let mut invalid_place_mutations = 0;

    for seed in 0..SWEEP_BOARDS {
        let mut board = random_board(seed);

        let first = board.evaluate();
        if first != board.evaluate() {
            not_idempotent += 1;
        }

        let non_player_exp: f64 = board
            .cells()
            .filter(|&(x, y, cog)| board.is_valid_cell(x as i32, y as i32) && !cog.is_player())
            .map(|(_, _, cog)| cog.current_rates().exp)
            .sum();
        if (first.exp - non_player_exp).abs() > 1e-6 {
            player_exp_leaks += 1;
        }

        if board.storage().iter().any(Cog::is_empty) {
            empty_in_storage += 1;
        }

        let grid_before = board.render_grid();
        let stored_before = board.storage().len();
        board.place(-1, 0, Cog::new(1.0, 1.0, 1.0));
        board.place(board.width() as i32, 0, Cog::new(1.0, 1.0, 1.0));
        let locked_cell = board
            .cells()
            .find(|&(x, y, _)| !board.is_valid_cell(x as i32, y as i32))
            .map(|(x, y, _)| (x as i32, y as i32));
        if let Some((x, y)) = locked_cell {
            board.place(x, y, Cog::new(1.0, 1.0, 1.0));
        }
        if board.render_grid() != grid_before || board.storage().len() != stored_before {
            invalid_place_mutations += 1;
        }

        let all_unlocked = board.unlocked_count() == board.height() * board.width();
        board.clear();
        let cleared_ok = board.totals() == Rates::ZERO
            && board.evaluate() == Rates::ZERO
            && (!all_unlocked || board.is_empty());
        if !cleared_ok {
            clear_failures += 1;
        }
    }

    results.push(TestResult {
        name: "random_evaluate_idempotent".into(),
        passed: not_idempotent == 0,
        detail: format!("{}/{} boards differed between runs", not_idempotent, SWEEP_BOARDS),
    });
    results.push(TestResult {
        name: "random_player_exp_excluded".into(),
        passed: player_exp_leaks == 0,
        detail: format!("{} boards counted player exp", player_exp_leaks),
    });
    results.push(TestResult {
        name: "random_storage_non_empty".into(),
        passed: empty_in_storage == 0,
        detail: format!("{} boards stored an empty cog", empty_in_storage),
    });
    results.push(TestResult {
        name: "random_invalid_place_noop".into(),
        passed: invalid_place_mutations == 0,
        detail: format!("{} boards mutated by invalid placement", invalid_place_mutations),
    });
    results.push(TestResult {
        name: "random_clear_zeroes".into(),
        passed: clear_failures == 0,
        detail: format!("{} boards not cleared", clear_failures),
    });

    results
}
