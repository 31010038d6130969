//! Custom cargo commands for sitesearch.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (default features and library-only)
//!   cargo xtask check     - Quick check
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run each fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: [&str; 3] = ["index_parsing", "search_queries", "score_calculation"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + weight table)
  test      Run all Rust tests, with and without the session feature
  check     Quick check (cargo check + clippy)
  bench     Run benchmarks
  fuzz      Run every fuzz target for 30 seconds (needs cargo-fuzz)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("sitesearch Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Verifying documented weight table...");
    verify_weight_table()?;
    println!("✓ Weight table matches constants\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Checking wasm bindings...");
    run_cargo(&["check", "--quiet", "--lib", "--no-default-features", "--features", "wasm"])?;
    println!("✓ wasm feature builds\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--lib", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Short fuzzing pass over every target
fn fuzz() -> Result<()> {
    for target in FUZZ_TARGETS {
        println!("Fuzzing {}...", target);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", "-max_total_time=30"])?;
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The module docs of `scoring/core.rs` carry a weight table. Make sure every
/// row agrees with the constant it documents.
fn verify_weight_table() -> Result<()> {
    let root = project_root()?;
    let source = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;

    let rows = [
        ("title_contains", "TITLE_CONTAINS_WEIGHT"),
        ("title_exact", "TITLE_EXACT_WEIGHT"),
        ("title_prefix", "TITLE_PREFIX_WEIGHT"),
        ("description", "DESCRIPTION_WEIGHT"),
        ("category", "CATEGORY_WEIGHT"),
        ("breadcrumb", "BREADCRUMB_WEIGHT"),
    ];

    for (rule, constant) in rows {
        let documented = extract_table_weight(&source, rule)
            .with_context(|| format!("No weight table row for `{}`", rule))?;
        let actual = extract_const(&source, constant)
            .with_context(|| format!("No constant {}", constant))?;
        if documented != actual {
            bail!(
                "Weight table says {}={} but {}={}",
                rule, documented, constant, actual
            );
        }
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<f64> {
    // Look for "pub const NAME: f64 = 3.0;"
    let prefix = format!("pub const {}: f64 =", name);
    content.lines().find_map(|line| {
        let rest = line.trim().strip_prefix(&prefix)?;
        rest.trim().trim_end_matches(';').parse().ok()
    })
}

fn extract_table_weight(content: &str, rule: &str) -> Option<f64> {
    // Look for "//! | `rule`  | condition | 3.0 |"
    let cell = format!("`{}`", rule);
    content.lines().find_map(|line| {
        let line = line.trim().strip_prefix("//!")?.trim();
        let cells: Vec<&str> = line.split('|').map(str::trim).collect();
        if cells.get(1) != Some(&cell.as_str()) {
            return None;
        }
        cells.get(3)?.parse().ok()
    })
}
