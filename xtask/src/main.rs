use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the parallel sieve workspace",
    long_about = "A unified CLI for running the sieve, benchmarks, load tests,\n\
                  and CI checks in the parallel sieve workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sieve in release mode
    Run {
        /// Inclusive upper bound of the search
        #[arg(long, default_value_t = 100_000_000)]
        limit: usize,
        /// Marking threads per prime
        #[arg(long, default_value_t = 8)]
        workers: usize,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Benchmark HEAD as a baseline, then compare the working tree against it
    BenchCompare,
    /// Run CI checks (fmt, clippy, tests, release run, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Run the full-limit load test (ignored tests in sieve_core)
    LoadTest,
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run the sieve binary at the default limit
    Run,
    /// Run benchmarks
    Bench,
    /// Run check + run + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

/// Criterion baseline that `bench-compare` records from HEAD.
const BASELINE: &str = "sieve-baseline";
const STASH_MESSAGE: &str = "parallel-sieve: stash before baseline benchmark";

fn step(label: &str) {
    eprintln!("\n[xtask] {label}");
}

/// Spawn `program` with `args`, echoing the command line first.
fn spawn(program: &str, args: &[&str]) -> ExitStatus {
    eprintln!("[xtask] $ {program} {}", args.join(" "));
    match Command::new(program).args(args).status() {
        Ok(status) => status,
        Err(error) => {
            eprintln!("[xtask] could not start {program}: {error}");
            exit(127);
        }
    }
}

/// Spawn `program` and exit with its status code if it fails.
fn run(program: &str, args: &[&str]) {
    let status = spawn(program, args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_cargo(args: &[&str]) {
    run("cargo", args);
}

fn run_sieve(limit: usize, workers: usize) {
    let limit = limit.to_string();
    let workers = workers.to_string();
    run_cargo(&[
        "run",
        "-p",
        "sieve_cli",
        "--release",
        "--",
        "--limit",
        &limit,
        "--workers",
        &workers,
    ]);
}

fn bench(extra: &[&str]) {
    let mut args = vec!["bench", "-p", "sieve_core", "--bench", "performance"];
    if !extra.is_empty() {
        args.push("--");
        args.extend_from_slice(extra);
    }
    run_cargo(&args);
}

/// Benchmark the committed tree as a baseline, then the working tree
/// against it. Uncommitted changes are stashed only when there are any.
fn bench_compare() {
    let dirty = !spawn("git", &["diff", "--quiet", "HEAD"]).success();

    if dirty {
        step("Stashing uncommitted sieve changes");
        run("git", &["stash", "push", "-m", STASH_MESSAGE]);
    }

    step(&format!("Recording baseline '{BASELINE}' from HEAD"));
    bench(&["--save-baseline", BASELINE]);

    if dirty {
        step("Restoring uncommitted sieve changes");
        run("git", &["stash", "pop"]);
    }

    step(&format!("Comparing working tree against '{BASELINE}'"));
    bench(&["--baseline", BASELINE]);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test sieve_core");
    run_cargo(&["test", "-p", "sieve_core"]);

    step("Test sieve_cli");
    run_cargo(&["test", "-p", "sieve_cli"]);
}

fn ci_run() {
    step("Run parallel-sieve (limit 10^8, 8 workers)");
    run_sieve(100_000_000, 8);
}

fn ci_bench() {
    step("Run benchmarks");
    bench(&[]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { limit, workers } => run_sieve(limit, workers),
        Commands::Bench => bench(&[]),
        Commands::BenchCompare => bench_compare(),
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Run => ci_run(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_run();
                    ci_bench();
                }
            }
            eprintln!("\n[xtask] CI job passed.");
        }
        Commands::LoadTest => {
            run_cargo(&[
                "test",
                "-p",
                "sieve_core",
                "--release",
                "--test",
                "load_tests",
                "--",
                "--ignored",
            ]);
        }
    }
}
