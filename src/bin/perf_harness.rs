use std::env;
use std::hint::black_box;
use std::process;
use std::time::Instant;

use monobound_search::{
    AdaptiveSearch, Checks, boundless_binary_search, breaking_linear_search,
    doubletapped_binary_search, linear_search, monobound_binary_search,
    monobound_interpolated_search, monobound_quaternary_search, monobound_search_by,
    standard_binary_search, tripletapped_binary_search,
};

const DEFAULT_SEED: u64 = 0x1234_5678_9ABC_DEF0;
const DEFAULT_LEN: usize = 100_000;
const DEFAULT_QUERIES: usize = 10_000;
const DEFAULT_RUNS: usize = 100;
const DEFAULT_DENSITY: u64 = 10;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Bench {
    Linear,
    BreakingLinear,
    Standard,
    Boundless,
    Doubletapped,
    Monobound,
    Tripletapped,
    Quaternary,
    Interpolated,
    Adaptive,
    MonoboundBy,
}

const BENCHES: &[(&str, Bench)] = &[
    ("linear", Bench::Linear),
    ("breaking_linear", Bench::BreakingLinear),
    ("standard", Bench::Standard),
    ("boundless", Bench::Boundless),
    ("doubletapped", Bench::Doubletapped),
    ("monobound", Bench::Monobound),
    ("tripletapped", Bench::Tripletapped),
    ("quaternary", Bench::Quaternary),
    ("interpolated", Bench::Interpolated),
    ("adaptive", Bench::Adaptive),
    ("monobound_by", Bench::MonoboundBy),
];

#[derive(Clone, Copy)]
struct Config {
    bench: Bench,
    len: usize,
    queries: usize,
    runs: usize,
    seed: u64,
    density: u64,
    sequential: bool,
    verify: bool,
    report: bool,
}

type SearchFn = fn(&[i32], i32, &mut Checks) -> Option<usize>;

fn main() {
    let config = match parse_args() {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            print_usage(&program_name());
            process::exit(2);
        }
    };

    if config.verify {
        verify_bench(config.bench);
    }

    run_bench(config);
}

fn parse_args() -> Result<Config, String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "perf_harness".to_string());

    let mut bench = None;
    let mut len = None;
    let mut queries = None;
    let mut runs = None;
    let mut seed = DEFAULT_SEED;
    let mut density = DEFAULT_DENSITY;
    let mut sequential = false;
    let mut verify = false;
    let mut report = true;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bench" => {
                let name = args.next().ok_or("--bench requires a value")?;
                let parsed = parse_bench(&name).ok_or_else(|| format!("unknown bench: {name}"))?;
                bench = Some(parsed);
            }
            "--len" => {
                let value = args.next().ok_or("--len requires a value")?;
                len = Some(parse_usize(&value, "--len")?);
            }
            "--queries" => {
                let value = args.next().ok_or("--queries requires a value")?;
                queries = Some(parse_usize(&value, "--queries")?);
            }
            "--runs" => {
                let value = args.next().ok_or("--runs requires a value")?;
                runs = Some(parse_usize(&value, "--runs")?);
            }
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                seed = parse_u64(&value, "--seed")?;
            }
            "--density" => {
                let value = args.next().ok_or("--density requires a value")?;
                density = parse_u64(&value, "--density")?.max(1);
            }
            "--sequential" => sequential = true,
            "--random" => sequential = false,
            "--verify" => verify = true,
            "--report" => report = true,
            "--no-report" => report = false,
            "--list" => {
                list_benches();
                process::exit(0);
            }
            "-h" | "--help" => {
                print_usage(&program);
                process::exit(0);
            }
            _ => return Err(format!("unknown argument: {arg}")),
        }
    }

    let bench = bench.ok_or("missing --bench")?;

    Ok(Config {
        bench,
        len: len.unwrap_or(DEFAULT_LEN),
        queries: queries.unwrap_or(DEFAULT_QUERIES),
        runs: runs.unwrap_or(DEFAULT_RUNS),
        seed,
        density,
        sequential,
        verify,
        report,
    })
}

fn program_name() -> String {
    env::args()
        .next()
        .unwrap_or_else(|| "perf_harness".to_string())
}

fn print_usage(program: &str) {
    eprintln!(
        "\
Usage:
  {program} --bench <name> [--len N] [--queries N] [--runs N] [--seed N] [--density N] [--sequential] [--verify]
  {program} --list

Options:
  --bench <name>   Search variant to run (see --list)
  --len N          Array size (default: 100000)
  --queries N      Lookups per run (default: 10000)
  --runs N         Runs; the fastest is reported (default: 100)
  --seed N         RNG seed (default: 0x123456789ABCDEF0)
  --density N      Average gap between consecutive elements (default: 10)
  --sequential     In-order query stream instead of random access
  --random         Random-access query stream (default)
  --verify         Run a quick correctness check before benchmarking
  --report         Print the result line (default)
  --no-report      Suppress output, timing only
  --list           Show available benches
"
    );
}

fn list_benches() {
    for (name, _) in BENCHES {
        println!("{name}");
    }
}

fn parse_bench(name: &str) -> Option<Bench> {
    BENCHES
        .iter()
        .find(|(bench_name, _)| *bench_name == name)
        .map(|&(_, bench)| bench)
}

fn bench_name(bench: Bench) -> &'static str {
    BENCHES
        .iter()
        .find(|&&(_, b)| b == bench)
        .map(|&(name, _)| name)
        .unwrap_or("unknown")
}

fn parse_usize(value: &str, flag: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{flag} expects a non-negative integer"))
}

fn parse_u64(value: &str, flag: &str) -> Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|_| format!("{flag} expects a non-negative integer"))
}

#[inline]
fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

/// Ascending array built from cumulative random gaps in `[0, 2 * density)`,
/// so the average gap equals `density` and duplicates occur when a gap is 0.
fn make_sorted_values(len: usize, density: u64, seed: u64) -> Vec<i32> {
    let mut state = seed;
    let mut val = 0i64;
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        val += (next_u64(&mut state) % (density * 2)) as i64;
        values.push(val.min(i32::MAX as i64) as i32);
    }
    values
}

/// Random-access keys over the populated value range plus one density step,
/// so both hits and misses occur.
fn make_random_queries(values: &[i32], count: usize, density: u64, seed: u64) -> Vec<i32> {
    let top = (values.last().copied().unwrap_or(0) as u64 + density).max(1);
    let mut state = seed;
    let mut queries = Vec::with_capacity(count);
    for _ in 0..count {
        queries.push((next_u64(&mut state) % top) as i32);
    }
    queries
}

/// In-order keys advancing by random steps, the access pattern the adaptive
/// variant is built for.
fn make_sequential_queries(values: &[i32], count: usize, density: u64, seed: u64) -> Vec<i32> {
    let top = (values.last().copied().unwrap_or(0) as u64 + density).max(1);
    let mut state = seed;
    let mut plus = 0u64;
    let mut queries = Vec::with_capacity(count);
    for _ in 0..count {
        plus += next_u64(&mut state) % (density * 10);
        queries.push((plus % top) as i32);
    }
    queries
}

fn make_queries(values: &[i32], config: &Config) -> Vec<i32> {
    if config.sequential {
        make_sequential_queries(values, config.queries, config.density, config.seed ^ 1)
    } else {
        make_random_queries(values, config.queries, config.density, config.seed ^ 1)
    }
}

struct RunResult {
    hits: u64,
    misses: u64,
    checks: u64,
    best_ns: u128,
}

impl RunResult {
    fn empty() -> Self {
        Self {
            hits: 0,
            misses: 0,
            checks: 0,
            best_ns: u128::MAX,
        }
    }

    fn keep_fastest(&mut self, hits: u64, misses: u64, checks: u64, elapsed_ns: u128) {
        if elapsed_ns < self.best_ns {
            *self = Self {
                hits,
                misses,
                checks,
                best_ns: elapsed_ns,
            };
        }
    }
}

fn run_bench(config: Config) {
    let values = make_sorted_values(config.len, config.density, config.seed);
    let queries = make_queries(&values, &config);

    let result = match config.bench {
        Bench::Linear => run_indexed(&values, &queries, config.runs, linear_search),
        Bench::BreakingLinear => {
            run_indexed(&values, &queries, config.runs, breaking_linear_search)
        }
        Bench::Standard => run_indexed(&values, &queries, config.runs, standard_binary_search),
        Bench::Boundless => run_indexed(&values, &queries, config.runs, boundless_binary_search),
        Bench::Doubletapped => {
            run_indexed(&values, &queries, config.runs, doubletapped_binary_search)
        }
        Bench::Monobound => run_indexed(&values, &queries, config.runs, monobound_binary_search),
        Bench::Tripletapped => {
            run_indexed(&values, &queries, config.runs, tripletapped_binary_search)
        }
        Bench::Quaternary => {
            run_indexed(&values, &queries, config.runs, monobound_quaternary_search)
        }
        Bench::Interpolated => {
            run_indexed(&values, &queries, config.runs, monobound_interpolated_search)
        }
        Bench::Adaptive => run_adaptive(&values, &queries, config.runs),
        Bench::MonoboundBy => run_comparator(&values, &queries, config.runs),
    };

    if config.report {
        print_report(&config, &result);
    }
}

fn run_indexed(values: &[i32], queries: &[i32], runs: usize, func: SearchFn) -> RunResult {
    let mut best = RunResult::empty();

    for _ in 0..runs.max(1) {
        let mut checks = Checks::new();
        let mut hits = 0u64;
        let mut misses = 0u64;

        let start = Instant::now();
        for &key in queries {
            if func(black_box(values), black_box(key), &mut checks).is_some() {
                hits += 1;
            } else {
                misses += 1;
            }
        }
        let elapsed = start.elapsed().as_nanos();

        best.keep_fastest(hits, misses, checks.total(), elapsed);
    }
    best
}

fn run_adaptive(values: &[i32], queries: &[i32], runs: usize) -> RunResult {
    let mut best = RunResult::empty();

    for _ in 0..runs.max(1) {
        // Fresh locality state per run, like resetting the counter.
        let mut state = AdaptiveSearch::new();
        let mut checks = Checks::new();
        let mut hits = 0u64;
        let mut misses = 0u64;

        let start = Instant::now();
        for &key in queries {
            if state
                .search(black_box(values), black_box(key), &mut checks)
                .is_some()
            {
                hits += 1;
            } else {
                misses += 1;
            }
        }
        let elapsed = start.elapsed().as_nanos();

        best.keep_fastest(hits, misses, checks.total(), elapsed);
    }
    best
}

fn run_comparator(values: &[i32], queries: &[i32], runs: usize) -> RunResult {
    let mut best = RunResult::empty();

    for _ in 0..runs.max(1) {
        let mut checks = Checks::new();
        let mut hits = 0u64;
        let mut misses = 0u64;

        let start = Instant::now();
        for &key in queries {
            let found =
                monobound_search_by(black_box(&key), black_box(values), cmp_i32, &mut checks);
            if found.is_some() {
                hits += 1;
            } else {
                misses += 1;
            }
        }
        let elapsed = start.elapsed().as_nanos();

        best.keep_fastest(hits, misses, checks.total(), elapsed);
    }
    best
}

// Kept out of line so the comparator variant measures a real call, matching
// its intended use with orderings the compiler cannot see through.
#[inline(never)]
fn cmp_i32(key: &i32, element: &i32) -> std::cmp::Ordering {
    key.cmp(element)
}

fn print_report(config: &Config, result: &RunResult) {
    let elapsed_s = result.best_ns as f64 / 1.0e9;
    let ns_per_query = result.best_ns as f64 / config.queries.max(1) as f64;
    println!(
        "bench={} len={} queries={} access={} hits={} misses={} checks={} elapsed_s={:.6} ns_per_query={:.1}",
        bench_name(config.bench),
        config.len,
        config.queries,
        if config.sequential { "sequential" } else { "random" },
        result.hits,
        result.misses,
        result.checks,
        elapsed_s,
        ns_per_query,
    );
}

fn verify_bench(bench: Bench) {
    let values = [1, 3, 3, 7, 9, 15];
    let mut checks = Checks::new();

    match bench {
        Bench::Linear => {
            assert_eq!(linear_search(&values, 7, &mut checks), Some(3));
            assert_eq!(linear_search(&values, 8, &mut checks), None);
        }
        Bench::BreakingLinear => {
            assert_eq!(breaking_linear_search(&values, 7, &mut checks), Some(3));
            assert_eq!(breaking_linear_search(&values, 8, &mut checks), None);
        }
        Bench::Standard => {
            assert_eq!(standard_binary_search(&values, 7, &mut checks), Some(3));
            assert_eq!(standard_binary_search(&values, 8, &mut checks), None);
        }
        Bench::Boundless => {
            assert_eq!(boundless_binary_search(&values, 7, &mut checks), Some(3));
            assert_eq!(boundless_binary_search(&values, 8, &mut checks), None);
        }
        Bench::Doubletapped => {
            assert_eq!(doubletapped_binary_search(&values, 7, &mut checks), Some(3));
            assert_eq!(doubletapped_binary_search(&values, 8, &mut checks), None);
        }
        Bench::Monobound => {
            assert_eq!(monobound_binary_search(&values, 7, &mut checks), Some(3));
            assert_eq!(monobound_binary_search(&values, 8, &mut checks), None);
        }
        Bench::Tripletapped => {
            assert_eq!(tripletapped_binary_search(&values, 7, &mut checks), Some(3));
            assert_eq!(tripletapped_binary_search(&values, 8, &mut checks), None);
        }
        Bench::Quaternary => {
            assert_eq!(monobound_quaternary_search(&values, 7, &mut checks), Some(3));
            assert_eq!(monobound_quaternary_search(&values, 8, &mut checks), None);
        }
        Bench::Interpolated => {
            assert_eq!(
                monobound_interpolated_search(&values, 7, &mut checks),
                Some(3)
            );
            assert_eq!(monobound_interpolated_search(&values, 8, &mut checks), None);
        }
        Bench::Adaptive => {
            let mut state = AdaptiveSearch::new();
            assert_eq!(state.search(&values, 7, &mut checks), Some(3));
            assert_eq!(state.search(&values, 8, &mut checks), None);
        }
        Bench::MonoboundBy => {
            let hit = monobound_search_by(&7, &values, |k: &i32, v: &i32| k.cmp(v), &mut checks);
            assert_eq!(hit, Some(&7));
            let miss = monobound_search_by(&8, &values, |k: &i32, v: &i32| k.cmp(v), &mut checks);
            assert_eq!(miss, None);
        }
    }
}
