use std::env;
use std::time::Instant;

use algo_drills::complexity::{add_up_to_closed_form, add_up_to_iterative, Complexity};
use algo_drills::{
    binary_search, bubble_sort, count_occurrences_in, linear_search, max_subarray_sum,
    same_squared, zero_sum_pair_indices,
};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Algorithm Drills Scaling Probe: Timing and Correctness");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Each routine runs over growing inputs and is checked against a");
    eprintln!("brute-force baseline up to size {}.", options.verify_limit);
    eprintln!();
    eprintln!("Metrics explained:");
    eprintln!("  • wall_s: Wall-clock time in seconds (varies between runs and machines)");
    eprintln!("  • rss_delta_kib: Resident memory delta in KiB");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = too large to verify");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let scenarios = scenarios();
    let total = scenarios.len();
    let mut measurements = Vec::new();

    for (idx, scenario) in scenarios.iter().enumerate() {
        eprintln!(
            "[{}/{}] {} (expected {})...",
            idx + 1,
            total,
            scenario.name,
            scenario.complexity
        );
        measurements.extend(run_scenario(scenario, &options, &mut sys));
        eprintln!();
    }

    print_summary(&measurements, &scenarios, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 4096usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest input size checked against a brute-force baseline (default: 4096)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin scale_probe
  cargo run --release --bin scale_probe -- --format table --verify-limit 1024
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a positive integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

/// Outcome of one run: a short description of the result plus verification.
type Outcome = (String, VerificationStatus, Option<String>);

struct Scenario {
    name: &'static str,
    complexity: Complexity,
    sizes: &'static [usize],
    run: fn(usize, bool) -> Outcome,
}

fn scenarios() -> Vec<Scenario> {
    const LINEAR_SIZES: &[usize] = &[1_024, 4_096, 16_384, 65_536, 262_144, 1_048_576];
    const QUADRATIC_SIZES: &[usize] = &[256, 512, 1_024, 2_048, 4_096, 8_192];

    vec![
        Scenario {
            name: "add_up_to_iterative",
            complexity: Complexity::Linear,
            sizes: LINEAR_SIZES,
            run: run_add_up_to_iterative,
        },
        Scenario {
            name: "add_up_to_closed_form",
            complexity: Complexity::Constant,
            sizes: LINEAR_SIZES,
            run: run_add_up_to_closed_form,
        },
        Scenario {
            name: "linear_search",
            complexity: Complexity::Linear,
            sizes: LINEAR_SIZES,
            run: run_linear_search,
        },
        Scenario {
            name: "binary_search",
            complexity: Complexity::Logarithmic,
            sizes: LINEAR_SIZES,
            run: run_binary_search,
        },
        Scenario {
            name: "substring_count",
            complexity: Complexity::Linear,
            sizes: LINEAR_SIZES,
            run: run_substring_count,
        },
        Scenario {
            name: "bubble_sort",
            complexity: Complexity::Quadratic,
            sizes: QUADRATIC_SIZES,
            run: run_bubble_sort,
        },
        Scenario {
            name: "sliding_window",
            complexity: Complexity::Linear,
            sizes: LINEAR_SIZES,
            run: run_sliding_window,
        },
        Scenario {
            name: "zero_sum_pair",
            complexity: Complexity::Linear,
            sizes: LINEAR_SIZES,
            run: run_zero_sum_pair,
        },
        Scenario {
            name: "same_squared",
            complexity: Complexity::Linear,
            sizes: LINEAR_SIZES,
            run: run_same_squared,
        },
    ]
}

fn run_scenario(scenario: &Scenario, options: &Options, sys: &mut System) -> Vec<Measurement> {
    let total = scenario.sizes.len();
    scenario
        .sizes
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] Testing size {}... ", idx + 1, total, len);
            let verify = len <= options.verify_limit;
            let mut result = String::new();
            let m = measure(scenario.name, len, sys, || {
                let (summary, status, detail) = (scenario.run)(len, verify);
                result = summary;
                (status, detail)
            });
            let status_icon = match m.verification_status {
                VerificationStatus::Passed => "✓",
                VerificationStatus::Failed => "✗",
                VerificationStatus::NotChecked => "○",
            };
            eprintln!(
                "{} {}, time={:.6}s, status={}",
                status_icon,
                result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn check<T, F>(verify: bool, got: T, baseline: F) -> (VerificationStatus, Option<String>)
where
    T: PartialEq + std::fmt::Debug,
    F: FnOnce() -> T,
{
    if !verify {
        return (VerificationStatus::NotChecked, None);
    }
    let expected = baseline();
    if expected == got {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {expected:?}, got {got:?}")),
        )
    }
}

fn run_add_up_to_iterative(len: usize, verify: bool) -> Outcome {
    let total = add_up_to_iterative(len as u64);
    let (status, detail) = check(verify, total, || add_up_to_closed_form(len as u64));
    (format!("sum={total}"), status, detail)
}

fn run_add_up_to_closed_form(len: usize, verify: bool) -> Outcome {
    let total = add_up_to_closed_form(len as u64);
    let (status, detail) = check(verify, total, || add_up_to_iterative(len as u64));
    (format!("sum={total}"), status, detail)
}

fn run_linear_search(len: usize, verify: bool) -> Outcome {
    let data = deterministic_values(len);
    // absent target forces a full scan
    let found = linear_search(&data, &i64::MAX);
    let (status, detail) = check(verify, found, || data.iter().position(|&x| x == i64::MAX));
    (format!("found={found:?}"), status, detail)
}

fn run_binary_search(len: usize, verify: bool) -> Outcome {
    let data = sorted_values(len);
    let target = data[len / 3];
    let found = binary_search(&data, &target).map(|i| data[i]);
    let (status, detail) = check(verify, found, || Some(target));
    (format!("found={found:?}"), status, detail)
}

fn run_substring_count(len: usize, verify: bool) -> Outcome {
    let hay = deterministic_text(len);
    let needle = b"lol";
    let count = count_occurrences_in(&hay, needle).unwrap_or(0);
    let (status, detail) = check(verify, count, || {
        hay.windows(needle.len()).filter(|w| *w == needle).count()
    });
    (format!("count={count}"), status, detail)
}

fn run_bubble_sort(len: usize, verify: bool) -> Outcome {
    let mut data = deterministic_values(len);
    let original = data.clone();
    let report = bubble_sort(&mut data);
    let (status, detail) = check(verify, data, || {
        let mut expected = original;
        expected.sort();
        expected
    });
    (
        format!("passes={}, swaps={}", report.passes, report.swaps),
        status,
        detail,
    )
}

fn run_sliding_window(len: usize, verify: bool) -> Outcome {
    const WIDTH: usize = 64;
    let data = deterministic_values(len);
    let best = max_subarray_sum(&data, WIDTH);
    let (status, detail) = check(verify, best, || {
        data.windows(WIDTH).map(|w| w.iter().sum::<i64>()).max()
    });
    (format!("max={best:?}"), status, detail)
}

fn run_zero_sum_pair(len: usize, verify: bool) -> Outcome {
    let data = sorted_values(len);
    let found = zero_sum_pair_indices(&data).map(|(i, j)| (data[i], data[j]));
    let found_any = found.is_some();
    let (status, detail) = check(verify, found_any, || {
        // existence only; the scan picks the widest pair
        let set: std::collections::HashSet<i64> = data.iter().copied().collect();
        data.iter().enumerate().any(|(i, &x)| {
            if x == 0 {
                data.iter().skip(i + 1).any(|&y| y == 0)
            } else {
                set.contains(&-x)
            }
        })
    });
    (format!("pair={found:?}"), status, detail)
}

fn run_same_squared(len: usize, verify: bool) -> Outcome {
    let a: Vec<i64> = deterministic_values(len).iter().map(|x| x % 1_000).collect();
    let b: Vec<i64> = a.iter().rev().map(|x| x * x).collect();
    let same = same_squared(&a, &b);
    let (status, detail) = check(verify, same, || {
        let mut want: Vec<i64> = a.iter().map(|x| x * x).collect();
        let mut got = b.clone();
        want.sort_unstable();
        got.sort_unstable();
        want == got
    });
    (format!("same={same}"), status, detail)
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn print_summary(measurements: &[Measurement], scenarios: &[Scenario], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Test Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1) as f64;
    eprintln!("Verification Results:");
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (size > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed Runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} (n={})", m.scenario, m.size);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
        eprintln!();
    }

    eprintln!("Growth by Scenario:");
    eprintln!();
    for scenario in scenarios {
        let ms: Vec<&Measurement> = measurements
            .iter()
            .filter(|m| m.scenario == scenario.name)
            .collect();
        let (Some(first), Some(last)) = (ms.first(), ms.last()) else {
            continue;
        };
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        let observed = if first.wall_s > 0.0 {
            last.wall_s / first.wall_s
        } else {
            0.0
        };
        let expected = scenario.complexity.expected_ratio(first.size, last.size);

        eprintln!("  {} [{}]:", scenario.name, scenario.complexity);
        eprintln!("    Runs: {}", ms.len());
        eprintln!(
            "    Time: n={} {:.6}s -> n={} {:.6}s",
            first.size, first.wall_s, last.size, last.wall_s
        );
        eprintln!("    Memory: max_delta={max_mem} KiB");
        eprintln!("    Slowdown: observed {observed:.1}x, expected ~{expected:.1}x");
        eprintln!();
    }

    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ All verified runs passed.");
    } else {
        eprintln!("✗ {failed} run(s) failed. Please review the errors above.");
    }
    eprintln!();
    eprintln!("Interpretation:");
    eprintln!("  • Timers measure one machine at one moment; compare ratios, not absolute times");
    eprintln!("  • Fast routines (O(1), O(log n)) sit near timer resolution, so their ratios are noisy");
    eprintln!("  • bubble_sort should slow down roughly 4x each time n doubles");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(scenario: &'static str, size: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.6},{},{},\"{}\"",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
    }

    println!(
        "{:<col1$}  {:>9}  {:>12}  {:>14}  {:>12}  {}",
        "scenario",
        "size",
        "wall_s",
        "rss_delta_kib",
        "status",
        "detail",
        col1 = col1
    );
    println!(
        "{:-<col1$}  {:-<9}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "",
        "",
        "",
        "",
        "",
        "",
        col1 = col1
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>9}  {:>12.6}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
            col1 = col1
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":{},\"wall_s\":{:.6},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Pseudo-random but reproducible values in [-50_000, 50_000).
fn deterministic_values(len: usize) -> Vec<i64> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 100_000) as i64 - 50_000
        })
        .collect()
}

fn sorted_values(len: usize) -> Vec<i64> {
    let mut v = deterministic_values(len);
    v.sort_unstable();
    v
}

fn deterministic_text(len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"lore ";
    deterministic_values(len)
        .into_iter()
        .map(|x| ALPHABET[x.rem_euclid(ALPHABET.len() as i64) as usize])
        .collect()
}
