//! Compare the linear-space driver against the full-table aligner.
//!
//! Two modes:
//! - `--dataset <file>`: run every pair in a benchmark file through both
//!   aligners, measure wall time and RSS delta, verify score agreement,
//!   and write CSV or a table.
//! - no dataset: interactive menu reading sequences from stdin. Errors are
//!   reported and the menu re-prompts; the loop never dies on a bad input.

use std::env;
use std::io::{self, BufRead, Write};

use halign::dataset::load_pairs;
use halign::derived::{lcs, levenshtein};
use halign::utils::timed;
use halign::{align, full_align, LinearModel};
use sysinfo::{get_current_pid, ProcessExt, ProcessRefreshKind, System, SystemExt};

// Scoring used by the original benchmark suite.
const MODEL: LinearModel = LinearModel::new(2, -1, -2);

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("compare: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let result = match &options.dataset {
        Some(path) => run_batch(path, &options),
        None => run_menu(),
    };

    if let Err(err) = result {
        eprintln!("compare: {err}");
        std::process::exit(1);
    }
}

struct Options {
    dataset: Option<String>,
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut dataset = None;
        let mut format = OutputFormat::Table;
        let mut verify_limit = 4096usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--dataset=") {
                dataset = Some(value.to_string());
            } else if arg == "--dataset" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --dataset".to_string())?
                    .into();
                dataset = Some(value);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            dataset,
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin compare [-- <options>]

Options:
  --dataset <file>        Benchmark file of identifier/sequence/sequence groups;
                          without it, an interactive menu runs instead
  --format <csv|table>    Batch output format (default: table)
  --verify-limit <N>      Longest sequence to cross-check against the
                          quadratic full-table aligner (default: 4096)
  -h, --help              Print this help message

Examples:
  cargo run --bin compare
  cargo run --bin compare -- --dataset data/strings.txt --format csv
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

struct Measurement {
    id: u64,
    len_a: usize,
    len_b: usize,
    score: i64,
    hirschberg_s: f64,
    rss_delta_kib: u64,
    full_s: Option<f64>,
    status: &'static str,
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid() {
        Ok(pid) => sys.process(pid).map(|p| p.memory() / 1024).unwrap_or(0),
        Err(_) => 0,
    }
}

fn run_batch(path: &str, options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let data = load_pairs(path)?;
    let mut sys = System::new();
    let mut measurements = Vec::with_capacity(data.len());

    for (id, (first, second)) in &data {
        let a = first.as_bytes();
        let b = second.as_bytes();

        let before = rss_kib(&mut sys);
        let (aln, hirschberg_time) = timed(|| align(a, b, &MODEL));
        let after = rss_kib(&mut sys);
        let aln = aln?;

        let (full_s, status) = if a.len().max(b.len()) <= options.verify_limit {
            let (full, full_time) = timed(|| full_align(a, b, &MODEL));
            let full = full?;
            let status = if full.score == aln.score {
                "passed"
            } else {
                "failed"
            };
            (Some(full_time.as_secs_f64()), status)
        } else {
            (None, "not_checked")
        };

        measurements.push(Measurement {
            id: *id,
            len_a: a.len(),
            len_b: b.len(),
            score: aln.score,
            hirschberg_s: hirschberg_time.as_secs_f64(),
            rss_delta_kib: after.saturating_sub(before),
            full_s,
            status,
        });
    }

    match options.format {
        OutputFormat::Csv => write_csv(&measurements),
        OutputFormat::Table => write_table(&measurements),
    }

    if measurements.iter().any(|m| m.status == "failed") {
        return Err("score mismatch between the linear-space and full aligners".into());
    }
    Ok(())
}

fn write_csv(measurements: &[Measurement]) {
    println!("id,len_a,len_b,score,hirschberg_s,rss_delta_kib,full_s,status");
    for m in measurements {
        let full_s = m
            .full_s
            .map(|s| format!("{s:.6}"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{:.6},{},{},{}",
            m.id, m.len_a, m.len_b, m.score, m.hirschberg_s, m.rss_delta_kib, full_s, m.status
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    println!(
        "{:>8} {:>8} {:>8} {:>10} {:>12} {:>13} {:>10} {:>11}",
        "id", "len_a", "len_b", "score", "hirschberg_s", "rss_delta_kib", "full_s", "status"
    );
    for m in measurements {
        let full_s = m
            .full_s
            .map(|s| format!("{s:.6}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>8} {:>8} {:>8} {:>10} {:>12.6} {:>13} {:>10} {:>11}",
            m.id, m.len_a, m.len_b, m.score, m.hirschberg_s, m.rss_delta_kib, full_s, m.status
        );
    }
}

fn run_menu() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("1) Align two sequences (Hirschberg vs full table)");
        println!("2) Longest common subsequence");
        println!("3) Levenshtein distance");
        println!("0) Quit");
        print!("> ");
        io::stdout().flush()?;

        let choice = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let outcome = match choice.trim() {
            "0" => return Ok(()),
            "1" => menu_align(&mut lines),
            "2" => menu_lcs(&mut lines),
            "3" => menu_levenshtein(&mut lines),
            other => {
                println!("unknown choice {other:?}");
                continue;
            }
        };

        // Report and re-prompt; never tear the loop down.
        if let Err(err) = outcome {
            println!("error: {err}");
        }
    }
}

fn read_pair(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(String, String), Box<dyn std::error::Error>> {
    print!("first sequence: ");
    io::stdout().flush()?;
    let first = lines.next().ok_or("end of input")??;
    print!("second sequence: ");
    io::stdout().flush()?;
    let second = lines.next().ok_or("end of input")??;
    Ok((first.trim().to_string(), second.trim().to_string()))
}

fn menu_align(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (first, second) = read_pair(lines)?;
    let a = first.as_bytes();
    let b = second.as_bytes();

    let (hirschberg, hirschberg_time) = timed(|| align(a, b, &MODEL));
    let (full, full_time) = timed(|| full_align(a, b, &MODEL));
    let (hirschberg, full) = (hirschberg?, full?);

    println!("Hirschberg (score {}):", hirschberg.score);
    println!("{hirschberg}");
    println!("Full table (score {}):", full.score);
    println!("{full}");
    println!(
        "times: hirschberg {:.6}s, full {:.6}s",
        hirschberg_time.as_secs_f64(),
        full_time.as_secs_f64()
    );
    Ok(())
}

fn menu_lcs(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (first, second) = read_pair(lines)?;
    let (subsequence, elapsed) = timed(|| lcs::lcs(first.as_bytes(), second.as_bytes()));
    let subsequence = subsequence?;
    println!(
        "lcs: {} (length {}, {:.6}s)",
        String::from_utf8_lossy(&subsequence),
        subsequence.len(),
        elapsed.as_secs_f64()
    );
    Ok(())
}

fn menu_levenshtein(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (first, second) = read_pair(lines)?;
    let (result, elapsed) =
        timed(|| levenshtein::levenshtein(first.as_bytes(), second.as_bytes()));
    let (dist, script) = result?;
    let rendered: String = script
        .iter()
        .map(|op| match op {
            levenshtein::EditOp::Copy => 'c',
            levenshtein::EditOp::Substitute => 's',
            levenshtein::EditOp::Insert => 'i',
            levenshtein::EditOp::Delete => 'd',
        })
        .collect();
    println!(
        "distance: {dist}, script: {rendered} ({:.6}s)",
        elapsed.as_secs_f64()
    );
    Ok(())
}
