use clap::Parser;
use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};
use rand::{SeedableRng, rngs::StdRng};
use simple_bloom_rs::{
    BloomConfig, BloomFilter, FilterStats,
    common::{bits2hr, bytes2hr, strings_footprint},
    names::{MAX_NAME_LENGTH, generate_file_names, unknown_names},
};
use std::{
    collections::HashSet,
    time::{Duration, Instant},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const UNKNOWN_PREFIX: &str = "some_fake_file_";

/// Fill a Bloom filter with random file names and report timings and
/// memory use.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of file names to generate and insert
    /// [default: BLOOM_EXPECTED_ITEMS or 100000]
    #[arg(short, long)]
    num_files: Option<usize>,

    /// False positive rate (between 0 and 1)
    /// [default: BLOOM_FALSE_POSITIVE_RATE or 0.01]
    #[arg(short, long)]
    fpr: Option<f64>,

    /// Length of every generated name
    #[arg(short = 'l', long, default_value_t = MAX_NAME_LENGTH)]
    name_length: usize,

    /// Unknown names queried to measure the observed false positive rate
    #[arg(short, long, default_value = "10000")]
    queries: usize,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,
}

struct Report {
    config: BloomConfig,
    bit_array_size: usize,
    number_hash_functions: usize,
    generation_time: Duration,
    insert_time: Duration,
    names_memory: usize,
    filter_memory: usize,
    known: (bool, Duration),
    unknown: (bool, Duration),
    false_positives: usize,
    tested: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => print_report(&report),
        Err(e) => {
            error!("Benchmark failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<Report, Box<dyn std::error::Error>> {
    let mut config = BloomConfig::from_env()?;
    if let Some(num_files) = cli.num_files {
        config.expected_items = num_files;
    }
    if let Some(fpr) = cli.fpr {
        config.false_positive_rate = fpr;
    }
    // Rejects bad parameters before spending time on name generation.
    config.validate()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(
        num_files = config.expected_items,
        fpr = config.false_positive_rate,
        "Running benchmark"
    );

    let start = Instant::now();
    let names =
        generate_file_names(config.expected_items, cli.name_length, &mut rng)?;
    let generation_time = start.elapsed();

    let start = Instant::now();
    let mut filter = BloomFilter::from_config(config.clone())?;
    for name in &names {
        filter.insert(name)?;
    }
    let insert_time = start.elapsed();

    let known_set: HashSet<&str> = names.iter().map(String::as_str).collect();
    // One extra name for the single timed unknown lookup.
    let mut unknown = unknown_names(
        cli.queries.saturating_add(1),
        cli.name_length,
        UNKNOWN_PREFIX,
        &known_set,
        &mut rng,
    );
    let unknown_name = unknown.pop().unwrap_or_default();

    let known = match names.first() {
        Some(name) => timed_contains(&filter, name)?,
        None => (false, Duration::ZERO),
    };
    let unknown_lookup = timed_contains(&filter, &unknown_name)?;

    let false_positives = count_false_positives(&filter, &unknown)?;

    Ok(Report {
        bit_array_size: filter.bit_array_size(),
        number_hash_functions: filter.number_hash_functions(),
        names_memory: strings_footprint(&names),
        filter_memory: filter.storage_bytes(),
        config,
        generation_time,
        insert_time,
        known,
        unknown: unknown_lookup,
        false_positives,
        tested: unknown.len(),
    })
}

fn timed_contains(
    filter: &BloomFilter,
    item: &str,
) -> simple_bloom_rs::Result<(bool, Duration)> {
    let start = Instant::now();
    let found = filter.contains(item)?;
    Ok((found, start.elapsed()))
}

/// Every name in `unknown` was never inserted, so each hit is a false
/// positive.
fn count_false_positives(
    filter: &BloomFilter,
    unknown: &[String],
) -> simple_bloom_rs::Result<usize> {
    let mut false_positives = 0;
    for name in unknown {
        if filter.contains(name)? {
            false_positives += 1;
        }
    }
    Ok(false_positives)
}

fn print_report(report: &Report) {
    let observed_fpr = if report.tested == 0 {
        0.0
    } else {
        report.false_positives as f64 / report.tested as f64
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Metric").set_alignment(CellAlignment::Center),
            Cell::new("Value").set_alignment(CellAlignment::Center),
        ]);

    let rows = [
        ("File names", report.config.expected_items.to_string()),
        (
            "Target FPR",
            format!("{:.2}%", report.config.false_positive_rate * 100.0),
        ),
        (
            "Bit array size",
            format!(
                "{} bits ({})",
                report.bit_array_size,
                bits2hr(report.bit_array_size)
            ),
        ),
        ("Hash functions", report.number_hash_functions.to_string()),
        (
            "Generation time",
            format!("{:.4} s", report.generation_time.as_secs_f64()),
        ),
        (
            "Insert time",
            format!("{:.4} s", report.insert_time.as_secs_f64()),
        ),
        ("Names memory", bytes2hr(report.names_memory)),
        ("Filter memory", bytes2hr(report.filter_memory)),
        (
            "Known name lookup",
            format!(
                "{:.6} s -> {}",
                report.known.1.as_secs_f64(),
                report.known.0
            ),
        ),
        (
            "Unknown name lookup",
            format!(
                "{:.6} s -> {}",
                report.unknown.1.as_secs_f64(),
                report.unknown.0
            ),
        ),
        (
            "False positives",
            format!("{}/{}", report.false_positives, report.tested),
        ),
        ("Observed FPR", format!("{:.4}%", observed_fpr * 100.0)),
    ];

    for (metric, value) in rows {
        table.add_row(vec![Cell::new(metric), Cell::new(value)]);
    }

    println!("{table}");
}
