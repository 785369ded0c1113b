#![allow(clippy::uninlined_format_args)]

use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};
use rand::{Rng, distr::Alphanumeric};
use simple_bloom_rs::{BloomFilter, FilterStats};
use std::collections::HashSet;

const FILL_RATIO: f64 = 1.0; // Fill the filter up to its expected item count
const TEST_SAMPLES: usize = 10_000; // Number of unknown elements to test for FPR

fn generate_random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║          Bloom Filter - False Positive Rate Tester        ║");
    println!("╚═══════════════════════════════════════════════════════════╝\n");

    println!("Configuration:");
    println!("  • Fill Ratio: {}%", FILL_RATIO * 100.0);
    println!("  • Test Samples: {}", TEST_SAMPLES);

    let capacities = [1_000, 10_000, 100_000];
    let target_fprs = [0.01, 0.05, 0.1];

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Capacity").set_alignment(CellAlignment::Center),
            Cell::new("Target FPR").set_alignment(CellAlignment::Center),
            Cell::new("Bits / Hashes").set_alignment(CellAlignment::Center),
            Cell::new("Known Positives").set_alignment(CellAlignment::Center),
            Cell::new("False Positives").set_alignment(CellAlignment::Center),
            Cell::new("Observed FPR").set_alignment(CellAlignment::Center),
            Cell::new("Estimated FPR").set_alignment(CellAlignment::Center),
            Cell::new("Deviation").set_alignment(CellAlignment::Center),
        ]);

    for &capacity in &capacities {
        for &target_fpr in &target_fprs {
            let insert_count = (capacity as f64 * FILL_RATIO) as usize;
            let mut filter = BloomFilter::new(capacity, target_fpr)?;

            print!(
                "Testing capacity={}, target_fpr={:.2}%: ",
                capacity,
                target_fpr * 100.0
            );
            let known_elements: Vec<String> =
                (0..insert_count).map(|_| generate_random_string(32)).collect();
            let known_set: HashSet<&String> = known_elements.iter().collect();

            for element in &known_elements {
                filter.insert(element)?;
            }

            let mut true_positives = 0;
            for element in &known_elements {
                if filter.contains(element)? {
                    true_positives += 1;
                }
            }

            let mut false_positives = 0;
            for _ in 0..TEST_SAMPLES {
                let unknown = generate_random_string(32);
                // Skip if we accidentally generated a known element
                if known_set.contains(&unknown) {
                    continue;
                }
                if filter.contains(&unknown)? {
                    false_positives += 1;
                }
            }

            let observed_fpr = false_positives as f64 / TEST_SAMPLES as f64;
            let deviation = (observed_fpr - target_fpr) / target_fpr * 100.0;

            println!("Done!");

            table.add_row(vec![
                Cell::new(format!("{}", capacity)),
                Cell::new(format!("{:.2}%", target_fpr * 100.0)),
                Cell::new(format!(
                    "{} / {}",
                    filter.bit_array_size(),
                    filter.number_hash_functions()
                )),
                Cell::new(format!("{}/{}", true_positives, known_elements.len())),
                Cell::new(format!("{}/{}", false_positives, TEST_SAMPLES)),
                Cell::new(format!("{:.4}%", observed_fpr * 100.0)),
                Cell::new(format!(
                    "{:.4}%",
                    filter.estimated_false_positive_rate() * 100.0
                )),
                Cell::new(format!("{:+.2}%", deviation)),
            ]);
        }
    }

    println!("\nResults:");
    println!("{}", table);

    Ok(())
}
