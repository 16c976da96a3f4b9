//! # chatledger CLI
//!
//! Command-line interface for the chatledger library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatledger::cli::Args;
use chatledger::config::ParserConfig;
use chatledger::core::dedup::dedup_with_stats;
use chatledger::format::{write_to_format, OutputFormat};
use chatledger::parser::TranscriptParser;
use chatledger::ChatledgerError;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatledgerError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let format: OutputFormat = args.format.into();
    let output_path = adjust_output_extension(&args.output, format);

    println!("📒 chatledger v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", format);
    if !args.unit.is_empty() {
        println!("⚖️  Units:   +{}", args.unit.join(", +"));
    }
    println!();

    // Step 1: Parse raw rows; deduplication is reported separately below
    let config = ParserConfig::new()
        .with_dedupe(false)
        .with_extra_units(args.unit.clone());
    let parser = TranscriptParser::with_config(config);

    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let records = parser.parse(Path::new(&args.input))?;
    let raw_count = records.len();
    println!(
        "   Found {} transaction rows ({:.2}s)",
        raw_count,
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Deduplicate (unless disabled)
    let final_records = if args.keep_duplicates {
        println!("⏭️  Keeping duplicates (--keep-duplicates)");
        records
    } else {
        let (unique, stats) = dedup_with_stats(records);
        println!(
            "🧹 Removed {} duplicate rows ({:.1}%)",
            stats.original_count - stats.unique_count,
            stats.duplicate_ratio()
        );
        unique
    };

    if final_records.is_empty() {
        println!("ℹ️  No transactions found in this transcript");
    }

    // Step 3: Write output in selected format
    println!("💾 Writing {}...", format);
    let write_start = Instant::now();
    write_to_format(&final_records, &output_path, format)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    println!();
    println!("📊 Summary:");
    println!("   Raw rows:  {}", raw_count);
    println!("   Final:     {} transactions", final_records.len());
    println!("   Total:     {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Adjusts the output file extension based on format if using the default
/// output path.
fn adjust_output_extension(output: &str, format: OutputFormat) -> String {
    if output != "transactions.csv" {
        return output.to_string();
    }
    format!("transactions.{}", format.extension())
}
