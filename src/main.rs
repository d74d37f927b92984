// main.rs - CLI entry point

use bookmerge::cli::Config;
use bookmerge::prelude::*;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    println!("📚 bookmerge v{}", env!("CARGO_PKG_VERSION"));

    let options = MergeOptions {
        dry_run: args.dry_run,
    };

    let total_start = Instant::now();
    let report = merge_with_options(Path::new(&args.input), Path::new(&args.output), &options)?;
    let total_elapsed = total_start.elapsed();

    if report.candidates > 0 {
        println!(
            "\n📊 Summary: {} merged, {} skipped, {} read errors, {} duplicate ids",
            report.merged, report.skipped_invalid, report.read_errors, report.duplicate_ids
        );
        println!(
            "🕒 Completed: {} ({:.2}s)",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            total_elapsed.as_secs_f64()
        );
    }

    Ok(())
}
