//! # chatstat CLI
//!
//! Command-line front end for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use chatstat::analysis::{Analyzer, Report, selectable_users};
use chatstat::cli::Args;
use chatstat::output::write_to_format;
use chatstat::parser::{ExportParser, validate_records};
use chatstat::{ChatstatError, Record};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so the report on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let start = Instant::now();
    let format = args.format_spec();

    let parser = ExportParser::new(format)?;
    let records = parser.parse(&args.input)?;
    validate_records(&records, format)?;
    info!(records = records.len(), %format, input = %args.input.display(), "loaded export");

    if args.list_users {
        for user in selectable_users(&records) {
            println!("{user}");
        }
        return Ok(());
    }

    let selection = args.selection();
    let report = Analyzer::new().report(&records, &selection);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.links);
    }

    if let Some(path) = &args.output {
        let selected: Vec<Record> = selection.filter(&records).cloned().collect();
        write_to_format(&selected, path, args.format.into(), &args.output_config())?;
        eprintln!("Wrote {} records to {}", selected.len(), path.display());
    }

    debug!(elapsed_ms = start.elapsed().as_millis(), "done");
    Ok(())
}

fn print_report(report: &Report, show_links: bool) {
    let stats = &report.stats;
    println!("Statistics for {}", report.selection);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Messages:      {}", stats.messages);
    println!("Words:         {}", stats.words);
    println!("Media shared:  {}", stats.media);
    println!("Links shared:  {}", stats.link_count());
    if show_links {
        for link in &stats.links {
            println!("  {link}");
        }
    }

    if let Some(active) = &report.active_users {
        println!();
        println!("Most active users:");
        for user in &active.top {
            println!("  {:<24} {}", user.sender, user.messages);
        }
        println!("Share of messages:");
        for share in &active.shares {
            println!("  {:<24} {:.2}%", share.sender, share.percentage);
        }
    }

    if !report.common_words.is_empty() {
        println!();
        println!("Most common words:");
        for word in &report.common_words {
            println!("  {:<24} {}", word.word, word.count);
        }
    }

    if !report.emojis.is_empty() {
        println!();
        println!("Emoji:");
        for emoji in &report.emojis {
            println!("  {}  {}", emoji.emoji, emoji.count);
        }
    }

    if !report.timeline.is_empty() {
        println!();
        println!("Monthly timeline:");
        for point in &report.timeline {
            println!("  {:<24} {}", point.label, point.messages);
        }
    }

    println!();
    println!("Weekly activity:");
    for day in &report.week_activity {
        println!("  {:<24} {}", day.weekday, day.messages);
    }
    if let Some(day) = &report.busiest_day {
        println!("Busiest day:   {} ({} messages)", day.weekday, day.messages);
    }
}
