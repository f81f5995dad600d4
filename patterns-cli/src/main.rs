//! Pattern Showcase CLI Application
//!
//! Command-line front end for the patterns-core library. It adds:
//! - TOML configuration of every pattern's inputs
//! - Command-line overrides for the observer walkthrough
//! - Console or log output and a run summary (TXT/JSON)

use anyhow::Result;
use clap::Parser;
use patterns_core::{
    ConsoleSink, DeliveryPolicy, LogSink, PatternKind, SharedSink, Showcase, ShowcaseSummary,
    BUILTIN_SUBSCRIBERS,
};
use std::path::PathBuf;
use std::rc::Rc;

mod config;

use config::{AppConfig, SinkKind, SummaryFormat};

/// Pattern Showcase - Walk through classic design patterns
#[derive(Parser, Debug)]
#[command(name = "patterns-cli")]
#[command(about = "Run design pattern demonstrations and print what they do", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (patterns.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run only this pattern (can be repeated)
    #[arg(short, long, value_name = "NAME", value_parser = parse_pattern)]
    pattern: Vec<PatternKind>,

    /// Payload broadcast to the observer's subscribers
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Built-in observer subscriber (can be repeated)
    #[arg(short, long, value_name = "NAME")]
    subscriber: Vec<String>,

    /// Keep broadcasting when a subscriber fails
    #[arg(long)]
    isolate: bool,

    /// List available patterns and subscribers, then exit
    #[arg(long)]
    list: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Send pattern output through the logger instead of stdout
    #[arg(long)]
    log_output: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn parse_pattern(value: &str) -> std::result::Result<PatternKind, String> {
    value.parse()
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Pattern Showcase CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using patterns library v{}", patterns_core::VERSION);

    if args.list {
        print_catalog();
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let summary_format = if args.json {
        SummaryFormat::Json
    } else {
        config.output.summary
    };

    let showcase = Showcase::new(config.showcase, build_sink(config.output.sink));
    let summary = showcase.run()?;

    print_summary(&summary, summary_format)?;
    Ok(())
}

/// Load the config file (if any) and apply command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            let config = config::load_config(path)?;
            log::debug!("Configuration loaded successfully");
            config
        }
        None => AppConfig::default(),
    };

    let showcase = &mut config.showcase;
    if !args.pattern.is_empty() {
        showcase.patterns = args.pattern.clone();
    }
    if let Some(message) = &args.message {
        showcase.observer.message = message.clone();
    }
    if !args.subscriber.is_empty() {
        showcase.observer.subscribers = args.subscriber.clone();
    }
    if args.isolate {
        showcase.observer.policy = DeliveryPolicy::Isolate;
    }
    if args.log_output {
        config.output.sink = SinkKind::Log;
    }

    log::debug!("Patterns to run: {:?}", config.showcase.patterns);
    Ok(config)
}

fn build_sink(kind: SinkKind) -> SharedSink {
    match kind {
        SinkKind::Console => Rc::new(ConsoleSink),
        SinkKind::Log => Rc::new(LogSink::default()),
    }
}

fn print_catalog() {
    println!("Patterns:");
    for kind in PatternKind::ALL {
        println!("  {:<18} {}", kind.as_str(), kind.title());
    }
    println!("\nObserver subscribers:");
    for name in BUILTIN_SUBSCRIBERS {
        println!("  {}", name);
    }
}

fn print_summary(summary: &ShowcaseSummary, format: SummaryFormat) -> Result<()> {
    match format {
        SummaryFormat::Txt => {
            println!("\n═══════════════════════════════════════════════");
            println!("  Patterns run:        {}", summary.patterns_run.len());
            println!("  Lines written:       {}", summary.lines_written);
            println!("  Subscriber failures: {}", summary.subscriber_failures);
            println!("═══════════════════════════════════════════════");
        }
        SummaryFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
    }
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
