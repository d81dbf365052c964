use annofix_core::adapters::FlutterAnalyzerSource;
use annofix_core::pipeline::{run_fix, run_scan};
use annofix_core::ports::AnalyzerSource;
use annofix_core::settings::FixSettings;
use annofix_render::{render_fix_text, render_preview_text, render_scan_text};
use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "annofix",
    version,
    about = "Inserts missing @override annotations reported by flutter analyze."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the analyzer and list annotate_overrides findings without editing.
    Scan(ScanArgs),
    /// Insert @override above every reported line, then re-run the analyzer.
    Fix(FixArgs),
}

#[derive(Debug, Parser)]
struct ScanArgs {
    /// Repository root the analyzer runs in (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct FixArgs {
    /// Repository root the analyzer runs in (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Show the would-be changes as a unified diff instead of writing.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Scan(args) => cmd_scan(args),
        Command::Fix(args) => cmd_fix(args),
    }
}

fn cmd_scan(args: ScanArgs) -> anyhow::Result<()> {
    let analyzer = FlutterAnalyzerSource::new(args.repo_root);
    let outcome = run_scan(&analyzer)?;

    match args.format {
        OutputFormat::Text => print!("{}", render_scan_text(&outcome.issues)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&outcome.issues).context("serialize issues")?
        ),
    }
    Ok(())
}

fn cmd_fix(args: FixArgs) -> anyhow::Result<()> {
    let analyzer = FlutterAnalyzerSource::new(args.repo_root.clone());
    let settings = FixSettings {
        repo_root: args.repo_root,
        dry_run: args.dry_run,
    };

    let outcome = run_fix(&settings, &analyzer)?;

    if let Some(patch) = &outcome.patch {
        print!(
            "{}",
            render_preview_text(&outcome.results, &outcome.summary)
        );
        if !patch.is_empty() {
            println!();
            print!("{patch}");
        }
        return Ok(());
    }

    print!("{}", render_fix_text(&outcome.results, &outcome.summary));

    // Verification pass: stream the analyzer's view of the patched tree.
    // Its findings are for the reader; nothing is parsed or compared.
    println!("\nRunning analyzer again to verify...");
    io::stdout().flush().context("flush stdout")?;
    analyzer.verify()
}
