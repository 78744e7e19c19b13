mod config;
mod sample;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use config::Config;
use htmlgen_dom::Document;
use htmlgen_editor::{Console, EditSession};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// htmlgen - build an HTML page one tag at a time
#[derive(Parser, Debug)]
#[command(name = "htmlgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output file (overrides config)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Start from the sample page
    #[arg(long)]
    sample: bool,

    /// Do not emit <!DOCTYPE html>
    #[arg(long)]
    no_doctype: bool,

    /// Config file (defaults to htmlgen.config.json in the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the finished document instead of writing it
    #[arg(long)]
    print: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Config file merged with command-line overrides
    fn settings(&self, cwd: &Path) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_file(path)
                .with_context(|| format!("Cannot load config {}", path.display()))?,
            None => Config::load(cwd)?,
        };

        if let Some(out) = &self.out {
            config.out_file = out.display().to_string();
        }
        if self.sample {
            config.sample = true;
        }
        if self.no_doctype {
            config.doctype = false;
        }

        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Build the document, run the edit session over `input`/`output`, then
/// save or print the result.
fn run<R: BufRead, W: Write>(cli: &Cli, cwd: &Path, input: R, output: W) -> Result<()> {
    let config = cli.settings(cwd)?;
    debug!(?config, "Resolved settings");

    let out_path = config.get_out_path(cwd);
    let mut document = if config.doctype {
        Document::with_doctype(&out_path)
    } else {
        Document::new(&out_path)
    };

    if config.sample {
        sample::populate(&mut document)?;
    }

    let mut session = EditSession::new(document, Console::new(input, output));
    session.run().context("Edit session ended before the page was finished")?;

    let (document, console) = session.into_parts();
    let (_, mut output) = console.into_parts();

    if cli.print {
        writeln!(output, "{}", document.to_html())?;
        return Ok(());
    }

    writeln!(output, "Writing HTML file to {}...", out_path.display())?;
    document.save()?;
    writeln!(output, "{} File written.", "✓".green())?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .context("Cannot get current directory")
        .and_then(|cwd| {
            let stdin = std::io::stdin();
            run(&cli, &cwd, stdin.lock(), std::io::stdout())
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
