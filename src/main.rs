//! Command-line entry point.
//!
//! Reads a JSON filter state (from a file or stdin), renders the filter
//! control and writes the HTML to stdout.
//!
//! ```text
//! filter-section state.json --theme plain --locale ko > filter.html
//! echo '{"selectedSort": "name_asc"}' | filter-section
//! ```
//!
//! Settings may also come from a TOML file passed with `--config`; flags
//! override it.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use filter_section::observability::init_tracing;
use filter_section::{initialize, Config, FilterProps, Result};

#[derive(Debug, Parser)]
#[command(name = "filter-section", version, about = "Render a product filter control from a JSON state snapshot")]
struct Cli {
    /// JSON state file. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Built-in theme (`tailwind`, `plain`).
    #[arg(long)]
    theme: Option<String>,

    /// Custom theme TOML file.
    #[arg(long, value_name = "PATH")]
    theme_file: Option<String>,

    /// Built-in label set (`en`, `ko`).
    #[arg(long)]
    locale: Option<String>,

    /// Custom labels TOML file.
    #[arg(long, value_name = "PATH")]
    labels_file: Option<String>,

    /// Log filter directive, e.g. `debug`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let base = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => Config::default(),
        };

        Ok(base.merge(Config {
            theme_name: self.theme.clone(),
            theme_file: self.theme_file.clone(),
            locale: self.locale.clone(),
            labels_file: self.labels_file.clone(),
            trace_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }))
    }

    fn read_props(&self) -> Result<FilterProps> {
        match self.input.as_deref() {
            Some(path) if path.as_os_str() != "-" => {
                let file = File::open(path)?;
                FilterProps::from_reader(BufReader::new(file))
            }
            _ => FilterProps::from_reader(io::stdin().lock()),
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    init_tracing(&config);

    let section = initialize(&config)?;
    let props = cli.read_props()?;
    tracing::debug!(
        category1 = %props.selected_category1,
        category2 = %props.selected_category2,
        is_loading = props.is_loading,
        "rendering filter section"
    );

    let html = section.render(&props);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{html}")?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "render failed");
            eprintln!("filter-section: {e}");
            ExitCode::FAILURE
        }
    }
}
