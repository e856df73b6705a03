mod error;
mod logging;

use crate::error::{ErrorKind, Result};
use clap::Parser;
use exn::ResultExt;
use spelltome_config::Settings;
use spelltome_loadorder::{MemoryLoadOrder, Patch};
use spelltome_patcher::{PatchReport, RenameTemplate};
use spelltome_records::models::ModKey;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "spelltome", version, about = "Rename spell tomes after the school and level of the spell they teach")]
struct Cli {
    /// JSON export of the active plugins, lowest priority first
    #[arg(long, value_name = "PATH")]
    load_order: PathBuf,

    /// Settings file (defaults to ./settings.json, then the user config directory)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Rename format, overriding the settings file
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Where to write the patch
    #[arg(long, short, value_name = "PATH", default_value = "SpellTomeLevels.json")]
    output: PathBuf,

    /// Plugin name of the generated patch
    #[arg(long, value_name = "PLUGIN", default_value = "SpellTomeLevels.esp", value_parser = parse_mod_key)]
    patch_name: ModKey,

    /// Log more (repeatable)
    #[arg(long, short, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(long, short)]
    quiet: bool,
}
impl Cli {
    fn log_level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::WARN,
            (false, 0) => Level::INFO,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }

    fn settings(&self) -> Result<Settings> {
        let mut figment = Settings::figment(self.settings.as_deref()).or_raise(|| ErrorKind::Settings)?;
        if let Some(format) = &self.format {
            figment = figment.merge(figment::providers::Serialized::default("format", format));
        }
        Settings::from_figment(figment).or_raise(|| ErrorKind::Settings)
    }
}

fn parse_mod_key(s: &str) -> std::result::Result<ModKey, String> {
    s.parse::<ModKey>().map_err(|e| (*e).to_string())
}

fn execute(cli: &Cli) -> Result<PatchReport> {
    let settings = cli.settings()?;
    tracing::debug!(format = %settings.format, "Loaded settings");
    let load_order = MemoryLoadOrder::open(&cli.load_order).or_raise(|| ErrorKind::LoadOrder)?;

    let template = RenameTemplate::new(settings.format);
    let mut patch = Patch::new(cli.patch_name.clone());
    let report = spelltome_patcher::run(&load_order, &template, &mut patch);

    patch.save(&cli.output).or_raise(|| ErrorKind::Patch)?;
    Ok(report)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level());
    match execute(&cli) {
        Ok(report) => {
            if !report.failures.is_empty() {
                tracing::warn!(failed = report.failures.len(), "Some books could not be patched; see errors above");
            }
            ExitCode::SUCCESS
        },
        Err(err) => {
            tracing::error!(error = ?err, "Run aborted");
            ExitCode::FAILURE
        },
    }
}
