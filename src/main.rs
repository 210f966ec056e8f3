//! Command-line entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use famfam_flags::config::{self, Config};
use famfam_flags::locale::{self, Locale};
use famfam_flags::rows::{self, LocaleRow, RowIcon};
use famfam_flags::{logging, FlagError, FlagKind, IconRegistry, IconResource};

#[derive(Parser)]
#[command(name = "famfam-flags", version, about = "Look up famfamfam flag icons by country code or locale")]
struct Cli {
    /// Icon base path (overrides the config file)
    #[arg(long, global = true)]
    base_path: Option<String>,

    /// Config file (defaults to <config dir>/famfam-flags/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Do not write a log file
    #[arg(long, global = true)]
    no_log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available locales with their flags
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show the flag for one locale (defaults to the system locale)
    Show { locale: Option<String> },
    /// Look up a flag by country or region code
    Lookup {
        code: String,
        #[arg(long)]
        json: bool,
    },
    /// Print every registered flag code
    Codes {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Country,
    Region,
    Legacy,
    Placeholder,
}

impl From<KindArg> for FlagKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Country => FlagKind::Country,
            KindArg::Region => FlagKind::Region,
            KindArg::Legacy => FlagKind::Legacy,
            KindArg::Placeholder => FlagKind::Placeholder,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load config before logging is up; errors are reported once it is.
    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    };

    let log_level = match (&config, cli.verbose) {
        (_, true) => "famfam_flags=debug,info".to_string(),
        (Ok(config), false) => config.log_level.clone(),
        (Err(_), false) => "info".to_string(),
    };
    let mut log_dir_error = None;
    let log_dir = if cli.no_log_file {
        None
    } else {
        config::log_dir().filter(|dir| match config::prepare_log_dir(dir) {
            Ok(()) => true,
            Err(e) => {
                log_dir_error = Some((dir.clone(), e));
                false
            }
        })
    };
    let _guard = logging::init(&log_level, log_dir.as_deref());

    if let Some((dir, e)) = log_dir_error {
        warn!(dir = %dir.display(), error = %e, "Failed to create log directory, file logging disabled");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load config");
            return ExitCode::FAILURE;
        }
    };

    let base_path = cli.base_path.unwrap_or(config.icon_base_path);
    let registry = IconRegistry::with_base_path(base_path);
    info!(flags = registry.len(), base_path = registry.base_path(), "Registry ready");

    match run(cli.command, &registry) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, registry: &IconRegistry) -> Result<(), FlagError> {
    match command {
        Command::List { json } => {
            let rows = rows::available_rows(registry);
            if json {
                print_json(&rows)?;
            } else {
                println!("{:<4} {:<44} {:<36} {:<20} CODE", "", "FLAG", "COUNTRY", "LANGUAGE");
                for row in &rows {
                    println!(
                        "{:<4} {:<44} {:<36} {:<20} {}",
                        glyph(row.icon()),
                        row.icon().url(),
                        row.display_country(),
                        row.display_language(),
                        row.country_code()
                    );
                }
            }
        }
        Command::Show { locale } => {
            let locale = match locale {
                Some(tag) => Locale::parse(&tag)?,
                None => locale::system_locale().ok_or_else(|| FlagError::InvalidLocale {
                    tag: String::new(),
                    reason: "no system locale set",
                })?,
            };
            debug!(%locale, "Showing locale");

            let row = LocaleRow::new(locale, registry);
            if row.country_code().is_empty() {
                warn!(locale = %row.locale(), "Locale has no region, no flag to show");
            }
            print!("{}", row.summary());
            println!("- Icon: {} ({})", row.icon().url(), row.icon().mime_type());
        }
        Command::Lookup { code, json } => {
            let icon = RowIcon::for_code(registry, &code);
            if icon.is_placeholder() {
                info!(%code, "No flag for code, using placeholder");
            }
            if json {
                print_json(&icon)?;
            } else {
                match icon {
                    RowIcon::Flag(entry) => {
                        println!("{} {} {}", entry.code(), entry.name(), entry.resource_path())
                    }
                    RowIcon::QuestionMark => println!("{code} ? {}", icon.url()),
                }
            }
        }
        Command::Codes { kind, json } => {
            let kind = kind.map(FlagKind::from);
            let entries: Vec<_> = registry
                .sorted_entries()
                .into_iter()
                .filter(|e| kind.map_or(true, |k| e.kind() == k))
                .collect();
            if json {
                print_json(&entries)?;
            } else {
                for entry in entries {
                    println!(
                        "{:<14} {:<12} {:<46} {}",
                        entry.code(),
                        entry.kind().as_str(),
                        entry.name(),
                        entry.resource_path()
                    );
                }
            }
        }
    }

    Ok(())
}

fn glyph(icon: RowIcon<'_>) -> &'static str {
    if icon.is_placeholder() {
        "?"
    } else {
        ""
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), FlagError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
