use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lesson_core::catalog::{MAX_NUMBER_LIMIT, NumberRange};
use services::{AppServices, Clock};
use ui::{App, UiApp, WebSpeech, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidMaxNumber { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidMaxNumber { raw } => {
                write!(f, "invalid --max-number value: {raw} (expected 1..={MAX_NUMBER_LIMIT})")
            }
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    speech: WebSpeech,
}

impl UiApp for DesktopApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn speech_bridge(&self) -> Option<WebSpeech> {
        Some(self.speech.clone())
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    number_range: NumberRange,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>] [--max-number <1..=100>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://<cwd>/speech-learn.sqlite3");
    eprintln!("  --max-number 10");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SPEECH_LEARN_DB_URL, SPEECH_LEARN_MAX_NUMBER, RUST_LOG");
}

fn parse_max_number(raw: &str) -> Result<NumberRange, ArgsError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|value| NumberRange::new(value).ok())
        .ok_or_else(|| ArgsError::InvalidMaxNumber {
            raw: raw.to_string(),
        })
}

impl Args {
    fn from_env() -> Result<Self, ArgsError> {
        let db_url = std::env::var("SPEECH_LEARN_DB_URL")
            .ok()
            .map_or_else(|| normalize_sqlite_url("speech-learn.sqlite3".into()), normalize_sqlite_url);
        let number_range = match std::env::var("SPEECH_LEARN_MAX_NUMBER") {
            Ok(raw) => parse_max_number(&raw)?,
            Err(_) => NumberRange::default(),
        };
        Ok(Self {
            db_url,
            number_range,
        })
    }

    fn parse_ui(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    self.db_url = normalize_sqlite_url(value);
                }
                "--max-number" => {
                    let value = require_value(args, "--max-number")?;
                    self.number_range = parse_max_number(&value)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(self)
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let first = argv.first().cloned();
    match first.as_deref() {
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        // `ui` is the only subcommand and also the default.
        Some("ui") => {
            argv.remove(0);
        }
        Some(first) if !first.starts_with("--") => {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            return Err(ArgsError::UnknownArg(first.to_string()).into());
        }
        _ => {}
    }

    let mut iter = argv.into_iter();
    let parsed = Args::from_env()
        .and_then(|defaults| defaults.parse_ui(&mut iter))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    init_tracing();
    tracing::info!(db = %parsed.db_url, max_number = parsed.number_range.max(), "starting");

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let speech = WebSpeech::new();
    let services = AppServices::new_sqlite(
        &parsed.db_url,
        Clock::default_clock(),
        Arc::new(speech.clone()),
        Arc::new(speech.clone()),
    )
    .await?
    .with_number_range(parsed.number_range);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services, speech });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Speech Learn")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
