use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use services::SessionFactory;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const SEED_ENV: &str = "SPEEDMATH_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("invalid seed value: {raw}")]
    InvalidSeed { raw: String },
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

struct DesktopApp {
    session_factory: Arc<SessionFactory>,
}

impl UiApp for DesktopApp {
    fn session_factory(&self) -> Arc<SessionFactory> {
        Arc::clone(&self.session_factory)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    seed: Option<u64>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <u64>   replay the same drills for the same seed");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {SEED_ENV}, RUST_LOG");
}

impl Args {
    /// Flags win over the environment.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_seed: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            seed: env_seed.map(parse_seed).transpose()?,
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    parsed.seed = Some(parse_seed(value)?);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    // `main` reports the error itself.
    let parsed =
        Args::parse(&mut argv, std::env::var(SEED_ENV).ok()).inspect_err(|_| print_usage())?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let app = DesktopApp {
        session_factory: Arc::new(SessionFactory::from_seed(parsed.seed)),
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // Keep the window a normal, non-floating one on macOS dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("SpeedMath")
            .with_inner_size(LogicalSize::new(1000.0, 600.0))
            .with_always_on_top(false),
    );

    info!("launching drill window");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
