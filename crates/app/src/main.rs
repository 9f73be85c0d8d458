use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use chainlab_core::model::Workbench;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, PackCatalog, PlayService, RevealDelays, load_pack_file};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingPack,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingPack => write!(f, "check requires --pack <file>"),
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
    catalog: PackCatalog,
    play: PlayService,
    delays: RevealDelays,
    workbench: Workbench,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> PackCatalog {
        self.catalog.clone()
    }

    fn play(&self) -> PlayService {
        self.play
    }

    fn delays(&self) -> RevealDelays {
        self.delays
    }

    fn workbench(&self) -> Workbench {
        self.workbench.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--quiz-pack <file>] [--code-pack <file>]");
    eprintln!("  cargo run -p app -- check --pack <file>");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  the shipped quiz bank and Java levels");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CHAINLAB_QUIZ_PACK, CHAINLAB_CODE_PACK");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

struct UiArgs {
    quiz_pack: Option<PathBuf>,
    code_pack: Option<PathBuf>,
}

impl UiArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut quiz_pack = std::env::var("CHAINLAB_QUIZ_PACK").ok().map(PathBuf::from);
        let mut code_pack = std::env::var("CHAINLAB_CODE_PACK").ok().map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--quiz-pack" => {
                    quiz_pack = Some(PathBuf::from(require_value(args, "--quiz-pack")?));
                }
                "--code-pack" => {
                    code_pack = Some(PathBuf::from(require_value(args, "--code-pack")?));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            quiz_pack,
            code_pack,
        })
    }
}

struct CheckArgs {
    pack: PathBuf,
}

impl CheckArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut pack = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--pack" => pack = Some(PathBuf::from(require_value(args, "--pack")?)),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        pack.map(|pack| Self { pack }).ok_or(ArgsError::MissingPack)
    }
}

fn report_args(err: ArgsError) -> ArgsError {
    eprintln!("{err}");
    print_usage();
    err
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand means launch the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    match cmd {
        Command::Check => {
            let args = CheckArgs::parse(&mut iter).map_err(report_args)?;
            let pack = load_pack_file(&args.pack)?;
            println!(
                "{}: {} items, {} points each, max score {}",
                pack.title(),
                pack.len(),
                pack.reward(),
                pack.max_score()
            );
            Ok(())
        }
        Command::Ui => {
            let args = UiArgs::parse(&mut iter).map_err(report_args)?;

            let mut catalog = PackCatalog::built_in()?;
            if let Some(path) = &args.quiz_pack {
                catalog = catalog.with_quiz_pack(path)?;
            }
            if let Some(path) = &args.code_pack {
                catalog = catalog.with_code_pack(path)?;
            }
            let workbench = services::content::contract::workbench()?;

            let app = DesktopApp {
                catalog,
                play: PlayService::new(Clock::default_clock()),
                delays: RevealDelays::standard(),
                workbench,
            };
            let app: Arc<dyn UiApp> = Arc::new(app);
            let context = build_app_context(&app);

            // Dev builds on macOS sometimes come up always-on-top. Keep the
            // window stacking like a normal one.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("ChainLab")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // One line on stderr and a nonzero exit; there is no logging layer to feed.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
