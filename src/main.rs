use clap::Parser;
use grecent::commands::{execute_recent, OutputMode, RecentArgs};
use grecent::core::{dirs::log_file, print_error};
use log::LevelFilter;
use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal};

#[derive(Parser)]
#[command(name = "grecent")]
#[command(about = "List git branches by most recent activity")]
#[command(version)]
struct Cli {
    /// Number of branches to show (defaults to the configured limit, 10)
    #[arg(short = 'n', long = "limit", value_parser = parse_limit)]
    limit: Option<usize>,

    /// Print the ranking as a JSON array
    #[arg(long)]
    json: bool,

    /// Fetch all remotes before ranking
    #[arg(long)]
    fetch: bool,

    /// Force the interactive view
    #[arg(long, conflicts_with = "no_tui")]
    tui: bool,

    /// Never start the interactive view
    #[arg(long = "no-tui")]
    no_tui: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn tui_flag(&self) -> Option<bool> {
        match (self.tui, self.no_tui) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("limit must be a positive integer".to_string()),
        Ok(limit) => Ok(limit),
        Err(_) => Err(format!("'{value}' is not a positive integer")),
    }
}

fn main() {
    let cli = Cli::parse();
    let mode = OutputMode::resolve(cli.json, cli.tui_flag(), io::stdout().is_terminal());

    init_logging(cli.debug, mode == OutputMode::Interactive);

    let args = RecentArgs {
        limit: cli.limit,
        fetch: cli.fetch,
        mode,
    };
    if let Err(e) = execute_recent(args) {
        log::debug!("Exiting with error: {e:?}");
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// `info` by default, `debug` with `--debug`; `RUST_LOG` refines either. The
/// interactive view owns the screen, so its logs go to a file instead.
fn init_logging(debug: bool, interactive: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    );
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }

    if interactive {
        match open_log_file() {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                builder.filter_level(LevelFilter::Off);
            }
        }
    }

    builder.init();
}

fn open_log_file() -> io::Result<File> {
    let path = log_file().map_err(io::Error::other)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
