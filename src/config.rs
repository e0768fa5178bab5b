use clap::Parser;
use std::path::PathBuf;

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "mazerun.log";

/// Walk from the top left corner of a maze to the highlighted exit with the arrow keys.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maximum maze width in cells. Without COLS and ROWS the maze fills the terminal
    #[arg(requires = "rows", value_parser = clap::value_parser!(u16).range(1..))]
    pub cols: Option<u16>,

    /// Maximum maze height in cells
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: Option<u16>,

    /// Seed of the first maze
    #[arg(long, env = "MAZERUN_SEED")]
    pub seed: Option<u64>,

    /// Directory for mazerun.log [default: system temp dir]
    #[arg(long, env = "MAZERUN_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write debug level logs. The environment variable takes 1/0, yes/no, on/off
    #[arg(long, env = "DEBUG", value_parser = clap::builder::BoolishValueParser::new())]
    pub debug: bool,
}

/// Run settings, filled from the command line and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Upper bound for the maze size. The terminal size still caps it.
    pub max_dims: Option<(u16, u16)>,
    /// Seed of the first maze. Later mazes continue the same random stream.
    pub seed: Option<u64>,
    /// Directory the log file is written to
    pub log_dir: PathBuf,
    /// Write debug level logs
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_dims: None,
            seed: None,
            log_dir: std::env::temp_dir(),
            debug: false,
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Settings {
            max_dims: args.cols.zip(args.rows),
            seed: args.seed,
            log_dir: args
                .log_dir
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(std::env::temp_dir),
            debug: args.debug,
        }
    }
}

impl Settings {
    /// Read settings from the process arguments and environment.
    /// Prints usage and exits on invalid arguments or `--help`.
    pub fn from_env() -> Self {
        Args::parse().into()
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}
