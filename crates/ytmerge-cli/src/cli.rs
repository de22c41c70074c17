//! Command line arguments

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Long flags that may also be spelled with a single dash
const LONG_FLAGS: [&str; 3] = ["file", "keyfile", "verbose"];

#[derive(Parser, Debug)]
#[command(
    name = "ytmerge",
    author,
    version,
    about = "Merge YouTube playlists into one list ordered by publish date",
    long_about = None
)]
pub struct Cli {
    /// YouTube playlist link file, one URL per line
    #[arg(long = "file", value_name = "PATH", default_value = "playlist.txt")]
    pub file: PathBuf,

    /// API key file, used verbatim
    #[arg(long = "keyfile", value_name = "PATH", default_value = "key.txt")]
    pub keyfile: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse process arguments, accepting `-file` as well as `--file`
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites single-dash long flags (`-file`, `-keyfile=x`) to `--file` form
///
/// Everything after a bare `--` is left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str() {
                Some(text) if is_single_dash_long(text) => OsString::from(format!("-{}", text)),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    LONG_FLAGS.contains(&name)
}
