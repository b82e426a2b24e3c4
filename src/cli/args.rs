//! CLI argument definitions using Clap

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Environment variable overriding the engine directory
pub const DIR_ENV_VAR: &str = "PEON_PING_DIR";

/// peon-ping - sound cues for editor hooks
#[derive(Parser, Debug)]
#[command(name = "peon-ping")]
#[command(version)]
#[command(about = "Plays a sound cue for an editor hook event")]
#[command(long_about = None)]
pub struct Cli {
    /// Hook event name, as listed under "hooks" in config.json
    #[arg(long, value_name = "NAME")]
    pub hook: Option<String>,

    /// Directory holding config.json, packs/ and the state file
    /// (default: the executable's directory)
    #[arg(long, value_name = "DIR", env = DIR_ENV_VAR)]
    pub dir: Option<PathBuf>,
}

/// Parsed options for one hook invocation
#[derive(Debug, Clone)]
pub struct HookOptions {
    pub hook: Option<String>,
    pub dir: Option<PathBuf>,
}

impl HookOptions {
    /// Recover options from arguments clap rejected (a repeated `--hook`,
    /// unknown flags). The first `--hook` value wins and everything
    /// unrecognised is skipped.
    pub fn scan<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut hook = None;
        let mut dir = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.to_string_lossy().into_owned();
            match arg.as_str() {
                "--hook" => {
                    let value = args.next();
                    if hook.is_none() {
                        hook = value.map(|v| v.to_string_lossy().into_owned());
                    }
                }
                "--dir" => {
                    let value = args.next();
                    if dir.is_none() {
                        dir = value.map(PathBuf::from);
                    }
                }
                _ => {
                    if let Some(value) = arg.strip_prefix("--hook=") {
                        hook.get_or_insert_with(|| value.to_string());
                    } else if let Some(value) = arg.strip_prefix("--dir=") {
                        dir.get_or_insert_with(|| PathBuf::from(value));
                    }
                }
            }
        }

        Self::from(Cli {
            hook,
            dir: dir.or_else(|| env::var_os(DIR_ENV_VAR).map(PathBuf::from)),
        })
    }
}

impl From<Cli> for HookOptions {
    fn from(cli: Cli) -> Self {
        Self {
            hook: cli.hook.filter(|h| !h.is_empty()),
            dir: cli.dir.filter(|d| !d.as_os_str().is_empty()),
        }
    }
}
