use anyhow::{Result, bail};
use std::path::PathBuf;

/// How the parsed lesson is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Plain text on stdout.
    #[default]
    Plain,
    /// Recovery trail, blocks, TOC and exercises as JSON.
    Json,
    /// Interactive terminal viewer.
    View,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Input file, or `-` for stdin.
    pub input: String,
    /// Treat the input as trusted markdown and skip recovery.
    pub raw: bool,
    /// Ignore progressive disclosure and show every block.
    pub all: bool,
    pub mode: Mode,
    pub config: Option<PathBuf>,
    pub help: bool,
}

impl Options {
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let mut opts = Options::default();
        let mut input = None;
        let mut iter = args.iter().map(|a| a.as_ref());

        while let Some(arg) = iter.next() {
            match arg {
                "--raw" => opts.raw = true,
                "--all" => opts.all = true,
                "--json" => opts.mode = Mode::Json,
                "--view" => opts.mode = Mode::View,
                "-h" | "--help" => opts.help = true,
                "--config" => match iter.next() {
                    Some(path) => opts.config = Some(PathBuf::from(path)),
                    None => bail!("--config needs a path"),
                },
                flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
                path => {
                    if input.replace(path.to_string()).is_some() {
                        bail!("only one input may be given");
                    }
                }
            }
        }

        match input {
            Some(input) => opts.input = input,
            None if opts.help => {}
            None => bail!("no input given"),
        }
        Ok(opts)
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--raw] [--all] [--json | --view] [--config <path>] <lesson-file | ->\n\
         \n\
         Reads a generated lesson (markdown or a JSON payload), recovers the\n\
         lesson text and prints it.\n\
         \n\
         \x20 --raw     input is trusted markdown, skip recovery\n\
         \x20 --all     show every block of long lessons\n\
         \x20 --json    print recovery result, blocks and exercises as JSON\n\
         \x20 --view    open the interactive viewer\n\
         \x20 --config  config file (default ~/.config/lessonmark/config.toml)"
    )
}
