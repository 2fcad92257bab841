use clap::{ArgAction, Args, Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{ConfigLoader, LinesConfig, MarkersConfig, Overrides};
use crate::error::{SplicerError, SplicerResult};
use crate::splice::LineMode;

#[derive(Parser, Debug)]
#[command(
    name = "splicer",
    version,
    about = "Replace a region of a text file with the contents of another file"
)]
pub struct Cli {
    /// File to modify in place
    #[arg(long, short = 't')]
    pub target: Option<PathBuf>,

    /// File whose full contents are inserted
    #[arg(long, short = 's')]
    pub source: Option<PathBuf>,

    #[command(flatten)]
    pub range: RangeArgs,

    #[command(flatten)]
    pub markers: MarkerArgs,

    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Text appended after the inserted block. Accepts \n, \r, \t and \\ escapes.
    #[arg(long)]
    pub trailer: Option<String>,

    /// Config file (.toml, .json, .yaml); defaults to ./splicer.toml when present
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the spliced content instead of writing the target
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(long)]
    pub no_color: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args, Debug, Default)]
pub struct RangeArgs {
    /// First line to remove (zero-based, inclusive)
    #[arg(long, requires = "end", conflicts_with_all = ["start_marker", "end_marker"])]
    pub start: Option<usize>,

    /// Line to resume at (zero-based, exclusive)
    #[arg(long, requires = "start")]
    pub end: Option<usize>,

    /// Read --start/--end as one-based inclusive line numbers
    #[arg(long, requires = "start")]
    pub line_numbers: bool,
}

#[derive(Args, Debug, Default)]
pub struct MarkerArgs {
    /// Text where the replaced region begins
    #[arg(long, requires = "end_marker")]
    pub start_marker: Option<String>,

    /// Text where the replaced region stops; it is kept
    #[arg(long, requires = "start_marker")]
    pub end_marker: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    KeepEnds,
    Split,
}

impl From<ModeArg> for LineMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::KeepEnds => LineMode::KeepEnds,
            ModeArg::Split => LineMode::Split,
        }
    }
}

impl Cli {
    pub fn loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => ConfigLoader::with_path(path.clone()),
            None => ConfigLoader::new(),
        }
    }

    pub fn overrides(&self) -> SplicerResult<Overrides> {
        let lines = match (self.range.start, self.range.end) {
            (Some(start), Some(end)) => Some(LinesConfig {
                start,
                end,
                line_numbers: self.range.line_numbers,
            }),
            _ => None,
        };
        let markers = match (&self.markers.start_marker, &self.markers.end_marker) {
            (Some(start), Some(end)) => Some(MarkersConfig {
                start: start.clone(),
                end: end.clone(),
            }),
            _ => None,
        };
        let trailer = self.trailer.as_deref().map(unescape).transpose()?;

        Ok(Overrides {
            target: self.target.clone(),
            source: self.source.clone(),
            lines,
            markers,
            mode: self.mode.map(LineMode::from),
            trailer,
        })
    }
}

/// Expand the backslash escapes a shell makes awkward to type
pub fn unescape(raw: &str) -> SplicerResult<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                return Err(SplicerError::invalid_argument(format!(
                    "unknown escape \\{} in trailer",
                    other
                )))
            }
            None => return Err(SplicerError::invalid_argument("trailer ends with a lone backslash")),
        }
    }
    Ok(out)
}
