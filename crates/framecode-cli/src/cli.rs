use clap::{Args, Parser, Subcommand};
use framecode_core::Framerate;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "framecode")]
#[command(author, version, about = "SMPTE timecode calculator for broadcast framerates")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Framerate for timecodes without an @rate suffix (e.g. 25, 29.97, 23.976)
    #[arg(short, long, global = true)]
    pub rate: Option<Framerate>,

    /// Use drop-frame labels
    #[arg(long, global = true, conflicts_with = "non_drop")]
    pub drop_frame: bool,

    /// Use non-drop labels
    #[arg(long, global = true)]
    pub non_drop: bool,

    /// Print timecodes without the @rate suffix
    #[arg(long, global = true)]
    pub no_suffix: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the timecode of a zero-based frame number
    Format {
        /// Frame number (may be negative)
        #[arg(allow_hyphen_values = true)]
        frame: i64,
    },

    /// Print the zero-based frame number of a timecode
    Frames {
        /// Timecode such as 01:00:00;00 or 01:00:00:00@25
        timecode: String,
    },

    /// Add an offset to a timecode
    Add {
        timecode: String,

        #[command(flatten)]
        offset: OffsetArgs,
    },

    /// Subtract an offset from a timecode
    Subtract {
        timecode: String,

        #[command(flatten)]
        offset: OffsetArgs,
    },

    /// Re-express a timecode at another framerate, keeping elapsed time
    Convert {
        timecode: String,

        /// Target framerate
        #[arg(long)]
        to: Framerate,
    },

    /// List supported framerates
    Rates,
}

/// Offset in timecode units at the timecode's framerate.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OffsetArgs {
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub hours: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub minutes: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub seconds: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub frames: i64,
}
