//! Command execution, separated from argument parsing for testing.

use anyhow::Result;
use framecode_core::{FrameDelta, Framerate, Timecode};
use tracing::{debug, info};

use crate::cli::{Cli, Commands, OffsetArgs};
use crate::config::CliConfig;

/// Effective settings after merging config file and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub framerate: Framerate,
    /// `--drop-frame` / `--non-drop`, when given.
    pub drop_frame_flag: Option<bool>,
    /// Config preference, applied only at rates that support drop-frame.
    pub prefer_drop_frame: bool,
    pub rate_suffix: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &CliConfig) -> Self {
        let drop_frame_flag = if cli.drop_frame {
            Some(true)
        } else if cli.non_drop {
            Some(false)
        } else {
            None
        };
        Self {
            framerate: cli.rate.unwrap_or(config.default_framerate),
            drop_frame_flag,
            prefer_drop_frame: config.drop_frame,
            rate_suffix: config.rate_suffix && !cli.no_suffix,
        }
    }

    /// Drop-frame mode for values built at `rate`. An explicit flag is
    /// passed through unchanged so unsupported rates fail construction.
    pub fn drop_frame_for(&self, rate: Framerate) -> bool {
        self.drop_frame_flag
            .unwrap_or(self.prefer_drop_frame && rate.supports_drop_frame())
    }

    fn render(&self, timecode: &Timecode) -> String {
        if self.rate_suffix {
            timecode.full_format()
        } else {
            timecode.format()
        }
    }

    fn parse(&self, text: &str) -> Result<Timecode> {
        let timecode = Timecode::parse_with_rate(text, self.framerate)?;
        debug!(text, frame = timecode.frame_number(), "parsed timecode");
        Ok(timecode)
    }
}

impl OffsetArgs {
    fn to_delta(self, rate: Framerate) -> Result<FrameDelta> {
        let delta = FrameDelta::hours(self.hours, rate)?
            .checked_add(FrameDelta::minutes(self.minutes, rate)?)?
            .checked_add(FrameDelta::seconds(self.seconds, rate)?)?
            .checked_add(FrameDelta::frames(self.frames))?;
        Ok(delta)
    }
}

/// Run one command and return the text to print.
pub fn run(command: &Commands, settings: &Settings) -> Result<String> {
    match command {
        Commands::Format { frame } => {
            let drop_frame = settings.drop_frame_for(settings.framerate);
            let timecode = Timecode::from_frame_number(*frame, settings.framerate, drop_frame)?;
            Ok(settings.render(&timecode))
        }
        Commands::Frames { timecode } => {
            let timecode = settings.parse(timecode)?;
            Ok(timecode.frame_number().to_string())
        }
        Commands::Add { timecode, offset } => {
            let timecode = settings.parse(timecode)?;
            let delta = offset.to_delta(timecode.framerate())?;
            info!(frames = delta.whole_frames(), "adding offset");
            Ok(settings.render(&timecode.checked_offset(delta)?))
        }
        Commands::Subtract { timecode, offset } => {
            let timecode = settings.parse(timecode)?;
            let delta = offset.to_delta(timecode.framerate())?;
            info!(frames = delta.whole_frames(), "subtracting offset");
            Ok(settings.render(&timecode.checked_subtract(delta)?))
        }
        Commands::Convert { timecode, to } => {
            let timecode = settings.parse(timecode)?;
            let converted = timecode.convert_framerate(*to, settings.drop_frame_for(*to))?;
            Ok(settings.render(&converted))
        }
        Commands::Rates => Ok(Framerate::ALL
            .iter()
            .map(|rate| {
                let info = rate.info();
                match info.drop_per_minute {
                    Some(drop) => format!(
                        "{:>6}  {:.5} fps  divisor {}  drops {}/min",
                        rate,
                        rate.as_decimal(),
                        info.divisor,
                        drop
                    ),
                    None => format!(
                        "{:>6}  {:.5} fps  divisor {}",
                        rate,
                        rate.as_decimal(),
                        info.divisor
                    ),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
