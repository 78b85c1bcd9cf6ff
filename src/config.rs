use std::{fs, path::Path, time::Duration};

use log::{info, warn};

use crate::{Error, Preset, Result, World};

pub const DEFAULT_TICK: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Preset(Preset),
    File(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::Preset(Preset::ALL[0]),
            tick: DEFAULT_TICK,
        }
    }
}

impl Config {
    /// parses `[PATTERN] [TICK_MS]`, the program name must already be skipped.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(pattern) = args.next() {
            config.source = Self::parse_source(pattern)?;
        }
        if let Some(tick) = args.next() {
            config.tick = Self::parse_tick(&tick)?;
        }
        if let Some(extra) = args.next() {
            warn!("ignoring extra argument `{extra}`");
        }
        Ok(config)
    }

    fn parse_source(pattern: String) -> Result<Source> {
        let looks_like_path = pattern.contains(std::path::MAIN_SEPARATOR) || pattern.contains('/');
        if looks_like_path || Path::new(&pattern).is_file() {
            Ok(Source::File(pattern))
        } else {
            Preset::by_name(&pattern).map(Source::Preset)
        }
    }

    fn parse_tick(tick: &str) -> Result<Duration> {
        match tick.parse::<u64>() {
            Ok(millis) if millis > 0 => Ok(Duration::from_millis(millis)),
            _ => Err(Error::InvalidTick(tick.to_string())),
        }
    }

    pub fn load_world(&self) -> Result<World> {
        let world = match &self.source {
            Source::Preset(preset) => {
                info!("loading preset {}", preset.name);
                preset.world()
            }
            Source::File(path) => {
                info!("loading pattern file {path}");
                World::from_pattern(&fs::read_to_string(path)?)
            }
        };
        if world.is_empty() {
            warn!("the starting pattern has no live cells");
        }
        Ok(world)
    }
}
