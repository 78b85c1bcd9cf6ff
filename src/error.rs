use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown preset `{0}`, expected one of: {names}", names = crate::Preset::names().join(", "))]
    UnknownPreset(String),

    #[error("invalid tick interval `{0}`, expected a number of milliseconds")]
    InvalidTick(String),

    #[error("the simulation thread is no longer running")]
    SimulationStopped,

    #[error("the {0} thread panicked")]
    ThreadPanicked(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
