use thiserror::Error;

pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineupError {
    #[error("entry amount ${amount} outside allowed range ${min}-${max}")]
    EntryOutOfRange { amount: u32, min: u32, max: u32 },

    #[error("pick slip is full ({max} picks)")]
    SlipFull { max: usize },

    #[error("lineup has {count} picks, at most {max} allowed")]
    TooManyPicks { count: usize, max: usize },

    #[error("lineup needs at least {min} picks, has {count}")]
    TooFewPicks { count: usize, min: usize },

    #[error("unknown prop: {0}")]
    UnknownProp(String),
}
