use thiserror::Error;

#[derive(Error, Debug)]
pub enum NyulError {
    #[error("Empty training corpus")]
    EmptyCorpus,

    #[error("Foreground mask is empty: no sample exceeds the image mean")]
    EmptyForeground,

    #[error("Degenerate landmarks: interpolation domain has zero width")]
    DegenerateLandmarks,

    #[error("Non-monotonic landmarks: value at index {index} decreases")]
    NonMonotonicLandmarks { index: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NyulError>;
