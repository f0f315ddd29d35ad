use thiserror::Error;

/// Why a submission was refused. The display strings double as the
/// user-visible banner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter a YouTube video URL")]
    EmptyUrl,

    #[error("Please enter a valid YouTube URL")]
    InvalidUrl,
}
