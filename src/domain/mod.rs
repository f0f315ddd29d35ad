pub mod error;
pub mod model;

pub use error::SubmitError;
pub use model::{DownloadAttempt, DownloadStatus};
