use crate::domain::error::SubmitError;
use crate::utils::is_youtube_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadStatus {
    #[default]
    Idle,
    InProgress,
    Success,
    Error,
}

/// A single simulated download attempt: the URL being edited, the phase it
/// is in, and the banner text shown for that phase.
///
/// Fields are private; every mutation goes through a transition below, which
/// keeps `message` consistent with `status` (empty exactly in `Idle`).
#[derive(Debug, Clone, Default)]
pub struct DownloadAttempt {
    url: String,
    status: DownloadStatus,
    message: String,
}

impl DownloadAttempt {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> DownloadStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == DownloadStatus::InProgress
    }

    /// Replace the URL text. Any edit returns the attempt to `Idle` and
    /// clears the banner, whatever state it was in.
    pub fn edit(&mut self, url: String) {
        self.url = url;
        self.status = DownloadStatus::Idle;
        self.message.clear();
    }

    /// Try to start a download. The empty check runs before the shape
    /// check, so whitespace-only input always reports the missing-URL
    /// message.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.url.trim().is_empty() {
            return Err(self.reject(SubmitError::EmptyUrl));
        }

        if !is_youtube_url(&self.url) {
            return Err(self.reject(SubmitError::InvalidUrl));
        }

        self.status = DownloadStatus::InProgress;
        self.message = "Downloading video...".to_string();
        Ok(())
    }

    /// Mark the attempt finished. The pending delay is never cancelled, so
    /// a completion can land after the attempt was already edited back to
    /// `Idle`; it still flips to `Success`.
    pub fn complete(&mut self) {
        self.status = DownloadStatus::Success;
        self.message = "Video successfully downloaded as MP3!".to_string();
    }

    fn reject(&mut self, error: SubmitError) -> SubmitError {
        self.status = DownloadStatus::Error;
        self.message = error.to_string();
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_with_empty_message() {
        let attempt = DownloadAttempt::default();
        assert_eq!(attempt.status(), DownloadStatus::Idle);
        assert!(attempt.message().is_empty());
    }

    #[test]
    fn test_empty_submission_reports_missing_url() {
        let mut attempt = DownloadAttempt::default();
        assert_eq!(attempt.submit(), Err(SubmitError::EmptyUrl));
        assert_eq!(attempt.status(), DownloadStatus::Error);
        assert_eq!(attempt.message(), "Please enter a YouTube video URL");
    }

    #[test]
    fn test_whitespace_only_counts_as_missing_not_invalid() {
        let mut attempt = DownloadAttempt::default();
        attempt.edit("   \n".to_string());
        assert_eq!(attempt.submit(), Err(SubmitError::EmptyUrl));
    }

    #[test]
    fn test_non_youtube_text_is_rejected_until_next_edit() {
        let mut attempt = DownloadAttempt::default();
        attempt.edit("not a url".to_string());
        assert_eq!(attempt.submit(), Err(SubmitError::InvalidUrl));
        assert_eq!(attempt.status(), DownloadStatus::Error);
        assert_eq!(attempt.message(), "Please enter a valid YouTube URL");

        attempt.edit("not a url!".to_string());
        assert_eq!(attempt.status(), DownloadStatus::Idle);
        assert!(attempt.message().is_empty());
    }

    #[test]
    fn test_valid_url_goes_in_progress_then_succeeds() {
        let mut attempt = DownloadAttempt::default();
        attempt.edit("https://www.youtube.com/watch?v=abc123".to_string());

        assert_eq!(attempt.submit(), Ok(()));
        assert_eq!(attempt.status(), DownloadStatus::InProgress);
        assert!(!attempt.message().is_empty());

        attempt.complete();
        assert_eq!(attempt.status(), DownloadStatus::Success);
        assert!(!attempt.message().is_empty());
    }

    #[test]
    fn test_editing_resets_every_status_to_idle() {
        let mut attempt = DownloadAttempt::default();

        attempt.edit("https://youtu.be/abc".to_string());
        attempt.submit().expect("valid url");
        attempt.edit("https://youtu.be/abcd".to_string());
        assert_eq!(attempt.status(), DownloadStatus::Idle);

        attempt.submit().expect("valid url");
        attempt.complete();
        attempt.edit(String::new());
        assert_eq!(attempt.status(), DownloadStatus::Idle);
        assert!(attempt.message().is_empty());
    }

    // Pins the observed behavior: the delay is not cancelled by edits, so
    // the completion still lands as Success.
    #[test]
    fn test_completion_lands_after_an_intervening_edit() {
        let mut attempt = DownloadAttempt::default();
        attempt.edit("https://youtu.be/abc".to_string());
        attempt.submit().expect("valid url");

        attempt.edit("something else".to_string());
        assert_eq!(attempt.status(), DownloadStatus::Idle);

        attempt.complete();
        assert_eq!(attempt.status(), DownloadStatus::Success);
    }
}
