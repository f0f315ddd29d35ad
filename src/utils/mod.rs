use std::sync::OnceLock;

use regex::Regex;

/// Classify input text as a plausible YouTube URL.
///
/// Scheme and `www.` are optional; the host must be `youtube.com` or
/// `youtu.be`, followed by a non-empty path or query. Nothing beyond the
/// shape is checked (the video may not exist).
pub fn is_youtube_url(input: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();

    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+")
            .expect("hard-coded pattern compiles")
    });

    pattern.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_youtube_hosts() {
        for url in [
            "https://www.youtube.com/watch?v=abc123",
            "http://youtube.com/watch?v=abc123",
            "https://youtu.be/dQw4w9WgXcQ",
            "www.youtube.com/watch?v=abc123",
            "youtube.com/shorts/xyz",
            "youtu.be/a",
        ] {
            assert!(is_youtube_url(url), "expected {url} to validate");
        }
    }

    #[test]
    fn test_rejects_everything_else() {
        for url in [
            "",
            "   ",
            "not a url",
            "https://vimeo.com/123456789",
            "https://notyoutube.com/watch?v=abc",
            "https://music.youtube.com/watch?v=abc",
            "ftp://youtube.com/watch?v=abc",
            "https://www.youtube.com",
            "https://www.youtube.com/",
            "youtu.be/",
        ] {
            assert!(!is_youtube_url(url), "expected {url} to be rejected");
        }
    }
}
