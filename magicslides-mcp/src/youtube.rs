//! YouTube URL detection.

use regex::Regex;
use std::sync::OnceLock;

fn youtube_regex() -> &'static Regex {
    static YOUTUBE: OnceLock<Regex> = OnceLock::new();
    YOUTUBE.get_or_init(|| {
        Regex::new(r"(?i)^(https?://)?(www\.)?(youtube\.com|youtu\.?be)/.+$")
            .expect("youtube regex is valid")
    })
}

/// Whether `text` is a YouTube video URL (`youtube.com/...` or `youtu.be/...`).
pub fn is_youtube_url(text: &str) -> bool {
    youtube_regex().is_match(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_urls() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=30",
            "HTTPS://WWW.YOUTUBE.COM/shorts/abc123def45",
            "youtube.com/watch?v=abc",
            "youtu.be/abc",
            "  https://youtu.be/abc  ",
        ] {
            assert!(is_youtube_url(url), "expected youtube url: {url}");
        }
    }

    #[test]
    fn test_non_youtube() {
        for text in [
            "hello world",
            "https://vimeo.com/123456789",
            "https://www.youtube.com/",
            "https://notyoutube.com/watch?v=abc",
            "Make a deck about youtube.com growth",
            "",
        ] {
            assert!(!is_youtube_url(text), "unexpected youtube url: {text}");
        }
    }
}
