//! Media selection and caption building for resolved tweets.

use lazy_regex::lazy_regex;
use teloxide::utils::markdown::{bold, escape, italic, link};
use tweet_resolver::{TweetUser, VideoCandidate};

/// Shortened links Twitter appends to tweet text (the media link itself among them).
static RE_TCO_LINK: lazy_regex::Lazy<regex::Regex> = lazy_regex!(r"(?i)https?://t\.co/\w+");

/// Tweet text kept in a caption; Telegram captions stop at 1024 characters.
pub const MAX_CAPTION_TEXT_CHARS: usize = 900;

/// Removes every `http(s)://t.co/<token>` from `text`.
pub fn remove_tco_links(text: &str) -> String {
    RE_TCO_LINK.replace_all(text, "").into_owned()
}

pub fn profile_url(username: &str) -> String {
    format!("https://twitter.com/{}", username)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

/// Caption for a media reply: cleaned tweet text in bold, then "By <author>" linking to the author's profile.
/// The bold line is omitted when nothing is left of the text after cleaning.
pub fn build_caption(tweet_user: &TweetUser) -> String {
    let cleaned = remove_tco_links(&tweet_user.text);
    let cleaned = truncate_chars(cleaned.trim(), MAX_CAPTION_TEXT_CHARS);
    let attribution = format!(
        "{} {}",
        italic("By"),
        link(&profile_url(&tweet_user.username), &escape(&tweet_user.name))
    );
    if cleaned.is_empty() {
        attribution
    } else {
        format!("{}\n{}", bold(&escape(&cleaned)), attribution)
    }
}

/// Highest-quality rendition: sorted by leading width, descending; unparsable widths go last, ties keep input order.
pub fn select_best_candidate(candidates: &[VideoCandidate]) -> Option<&VideoCandidate> {
    let mut sorted: Vec<&VideoCandidate> = candidates.iter().collect();
    sorted.sort_by(|a, b| b.width().cmp(&a.width()));
    sorted.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(url: &str, dimension: &str) -> VideoCandidate {
        VideoCandidate {
            url: url.to_string(),
            dimension: dimension.to_string(),
        }
    }

    fn tweet_user(text: &str) -> TweetUser {
        TweetUser {
            name: "Jack".to_string(),
            username: "jack".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_remove_tco_links() {
        assert_eq!(
            remove_tco_links("sunset https://t.co/AbC123 and http://T.CO/xyz"),
            "sunset  and "
        );
        assert_eq!(remove_tco_links("no links"), "no links");
    }

    /// **Test: 640x360 vs 1280x720 picks 1280x720 regardless of input order.**
    #[test]
    fn test_select_best_candidate_by_width() {
        let candidates = vec![
            candidate("small", "640x360"),
            candidate("large", "1280x720"),
        ];
        assert_eq!(select_best_candidate(&candidates).unwrap().url, "large");

        let reversed = vec![
            candidate("large", "1280x720"),
            candidate("small", "640x360"),
        ];
        assert_eq!(select_best_candidate(&reversed).unwrap().url, "large");
    }

    #[test]
    fn test_select_best_candidate_edge_cases() {
        assert!(select_best_candidate(&[]).is_none());

        let candidates = vec![candidate("bad", "unknown"), candidate("ok", "320x180")];
        assert_eq!(select_best_candidate(&candidates).unwrap().url, "ok");

        let ties = vec![candidate("first", "720x720"), candidate("second", "720x1280")];
        assert_eq!(select_best_candidate(&ties).unwrap().url, "first");
    }

    #[test]
    fn test_build_caption_strips_links_and_links_profile() {
        let caption = build_caption(&tweet_user("sunset https://t.co/AbC123"));
        assert!(!caption.contains("t.co"));
        assert!(caption.starts_with(&bold("sunset")));
        assert!(caption.contains("Jack"));
        assert!(caption.contains("https://twitter.com/jack"));
    }

    #[test]
    fn test_build_caption_without_text() {
        let caption = build_caption(&tweet_user("https://t.co/AbC123"));
        assert!(caption.starts_with(&italic("By")));
        assert!(!caption.contains('\n'));
    }

    #[test]
    fn test_build_caption_truncates_long_text() {
        let caption = build_caption(&tweet_user(&"a".repeat(5000)));
        assert!(caption.chars().count() < 1024);
        assert!(caption.contains('…'));
    }
}
