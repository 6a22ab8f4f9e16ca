//! Fixed reply texts, rendered as MarkdownV2.

use teloxide::utils::markdown::{bold, escape, italic};

pub fn welcome_text() -> String {
    format!("{} ✨\n{}", bold(&escape("Welcome!")), italic(&escape("Send a tweet.")))
}

pub fn help_text() -> String {
    format!(
        "{}\n\n{}",
        bold(&escape("@anzubo Project.")),
        italic(&escape(
            "This bot downloads media from tweets.\nSend a link to a tweet to try it out!"
        ))
    )
}

pub fn short_links_text() -> String {
    bold(&escape("Short links are not supported presently."))
}

pub fn invalid_tweet_text() -> String {
    bold(&escape("Send a valid Tweet."))
}

pub fn downloading_text() -> String {
    bold("Downloading")
}

pub fn contacting_twitter_failed_text() -> String {
    bold(&escape("Error contacting Twitter."))
}

/// Reply for a Bot API error other than a blocked bot or a failed video upload.
pub fn transport_error_text(error: &str) -> String {
    bold(&escape(&format!("An error occurred: {}", error)))
}

/// Reply for failures outside the Bot API (resolver, timeout, network).
pub fn resolve_error_text(error: &str) -> String {
    format!(
        "{}\n{}",
        bold(&escape(
            "An error occurred. Are you sure you sent a valid Twitter link?"
        )),
        italic(&escape(&format!("Error: {}", error)))
    )
}

/// Reply sent by the update error boundary.
pub fn generic_error_text() -> String {
    escape("An error occurred")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters_are_escaped() {
        assert!(welcome_text().contains("Welcome\\!"));
        assert!(invalid_tweet_text().contains("Tweet\\."));
        assert!(help_text().contains("@anzubo Project\\."));
    }

    #[test]
    fn test_error_texts_embed_error() {
        let text = transport_error_text("Bad Request: chat not found");
        assert!(text.contains("Bad Request: chat not found"));

        let text = resolve_error_text("connection reset (os error 104)");
        assert!(text.contains("connection reset \\(os error 104\\)"));
        assert!(text.contains("valid Twitter link"));
    }
}
