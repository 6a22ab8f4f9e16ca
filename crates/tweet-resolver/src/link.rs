//! Extracts `<username>/status/<id>` from text containing a twitter.com or x.com link.

use lazy_regex::lazy_regex;

static RE_TWEET_LINK: lazy_regex::Lazy<regex::Regex> = lazy_regex!(
    r"(?i)(?:^|[/\s])(?:(?:www|mobile)\.)?(?:twitter|x)\.com/(\w{1,15})/status(?:es)?/(\d+)"
);

/// Author handle and status id of a tweet link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetLink {
    pub username: String,
    pub status_id: String,
}

/// Returns the first tweet link in `text`, or None.
pub fn parse_tweet_link(text: &str) -> Option<TweetLink> {
    let caps = RE_TWEET_LINK.captures(text)?;
    Some(TweetLink {
        username: caps.get(1)?.as_str().to_string(),
        status_id: caps.get(2)?.as_str().to_string(),
    })
}
