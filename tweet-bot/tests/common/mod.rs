//! Shared helpers for tweet-bot integration tests.

#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_resolver;

use chrono::Utc;
use tweet_bot::{Chat, Message, User};
use tweet_resolver::{Download, MediaType, ResolverResponse, TweetUser, VideoCandidate};

pub const CHAT_ID: i64 = 42;

/// Inbound private text message from user 7 with id "100".
pub fn text_message(content: &str) -> Message {
    Message {
        id: "100".to_string(),
        user: User {
            id: 7,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

pub fn tweet_user(text: &str) -> TweetUser {
    TweetUser {
        name: "Jack".to_string(),
        username: "jack".to_string(),
        text: text.to_string(),
    }
}

pub fn image_response(url: &str, text: &str) -> ResolverResponse {
    ResolverResponse {
        found: true,
        media_type: MediaType::Image,
        download: Download::Single(url.to_string()),
        tweet_user: tweet_user(text),
    }
}

pub fn video_response(candidates: &[(&str, &str)], text: &str) -> ResolverResponse {
    ResolverResponse {
        found: true,
        media_type: MediaType::VideoGif,
        download: Download::Candidates(
            candidates
                .iter()
                .map(|(url, dimension)| VideoCandidate {
                    url: url.to_string(),
                    dimension: dimension.to_string(),
                })
                .collect(),
        ),
        tweet_user: tweet_user(text),
    }
}

pub const TWEET_URL: &str = "https://twitter.com/jack/status/20";
