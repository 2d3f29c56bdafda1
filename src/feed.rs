use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MOBILE_BREAKPOINT_PX;

static ACTIVITY_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"activity-(\d+)").expect("activity id pattern is valid"));

const EMBED_PREFIX: &str = "https://www.linkedin.com/embed/feed/update/urn:li:activity:";

/// Numeric activity id from a full post share URL.
pub fn activity_id(post_url: &str) -> Option<&str> {
    ACTIVITY_ID
        .captures(post_url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn embed_url(activity_id: &str) -> String {
    format!("{}{}?compact=1", EMBED_PREFIX, activity_id)
}

/// Iframe source for a post: the official embed URL when an activity id can
/// be found, otherwise the raw URL verbatim.
pub fn post_embed_src(post_url: &str) -> String {
    match activity_id(post_url) {
        Some(id) => embed_url(id),
        None => post_url.to_string(),
    }
}

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

pub fn company_frame_height(is_mobile: bool) -> &'static str {
    if is_mobile {
        "620px"
    } else {
        "520px"
    }
}
