// src/engine/detector.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::target::{DetectionStrategy, Target};
use super::prober::HttpResponse;

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

static SCRIPT_OR_STYLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("script/style pattern is valid")
});

// A tag opens with a letter, '/', '!' or '?'; quoted attribute values may hold '>'
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<[A-Za-z/!?](?:"[^"]*"|'[^']*'|[^'">])*>"#).expect("tag pattern is valid")
});

/// Reduce an HTML document to its text. Entities and stray '<' characters are left as they are.
pub fn strip_tags(html: &str) -> String {
    let without_comments = COMMENT.replace_all(html, "");
    let without_code = SCRIPT_OR_STYLE.replace_all(&without_comments, "");
    TAG.replace_all(&without_code, "").into_owned()
}

/// Decide whether a response says the account does not exist.
///
/// Only the response is inspected. An unreadable body counts as absence for
/// body-matching targets, and an unrecognized strategy never reports absence.
pub fn is_absent(target: &Target, response: &HttpResponse) -> bool {
    match &target.detection_strategy {
        DetectionStrategy::BodyContains => match &response.body {
            Ok(body) => {
                let error_text = target.error_text.as_deref().unwrap_or_default();
                strip_tags(body).contains(error_text)
            }
            Err(_) => true,
        },
        DetectionStrategy::StatusCode => response.status != 200,
        DetectionStrategy::RedirectUrlContains => {
            let fragment = target.error_url_fragment.as_deref().unwrap_or_default();
            response.final_url.contains(fragment)
        }
        DetectionStrategy::Unrecognized(_) => false,
    }
}
