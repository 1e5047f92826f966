use std::sync::LazyLock;

use regex::Regex;

static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Clean a feedback reply into plain prose: bold and heading markers are
/// stripped, runs of 3+ newlines collapse to exactly two, and surrounding
/// whitespace is trimmed. Structure is re-derived client-side.
pub fn clean(raw: &str) -> String {
    let stripped = raw.replace("**", "").replace("###", "");
    EXCESS_NEWLINES
        .replace_all(&stripped, "\n\n")
        .trim()
        .to_string()
}
