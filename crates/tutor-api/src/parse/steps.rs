use std::sync::LazyLock;

use regex::Regex;

static ORDINAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Split an example reply into ordered steps.
///
/// The split is deliberately loose: heading lines (`###`) and blanks are
/// dropped, a leading `1. ` style ordinal is stripped, and inline markdown
/// is left alone for the consumer to render.
pub fn parse(raw: &str) -> Vec<String> {
    raw.split('\n')
        .filter(|line| !line.trim().is_empty() && !line.starts_with("###"))
        .map(|line| ORDINAL_PREFIX.replace(line, "").trim().to_string())
        .collect()
}
