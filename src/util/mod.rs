use crate::models::Block;

/// Compact a canonical block id (with `-` separators) into a token safe
/// for DOM anchors and URL fragments. Total: empty input yields an empty
/// token.
pub fn uuid_to_id(raw: &str) -> String {
    raw.chars().filter(|c| *c != '-').collect()
}

/// Join class segments, skipping empty ones.
pub fn cs(classes: &[&str]) -> String {
    classes
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten rich-text runs (`[[text, decorations?], …]`) to plain text.
///
/// Decorations are a presentation concern handled outside this crate; only
/// the first cell of each run is text.
pub fn plain_text(runs: &serde_json::Value) -> String {
    let Some(runs) = runs.as_array() else {
        return String::new();
    };

    let mut out = String::new();
    for run in runs {
        if let Some(text) = run.get(0).and_then(|v| v.as_str()) {
            out.push_str(text);
        }
    }
    out
}

pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Best-effort host extraction for bookmark titles. Not a URL parser;
/// unparseable input comes back unchanged.
pub fn hostname(url: &str) -> String {
    let rest = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url);
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    if host.is_empty() {
        url.to_string()
    } else {
        host.to_string()
    }
}

/// Default internal-page URL mapper: `/{compact-id}`.
pub fn default_map_page_url(page_id: &str) -> String {
    format!("/{}", urlencoding::encode(&uuid_to_id(page_id)))
}

/// Source host for relative asset paths and the legacy signed-asset host
/// rewrite in [`default_map_image_url`].
const ASSET_HOST: &str = "https://www.notion.so";
const LEGACY_ASSET_HOST: &str = "secure.notion-static.com";

/// Default asset URL mapper: passes through data URIs, anchors relative
/// paths at the source host, rewrites the legacy signed-asset host.
pub fn default_map_image_url(url: &str, _block: &Block) -> String {
    if url.is_empty() {
        return String::new();
    }

    if url.starts_with("data:") {
        return url.to_string();
    }

    let url = if url.starts_with('/') {
        format!("{ASSET_HOST}{url}")
    } else {
        url.to_string()
    };

    if url.contains(LEGACY_ASSET_HOST) {
        return url.replace(LEGACY_ASSET_HOST, "www.notion.so");
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Block {
        serde_json::from_value(serde_json::json!({ "id": "b", "type": "text" })).unwrap()
    }

    #[test]
    fn uuid_to_id_strips_separators() {
        assert_eq!(
            uuid_to_id("067dd719-4912-471e-9a3a-7f1a7a5b522b"),
            "067dd7194912471e9a3a7f1a7a5b522b"
        );
        assert_eq!(uuid_to_id(""), "");
        assert_eq!(uuid_to_id("already-compact"), "alreadycompact");
    }

    #[test]
    fn cs_skips_empty_segments() {
        assert_eq!(cs(&["a", "", "b"]), "a b");
        assert_eq!(cs(&["", ""]), "");
    }

    #[test]
    fn plain_text_concatenates_runs() {
        let runs = serde_json::json!([["Hello ", [["b"]]], ["world"]]);
        assert_eq!(plain_text(&runs), "Hello world");
        assert_eq!(plain_text(&serde_json::json!(null)), "");
        assert_eq!(plain_text(&serde_json::json!([[42]])), "");
    }

    #[test]
    fn hostname_extraction() {
        assert_eq!(hostname("https://example.com/a/b?q=1"), "example.com");
        assert_eq!(hostname("http://example.com"), "example.com");
        assert_eq!(hostname("not a url"), "not a url");
    }

    #[test]
    fn default_image_url_mapping() {
        assert_eq!(default_map_image_url("", &block()), "");
        assert_eq!(
            default_map_image_url("data:image/png;base64,xyz", &block()),
            "data:image/png;base64,xyz"
        );
        assert_eq!(
            default_map_image_url("/images/cover.png", &block()),
            "https://www.notion.so/images/cover.png"
        );
        assert_eq!(
            default_map_image_url("https://secure.notion-static.com/x.png", &block()),
            "https://www.notion.so/x.png"
        );
    }

    #[test]
    fn default_page_url_is_fragment_safe() {
        assert_eq!(default_map_page_url("ab-cd"), "/abcd");
    }
}
