/// Markers the generation service sometimes wraps its reply in despite the
/// prompt telling it not to.
const FENCE_WITH_TAG: &str = "```html";
const FENCE: &str = "```";

/// Strips surrounding whitespace and every occurrence of both fence markers,
/// wherever they appear. Total and idempotent: already-clean text passes
/// through unchanged.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .replace(FENCE_WITH_TAG, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize("  <h1>Movie</h1>\n\n"), "<h1>Movie</h1>");
    }

    #[test]
    fn removes_tagged_and_bare_fences_anywhere() {
        let raw = "```html\n<h1>Movie</h1>\nmiddle ``` fence\n```";
        let clean = normalize(raw);
        assert!(!clean.contains("```"));
        assert!(clean.contains("<h1>Movie</h1>"));
        assert!(clean.contains("middle  fence"));
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "```html\n<div>body</div>\n```",
            "plain text",
            "   spaced   ",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn fence_only_input_normalizes_to_empty() {
        assert_eq!(normalize("```html\n```"), "");
    }
}
