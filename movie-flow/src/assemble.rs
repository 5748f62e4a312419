use crate::types::DisplayPayload;

/// Single-use token the prompt template plants right after the heading.
pub const POSTER_PLACEHOLDER: &str = "[POSTER_PLACEHOLDER]";

/// Section labels the generated text must carry, in display order. The
/// template instructing these is treated as a schema: text that does not
/// match it is flagged for raw-text rendering instead of being styled as-is.
pub const SECTION_TITLES: [&str; 5] = [
    "📝 SINOPSIS",
    "🏆 PREMIOS Y NOMINACIONES",
    "⭐ CALIFICACIÓN",
    "🎥 DATOS DE PRODUCCIÓN",
    "🌟 DATOS CURIOSOS",
];

fn poster_markup(url: &str) -> String {
    format!("<img src='{url}' class='movie-poster' alt='Póster de la película'/>")
}

/// True when every section label appears exactly once and in template order.
pub fn has_expected_sections(text: &str) -> bool {
    let mut last_pos = 0;
    for title in SECTION_TITLES {
        if text.matches(title).count() != 1 {
            return false;
        }
        let pos = match text.find(title) {
            Some(pos) => pos,
            None => return false,
        };
        if pos < last_pos {
            return false;
        }
        last_pos = pos;
    }
    true
}

/// Merges the normalized text with an optional poster reference.
///
/// The placeholder is a single-use token: with a poster URL it is replaced by
/// image markup at most once, without one it is removed. Text carrying more
/// than one occurrence is outside the template contract and keeps the extras.
pub fn assemble(text: &str, poster: Option<&str>) -> DisplayPayload {
    let html = match poster {
        Some(url) => text.replacen(POSTER_PLACEHOLDER, &poster_markup(url), 1),
        None => text.replacen(POSTER_PLACEHOLDER, "", 1),
    };
    let structured = has_expected_sections(&html);
    DisplayPayload { html, structured }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sectioned(body: &str) -> String {
        let mut text = String::new();
        for title in SECTION_TITLES {
            text.push_str(&format!(
                "<div class='results-section'><div class='section-title'>{title}</div>{body}</div>\n"
            ));
        }
        text
    }

    #[test]
    fn poster_token_is_replaced_exactly_once() {
        let payload = assemble(
            "<h1>X</h1>\n[POSTER_PLACEHOLDER]\nbody",
            Some("http://x/img.png"),
        );
        assert_eq!(payload.html.matches("http://x/img.png").count(), 1);
        assert!(payload.html.contains("class='movie-poster'"));
        assert!(!payload.html.contains(POSTER_PLACEHOLDER));
    }

    #[test]
    fn missing_poster_removes_the_token_without_residue() {
        let payload = assemble("<h1>X</h1>\n[POSTER_PLACEHOLDER]\nbody", None);
        assert!(!payload.html.contains(POSTER_PLACEHOLDER));
        assert!(!payload.html.contains("movie-poster"));
        assert!(payload.html.contains("<h1>X</h1>"));
        assert!(payload.html.contains("body"));
    }

    #[test]
    fn only_the_first_token_is_substituted() {
        let payload = assemble(
            "[POSTER_PLACEHOLDER] and [POSTER_PLACEHOLDER]",
            Some("http://x/img.png"),
        );
        assert_eq!(payload.html.matches("movie-poster").count(), 1);
        assert_eq!(payload.html.matches(POSTER_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn well_formed_text_is_structured() {
        let payload = assemble(&sectioned("<div class='section-content'>…</div>"), None);
        assert!(payload.structured);
    }

    #[test]
    fn missing_section_flags_fallback() {
        let text = sectioned("x").replace("🏆 PREMIOS Y NOMINACIONES", "PREMIOS");
        assert!(!has_expected_sections(&text));
        assert!(!assemble(&text, None).structured);
    }

    #[test]
    fn out_of_order_sections_flag_fallback() {
        let swapped = [
            SECTION_TITLES[1],
            SECTION_TITLES[0],
            SECTION_TITLES[2],
            SECTION_TITLES[3],
            SECTION_TITLES[4],
        ]
        .join("\n");
        assert!(!has_expected_sections(&swapped));
    }

    #[test]
    fn duplicated_section_flags_fallback() {
        let mut text = sectioned("x");
        text.push_str("📝 SINOPSIS");
        assert!(!has_expected_sections(&text));
    }
}
