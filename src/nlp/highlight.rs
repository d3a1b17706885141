//! Color-coded HTML fragments for annotations.
//!
//! All surface text is escaped before insertion; the fragments are meant
//! to be dropped into a page as-is and never parsed back.

use crate::utils::html_escape;

use super::entities::EntitySpan;
use super::tagger::TaggedToken;

/// Entity label -> highlight color. Unlisted labels use the default.
const ENTITY_COLORS: &[(&str, &str)] = &[
    ("PERSON", "#aa9cfc"),
    ("ORG", "#7aecec"),
    ("GPE", "#feca74"),
    ("LOC", "#ff9561"),
    ("DATE", "#bfe1d9"),
    ("TIME", "#bfe1d9"),
    ("MONEY", "#e4e7d2"),
    ("PERCENT", "#e4e7d2"),
    ("CARDINAL", "#e4e7d2"),
];

const DEFAULT_ENTITY_COLOR: &str = "#dddddd";

/// Coarse POS category -> chip color. Unlisted categories use the default.
const POS_COLORS: &[(&str, &str)] = &[
    ("NOUN", "#7aecec"),
    ("PROPN", "#bfeeb7"),
    ("VERB", "#feca74"),
    ("AUX", "#feca74"),
    ("ADJ", "#aa9cfc"),
    ("ADV", "#ff9561"),
    ("PRON", "#e4e7d2"),
    ("DET", "#c887fb"),
    ("ADP", "#9cc9cc"),
    ("NUM", "#bfe1d9"),
    ("PUNCT", "#eeeeee"),
];

const DEFAULT_POS_COLOR: &str = "#dddddd";

/// Highlight color for an entity label.
pub fn entity_color(label: &str) -> &'static str {
    ENTITY_COLORS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, c)| *c)
        .unwrap_or(DEFAULT_ENTITY_COLOR)
}

/// Chip color for a coarse POS category.
pub fn pos_color(category: &str) -> &'static str {
    POS_COLORS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_POS_COLOR)
}

/// Render the source text with entity spans wrapped in colored marks.
///
/// Spans must be non-overlapping and ordered by position, which is what
/// the extractor produces.
pub fn render_entities(text: &str, spans: &[EntitySpan]) -> String {
    let mut out =
        String::from(r#"<div class="entities" style="line-height: 2.5; direction: ltr">"#);
    let mut cursor = 0;

    for span in spans {
        out.push_str(&html_escape(&text[cursor..span.start]));
        out.push_str(&format!(
            r#"<mark class="entity" style="background: {}; padding: 0.3em 0.4em; margin: 0 0.15em; border-radius: 0.35em;">{}<span class="entity-label" style="font-size: 0.7em; font-weight: bold; margin-left: 0.5em; vertical-align: middle;">{}</span></mark>"#,
            entity_color(&span.label),
            html_escape(&span.text),
            html_escape(&span.label),
        ));
        cursor = span.end;
    }

    out.push_str(&html_escape(&text[cursor..]));
    out.push_str("</div>");
    out
}

/// Render tokens as inline chips labeled with their POS tags.
pub fn render_pos(tokens: &[TaggedToken]) -> String {
    let mut out = String::from(
        r#"<div class="pos-tokens" style="font-family: Arial, Helvetica, sans-serif;">"#,
    );

    for token in tokens {
        out.push_str(&format!(
            r#"<span style="display: inline-block; margin: 6px; padding: 4px; border-radius: 4px; background: {}; border: 1px solid #ddd;"><strong>{}</strong><br/><small>{} ({})</small></span>"#,
            pos_color(token.coarse),
            html_escape(&token.text),
            token.coarse,
            html_escape(&token.fine),
        ));
    }

    out.push_str("</div>");
    out
}
