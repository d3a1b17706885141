//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/
//! directory. Askama provides compile-time verification that templates
//! are valid.

use askama::Template;

/// Helper struct for entity rows in result tables.
pub struct EntityRow {
    pub text: String,
    pub label: String,
}

/// Helper struct for POS rows in result tables.
pub struct PosRow {
    pub token: String,
    pub category: String,
    pub tag: String,
}

/// Helper struct for one category bucket in the POS grouping.
pub struct PosGroup {
    pub category: String,
    pub tokens: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub title: &'static str,
}

#[derive(Template)]
#[template(path = "help.html")]
pub struct HelpTemplate {
    pub title: &'static str,
}

#[derive(Template)]
#[template(path = "ner.html")]
pub struct NerTemplate {
    pub title: &'static str,
    pub input_text: String,
    pub has_result: bool,
    pub entities: Vec<EntityRow>,
    pub highlight: String,
    pub has_error: bool,
    pub error: String,
}

impl NerTemplate {
    pub fn empty() -> Self {
        Self {
            title: "Named Entities",
            input_text: String::new(),
            has_result: false,
            entities: Vec::new(),
            highlight: String::new(),
            has_error: false,
            error: String::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "pos.html")]
pub struct PosTemplate {
    pub title: &'static str,
    pub input_text: String,
    pub has_result: bool,
    pub rows: Vec<PosRow>,
    pub groups: Vec<PosGroup>,
    pub highlight: String,
    pub has_error: bool,
    pub error: String,
}

impl PosTemplate {
    pub fn empty() -> Self {
        Self {
            title: "POS Tagging",
            input_text: String::new(),
            has_result: false,
            rows: Vec::new(),
            groups: Vec::new(),
            highlight: String::new(),
            has_error: false,
            error: String::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "web.html")]
pub struct WebTemplate {
    pub title: &'static str,
    pub url_input: String,
    pub has_result: bool,
    pub entities: Vec<EntityRow>,
    pub highlight: String,
    pub has_error: bool,
    pub error: String,
}

impl WebTemplate {
    pub fn empty() -> Self {
        Self {
            title: "Analyze a Page",
            url_input: String::new(),
            has_result: false,
            entities: Vec::new(),
            highlight: String::new(),
            has_error: false,
            error: String::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "wordcloud.html")]
pub struct WordCloudTemplate {
    pub title: &'static str,
    pub input_text: String,
    pub url_input: String,
    pub max_words: String,
    pub background: String,
    pub has_result: bool,
    pub image_base64: String,
    pub word_count: usize,
    pub has_error: bool,
    pub error: String,
}

impl WordCloudTemplate {
    pub fn empty() -> Self {
        Self {
            title: "Word Cloud",
            input_text: String::new(),
            url_input: String::new(),
            max_words: String::new(),
            background: String::new(),
            has_result: false,
            image_base64: String::new(),
            word_count: 0,
            has_error: false,
            error: String::new(),
        }
    }
}
