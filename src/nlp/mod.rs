//! NLP adapter: entities and POS tags over the process-wide model.
//!
//! The model loads once at startup. If that fails, the adapter stays up
//! but answers every call with [`AdapterError::ModelUnavailable`]; the
//! handlers turn that into a user-visible message. Calls are stateless:
//! the same text always produces the same annotations.

mod entities;
mod highlight;
mod model;
mod tagger;

pub use entities::{EntitySpan, DEFAULT_LABEL};
pub use highlight::{entity_color, pos_color};
pub use model::{LanguageModel, ModelError};
pub use tagger::TaggedToken;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

/// Failure inside the NLP adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The language model failed to load at startup; permanent for the
    /// life of the process.
    #[error("the language model is not loaded; text analysis is disabled")]
    ModelUnavailable,
}

/// One recognized entity: surface text plus category label, in order of
/// appearance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityAnnotation {
    pub text: String,
    pub label: String,
}

/// One token with its coarse category and fine-grained tag, in token
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosAnnotation {
    pub token: String,
    pub category: String,
    pub tag: String,
}

/// Result of entity extraction: annotations plus an HTML highlight.
#[derive(Debug, Clone)]
pub struct EntityExtraction {
    pub entities: Vec<EntityAnnotation>,
    pub html: String,
}

/// Result of POS tagging: annotations, an HTML rendering, and the
/// derived category -> tokens grouping.
#[derive(Debug, Clone)]
pub struct PosTagging {
    pub annotations: Vec<PosAnnotation>,
    pub html: String,
    pub groups: BTreeMap<String, Vec<String>>,
}

/// Adapter over the optional process-wide language model.
#[derive(Clone)]
pub struct NlpAdapter {
    model: Option<Arc<LanguageModel>>,
}

impl NlpAdapter {
    /// Wrap a loaded model, or `None` when startup loading failed.
    pub fn new(model: Option<LanguageModel>) -> Self {
        Self {
            model: model.map(Arc::new),
        }
    }

    /// Whether the model loaded and calls can succeed.
    pub fn available(&self) -> bool {
        self.model.is_some()
    }

    fn model(&self) -> Result<&LanguageModel, AdapterError> {
        self.model.as_deref().ok_or(AdapterError::ModelUnavailable)
    }

    /// Extract named entities and build their highlight fragment.
    ///
    /// Zero entities is a success: an empty sequence with a valid,
    /// empty-bodied fragment.
    pub fn entities(&self, text: &str) -> Result<EntityExtraction, AdapterError> {
        let model = self.model()?;
        let tokens = tagger::tag(model, text);
        let spans = entities::extract(model, &tokens, text);
        let html = highlight::render_entities(text, &spans);
        let entities = spans
            .into_iter()
            .map(|s| EntityAnnotation {
                text: s.text,
                label: s.label,
            })
            .collect();
        Ok(EntityExtraction { entities, html })
    }

    /// Tag every token and build the rendering plus category grouping.
    pub fn pos_tags(&self, text: &str) -> Result<PosTagging, AdapterError> {
        let model = self.model()?;
        let tokens = tagger::tag(model, text);
        let html = highlight::render_pos(&tokens);

        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for token in &tokens {
            groups
                .entry(token.coarse.to_string())
                .or_default()
                .push(token.text.clone());
        }

        let annotations = tokens
            .into_iter()
            .map(|t| PosAnnotation {
                token: t.text,
                category: t.coarse.to_string(),
                tag: t.fine,
            })
            .collect();

        Ok(PosTagging {
            annotations,
            html,
            groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> NlpAdapter {
        NlpAdapter::new(Some(LanguageModel::embedded().unwrap()))
    }

    #[test]
    fn test_unavailable_model() {
        let adapter = NlpAdapter::new(None);
        assert!(!adapter.available());
        assert!(matches!(
            adapter.entities("some text"),
            Err(AdapterError::ModelUnavailable)
        ));
        assert!(matches!(
            adapter.pos_tags("some text"),
            Err(AdapterError::ModelUnavailable)
        ));
    }

    #[test]
    fn test_entities_success() {
        let result = adapter().entities("Alice went to Paris.").unwrap();
        assert_eq!(result.entities.len(), 2);
        assert_eq!(result.entities[0].text, "Alice");
        assert_eq!(result.entities[0].label, "PERSON");
        assert!(result.html.contains("Alice"));
    }

    #[test]
    fn test_zero_entities_is_success() {
        let result = adapter().entities("nothing notable here").unwrap();
        assert!(result.entities.is_empty());
        assert!(result.html.starts_with("<div"));
        assert!(result.html.ends_with("</div>"));
    }

    #[test]
    fn test_entities_idempotent() {
        let a = adapter();
        let text = "Alice met Bob in Paris on Friday.";
        let first = a.entities(text).unwrap();
        let second = a.entities(text).unwrap();
        assert_eq!(first.entities, second.entities);
        assert_eq!(first.html, second.html);
    }

    #[test]
    fn test_pos_grouping_buckets() {
        let result = adapter().pos_tags("The quick fox jumps").unwrap();
        assert_eq!(result.groups["DET"], vec!["The".to_string()]);
        assert_eq!(result.groups["VERB"], vec!["jumps".to_string()]);

        // Every input token lands in exactly one bucket.
        let grouped: usize = result.groups.values().map(Vec::len).sum();
        assert_eq!(grouped, result.annotations.len());
        assert_eq!(result.annotations.len(), 4);
    }

    #[test]
    fn test_pos_three_value_shape() {
        let result = adapter().pos_tags("The quick fox jumps").unwrap();
        let first = &result.annotations[0];
        assert_eq!(first.token, "The");
        assert_eq!(first.category, "DET");
        assert_eq!(first.tag, "DT");
        assert!(result.html.contains("quick"));
    }
}
