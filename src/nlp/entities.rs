//! Entity span assembly from tagged tokens.
//!
//! Entities come from two places: proper-noun runs labeled through the
//! model's gazetteer, and shape detectors for dates, money, percentages,
//! and bare numbers. Spans are reported in order of appearance.

use super::model::LanguageModel;
use super::tagger::TaggedToken;

pub const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

pub const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// Tokens that mark a proper-noun run as an organization.
const ORG_SUFFIXES: &[&str] = &[
    "inc", "corp", "ltd", "llc", "co", "company", "corporation", "university", "institute",
    "agency", "ministry", "bank",
];

/// Number-scale words that may trail a money amount.
const SCALE_WORDS: &[&str] = &["hundred", "thousand", "million", "billion", "trillion"];

/// Label used when no gazetteer category matches a proper-noun run.
pub const DEFAULT_LABEL: &str = "MISC";

/// A labeled span of the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// Assemble entity spans from `tokens`, in source order.
pub fn extract(model: &LanguageModel, tokens: &[TaggedToken], source: &str) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let tok = &tokens[i];

        // Currency symbol followed by an amount, optionally scaled.
        if tok.fine == "$" && fine_at(tokens, i + 1) == Some("CD") {
            let mut j = i + 2;
            while j < tokens.len() && is_scale_word(&tokens[j]) {
                j += 1;
            }
            spans.push(span(source, &tokens[i], &tokens[j - 1], "MONEY"));
            i = j;
            continue;
        }

        // Number followed by the percent sign.
        if tok.fine == "CD" && text_at(tokens, i + 1) == Some("%") {
            spans.push(span(source, tok, &tokens[i + 1], "PERCENT"));
            i += 2;
            continue;
        }

        // Month name with an optional "10, 2024"-style tail.
        if is_month(tok) {
            let mut j = i + 1;
            if fine_at(tokens, j) == Some("CD") {
                j += 1;
                if fine_at(tokens, j) == Some(",") && fine_at(tokens, j + 1) == Some("CD") {
                    j += 2;
                }
            }
            spans.push(span(source, tok, &tokens[j - 1], "DATE"));
            i = j;
            continue;
        }

        if is_weekday(tok) {
            spans.push(span(source, tok, tok, "DATE"));
            i += 1;
            continue;
        }

        if tok.fine == "CD" && is_year(&tok.text) {
            spans.push(span(source, tok, tok, "DATE"));
            i += 1;
            continue;
        }

        // Maximal proper-noun run.
        if tok.coarse == "PROPN" {
            let mut j = i + 1;
            while j < tokens.len() && tokens[j].coarse == "PROPN" {
                j += 1;
            }
            let label = label_propn_run(model, &tokens[i..j]);
            spans.push(span(source, tok, &tokens[j - 1], &label));
            i = j;
            continue;
        }

        if tok.fine == "CD" {
            spans.push(span(source, tok, tok, "CARDINAL"));
            i += 1;
            continue;
        }

        i += 1;
    }

    spans
}

fn span(source: &str, first: &TaggedToken, last: &TaggedToken, label: &str) -> EntitySpan {
    EntitySpan {
        text: source[first.start..last.end].to_string(),
        label: label.to_string(),
        start: first.start,
        end: last.end,
    }
}

fn fine_at<'a>(tokens: &'a [TaggedToken], i: usize) -> Option<&'a str> {
    tokens.get(i).map(|t| t.fine.as_str())
}

fn text_at<'a>(tokens: &'a [TaggedToken], i: usize) -> Option<&'a str> {
    tokens.get(i).map(|t| t.text.as_str())
}

fn is_month(tok: &TaggedToken) -> bool {
    // Require capitalization so modal "may" and verb "march" don't match.
    tok.text.chars().next().is_some_and(|c| c.is_uppercase())
        && MONTHS.contains(&tok.text.to_lowercase().as_str())
}

fn is_weekday(tok: &TaggedToken) -> bool {
    WEEKDAYS.contains(&tok.text.to_lowercase().as_str())
}

fn is_year(text: &str) -> bool {
    text.len() == 4 && text.parse::<u32>().is_ok_and(|y| (1000..=2999).contains(&y))
}

fn is_scale_word(tok: &TaggedToken) -> bool {
    SCALE_WORDS.contains(&tok.text.to_lowercase().as_str())
}

fn label_propn_run(model: &LanguageModel, run: &[TaggedToken]) -> String {
    let phrase = run
        .iter()
        .map(|t| t.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(label) = model.entity_label(&phrase) {
        return label.to_string();
    }

    if run
        .iter()
        .any(|t| ORG_SUFFIXES.contains(&t.text.to_lowercase().as_str()))
    {
        return "ORG".to_string();
    }

    for tok in run {
        if let Some(label) = model.entity_label(&tok.text.to_lowercase()) {
            return label.to_string();
        }
    }

    DEFAULT_LABEL.to_string()
}
