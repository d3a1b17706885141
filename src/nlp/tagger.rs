//! Tokenization and part-of-speech tagging over a loaded model bundle.
//!
//! Fine-grained tags follow the Penn Treebank set; coarse categories are
//! UPOS-style and derived from the fine tag through a fixed table.

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::LanguageModel;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)?|\d+(?:[\d,.]*\d)?|[^\sA-Za-z0-9]").unwrap());

/// One token with its tags and byte offsets into the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedToken {
    pub text: String,
    pub start: usize,
    pub end: usize,
    /// Fine-grained (Penn-style) tag.
    pub fine: String,
    /// Coarse (UPOS-style) category.
    pub coarse: &'static str,
}

/// Fine tag -> coarse category. Anything unlisted maps to `X`.
const FINE_TO_COARSE: &[(&str, &str)] = &[
    ("CC", "CCONJ"),
    ("CD", "NUM"),
    ("DT", "DET"),
    ("EX", "PRON"),
    ("FW", "X"),
    ("IN", "ADP"),
    ("JJ", "ADJ"),
    ("JJR", "ADJ"),
    ("JJS", "ADJ"),
    ("MD", "AUX"),
    ("NN", "NOUN"),
    ("NNS", "NOUN"),
    ("NNP", "PROPN"),
    ("NNPS", "PROPN"),
    ("PDT", "DET"),
    ("POS", "PART"),
    ("PRP", "PRON"),
    ("PRP$", "PRON"),
    ("RB", "ADV"),
    ("RBR", "ADV"),
    ("RBS", "ADV"),
    ("RP", "PART"),
    ("SYM", "SYM"),
    ("TO", "PART"),
    ("UH", "INTJ"),
    ("VB", "VERB"),
    ("VBD", "VERB"),
    ("VBG", "VERB"),
    ("VBN", "VERB"),
    ("VBP", "VERB"),
    ("VBZ", "VERB"),
    ("WDT", "DET"),
    ("WP", "PRON"),
    ("WP$", "PRON"),
    ("WRB", "ADV"),
    (".", "PUNCT"),
    (",", "PUNCT"),
    (":", "PUNCT"),
    ("''", "PUNCT"),
    ("``", "PUNCT"),
    ("-LRB-", "PUNCT"),
    ("-RRB-", "PUNCT"),
    ("$", "SYM"),
];

/// Suffix heuristics for words missing from the lexicon, longest first.
const SUFFIX_TAGS: &[(&str, &str)] = &[
    ("tion", "NN"),
    ("sion", "NN"),
    ("ment", "NN"),
    ("ness", "NN"),
    ("able", "JJ"),
    ("ible", "JJ"),
    ("ical", "JJ"),
    ("ity", "NN"),
    ("ous", "JJ"),
    ("ful", "JJ"),
    ("ive", "JJ"),
    ("ing", "VBG"),
    ("est", "JJS"),
    ("ly", "RB"),
    ("ed", "VBD"),
    ("al", "JJ"),
];

/// Map a fine tag to its coarse category.
pub fn coarse_of(fine: &str) -> &'static str {
    FINE_TO_COARSE
        .iter()
        .find(|(f, _)| *f == fine)
        .map(|(_, c)| *c)
        .unwrap_or("X")
}

/// Tokenize `text` and tag every token, in source order.
pub fn tag(model: &LanguageModel, text: &str) -> Vec<TaggedToken> {
    let mut tokens = Vec::new();
    let mut sentence_initial = true;

    for m in TOKEN_RE.find_iter(text) {
        let word = m.as_str();
        let fine = tag_one(model, word, sentence_initial);
        sentence_initial = fine == ".";
        let coarse = coarse_of(&fine);
        tokens.push(TaggedToken {
            text: word.to_string(),
            start: m.start(),
            end: m.end(),
            fine,
            coarse,
        });
    }

    tokens
}

fn tag_one(model: &LanguageModel, token: &str, sentence_initial: bool) -> String {
    let first = token.chars().next().unwrap_or(' ');

    if first.is_ascii_digit() {
        return "CD".to_string();
    }
    if !first.is_alphabetic() {
        return punct_tag(first).to_string();
    }

    let lower = token.to_lowercase();
    if first.is_uppercase() && lower != "i" {
        // Capitalization mid-sentence marks a proper noun; at sentence
        // start the lexicon wins, and unknown words are assumed names.
        if !sentence_initial {
            return "NNP".to_string();
        }
        if let Some(tag) = model.lookup(&lower) {
            return tag.to_string();
        }
        return "NNP".to_string();
    }

    if let Some(tag) = model.lookup(&lower) {
        return tag.to_string();
    }
    tag_by_shape(model, &lower)
}

fn tag_by_shape(model: &LanguageModel, lower: &str) -> String {
    for (suffix, tag) in SUFFIX_TAGS {
        if lower.len() > suffix.len() + 1 && lower.ends_with(suffix) {
            return (*tag).to_string();
        }
    }

    // Trailing -s: third-person verb if the stem is a known verb,
    // otherwise a plural noun.
    if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        let stem = &lower[..lower.len() - 1];
        let stem_tag = model
            .lookup(stem)
            .or_else(|| stem.strip_suffix('e').and_then(|s| model.lookup(s)));
        if let Some(tag) = stem_tag {
            if tag.starts_with("VB") {
                return "VBZ".to_string();
            }
        }
        return "NNS".to_string();
    }

    "NN".to_string()
}

fn punct_tag(c: char) -> &'static str {
    match c {
        '.' | '!' | '?' => ".",
        ',' => ",",
        ';' | ':' | '-' | '\u{2014}' | '\u{2026}' => ":",
        '(' | '[' | '{' => "-LRB-",
        ')' | ']' | '}' => "-RRB-",
        '"' | '\'' | '`' | '\u{201c}' | '\u{201d}' | '\u{2018}' | '\u{2019}' => "''",
        '$' | '\u{20ac}' | '\u{a3}' | '\u{a5}' => "$",
        _ => "SYM",
    }
}
