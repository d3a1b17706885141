//! Word-frequency counting for the cloud layout.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z']+").unwrap());

/// Function words excluded from the cloud; they dominate any English
/// text without saying anything about it.
const STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "and", "any", "are", "back",
    "because", "been", "before", "being", "below", "between", "both", "but", "can", "come",
    "could", "did", "does", "doing", "down", "during", "each", "even", "few", "first", "for",
    "from", "further", "get", "had", "has", "have", "having", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "into", "its", "itself", "just", "like", "made", "make",
    "many", "may", "might", "more", "most", "much", "must", "myself", "new", "nor", "not", "now",
    "off", "once", "one", "only", "other", "our", "ours", "ourselves", "out", "over", "own",
    "said", "same", "say", "she", "should", "since", "some", "still", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "too", "two", "under", "until", "upon", "very", "was", "way", "well",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Count word frequencies and keep the `max_words` most frequent terms.
///
/// Words are lowercased; single letters and stopwords are dropped. Ties
/// break alphabetically so output is deterministic.
pub fn word_frequencies(text: &str, max_words: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for m in WORD_RE.find_iter(text) {
        let word = m.as_str().to_ascii_lowercase();
        let word = word.trim_matches('\'');
        if word.len() < 2 || STOPWORDS.contains(&word) {
            continue;
        }
        *counts.entry(word.to_string()).or_default() += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(max_words);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_ordering() {
        let freqs = word_frequencies("rust rust rust web web cloud", 10);
        assert_eq!(
            freqs,
            vec![
                ("rust".to_string(), 3),
                ("web".to_string(), 2),
                ("cloud".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_stopwords_dropped() {
        let freqs = word_frequencies("the quick fox and the lazy dog", 10);
        let words: Vec<&str> = freqs.iter().map(|(w, _)| w.as_str()).collect();
        assert!(!words.contains(&"the"));
        assert!(!words.contains(&"and"));
        assert!(words.contains(&"fox"));
    }

    #[test]
    fn test_max_words_cap() {
        let freqs = word_frequencies("alpha beta gamma delta epsilon", 3);
        assert_eq!(freqs.len(), 3);
    }

    #[test]
    fn test_case_folding() {
        let freqs = word_frequencies("Rust RUST rust", 10);
        assert_eq!(freqs, vec![("rust".to_string(), 3)]);
    }

    #[test]
    fn test_empty_text() {
        assert!(word_frequencies("", 10).is_empty());
        assert!(word_frequencies("... 123 !!!", 10).is_empty());
    }

    #[test]
    fn test_alphabetical_tiebreak() {
        let freqs = word_frequencies("zebra apple", 10);
        assert_eq!(freqs[0].0, "apple");
        assert_eq!(freqs[1].0, "zebra");
    }
}
