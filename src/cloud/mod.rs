//! Word-cloud rendering to an inline base64 PNG.
//!
//! Each call allocates its own canvas and releases it on return; nothing
//! is shared between concurrent renders.

mod frequency;
mod layout;

pub use frequency::word_frequencies;

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, Rgba};
use thiserror::Error;
use tracing::debug;

/// Canvas width in pixels.
pub const CLOUD_WIDTH: u32 = 800;

/// Canvas height in pixels.
pub const CLOUD_HEIGHT: u32 = 400;

/// Default cap on the number of words drawn.
pub const DEFAULT_MAX_WORDS: usize = 100;

/// Default background color name.
pub const DEFAULT_BACKGROUND: &str = "white";

/// Failure producing a word-cloud image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The input text is empty after trimming.
    #[error("no text provided for the word cloud")]
    EmptyInput,

    /// The text contains no countable words (only stopwords, digits, or
    /// punctuation).
    #[error("the text contains no words to draw")]
    NoWords,

    /// PNG encoding failed.
    #[error("failed to encode the word cloud image: {0}")]
    Encode(#[from] image::ImageError),
}

/// A rendered cloud: base64 PNG plus the number of words drawn.
#[derive(Debug, Clone)]
pub struct WordCloudImage {
    pub png_base64: String,
    pub word_count: usize,
}

/// Render a word cloud for `text`, keeping at most `max_words` terms.
///
/// `background` accepts a small set of color names or `#rrggbb`; unknown
/// values fall back to white.
pub fn render(text: &str, max_words: usize, background: &str) -> Result<WordCloudImage, RenderError> {
    if text.trim().is_empty() {
        return Err(RenderError::EmptyInput);
    }

    let freqs = frequency::word_frequencies(text, max_words);
    if freqs.is_empty() {
        return Err(RenderError::NoWords);
    }

    let placements = layout::lay_out(&freqs, CLOUD_WIDTH, CLOUD_HEIGHT);
    let canvas = layout::draw(
        &placements,
        CLOUD_WIDTH,
        CLOUD_HEIGHT,
        parse_background(background),
    );

    let mut buf = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    let png_base64 = STANDARD.encode(&buf);

    debug!(
        words = placements.len(),
        bytes = png_base64.len(),
        "word cloud rendered"
    );

    Ok(WordCloudImage {
        png_base64,
        word_count: placements.len(),
    })
}

/// Parse a background color name or `#rrggbb` value, defaulting to white.
fn parse_background(name: &str) -> Rgba<u8> {
    const NAMED: &[(&str, [u8; 3])] = &[
        ("white", [255, 255, 255]),
        ("black", [0, 0, 0]),
        ("gray", [128, 128, 128]),
        ("grey", [128, 128, 128]),
        ("silver", [192, 192, 192]),
        ("navy", [0, 0, 128]),
        ("beige", [245, 245, 220]),
        ("ivory", [255, 255, 240]),
    ];

    let name = name.trim().to_ascii_lowercase();
    if let Some((_, [r, g, b])) = NAMED.iter().find(|(n, _)| *n == name) {
        return Rgba([*r, *g, *b, 255]);
    }

    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() == 6 {
            if let Ok(value) = u32::from_str_radix(hex, 16) {
                return Rgba([(value >> 16) as u8, (value >> 8) as u8, value as u8, 255]);
            }
        }
    }

    Rgba([255, 255, 255, 255])
}
