//! BiasLens Extraction Layer
//!
//! Turns raw user input into clean, word-bounded text for prompting.
//!
//! # Overview
//!
//! Input may be plain text, an HTML snippet, or an http(s) URL. The
//! [`Extractor`] classifies the input, fetches and strips markup where
//! needed, and reports what it did in an `ExtractionMetadata`. The
//! [`truncate_words`] helper then bounds the text to a word budget with
//! exact accounting of what was cut.
//!
//! ```no_run
//! use biaslens_extract::{Extractor, truncate_words};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new()?;
//! let (text, meta) = extractor.extract("<p>Some article.</p>").await?;
//! let (bounded, truncation) = truncate_words(&text, 200);
//! println!("{} words cut", truncation.words_cut);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;
mod html;
mod truncate;

pub use error::ExtractError;
pub use extractor::{Extractor, DEFAULT_FETCH_TIMEOUT, USER_AGENT};
pub use html::extract_main_text;
pub use truncate::truncate_words;
