//! Savant Extractor
//!
//! Turns an arbitrary text payload returned by a generation service into a
//! validated structured value of an expected shape.
//!
//! # Overview
//!
//! Generated text is untrusted: models wrap JSON in markdown code fences,
//! prepend apologies, append commentary, and occasionally truncate mid-value.
//! The extractor runs an ordered cleanup pipeline over the payload, parses
//! the surviving JSON, and checks the result against the expected shape
//! before anything downstream touches it.
//!
//! # Pipeline
//!
//! ```text
//! RawPayload → fence stripping → start search → terminator truncation
//!            → JSON parse → shape validation → typed value
//! ```
//!
//! Every step is independently idempotent and cannot panic on empty input.
//! Failures are reported through [`ExtractError`], never by panicking.
//!
//! # Example
//!
//! ```
//! use savant_domain::Recipe;
//! use savant_extractor::extract;
//!
//! let payload = "```json\n{\"name\":\"Lentil soup\",\"ingredients\":[\"lentils\"],\"steps\":[\"simmer\"]}\n```";
//! let recipe: Recipe = extract(Some(payload)).unwrap();
//! assert_eq!(recipe.name, "Lentil soup");
//! ```

#![warn(missing_docs)]

mod cleanup;
mod error;
mod parser;
mod shape;

pub use error::ExtractError;
pub use parser::{extract, extract_value, SALVAGE_LIMIT};
pub use shape::Shape;
