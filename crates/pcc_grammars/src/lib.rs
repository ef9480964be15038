//! Grammars built on `pcc_core`.
//!
//! Two complete consumers of the combinator engine:
//!
//! - [`json`]: JSON values, with recursive arrays and objects through
//!   [`defer`](pcc_core::defer) and escape-aware strings.
//! - [`obj`]: Wavefront OBJ meshes (vertices, texture coordinates, normals
//!   and faces), built from products, options and repetitions.
//!
//! Each grammar exposes its parsers for composition and a `parse_*` entry
//! point that requires the whole document to be consumed.

pub mod json;
pub mod obj;

use pcc_core::{Input, ParseError, Parsed, ParseResult};

/// Why a whole-document parse failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// The root parser failed.
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
    /// The root parser succeeded but left input behind.
    #[error("unexpected trailing input at byte {offset}")]
    TrailingInput { offset: usize },
}

/// Accept a root parse only if it consumed all of `text`.
fn finish<T>(text: &str, result: ParseResult<&str, T>) -> Result<T, DocumentError> {
    let Parsed { value, rest } = result?;
    if rest.is_empty() {
        Ok(value)
    } else {
        Err(DocumentError::TrailingInput {
            offset: text.offset_to(rest),
        })
    }
}
