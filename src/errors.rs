//! Error types with diagnostics using miette.
//!
//! The conversion itself is total: any input string renders to some SVG.
//! The only thing rejected up front is a nonsensical scale.

use miette::Diagnostic;
use thiserror::Error;

/// Raised when configuring a conversion with unusable cell dimensions.
#[derive(Error, Diagnostic, Debug)]
pub enum ScaleError {
    #[error("scale factors must be positive, got {x} x {y}")]
    #[diagnostic(code(asciru::scale::not_positive))]
    NotPositive { x: f64, y: f64 },

    #[error("scale factors must be finite, got {x} x {y}")]
    #[diagnostic(code(asciru::scale::not_finite))]
    NotFinite { x: f64, y: f64 },
}
