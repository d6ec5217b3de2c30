//! Learner-facing input errors and sequencer misuse errors.
//!
//! Every `InputError` is recoverable: the widget clears results, keeps the
//! message, and the learner retries with corrected input.

use thiserror::Error;

use crate::steps::StepField;
use crate::sides::SideLabel;

/// Rejected side-length input. `Display` is the message shown to the learner.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InputError {
    #[error("side {side} is not a number: {raw:?}")]
    NotANumber { side: SideLabel, raw: String },
    #[error("side {side} must be greater than 0 and at most 100 (got {value})")]
    OutOfRange { side: SideLabel, value: f64 },
    #[error(
        "sides {a}, {b}, {c} do not form a triangle: the sum of any two sides must be greater than the third side"
    )]
    InvalidTriangle { a: f64, b: f64, c: f64 },
}

/// Illegal sequencer action. These never mutate progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("no calculation has been started")]
    NoSession,
    #[error("{field} is not the active step")]
    NotCurrentStep { field: StepField },
    #[error("{field} is already completed")]
    AlreadyCompleted { field: StepField },
}

/// Configuration that cannot describe a usable canvas or answer check.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CfgError {
    #[error("canvas {width}x{height} leaves no room inside an inset of {inset}")]
    Canvas { width: f64, height: f64, inset: f64 },
    #[error("{which} diagonal must be positive and finite (got {value})")]
    Diagonal { which: &'static str, value: f64 },
    #[error("answer tolerance must be positive and finite (got {0})")]
    Tolerance(f64),
}
