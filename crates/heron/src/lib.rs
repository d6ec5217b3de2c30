//! Heron's Formula derivation engine.
//!
//! Two input modalities feed one pipeline:
//! numeric/geometric adapter → `validate` → `calc::compute` → `sequencer`.
//! The sequencer never recomputes geometry; it is handed validated sides.
//!
//! Layout
//! - `numeric`, `geometric`: input adapters (typed strings, dragged vertices).
//! - `validate`, `calc`: triangle inequality and Heron's formula.
//! - `steps`, `sequencer`: step sequence and the guided-answer state machine.
//! - `widget`: the boundary API a presentation layer drives.
//!
//! Rendering, pointer capture and styling live outside this crate; callers
//! hand in resolved canvas coordinates.

pub mod calc;
pub mod cfg;
pub mod error;
pub mod geometric;
pub mod numeric;
pub mod random;
pub mod sequencer;
pub mod sides;
pub mod steps;
pub mod validate;
pub mod widget;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::calc::{compute, HeronResult};
    pub use crate::cfg::{CanvasBounds, HeronCfg, ScaleMode, ANSWER_TOL, SIDE_MAX, SIDE_MIN};
    pub use crate::error::{CfgError, InputError, StepError};
    pub use crate::geometric::{derive_sides, DragState, Vertex, VertexIndex, VertexSet};
    pub use crate::random::{random_sides, ReplayToken};
    pub use crate::sequencer::{DerivationSession, Direction, SequencerState, StepOutcome};
    pub use crate::sides::{SideLabel, SideLengths};
    pub use crate::steps::{DerivationStep, StepField, StepKind, StepProgress, StepStatus};
    pub use crate::validate::{validate, InputMode, ValidSides};
    pub use crate::widget::{HeronWidget, RawInputs};
}
