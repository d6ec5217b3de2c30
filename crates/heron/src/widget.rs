//! Boundary API consumed by a presentation layer.
//!
//! `HeronWidget` owns the input layer (typed strings, vertex set, drag token)
//! and at most one `DerivationSession`, which is replaced on every
//! calculation request and dropped on failure.

use crate::cfg::{HeronCfg, ScaleMode};
use crate::error::{InputError, StepError};
use crate::geometric::{derive_sides, GeometricInput, Vertex, VertexIndex, VertexSet};
use crate::numeric;
use crate::random::{random_sides, ReplayToken};
use crate::sequencer::{DerivationSession, Direction, SequencerState, StepOutcome};
use crate::sides::{SideLabel, SideLengths};
use crate::steps::StepField;
use crate::validate::{validate, InputMode};

/// Raw inputs of one calculation request.
#[derive(Clone, Debug)]
pub enum RawInputs {
    Numeric([String; 3]),
    Geometric(VertexSet),
}

impl RawInputs {
    pub fn mode(&self) -> InputMode {
        match self {
            RawInputs::Numeric(_) => InputMode::Numeric,
            RawInputs::Geometric(_) => InputMode::Geometric,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HeronWidget {
    cfg: HeronCfg,
    side_inputs: [String; 3],
    geometry: GeometricInput,
    session: Option<DerivationSession>,
    error: Option<InputError>,
}

impl Default for HeronWidget {
    fn default() -> Self {
        Self::new(HeronCfg::default())
    }
}

impl HeronWidget {
    pub fn new(cfg: HeronCfg) -> Self {
        Self {
            cfg,
            side_inputs: Default::default(),
            geometry: GeometricInput::new(cfg),
            session: None,
            error: None,
        }
    }

    // --- numeric input ---

    pub fn side_input(&self, side: SideLabel) -> &str {
        &self.side_inputs[side as usize]
    }

    /// Replace one typed side. Editing clears the error message.
    pub fn set_side_input(&mut self, side: SideLabel, text: impl Into<String>) {
        self.side_inputs[side as usize] = text.into();
        self.error = None;
    }

    /// Fill the typed sides with a random valid triangle.
    pub fn randomize_sides(&mut self, tok: ReplayToken) -> SideLengths {
        let s = random_sides(tok);
        for side in SideLabel::ALL {
            self.side_inputs[side as usize] = format!("{}", s.get(side));
        }
        self.error = None;
        tracing::debug!(%s, seed = tok.seed, index = tok.index, "random sides");
        s
    }

    // --- geometric input ---

    #[inline]
    pub fn vertices(&self) -> &VertexSet {
        self.geometry.vertices()
    }

    /// Place a vertex at already-clamped canvas coordinates.
    pub fn set_vertex(&mut self, i: VertexIndex, p: Vertex) -> bool {
        self.geometry.set_vertex(i, p)
    }

    /// Sides of the current vertex set (at-rest scale).
    pub fn derived_sides(&self) -> SideLengths {
        self.geometry.sides()
    }

    /// Sides to display right now (drag-time scale while a vertex is captured).
    pub fn live_sides(&self) -> SideLengths {
        self.geometry.live_sides()
    }

    pub fn press_vertex(&mut self, i: VertexIndex) -> bool {
        self.geometry.press(i)
    }

    pub fn drag_to(&mut self, p: Vertex) -> bool {
        self.geometry.drag_to(p)
    }

    pub fn release_vertex(&mut self) {
        self.geometry.release();
    }

    // --- calculation ---

    /// Calculate from the widget's own inputs for `mode`.
    pub fn calculate(&mut self, mode: InputMode) -> Result<&DerivationSession, InputError> {
        let raw = match mode {
            InputMode::Numeric => RawInputs::Numeric(self.side_inputs.clone()),
            InputMode::Geometric => RawInputs::Geometric(*self.geometry.vertices()),
        };
        self.request_calculation(raw)
    }

    /// Validate, compute, and start a new session. On failure the previous
    /// session is dropped and the error is kept for display.
    pub fn request_calculation(
        &mut self,
        raw: RawInputs,
    ) -> Result<&DerivationSession, InputError> {
        let mode = raw.mode();
        let sides = match &raw {
            RawInputs::Numeric([a, b, c]) => numeric::parse(a, b, c),
            RawInputs::Geometric(v) => Ok(derive_sides(v, self.cfg.diagonal(ScaleMode::Rest))),
        };
        match sides.and_then(|s| validate(s, mode)) {
            Ok(valid) => {
                self.error = None;
                let session =
                    DerivationSession::start_with_tolerance(&valid, mode, self.cfg.tolerance);
                let session: &DerivationSession = self.session.insert(session);
                Ok(session)
            }
            Err(e) => {
                tracing::debug!(error = %e, ?mode, "calculation rejected");
                self.session = None;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    #[inline]
    pub fn session(&self) -> Option<&DerivationSession> {
        self.session.as_ref()
    }

    #[inline]
    pub fn error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }

    /// Human-readable message for the last failed request, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    /// Rounded area of the current session.
    pub fn area_display(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.result().area_display())
    }

    pub fn state(&self) -> SequencerState {
        self.session
            .as_ref()
            .map_or(SequencerState::Idle, DerivationSession::state)
    }

    // --- sequencer passthrough ---

    pub fn submit_step_answer(
        &mut self,
        field: StepField,
        raw: &str,
    ) -> Result<StepOutcome, StepError> {
        self.session_mut()?.submit_answer(field, raw)
    }

    pub fn skip_step(&mut self, field: StepField) -> Result<(), StepError> {
        self.session_mut()?.skip(field)
    }

    /// No-op without a session or while navigation is gated.
    pub fn navigate(&mut self, dir: Direction) {
        if let Some(s) = self.session.as_mut() {
            s.navigate(dir);
        }
    }

    fn session_mut(&mut self) -> Result<&mut DerivationSession, StepError> {
        self.session.as_mut().ok_or(StepError::NoSession)
    }
}
