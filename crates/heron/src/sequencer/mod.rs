//! Guided derivation: a small state machine over the step sequence.
//!
//! Model
//! - A `DerivationSession` is created by `start` from already-validated sides
//!   and replaced wholesale on the next calculation.
//! - Only the step at the cursor accepts answers or skips. A correct answer or
//!   a skip completes the field and advances the cursor unless it is on the
//!   last step. An incorrect answer only records the attempt.
//! - Back/forward navigation is gated on every scored field being completed
//!   and never touches progress.
//!
//! Invariants
//! - `0 <= cursor < steps.len()`.
//! - The cursor never moves past a step whose field is incomplete.

use serde::Serialize;

use crate::calc::{compute, HeronResult};
use crate::cfg::{fmt_display, ANSWER_TOL};
use crate::error::StepError;
use crate::sides::SideLengths;
use crate::steps::{build_steps, DerivationStep, StepField, StepProgress, StepStatus};
use crate::validate::{InputMode, ValidSides};

/// Observable state of the guided workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SequencerState {
    /// No calculation yet (or the last one failed).
    Idle,
    Presenting { cursor: usize },
    /// Every scored field completed and the cursor on the last step.
    Complete,
}

/// Result of checking one answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StepOutcome {
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// True iff `input` is strictly within `tol` of `truth`.
#[inline]
pub fn within_tolerance(input: f64, truth: f64, tol: f64) -> bool {
    (input - truth).abs() < tol
}

/// One calculation's derivation state.
#[derive(Clone, Debug, Serialize)]
pub struct DerivationSession {
    mode: InputMode,
    sides: SideLengths,
    result: HeronResult,
    steps: Vec<DerivationStep>,
    progress: [StepProgress; 2],
    cursor: usize,
    #[serde(skip)]
    tolerance: f64,
}

impl DerivationSession {
    /// Compute and build a fresh session at cursor 0 with default tolerance.
    pub fn start(valid: &ValidSides, mode: InputMode) -> Self {
        Self::start_with_tolerance(valid, mode, ANSWER_TOL)
    }

    pub fn start_with_tolerance(valid: &ValidSides, mode: InputMode, tolerance: f64) -> Self {
        let sides = *valid.sides();
        let result = compute(valid);
        let steps = build_steps(&sides, &result, mode);
        tracing::debug!(
            %sides,
            ?mode,
            s = result.semi_perimeter,
            area = result.area,
            steps = steps.len(),
            "derivation started"
        );
        Self {
            mode,
            sides,
            result,
            steps,
            progress: Default::default(),
            cursor: 0,
            tolerance,
        }
    }

    #[inline]
    pub fn mode(&self) -> InputMode {
        self.mode
    }
    #[inline]
    pub fn sides(&self) -> &SideLengths {
        &self.sides
    }
    #[inline]
    pub fn result(&self) -> &HeronResult {
        &self.result
    }
    #[inline]
    pub fn steps(&self) -> &[DerivationStep] {
        &self.steps
    }
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    #[inline]
    pub fn progress(&self, field: StepField) -> &StepProgress {
        &self.progress[field.index()]
    }

    pub fn current_step(&self) -> &DerivationStep {
        &self.steps[self.cursor]
    }

    /// Scored field at the cursor (`None` on the display-only final step).
    pub fn current_field(&self) -> Option<StepField> {
        self.current_step().kind.field()
    }

    /// Steps revealed so far: everything up to and including the cursor.
    pub fn revealed_steps(&self) -> &[DerivationStep] {
        &self.steps[..=self.cursor]
    }

    /// Whether a step's `= answer` line is shown: its field is completed, or it has none.
    pub fn answer_revealed(&self, index: usize) -> bool {
        match self.steps.get(index).map(|s| s.kind.field()) {
            Some(Some(field)) => self.progress(field).completed,
            Some(None) => true,
            None => false,
        }
    }

    pub fn all_scored_completed(&self) -> bool {
        self.progress.iter().all(|p| p.completed)
    }

    /// Navigation permission. Rendering of controls is up to the caller.
    #[inline]
    pub fn can_navigate(&self) -> bool {
        self.all_scored_completed()
    }

    pub fn state(&self) -> SequencerState {
        if self.all_scored_completed() && self.cursor + 1 == self.steps.len() {
            SequencerState::Complete
        } else {
            SequencerState::Presenting {
                cursor: self.cursor,
            }
        }
    }

    /// Check a learner answer for the active field.
    ///
    /// Unparseable text counts as incorrect. Comparison uses the unrounded value.
    pub fn submit_answer(&mut self, field: StepField, raw: &str) -> Result<StepOutcome, StepError> {
        self.ensure_active(field)?;
        let truth = field.value_in(&self.result);
        let correct = raw
            .trim()
            .parse::<f64>()
            .map(|v| within_tolerance(v, truth, self.tolerance))
            .unwrap_or(false);
        let p = &mut self.progress[field.index()];
        p.user_answer = raw.to_string();
        let outcome = if correct {
            p.status = StepStatus::Correct;
            p.completed = true;
            p.skipped = false;
            self.advance();
            StepOutcome::Correct
        } else {
            p.status = StepStatus::Incorrect;
            StepOutcome::Incorrect
        };
        tracing::debug!(%field, raw, ?outcome, cursor = self.cursor, "answer checked");
        Ok(outcome)
    }

    /// Fill in the true value for the active field and advance as a correct answer would.
    pub fn skip(&mut self, field: StepField) -> Result<(), StepError> {
        self.ensure_active(field)?;
        let truth = field.value_in(&self.result);
        self.progress[field.index()] = StepProgress {
            user_answer: fmt_display(truth),
            status: StepStatus::Correct,
            completed: true,
            skipped: true,
        };
        self.advance();
        tracing::debug!(%field, cursor = self.cursor, "step skipped");
        Ok(())
    }

    /// Move one step back or forward. No-op until every scored field is completed.
    pub fn navigate(&mut self, dir: Direction) {
        if !self.can_navigate() {
            tracing::trace!(?dir, "navigation gated");
            return;
        }
        let last = self.steps.len() - 1;
        self.cursor = match dir {
            Direction::Back => self.cursor.saturating_sub(1),
            Direction::Forward => (self.cursor + 1).min(last),
        };
        tracing::trace!(?dir, cursor = self.cursor, "navigated");
    }

    fn ensure_active(&self, field: StepField) -> Result<(), StepError> {
        if self.current_field() != Some(field) {
            return Err(StepError::NotCurrentStep { field });
        }
        if self.progress(field).completed {
            return Err(StepError::AlreadyCompleted { field });
        }
        Ok(())
    }

    #[inline]
    fn advance(&mut self) {
        if self.cursor + 1 < self.steps.len() {
            self.cursor += 1;
        }
    }
}
