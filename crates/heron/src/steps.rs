//! Derivation steps and per-field learner progress.
//!
//! Step identity is an explicit enum (`StepKind`), and the scored subset is
//! `StepField`; progress is keyed by `StepField`, never by position.

use serde::Serialize;
use std::fmt;

use crate::calc::HeronResult;
use crate::cfg::fmt_display;
use crate::sides::SideLengths;
use crate::validate::InputMode;

/// Scored field: a step that asks the learner for a numeric answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum StepField {
    SemiPerimeter,
    Area,
}

impl StepField {
    pub const ALL: [StepField; 2] = [StepField::SemiPerimeter, StepField::Area];

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            StepField::SemiPerimeter => 0,
            StepField::Area => 1,
        }
    }

    /// True value of this field in `r` (unrounded).
    #[inline]
    pub fn value_in(self, r: &HeronResult) -> f64 {
        match self {
            StepField::SemiPerimeter => r.semi_perimeter,
            StepField::Area => r.area,
        }
    }
}

impl fmt::Display for StepField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepField::SemiPerimeter => "semi-perimeter",
            StepField::Area => "area",
        })
    }
}

/// Identity of a step in the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StepKind {
    SemiPerimeter,
    Area,
    /// Display-only summary shown in geometric mode.
    FinalResult,
}

impl StepKind {
    /// Scored field behind this step, if any.
    #[inline]
    pub fn field(self) -> Option<StepField> {
        match self {
            StepKind::SemiPerimeter => Some(StepField::SemiPerimeter),
            StepKind::Area => Some(StepField::Area),
            StepKind::FinalResult => None,
        }
    }
}

/// One immutable step: label, formula text, and the value it evaluates to.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivationStep {
    pub kind: StepKind,
    pub label: String,
    pub formula: String,
    pub answer: f64,
}

impl DerivationStep {
    pub fn answer_display(&self) -> String {
        fmt_display(self.answer)
    }
}

/// Check outcome of a single learner answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum StepStatus {
    #[default]
    Unset,
    Correct,
    Incorrect,
}

/// Learner progress on one scored field.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct StepProgress {
    pub user_answer: String,
    pub status: StepStatus,
    pub completed: bool,
    pub skipped: bool,
}

/// Build the step sequence: two steps in numeric mode, three in geometric mode.
pub fn build_steps(sides: &SideLengths, r: &HeronResult, mode: InputMode) -> Vec<DerivationStep> {
    let SideLengths { a, b, c } = *sides;
    let s = fmt_display(r.semi_perimeter);
    let mut steps = vec![
        DerivationStep {
            kind: StepKind::SemiPerimeter,
            label: "Step 1: Calculate the semi-perimeter (s)".to_string(),
            formula: format!("s = (a + b + c) / 2\ns = ({a} + {b} + {c}) / 2"),
            answer: r.semi_perimeter,
        },
        DerivationStep {
            kind: StepKind::Area,
            label: "Step 2: Apply Heron's Formula to calculate the area".to_string(),
            formula: format!("A = √(s(s-a)(s-b)(s-c))\nA = √({s}({s}-{a})({s}-{b})({s}-{c}))"),
            answer: r.area,
        },
    ];
    if mode == InputMode::Geometric {
        steps.push(DerivationStep {
            kind: StepKind::FinalResult,
            label: "Step 3: Final result".to_string(),
            formula: format!(
                "The area of the triangle with sides {a}, {b}, {c} is {} square units",
                fmt_display(r.area)
            ),
            answer: r.area,
        });
    }
    steps
}
