//! Fixed constants and tunable configuration.
//!
//! Policy
//! - The constants are the widget defaults (canvas 500×300, 10px inset,
//!   side domain [1,100], tolerance 0.01). `HeronCfg` bundles them so callers
//!   can tune geometry without touching call sites.

use serde::{Deserialize, Serialize};

use crate::error::CfgError;

/// Smallest side length representable after geometric rescaling.
pub const SIDE_MIN: f64 = 1.0;
/// Largest accepted side length, both modes.
pub const SIDE_MAX: f64 = 100.0;
/// Absolute tolerance used when checking learner answers.
pub const ANSWER_TOL: f64 = 0.01;
/// Decimal places used for every displayed value.
pub const DISPLAY_DECIMALS: usize = 2;

/// Drawing area the vertices live in (canvas pixels).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
    /// Padding kept free on every side while dragging.
    pub inset: f64,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            inset: 10.0,
        }
    }
}

impl CanvasBounds {
    /// `sqrt(width² + height²)`.
    #[inline]
    pub fn max_diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}

/// Which scale constant applies: at rest, or while a vertex is being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleMode {
    Rest,
    Drag,
}

/// Widget configuration.
///
/// `rest_diagonal` and `drag_diagonal` are the per-mode scale constants used to
/// map pixel distances onto [1,100]; `None` means the canvas diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeronCfg {
    pub canvas: CanvasBounds,
    pub tolerance: f64,
    pub rest_diagonal: Option<f64>,
    pub drag_diagonal: Option<f64>,
}

impl Default for HeronCfg {
    fn default() -> Self {
        Self {
            canvas: CanvasBounds::default(),
            tolerance: ANSWER_TOL,
            rest_diagonal: None,
            drag_diagonal: None,
        }
    }
}

impl HeronCfg {
    /// Scale diagonal for `mode`.
    #[inline]
    pub fn diagonal(&self, mode: ScaleMode) -> f64 {
        let fixed = match mode {
            ScaleMode::Rest => self.rest_diagonal,
            ScaleMode::Drag => self.drag_diagonal,
        };
        fixed.unwrap_or_else(|| self.canvas.max_diagonal())
    }

    /// Reject configs with an empty inner canvas, a non-positive scale
    /// diagonal, or a non-positive tolerance. NaN fails every check.
    pub fn check(&self) -> Result<(), CfgError> {
        let CanvasBounds {
            width,
            height,
            inset,
        } = self.canvas;
        let roomy = |extent: f64| extent.is_finite() && extent > 2.0 * inset;
        if !(inset.is_finite() && inset >= 0.0 && roomy(width) && roomy(height)) {
            return Err(CfgError::Canvas {
                width,
                height,
                inset,
            });
        }
        for (which, mode) in [("rest", ScaleMode::Rest), ("drag", ScaleMode::Drag)] {
            let value = self.diagonal(mode);
            if !(value.is_finite() && value > 0.0) {
                return Err(CfgError::Diagonal { which, value });
            }
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(CfgError::Tolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Format a value the way every step and summary displays it.
#[inline]
pub fn fmt_display(v: f64) -> String {
    format!("{v:.prec$}", prec = DISPLAY_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_diagonals_follow_canvas() {
        let mut cfg = HeronCfg::default();
        assert!((cfg.diagonal(ScaleMode::Rest) - 340_000f64.sqrt()).abs() < 1e-9);
        assert_eq!(cfg.diagonal(ScaleMode::Rest), cfg.diagonal(ScaleMode::Drag));
        cfg.canvas.width = 400.0;
        assert!((cfg.diagonal(ScaleMode::Drag) - 500.0).abs() < 1e-9);
        cfg.drag_diagonal = Some(600.0);
        assert_eq!(cfg.diagonal(ScaleMode::Drag), 600.0);
        assert!((cfg.diagonal(ScaleMode::Rest) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn check_accepts_defaults_and_rejects_bad_configs() {
        assert_eq!(HeronCfg::default().check(), Ok(()));

        let mut narrow = HeronCfg::default();
        narrow.canvas.width = 15.0;
        assert!(matches!(narrow.check(), Err(CfgError::Canvas { .. })));

        let mut nan = HeronCfg::default();
        nan.canvas.height = f64::NAN;
        assert!(matches!(nan.check(), Err(CfgError::Canvas { .. })));

        let zero_drag = HeronCfg {
            drag_diagonal: Some(0.0),
            ..HeronCfg::default()
        };
        assert_eq!(
            zero_drag.check(),
            Err(CfgError::Diagonal {
                which: "drag",
                value: 0.0
            })
        );

        let no_tol = HeronCfg {
            tolerance: -0.01,
            ..HeronCfg::default()
        };
        assert_eq!(no_tol.check(), Err(CfgError::Tolerance(-0.01)));
    }

    #[test]
    fn display_rounds_to_two_places() {
        assert_eq!(fmt_display(4330.127_018_922_193), "4330.13");
        assert_eq!(fmt_display(6.0), "6.00");
    }
}
