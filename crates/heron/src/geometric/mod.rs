//! Geometric input adapter: three canvas vertices → side lengths in [1,100].
//!
//! Model
//! - Side `a` is |v2 v3|, `b` is |v1 v3|, `c` is |v1 v2| (pixels).
//! - Pixel distances map onto the shared side domain with
//!   `max(1, round(raw * 99 / diagonal + 1))`, so the numeric validator and
//!   calculator apply unchanged.
//! - Dragging holds a one-slot capture token; moves are clamped into the inset
//!   canvas and silently dropped when they would collapse the triangle.
//!
//! References
//! - Code cross-refs: `cfg::{HeronCfg, CanvasBounds, ScaleMode}`, `validate::is_triangle`

use nalgebra::Vector2;
use serde::Serialize;

use crate::cfg::{CanvasBounds, HeronCfg, ScaleMode, SIDE_MAX, SIDE_MIN};
use crate::sides::SideLengths;
use crate::validate::is_triangle;

/// A point in canvas coordinates.
pub type Vertex = Vector2<f64>;

/// Vertex slot; vertex `i` is opposite side `i` (V1↔a, V2↔b, V3↔c).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum VertexIndex {
    V1,
    V2,
    V3,
}

impl VertexIndex {
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            VertexIndex::V1 => 0,
            VertexIndex::V2 => 1,
            VertexIndex::V3 => 2,
        }
    }
}

impl TryFrom<usize> for VertexIndex {
    type Error = usize;

    fn try_from(i: usize) -> Result<Self, Self::Error> {
        match i {
            0 => Ok(VertexIndex::V1),
            1 => Ok(VertexIndex::V2),
            2 => Ok(VertexIndex::V3),
            other => Err(other),
        }
    }
}

/// Exactly three ordered vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexSet {
    pts: [Vertex; 3],
}

impl Default for VertexSet {
    /// A comfortably non-degenerate triangle inside the default canvas.
    fn default() -> Self {
        Self::new([
            Vertex::new(250.0, 50.0),
            Vertex::new(100.0, 250.0),
            Vertex::new(400.0, 250.0),
        ])
    }
}

impl VertexSet {
    #[inline]
    pub fn new(pts: [Vertex; 3]) -> Self {
        Self { pts }
    }
    #[inline]
    pub fn get(&self, i: VertexIndex) -> Vertex {
        self.pts[i.slot()]
    }
    #[inline]
    pub fn points(&self) -> &[Vertex; 3] {
        &self.pts
    }

    /// Copy with vertex `i` moved to `p`.
    #[inline]
    pub fn with(&self, i: VertexIndex, p: Vertex) -> Self {
        let mut pts = self.pts;
        pts[i.slot()] = p;
        Self { pts }
    }
}

/// Euclidean side lengths in pixels.
pub fn raw_sides(v: &VertexSet) -> SideLengths {
    let [p1, p2, p3] = v.pts;
    SideLengths::new((p3 - p2).norm(), (p3 - p1).norm(), (p2 - p1).norm())
}

/// Pixels → side units for a given diagonal: `raw * 99 / diagonal`.
#[inline]
pub fn scale_factor(diagonal: f64) -> f64 {
    (SIDE_MAX - SIDE_MIN) / diagonal
}

/// Map raw pixel lengths onto [1,100].
pub fn rescale(raw: &SideLengths, diagonal: f64) -> SideLengths {
    let k = scale_factor(diagonal);
    raw.map(|d| (d * k + 1.0).round().max(SIDE_MIN))
}

/// Side lengths of the triangle spanned by `v`, rescaled with `diagonal`.
#[inline]
pub fn derive_sides(v: &VertexSet, diagonal: f64) -> SideLengths {
    rescale(&raw_sides(v), diagonal)
}

/// Clamp `p` into the canvas minus the inset on every side.
///
/// Never panics: on a canvas narrower than twice the inset the lower bound
/// wins. `HeronCfg::check` rejects such canvases up front.
pub fn clamp_to_canvas(p: Vertex, canvas: &CanvasBounds) -> Vertex {
    let fit = |v: f64, extent: f64| v.min(extent - canvas.inset).max(canvas.inset);
    Vertex::new(fit(p.x, canvas.width), fit(p.y, canvas.height))
}

/// Sides after moving vertex `i` to `p`, or `None` if the move would collapse the triangle.
///
/// Rejected when two vertices come closer than one side unit (before the `+1`
/// offset), or when the raw or rescaled triple fails the triangle inequality.
pub fn try_move(v: &VertexSet, i: VertexIndex, p: Vertex, diagonal: f64) -> Option<SideLengths> {
    let moved = v.with(i, p);
    let raw = raw_sides(&moved);
    let k = scale_factor(diagonal);
    if raw.as_array().iter().any(|d| d * k < SIDE_MIN) || !is_triangle(&raw) {
        return None;
    }
    let sides = rescale(&raw, diagonal);
    is_triangle(&sides).then_some(sides)
}

/// One-slot drag ownership: at most one vertex captured at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    captured: Option<VertexIndex>,
}

impl DragState {
    #[inline]
    pub fn captured(&self) -> Option<VertexIndex> {
        self.captured
    }

    /// Capture `i` if nothing is captured. Returns whether `i` now owns the drag.
    pub fn press(&mut self, i: VertexIndex) -> bool {
        match self.captured {
            None => {
                self.captured = Some(i);
                true
            }
            Some(held) => held == i,
        }
    }

    #[inline]
    pub fn release(&mut self) {
        self.captured = None;
    }
}

/// Vertex set plus drag token, owned by the input layer.
#[derive(Clone, Debug)]
pub struct GeometricInput {
    cfg: HeronCfg,
    vertices: VertexSet,
    drag: DragState,
}

impl GeometricInput {
    pub fn new(cfg: HeronCfg) -> Self {
        Self {
            cfg,
            vertices: VertexSet::default(),
            drag: DragState::default(),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &VertexSet {
        &self.vertices
    }
    #[inline]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Sides at rest, recomputed from the current vertices.
    pub fn sides(&self) -> SideLengths {
        derive_sides(&self.vertices, self.cfg.diagonal(ScaleMode::Rest))
    }

    /// Sides for display during an active drag (drag-time scale).
    pub fn live_sides(&self) -> SideLengths {
        let mode = match self.drag.captured() {
            Some(_) => ScaleMode::Drag,
            None => ScaleMode::Rest,
        };
        derive_sides(&self.vertices, self.cfg.diagonal(mode))
    }

    /// Place vertex `i` at an already-clamped point. Returns whether it was committed.
    pub fn set_vertex(&mut self, i: VertexIndex, p: Vertex) -> bool {
        self.commit(i, p, ScaleMode::Rest)
    }

    pub fn press(&mut self, i: VertexIndex) -> bool {
        self.drag.press(i)
    }

    /// Move the captured vertex toward `p` (clamped). No-op without a capture.
    pub fn drag_to(&mut self, p: Vertex) -> bool {
        let Some(i) = self.drag.captured() else {
            return false;
        };
        let p = clamp_to_canvas(p, &self.cfg.canvas);
        self.commit(i, p, ScaleMode::Drag)
    }

    pub fn release(&mut self) {
        self.drag.release();
    }

    fn commit(&mut self, i: VertexIndex, p: Vertex, mode: ScaleMode) -> bool {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return false;
        }
        match try_move(&self.vertices, i, p, self.cfg.diagonal(mode)) {
            Some(_) => {
                self.vertices = self.vertices.with(i, p);
                true
            }
            None => {
                tracing::trace!(?i, x = p.x, y = p.y, "move rejected");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests;
