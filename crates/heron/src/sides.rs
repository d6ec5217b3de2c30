//! Side-length triples and their labels.

use serde::Serialize;
use std::fmt;

/// Side label; `A` is opposite vertex 1, `B` opposite vertex 2, `C` opposite vertex 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SideLabel {
    A,
    B,
    C,
}

impl SideLabel {
    pub const ALL: [SideLabel; 3] = [SideLabel::A, SideLabel::B, SideLabel::C];
}

impl fmt::Display for SideLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SideLabel::A => "a",
            SideLabel::B => "b",
            SideLabel::C => "c",
        })
    }
}

/// Triple `{a, b, c}` of side lengths.
///
/// A value of this type is not necessarily a valid triangle; pass it through
/// `validate::validate` first; the calculator only accepts the resulting `ValidSides`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SideLengths {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl SideLengths {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn get(&self, side: SideLabel) -> f64 {
        match side {
            SideLabel::A => self.a,
            SideLabel::B => self.b,
            SideLabel::C => self.c,
        }
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Apply `f` to every side.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.a), f(self.b), f(self.c))
    }
}

impl From<[f64; 3]> for SideLengths {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self { a, b, c }
    }
}

impl fmt::Display for SideLengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}
