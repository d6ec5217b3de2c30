//! Heron calculator: sides → (semi-perimeter, area).

use serde::Serialize;

use crate::cfg::fmt_display;
use crate::validate::ValidSides;

/// Output of `compute`. Values are unrounded; use the `*_display` helpers for text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeronResult {
    pub semi_perimeter: f64,
    pub area: f64,
}

impl HeronResult {
    pub fn semi_perimeter_display(&self) -> String {
        fmt_display(self.semi_perimeter)
    }

    pub fn area_display(&self) -> String {
        fmt_display(self.area)
    }
}

/// `s = (a+b+c)/2`, `A = sqrt(s(s-a)(s-b)(s-c))`.
pub fn compute(valid: &ValidSides) -> HeronResult {
    let t = valid.sides();
    let s = t.perimeter() / 2.0;
    // Near-degenerate triples can round the product slightly below zero.
    let product = (s * (s - t.a) * (s - t.b) * (s - t.c)).max(0.0);
    HeronResult {
        semi_perimeter: s,
        area: product.sqrt(),
    }
}
