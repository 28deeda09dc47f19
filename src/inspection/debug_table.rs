//! Read-only debug tables of the live bodies.
//!
//! Each value is printed with exactly one decimal place. Vectors take two
//! columns (x, y), scalars one.

use std::fmt::Write;

use crate::simulation::states::{Body, Vector};

pub fn format_vectors<'a>(vectors: impl IntoIterator<Item = &'a Vector>) -> String {
    let mut out = String::new();
    for v in vectors {
        let _ = writeln!(out, "{:>10.1} {:>10.1}", v.x, v.y);
    }
    out
}

pub fn format_scalars(scalars: impl IntoIterator<Item = f64>) -> String {
    let mut out = String::new();
    for s in scalars {
        let _ = writeln!(out, "{s:>10.1}");
    }
    out
}

/// Positions, velocities and masses side by side, one row per body
pub fn body_table(t: f64, bodies: &[Body]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "t = {t:.1}, {} bodies", bodies.len());
    let _ = writeln!(
        out,
        "{:>5} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "#", "x", "y", "vx", "vy", "m"
    );
    for (i, b) in bodies.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>5} {:>10.1} {:>10.1} {:>10.1} {:>10.1} {:>10.1}",
            i, b.position.x, b.position.y, b.velocity.x, b.velocity.y, b.mass
        );
    }
    out
}
