//! Fixed-width final-state writer
//!
//! Emits the same format the reader accepts: body count, radius in
//! scientific notation with 2 decimals, then one line per body with five
//! 11-wide scientific fields (position, velocity, mass) and a 12-wide label.

use std::io::Write;

use crate::simulation::states::Universe;

/// Format `x` like C's `%.*e`: one leading digit, `prec` decimals, and a
/// signed two-digit exponent (`1.0000e+00`). Rust's `{:e}` writes bare
/// single-digit exponents, so the exponent is re-padded here. Non-finite
/// values fall through to their Display form and will show up verbatim in
/// the output, matching the unguarded NaN propagation of the physics.
pub fn sci(x: f64, prec: usize) -> String {
    if !x.is_finite() {
        return format!("{}", x);
    }
    let s = format!("{:.prec$e}", x, prec = prec);
    // "1.0000e5" / "1.0000e-5" -> "1.0000e+05" / "1.0000e-05"
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Write the universe's final state to `out`
pub fn write_universe<W: Write>(out: &mut W, universe: &Universe) -> std::io::Result<()> {
    writeln!(out, "{}", universe.bodies.len())?;
    writeln!(out, "{}", sci(universe.radius, 2))?;
    for b in &universe.bodies {
        writeln!(
            out,
            "{:>11} {:>11} {:>11} {:>11} {:>11} {:>12}",
            sci(b.x.x, 4),
            sci(b.x.y, 4),
            sci(b.v.x, 4),
            sci(b.v.y, 4),
            sci(b.m, 4),
            b.label,
        )?;
    }
    Ok(())
}
