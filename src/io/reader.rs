//! Whitespace-token universe reader
//!
//! Parses the classic text format: body count, display radius, then one
//! record per body of (px py vx vy mass label). Tokens may be split across
//! lines arbitrarily; only whitespace separates them. Any missing or
//! malformed token aborts the read before a universe exists, so no partial
//! state is ever simulated.

use thiserror::Error;

use crate::simulation::states::{Universe, Body, NVec2};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("expected a body count, found {0:?}")]
    InvalidCount(String),

    #[error("expected a number for {what}, found {token:?}")]
    InvalidNumber { what: &'static str, token: String },
}

/// Read a universe from the token-stream text format
pub fn read_universe(input: &str) -> Result<Universe, ReadError> {
    let mut tokens = input.split_whitespace();

    let count_tok = tokens
        .next()
        .ok_or(ReadError::UnexpectedEof("body count"))?;
    let n: usize = count_tok
        .parse()
        .map_err(|_| ReadError::InvalidCount(count_tok.to_string()))?;

    let radius = next_f64(&mut tokens, "radius")?;

    let mut bodies = Vec::with_capacity(n);
    for _ in 0..n {
        let px = next_f64(&mut tokens, "position x")?;
        let py = next_f64(&mut tokens, "position y")?;
        let vx = next_f64(&mut tokens, "velocity x")?;
        let vy = next_f64(&mut tokens, "velocity y")?;
        let m = next_f64(&mut tokens, "mass")?;
        let label = tokens
            .next()
            .ok_or(ReadError::UnexpectedEof("label"))?
            .to_string();

        bodies.push(Body {
            x: NVec2::new(px, py),
            v: NVec2::new(vx, vy),
            m,
            label,
        });
    }

    Ok(Universe {
        bodies,
        radius,
        t: 0.0,
    })
}

fn next_f64<'a, I>(tokens: &mut I, what: &'static str) -> Result<f64, ReadError>
where
    I: Iterator<Item = &'a str>,
{
    let tok = tokens.next().ok_or(ReadError::UnexpectedEof(what))?;
    tok.parse().map_err(|_| ReadError::InvalidNumber {
        what,
        token: tok.to_string(),
    })
}
