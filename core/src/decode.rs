//! # Stream Frame Decoder
//!
//! The discovery process writes one JSON payload to stdout, freely
//! interleaved with diagnostic text, and the bytes arrive in arbitrary
//! chunks. [`scan_frame`] decides whether a complete frame is present
//! in an accumulated buffer and extracts it; [`FrameBuffer`] wraps the
//! accumulation for callers that feed chunks as they arrive.
//!
//! Boundary detection is a two-step heuristic keyed off the closing
//! bracket, so stray braces in diagnostic text (`done {10%}`) can never
//! pick the wrong frame kind:
//! 1. If the trimmed buffer ends on a closer (`]` or `}`), the slice
//!    from the first matching opener to the end is the candidate and
//!    MUST parse; a malformed candidate is a hard [`DecodeError`] and
//!    the buffer has to be cleared.
//! 2. Otherwise diagnostic text may trail the frame, so the slice up to
//!    the last closer of each kind is tried. Here a parse failure only
//!    means "no frame yet": more output could still complete it.
//!
//! Either way a candidate is rejected when the text before its opener
//! has unbalanced brackets of the other kind: the candidate is then
//! nested inside a larger frame that is still streaming in.

use netpulse_common::error::DecodeError;
use serde::de::DeserializeOwned;

/// Outcome of one look at the buffer.
#[derive(Debug, PartialEq)]
pub enum FrameStatus<T> {
    /// No complete frame in the buffer yet; keep accumulating.
    Incomplete,
    /// A frame was extracted; the buffer's contents are spent.
    Complete(T),
}

/// Pure function of the buffer: `{incomplete | parsed value | error}`.
pub fn scan_frame<T: DeserializeOwned>(buf: &str) -> Result<FrameStatus<T>, DecodeError> {
    let trimmed = buf.trim();

    // Buffer ends right on a frame boundary: the closer names the frame
    // kind, the candidate runs from the first matching opener, and a
    // garbled candidate is an error the caller must discard.
    if let Some(last) = trimmed.chars().last()
        && let Some(opener) = opener_for(last)
    {
        let Some(open_idx) = trimmed.find(opener) else {
            return Ok(FrameStatus::Incomplete);
        };
        if enclosing_frame_open(&trimmed[..open_idx], opener) {
            return Ok(FrameStatus::Incomplete);
        }
        let value = serde_json::from_str(&trimmed[open_idx..])?;
        return Ok(FrameStatus::Complete(value));
    }

    // Trailing diagnostic text: try up to the last closer of each kind.
    for (opener, closer) in [('[', ']'), ('{', '}')] {
        if let Some(open_idx) = trimmed.find(opener)
            && let Some(close_idx) = trimmed.rfind(closer)
            && close_idx > open_idx
            && !enclosing_frame_open(&trimmed[..open_idx], opener)
            && let Ok(value) = serde_json::from_str(&trimmed[open_idx..=close_idx])
        {
            return Ok(FrameStatus::Complete(value));
        }
    }

    Ok(FrameStatus::Incomplete)
}

fn opener_for(closer: char) -> Option<char> {
    match closer {
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// True when the text before a candidate opener has opened a bracket of
/// the other kind without closing it. The candidate then sits inside an
/// outer frame that is still streaming, and parsing it alone would be a
/// false positive (`[{"a":1}` must stay incomplete, not yield the inner
/// object).
fn enclosing_frame_open(prefix: &str, opener: char) -> bool {
    let (other_open, other_close) = if opener == '[' {
        ('{', '}')
    } else {
        ('[', ']')
    };
    prefix.matches(other_open).count() > prefix.matches(other_close).count()
}

/// Accumulates arbitrarily-chunked process output until a frame appears.
///
/// The buffer clears itself whenever a frame is extracted and whenever a
/// candidate turns out malformed; carrying corrupt bytes into the next
/// cycle would poison every frame after it.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    buf: String,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one chunk and reports whether a frame is now complete.
    pub fn append<T: DeserializeOwned>(
        &mut self,
        chunk: &str,
    ) -> Result<FrameStatus<T>, DecodeError> {
        self.buf.push_str(chunk);
        match scan_frame(&self.buf) {
            Ok(FrameStatus::Incomplete) => Ok(FrameStatus::Incomplete),
            Ok(FrameStatus::Complete(value)) => {
                self.buf.clear();
                Ok(FrameStatus::Complete(value))
            }
            Err(err) => {
                self.buf.clear();
                Err(err)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
