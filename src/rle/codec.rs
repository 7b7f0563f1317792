// RLE codec format: descriptor/literal split and value lookup.
//
// The encoded stream is a flat sequence of signed bytes. Each run opens
// with a descriptor byte `d`:
//   d > 0  — repeat run: one literal byte follows and stands for `d`
//            consecutive decoded positions
//   d < 0  — literal run: `|d|` literal bytes follow, one per position
//   d == 0 — invalid
//
// Parsing splits the stream once into a run table and a literal table;
// decoded values are then addressed through `Cursor` without re-scanning
// either table.

use log::debug;
use thiserror::Error;

use super::cursor::Cursor;

// ---------------------------------------------------------------------------
// Parse error
// ---------------------------------------------------------------------------

/// Construction-time failure. Parsing is atomic: on error no partial
/// index is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A zero descriptor byte, which encodes no run at all.
    #[error("malformed encoding: zero descriptor at offset {offset}")]
    MalformedEncoding {
        /// Input offset of the offending descriptor.
        offset: usize,
    },

    /// A run descriptor claimed more literal bytes than remain.
    #[error(
        "truncated encoding: run at offset {offset} needs {needed} literal bytes, {available} remain"
    )]
    TruncatedEncoding {
        /// Input offset of the run's descriptor.
        offset: usize,
        /// Literal bytes the descriptor calls for.
        needed: usize,
        /// Literal bytes left in the input.
        available: usize,
    },
}

// ---------------------------------------------------------------------------
// Run descriptor
// ---------------------------------------------------------------------------

/// One decoded run. The sign-encoded descriptor byte is resolved at parse
/// time, so a zero-length run is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run {
    /// One stored literal repeated `len` times.
    Repeat {
        /// Decoded positions covered (1..=127).
        len: u8,
    },
    /// `len` distinct stored literals, one per decoded position.
    Literal {
        /// Decoded positions covered (1..=128).
        len: u8,
    },
}

impl Run {
    /// Decoded positions this run covers.
    #[inline]
    pub fn len(self) -> usize {
        match self {
            Run::Repeat { len } | Run::Literal { len } => len as usize,
        }
    }

    /// Entries this run occupies in the literal table.
    #[inline]
    pub fn stored(self) -> usize {
        match self {
            Run::Repeat { .. } => 1,
            Run::Literal { len } => len as usize,
        }
    }
}

// ---------------------------------------------------------------------------
// Run index
// ---------------------------------------------------------------------------

/// The parsed form of an encoded stream: a run table plus a flat literal
/// table, in the same left-to-right order as the input. Built once, then
/// immutable.
///
/// Invariant: `literals.len()` equals the sum of `run.stored()` over the
/// run table, and `virtual_len` the sum of `run.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunIndex {
    runs: Vec<Run>,
    literals: Vec<i8>,
    virtual_len: usize,
}

impl RunIndex {
    /// Split `encoded` into run and literal tables.
    ///
    /// Scans left to right, one descriptor plus its literal payload at a
    /// time. Fails on a zero descriptor or a payload extending past the
    /// end of the input.
    pub fn parse(encoded: &[i8]) -> Result<Self, ParseError> {
        let mut runs = Vec::with_capacity(encoded.len() / 2);
        let mut literals = Vec::with_capacity(encoded.len() / 2);
        let mut virtual_len = 0usize;

        let mut pos = 0usize;
        while pos < encoded.len() {
            let desc = encoded[pos];
            if desc == 0 {
                return Err(ParseError::MalformedEncoding { offset: pos });
            }
            let len = desc.unsigned_abs();
            let run = if desc > 0 {
                Run::Repeat { len }
            } else {
                Run::Literal { len }
            };

            let needed = run.stored();
            let available = encoded.len() - pos - 1;
            if needed > available {
                return Err(ParseError::TruncatedEncoding {
                    offset: pos,
                    needed,
                    available,
                });
            }

            runs.push(run);
            literals.extend_from_slice(&encoded[pos + 1..pos + 1 + needed]);
            virtual_len += run.len();
            pos += 1 + needed;
        }

        debug!(
            "parsed {} runs, {} stored literals, virtual length {}",
            runs.len(),
            literals.len(),
            virtual_len
        );
        Ok(Self {
            runs,
            literals,
            virtual_len,
        })
    }

    /// Run table entry, or `None` one past the end.
    #[inline]
    pub fn run(&self, idx: usize) -> Option<Run> {
        self.runs.get(idx).copied()
    }

    /// Number of runs in the table.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Iterate the run table in order.
    pub fn runs(&self) -> impl Iterator<Item = Run> + '_ {
        self.runs.iter().copied()
    }

    /// Number of entries in the literal table.
    #[inline]
    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    /// Total decoded length across all runs. The virtual sequence itself
    /// is never materialized.
    #[inline]
    pub fn virtual_len(&self) -> usize {
        self.virtual_len
    }

    /// Decoded value at `cursor`, or `None` if the cursor sits one past
    /// the end. A repeat run yields its single stored literal regardless
    /// of the cursor's run offset; a literal run indexes by it.
    #[inline]
    pub fn literal_at(&self, cursor: Cursor) -> Option<i8> {
        match self.run(cursor.run_idx())? {
            Run::Repeat { .. } => Some(self.literals[cursor.literal_idx()]),
            Run::Literal { .. } => Some(self.literals[cursor.literal_idx() + cursor.offset()]),
        }
    }
}

// ---------------------------------------------------------------------------
// Reference expansion
// ---------------------------------------------------------------------------

/// Expand an encoded stream in full.
///
/// Convenience for callers that want the whole decoded sequence at once;
/// the sliding window never calls this. Also serves as the reference
/// against which windowed traversal is checked in tests.
pub fn decode_all(encoded: &[i8]) -> Result<Vec<i8>, ParseError> {
    let index = RunIndex::parse(encoded)?;
    let mut out = Vec::with_capacity(index.virtual_len());
    let mut base = 0usize;
    for run in index.runs() {
        match run {
            Run::Repeat { len } => {
                out.extend(std::iter::repeat_n(index.literals[base], len as usize));
            }
            Run::Literal { len } => {
                out.extend_from_slice(&index.literals[base..base + len as usize]);
            }
        }
        base += run.stored();
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
