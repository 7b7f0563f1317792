// Sliding window over the virtual decoded sequence.
//
// Owns the parsed run index, a bounded deque of decoded values, and two
// cursors: `left` at the first buffered position, `right` one past the
// last. Every successful shift pairs one cursor step with one push and
// one pop on the deque, so the window length never changes once filled.
//
// Boundary results are ordinary `false` returns, not errors: the window
// can be stepped back and forth indefinitely between the sequence ends.

use std::collections::VecDeque;

use log::debug;

use super::codec::{ParseError, RunIndex};
use super::cursor::Cursor;

/// A materialized viewport of up to `width` consecutive decoded values.
pub struct SlidingWindow {
    index: RunIndex,
    buf: VecDeque<i8>,
    left: Cursor,
    right: Cursor,
    width: usize,
}

impl SlidingWindow {
    /// Parse `encoded` and fill the window with up to `width` values
    /// starting at virtual position 0.
    ///
    /// A sequence shorter than `width` fills the window completely and
    /// leaves it bounded on both sides. Fails only on a parse error; no
    /// window is produced in that case.
    pub fn new(encoded: &[i8], width: usize) -> Result<Self, ParseError> {
        let index = RunIndex::parse(encoded)?;
        let mut window = Self {
            buf: VecDeque::with_capacity(width.min(index.virtual_len())),
            index,
            left: Cursor::start(),
            right: Cursor::start(),
            width,
        };
        for _ in 0..width {
            let Some(value) = window.index.literal_at(window.right) else {
                break;
            };
            window.buf.push_back(value);
            window.right.step_forward(&window.index);
        }
        debug!(
            "window filled: {} of {} values, virtual length {}",
            window.buf.len(),
            width,
            window.index.virtual_len()
        );
        Ok(window)
    }

    /// Shift the viewport one position right.
    ///
    /// Returns `false`, leaving all state untouched, when the window
    /// already shows the rightmost reachable values.
    pub fn step_right(&mut self) -> bool {
        if self.width == 0 {
            return false;
        }
        let Some(value) = self.index.literal_at(self.right) else {
            return false;
        };
        self.buf.push_back(value);
        self.right.step_forward(&self.index);
        self.left.step_forward(&self.index);
        self.buf.pop_front();
        true
    }

    /// Shift the viewport one position left.
    ///
    /// Returns `false`, leaving all state untouched, when the window
    /// already starts at virtual position 0.
    pub fn step_left(&mut self) -> bool {
        // Peek before committing: the left cursor only moves if the
        // uncovered position decodes.
        let mut left = self.left;
        if !left.step_backward(&self.index) {
            return false;
        }
        let Some(value) = self.index.literal_at(left) else {
            return false;
        };
        self.left = left;
        self.buf.push_front(value);
        self.right.step_backward(&self.index);
        self.buf.pop_back();
        true
    }

    /// Ordered view of the currently buffered values.
    pub fn iter(&self) -> impl Iterator<Item = i8> + '_ {
        self.buf.iter().copied()
    }

    /// Currently buffered values, left to right.
    pub fn to_vec(&self) -> Vec<i8> {
        self.iter().collect()
    }

    /// Number of buffered values, `0..=width`.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when nothing is buffered (empty input or zero width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Configured viewport width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total decoded length of the underlying sequence.
    #[inline]
    pub fn virtual_len(&self) -> usize {
        self.index.virtual_len()
    }

    /// True while the first buffered value is virtual position 0
    /// (left-bounded: `step_left` would return `false`).
    #[inline]
    pub fn at_start(&self) -> bool {
        self.left == Cursor::start()
    }

    /// True when the window shows the rightmost reachable values
    /// (right-bounded: `step_right` would return `false`).
    #[inline]
    pub fn at_end(&self) -> bool {
        self.width == 0 || self.index.literal_at(self.right).is_none()
    }

    /// Spaces of left padding a renderer needs to lay a clipped window
    /// out against the sequence boundary: `width - len()` while the
    /// window is left-bounded, 0 otherwise. Recomputed on demand rather
    /// than tracked across steps.
    pub fn left_padding(&self) -> usize {
        if self.at_start() {
            self.width - self.buf.len()
        } else {
            0
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
