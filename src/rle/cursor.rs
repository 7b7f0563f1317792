// Resumable cursor into the virtual decoded sequence.
//
// A decoded position is addressed as (run_idx, literal_idx, offset)
// rather than as a single absolute index, so stepping in either
// direction is O(1) and never re-scans the run table.
// `run_idx == index.run_count()` is the one-past-the-end position.

use super::codec::RunIndex;

/// Position within the virtual decoded sequence.
///
/// Plain value type; the window holds two copies (left edge, right edge)
/// and steps them independently against the same `RunIndex`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    run_idx: usize,
    literal_idx: usize,
    offset: usize,
}

impl Cursor {
    /// Cursor at virtual position 0.
    #[inline]
    pub fn start() -> Self {
        Self::default()
    }

    /// Index into the run table.
    #[inline]
    pub fn run_idx(&self) -> usize {
        self.run_idx
    }

    /// Literal-table base of the current run.
    #[inline]
    pub fn literal_idx(&self) -> usize {
        self.literal_idx
    }

    /// Offset within the current run, `0..run.len()`.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Advance one decoded position.
    ///
    /// Crossing a run boundary moves `literal_idx` past the run's stored
    /// entries and resets the offset. Returns `false` (no state change)
    /// when already one past the end.
    pub fn step_forward(&mut self, index: &RunIndex) -> bool {
        let Some(run) = index.run(self.run_idx) else {
            return false;
        };
        self.offset += 1;
        if self.offset == run.len() {
            self.run_idx += 1;
            self.literal_idx += run.stored();
            self.offset = 0;
        }
        true
    }

    /// Retreat one decoded position; the exact inverse of
    /// [`step_forward`](Self::step_forward). Returns `false` (no state
    /// change) at virtual position 0.
    pub fn step_backward(&mut self, index: &RunIndex) -> bool {
        if self.offset > 0 {
            self.offset -= 1;
            return true;
        }
        let Some(run) = self.run_idx.checked_sub(1).and_then(|i| index.run(i)) else {
            return false;
        };
        self.run_idx -= 1;
        self.literal_idx -= run.stored();
        self.offset = run.len() - 1;
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rle::codec::decode_all;

    const SAMPLE: &[i8] = &[4, 2, -3, 5, 1, 2, 5, 9];

    fn index() -> RunIndex {
        RunIndex::parse(SAMPLE).unwrap()
    }

    #[test]
    fn forward_walk_reads_expanded_sequence() {
        let index = index();
        let mut cursor = Cursor::start();
        let mut decoded = Vec::new();
        while let Some(value) = index.literal_at(cursor) {
            decoded.push(value);
            assert!(cursor.step_forward(&index));
        }
        assert_eq!(decoded, decode_all(SAMPLE).unwrap());
    }

    #[test]
    fn forward_stops_at_end() {
        let index = index();
        let mut cursor = Cursor::start();
        for _ in 0..index.virtual_len() {
            assert!(cursor.step_forward(&index));
        }
        assert_eq!(cursor.run_idx(), index.run_count());
        assert_eq!(index.literal_at(cursor), None);

        let end = cursor;
        assert!(!cursor.step_forward(&index));
        assert_eq!(cursor, end);
    }

    #[test]
    fn backward_stops_at_start() {
        let index = index();
        let mut cursor = Cursor::start();
        assert!(!cursor.step_backward(&index));
        assert_eq!(cursor, Cursor::start());
    }

    #[test]
    fn backward_walk_from_end_mirrors_forward() {
        let index = index();
        let mut cursor = Cursor::start();
        let mut trail = vec![cursor];
        while cursor.step_forward(&index) {
            trail.push(cursor);
        }

        // Walk back down the same positions in reverse.
        for expected in trail.iter().rev().skip(1) {
            assert!(cursor.step_backward(&index));
            assert_eq!(cursor, *expected);
        }
        assert!(!cursor.step_backward(&index));
    }

    #[test]
    fn forward_then_backward_is_identity() {
        let index = index();
        let mut cursor = Cursor::start();
        loop {
            let before = cursor;
            if !cursor.step_forward(&index) {
                break;
            }
            assert!(cursor.step_backward(&index));
            assert_eq!(cursor, before);
            cursor.step_forward(&index);
        }
    }

    #[test]
    fn boundary_transition_updates_literal_base() {
        let index = index();
        let mut cursor = Cursor::start();
        // Step across the 4-long repeat run.
        for _ in 0..4 {
            cursor.step_forward(&index);
        }
        assert_eq!(cursor.run_idx(), 1);
        assert_eq!(cursor.literal_idx(), 1);
        assert_eq!(cursor.offset(), 0);

        // Step across the 3-long literal run.
        for _ in 0..3 {
            cursor.step_forward(&index);
        }
        assert_eq!(cursor.run_idx(), 2);
        assert_eq!(cursor.literal_idx(), 4);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn empty_index_has_no_positions() {
        let index = RunIndex::parse(&[]).unwrap();
        let mut cursor = Cursor::start();
        assert!(!cursor.step_forward(&index));
        assert!(!cursor.step_backward(&index));
        assert_eq!(index.literal_at(cursor), None);
    }
}
