// RLE viewport: streaming run-length decoding behind a scrollable window.
//
// The encoded stream is split once into a run table and a literal table;
// the decoded sequence is only ever materialized `width` values at a time.
//
// # Modules
//
// - `codec`  — descriptor/literal split of the encoded stream, value lookup
// - `cursor` — resumable position with O(1) forward/backward stepping
// - `window` — bounded sliding window owning the two edge cursors

pub mod codec;
pub mod cursor;
pub mod window;

// Re-export key types for convenience.
pub use codec::{ParseError, Run, RunIndex, decode_all};
pub use cursor::Cursor;
pub use window::SlidingWindow;
