//! Oxirle: streaming run-length decoding with a scrollable viewport.
//!
//! The crate decodes an RLE byte stream lazily: the encoded form is split
//! once into a run table and a literal table, and a bounded window of
//! decoded values is slid across the virtual sequence in O(1) per step,
//! in either direction, without ever expanding the whole sequence.
//!
//! The crate provides:
//! - The codec, cursor and window core (`rle`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use oxirle::rle::SlidingWindow;
//!
//! // A repeat run of four 2s, the literal run 5,1,2, a repeat run of five 9s.
//! let encoded = [4, 2, -3, 5, 1, 2, 5, 9];
//! let mut window = SlidingWindow::new(&encoded, 5).unwrap();
//! assert_eq!(window.to_vec(), [2, 2, 2, 2, 5]);
//!
//! assert!(window.step_right());
//! assert!(window.step_right());
//! assert_eq!(window.to_vec(), [2, 2, 5, 1, 2]);
//!
//! assert!(window.step_left());
//! assert!(window.step_left());
//! assert_eq!(window.to_vec(), [2, 2, 2, 2, 5]);
//! ```

pub mod rle;

#[cfg(feature = "cli")]
pub mod cli;
