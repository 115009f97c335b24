//! Code Block Handling
//!
//! Multi-line code blocks are recognised twice: once over the whole document
//! to rewrite their boundaries, and once line by line so the interior is
//! never handed to the line rewriter.

pub mod normalize;
pub mod scanner;

pub use normalize::normalize_blocks;
pub use scanner::{FenceScanner, LineRole, ScanState, is_fence_marker};
