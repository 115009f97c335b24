//! Code-Fence Scanner
//!
//! Two-state machine that tracks whether the current line is inside a code
//! block. Any line starting with a fence marker of either dialect toggles the
//! state. There is no nesting and no escaping: a payload line that itself
//! starts with a marker (say, a code sample showing a fence) toggles the state
//! too. That is a known limitation of line-based boundary detection.

/// Marker sequences that open or close a code block in either dialect
const FENCE_MARKERS: [&str; 2] = ["```", "{code"];

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Outside,
    InsideBlock,
}

/// What a line is, as seen by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Ordinary line outside any block; eligible for rewriting
    Text,
    /// A fence marker line
    Fence,
    /// A line inside a block; passed through verbatim
    Payload,
}

impl ScanState {
    /// The state after `line` has been seen
    pub fn transition(self, line: &str) -> ScanState {
        if !is_fence_marker(line) {
            return self;
        }
        match self {
            ScanState::Outside => ScanState::InsideBlock,
            ScanState::InsideBlock => ScanState::Outside,
        }
    }
}

/// Whether `line` starts with a fence marker (case-sensitive, no leading whitespace)
pub fn is_fence_marker(line: &str) -> bool {
    FENCE_MARKERS.iter().any(|marker| line.starts_with(marker))
}

/// Walks a document line by line, classifying each line
#[derive(Debug, Default)]
pub struct FenceScanner {
    state: ScanState,
}

impl FenceScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn is_inside_block(&self) -> bool {
        self.state == ScanState::InsideBlock
    }

    /// Classify `line` using the state on entry, then apply the transition
    pub fn advance(&mut self, line: &str) -> LineRole {
        let entry = self.state;
        self.state = entry.transition(line);

        if self.state != entry {
            log::trace!("fence marker {:?}: {:?} -> {:?}", line, entry, self.state);
            return LineRole::Fence;
        }

        match entry {
            ScanState::Outside => LineRole::Text,
            ScanState::InsideBlock => LineRole::Payload,
        }
    }
}
