//! The captured exception and its stack trace.

use super::bounded::{BoundedStr, BoundedVec};
use super::FRAMES_MAX;

/// One frame of a native stack trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackFrame {
    /// Program counter of the frame.
    pub frame_address: u64,
    /// Start address of the enclosing symbol.
    pub symbol_address: u64,
    /// Load address of the enclosing object file.
    pub load_address: u64,
    /// Source line number, 0 if unknown.
    pub line_number: u64,
    /// Object or source file name; may be empty.
    pub filename: BoundedStr<256>,
    /// Symbol name; may be empty.
    pub method: BoundedStr<256>,
}

impl StackFrame {
    /// Creates a frame with only a program counter, as an unwinder without
    /// symbol information would produce.
    #[must_use]
    pub fn at(frame_address: u64) -> Self {
        Self {
            frame_address,
            ..Self::default()
        }
    }
}

/// The exception (signal) that terminated the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exception {
    /// Exception class; for signals the signal name (`SIGSEGV`).
    pub name: BoundedStr<64>,
    /// Human-readable description.
    pub message: BoundedStr<256>,
    /// Exception type as captured.
    pub exception_type: BoundedStr<32>,
    /// Stack frames, innermost first.
    pub frames: BoundedVec<StackFrame, FRAMES_MAX>,
}
