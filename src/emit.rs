//! Output Emitter
//!
//! Writes converted lines one per line. A line that already carries its own
//! terminator is written as is, so nothing is double-terminated.

use std::io::{self, Write};

/// Write each line to `writer`, terminated by a newline
pub fn emit_lines<W: Write, S: AsRef<str>>(writer: &mut W, lines: &[S]) -> io::Result<()> {
    for line in lines {
        let line = line.as_ref();
        if line.ends_with('\n') {
            writer.write_all(line.as_bytes())?;
        } else {
            writeln!(writer, "{line}")?;
        }
    }
    writer.flush()
}

/// The exact text `emit_lines` would write
pub fn render_document<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        let line = line.as_ref();
        out.push_str(line);
        if !line.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
