//! Output Rendering
//!
//! JSON goes to stdout as one pretty-printed document per command.

use std::io::{self, Write};

use serde::Serialize;

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit_json(value: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_json(&mut out, value)
}

/// Write plain text, adding a trailing newline when missing.
pub fn write_text(out: &mut impl Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit_text(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_text(&mut out, text)
}
