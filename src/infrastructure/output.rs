use std::io::{self, Write};

/// Writes a formatted report followed by exactly one newline.
pub fn emit<W: Write>(writer: &mut W, report: &str) -> io::Result<()> {
    writer.write_all(report.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}
