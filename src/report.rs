//! JSON output for scan results.

use crate::Result;
use serde::Serialize;
use std::io::Write;

/// Serialize `value` to `writer` as JSON followed by a single newline.
///
/// Compact output is one line; `pretty` switches to two-space indentation.
/// An empty summary list is written as `[]`.
pub fn write_json<W, T>(mut writer: W, value: &T, pretty: bool) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
