//! Line reading for the REPL.
//!
//! Bytes that are not UTF-8 are still a line of input: they decode lossily
//! and render as an invalid number instead of ending the session.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Read the next line without its `\n` / `\r\n` terminator.
///
/// Returns `Ok(None)` at EOF. Surrounding whitespace is kept.
pub async fn next_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if reader.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}
