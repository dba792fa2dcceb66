use std::io::{Read, Write};

use crate::ident::MacroIdent;
use crate::transcode::{DEFAULT_BUFFER_SIZE, StreamError, transcode_with_buffer};

pub const PRAGMA_ONCE: &str = "#pragma once";

/// Write a complete header for `reader` into `writer`:
///
/// ```text
/// #pragma once
/// #define <IDENT> {<literals>,0x0}
/// ```
///
/// No trailing newline is emitted. Returns the number of data bytes.
pub fn write_header<R: Read, W: Write>(
    writer: W,
    ident: &MacroIdent,
    reader: R,
) -> Result<u64, StreamError> {
    write_header_with_buffer(writer, ident, reader, DEFAULT_BUFFER_SIZE)
}

pub(crate) fn write_header_with_buffer<R: Read, W: Write>(
    mut writer: W,
    ident: &MacroIdent,
    reader: R,
    buffer_size: usize,
) -> Result<u64, StreamError> {
    write!(writer, "{}\n#define {} {{", PRAGMA_ONCE, ident).map_err(StreamError::Write)?;
    let bytes = transcode_with_buffer(reader, &mut writer, buffer_size)?;
    writer.write_all(b"}").map_err(StreamError::Write)?;
    Ok(bytes)
}

/// In-memory form of [`write_header`]
pub fn render_header(ident: &MacroIdent, bytes: &[u8]) -> String {
    format!(
        "{}\n#define {} {{{}}}",
        PRAGMA_ONCE,
        ident,
        crate::transcode::encode_body(bytes)
    )
}
