use std::io::{self, ErrorKind, Read, Write};

use thiserror::Error;

/// Literal appended after the data bytes
pub const SENTINEL: &str = "0x0";

/// Default read buffer size for streaming transcoding
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

// "0x" + two hex digits + ","
const LITERAL_WIDTH: usize = 5;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Which side of the stream failed
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Stream `reader` into `writer` as a comma-separated list of `0xNN`
/// literals terminated by [`SENTINEL`].
///
/// Returns the number of data bytes transcoded, sentinel excluded.
pub fn transcode<R: Read, W: Write>(reader: R, writer: W) -> Result<u64, StreamError> {
    transcode_with_buffer(reader, writer, DEFAULT_BUFFER_SIZE)
}

pub(crate) fn transcode_with_buffer<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    buffer_size: usize,
) -> Result<u64, StreamError> {
    let mut input = vec![0u8; buffer_size.max(1)];
    let mut encoded = Vec::with_capacity(input.len() * LITERAL_WIDTH);
    let mut total = 0u64;

    loop {
        let read = match reader.read(&mut input) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(StreamError::Read(e)),
        };

        encoded.clear();
        encode_into(&input[..read], &mut encoded);
        writer.write_all(&encoded).map_err(StreamError::Write)?;
        total += read as u64;
    }

    writer
        .write_all(SENTINEL.as_bytes())
        .map_err(StreamError::Write)?;

    Ok(total)
}

/// In-memory form of [`transcode`]
pub fn encode_body(bytes: &[u8]) -> String {
    let mut encoded = Vec::with_capacity(bytes.len() * LITERAL_WIDTH + SENTINEL.len());
    encode_into(bytes, &mut encoded);
    encoded.extend_from_slice(SENTINEL.as_bytes());
    // Only ASCII was pushed
    String::from_utf8_lossy(&encoded).into_owned()
}

fn encode_into(bytes: &[u8], out: &mut Vec<u8>) {
    for &byte in bytes {
        out.extend_from_slice(&[
            b'0',
            b'x',
            HEX_DIGITS[(byte >> 4) as usize],
            HEX_DIGITS[(byte & 0x0f) as usize],
            b',',
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingReader {
        remaining: Vec<u8>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.remaining.is_empty() {
                return Err(io::Error::other("device went away"));
            }
            let n = buf.len().min(self.remaining.len());
            buf[..n].copy_from_slice(&self.remaining[..n]);
            self.remaining.drain(..n);
            Ok(n)
        }
    }

    struct InterruptOnce {
        interrupted: bool,
        data: &'static [u8],
    }

    impl Read for InterruptOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_encode_body_scenarios() {
        assert_eq!(encode_body(&[0x89, 0x50]), "0x89,0x50,0x0");
        assert_eq!(encode_body(&[]), "0x0");
        assert_eq!(encode_body(&[0xFF]), "0xff,0x0");
        assert_eq!(encode_body(&[0x00, 0x0a]), "0x00,0x0a,0x0");
    }

    #[test]
    fn test_transcode_matches_in_memory_encoding_across_buffer_sizes() {
        let data: Vec<u8> = (0..=255u8).chain(0..=255u8).collect();
        let expected = encode_body(&data);

        for size in [1, 3, 7, 256, DEFAULT_BUFFER_SIZE] {
            let mut out = Vec::new();
            let count = transcode_with_buffer(&data[..], &mut out, size).unwrap();
            assert_eq!(count, data.len() as u64);
            assert_eq!(String::from_utf8(out).unwrap(), expected, "buffer size {}", size);
        }
    }

    #[test]
    fn test_zero_buffer_size_is_clamped() {
        let mut out = Vec::new();
        transcode_with_buffer(&b"ab"[..], &mut out, 0).unwrap();
        assert_eq!(out, b"0x61,0x62,0x0");
    }

    #[test]
    fn test_read_failure_is_reported_as_read() {
        let reader = FailingReader {
            remaining: vec![1, 2, 3],
        };
        let mut out = Vec::new();
        match transcode(reader, &mut out) {
            Err(StreamError::Read(e)) => assert_eq!(e.to_string(), "device went away"),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_failure_is_reported_as_write() {
        let mut sink = [0u8; 4];
        let writer = io::Cursor::new(&mut sink[..]);
        match transcode(&b"abc"[..], writer) {
            Err(StreamError::Write(e)) => assert_eq!(e.kind(), ErrorKind::WriteZero),
            other => panic!("expected write error, got {:?}", other),
        }
    }

    #[test]
    fn test_stream_error_converts_into_boxed_error() {
        fn run() -> Result<u64, Box<dyn std::error::Error>> {
            let reader = FailingReader { remaining: vec![] };
            Ok(transcode(reader, io::sink())?)
        }

        let err = run().unwrap_err();
        assert_eq!(err.to_string(), "failed to read input: device went away");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let reader = InterruptOnce {
            interrupted: false,
            data: b"\x01",
        };
        let mut out = Vec::new();
        assert_eq!(transcode(reader, &mut out).unwrap(), 1);
        assert_eq!(out, b"0x01,0x0");
    }
}
