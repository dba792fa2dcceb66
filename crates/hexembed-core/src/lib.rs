//! Embeds arbitrary files into C/C++ translation units.
//!
//! Each input becomes a header of the form
//!
//! ```text
//! #pragma once
//! #define EMBED_ICON_PNG {0x89,0x50,0x0}
//! ```
//!
//! where the trailing `0x0` is a sentinel so the initializer is never empty
//! and can be scanned like a NUL-terminated string.

pub mod decode;
mod embedder;
pub mod error;
pub mod header;
pub mod ident;
pub mod transcode;

pub use decode::{decode_body, parse_header};
pub use embedder::{EmbedConfig, EmbedReport, Embedder};
pub use error::{EmbedError, Result};
pub use header::{render_header, write_header};
pub use ident::{MACRO_PREFIX, MacroIdent, derive_identifier};
pub use transcode::{SENTINEL, StreamError, encode_body, transcode};
