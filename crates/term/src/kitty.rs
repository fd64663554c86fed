//! Kitty graphics protocol encoder.
//!
//! Transmits PNG images straight into the terminal's image store for
//! pixel-perfect rendering. Supported by Kitty, WezTerm, Ghostty; terminals
//! without the extension ignore the sequences, which this engine treats as
//! an expected no-op rather than an error.
//!
//! Protocol: <https://sw.kovidgoyal.net/kitty/graphics-protocol/>

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::ansi;

/// Maximum base64 payload bytes per escape frame; larger payloads are split
/// into continuation frames chained with the `m=` key.
const CHUNK_SIZE: usize = 4096;

/// Position the cursor at the 1-based cell and transmit-and-display the PNG
/// there under `image_id` at stacking order `z`.
///
/// Uses `a=T` (transmit and display in one step) rather than a two-phase
/// transmit-then-reference, trading bandwidth for freedom from
/// stale-reference artifacts. `f=100` declares PNG data and `q=2` keeps the
/// terminal from writing responses into our output. Re-sending an id
/// supersedes whatever that id showed before.
pub fn display_at(png: &[u8], col: u16, row: u16, image_id: u32, z: i32) -> String {
    let mut out = ansi::move_to(col, row);
    let b64 = BASE64.encode(png);
    let payload = b64.as_bytes();

    let mut offset = 0;
    loop {
        let end = (offset + CHUNK_SIZE).min(payload.len());
        // Payload chunks are sliced on base64 character boundaries, always valid UTF-8.
        let chunk = std::str::from_utf8(&payload[offset..end]).unwrap_or("");
        let more = if end < payload.len() { 1 } else { 0 };

        out.push_str("\x1b_G");
        if offset == 0 {
            out.push_str(&format!(
                "a=T,i={},z={},f=100,q=2,m={};{}",
                image_id, z, more, chunk
            ));
        } else {
            out.push_str(&format!("m={};{}", more, chunk));
        }
        out.push_str("\x1b\\");

        offset = end;
        if offset >= payload.len() {
            break;
        }
    }

    out
}

/// Delete `image_id` from the terminal's image store. Valid (and visually a
/// no-op) when nothing is currently displayed under the id, so callers may
/// clear unconditionally.
pub fn delete_image(image_id: u32) -> String {
    format!("\x1b_Ga=d,d=i,i={}\x1b\\", image_id)
}
