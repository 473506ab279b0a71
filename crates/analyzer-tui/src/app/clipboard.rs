use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// OSC 52 "set clipboard" sequence carrying `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

/// Put `text` on the terminal's clipboard. Goes straight to stdout so the
/// sequence is not mangled by the frame buffer.
pub fn copy_to_clipboard(text: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}
