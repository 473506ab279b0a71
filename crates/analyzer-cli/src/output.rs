use std::io::Write;

use analyzer_core::DisplayContent;
use analyzer_core::display::failure_message;
use analyzer_core::session::TextStats;
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Announce an upload on the status stream.
pub fn print_uploading(
    w: &mut dyn Write,
    filename: &str,
    endpoint: &str,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(
            w,
            "{} {} {}",
            "Uploading".cyan().bold(),
            filename,
            format!("to {endpoint}").dimmed()
        )
    } else {
        writeln!(w, "Uploading {} to {}", filename, endpoint)
    }
}

/// One-line outcome after the reply arrives.
pub fn print_status(
    w: &mut dyn Write,
    content: &DisplayContent,
    stats: TextStats,
    color: ColorMode,
) -> std::io::Result<()> {
    let counts = match (stats.word_count, stats.full_text_length) {
        (Some(words), Some(chars)) => format!(" ({words} words, {chars} chars)"),
        (Some(words), None) => format!(" ({words} words)"),
        _ => String::new(),
    };

    match content {
        DisplayContent::Text(_) => {
            if color.enabled() {
                writeln!(w, "{}{}", "File uploaded \u{2714}".green().bold(), counts.dimmed())
            } else {
                writeln!(w, "File uploaded{}", counts)
            }
        }
        DisplayContent::Placeholder => {
            if color.enabled() {
                writeln!(
                    w,
                    "{} {}",
                    "File uploaded \u{2714}".green().bold(),
                    "(no text found)".yellow()
                )
            } else {
                writeln!(w, "File uploaded (no text found)")
            }
        }
        DisplayContent::Failed(reason) => {
            let msg = failure_message(reason);
            if color.enabled() {
                writeln!(w, "{}", msg.red().bold())
            } else {
                writeln!(w, "{}", msg)
            }
        }
    }
}

/// Where the extracted text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// A terminal or pipe; a missing final newline is added.
    Stdout,
    /// An `--output` file; bytes are written exactly as received.
    File,
}

/// Write the result body. Text is written verbatim. On stdout a trailing
/// newline is added so shells don't glue the prompt onto it.
pub fn write_result(w: &mut dyn Write, content: &DisplayContent, sink: Sink) -> std::io::Result<()> {
    match content {
        DisplayContent::Text(text) => {
            w.write_all(text.as_bytes())?;
            if sink == Sink::Stdout && !text.ends_with('\n') {
                writeln!(w)?;
            }
        }
        DisplayContent::Placeholder if sink == Sink::File => {}
        other => writeln!(w, "{}", other.render_plain())?,
    }
    w.flush()
}

/// Report the outcome on `status` and, on success, write the body to the
/// writer returned by `open`. A failure is reported once and nothing is
/// opened. Returns whether the upload succeeded.
pub fn finish<F>(
    status: &mut dyn Write,
    content: &DisplayContent,
    stats: TextStats,
    color: ColorMode,
    sink: Sink,
    open: F,
) -> std::io::Result<bool>
where
    F: FnOnce() -> std::io::Result<Box<dyn Write>>,
{
    print_status(status, content, stats, color)?;
    if matches!(content, DisplayContent::Failed(_)) {
        return Ok(false);
    }
    let mut writer = open()?;
    write_result(&mut *writer, content, sink)?;
    Ok(true)
}
