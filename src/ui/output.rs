//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Results meant for the user go to stdout; failures go to stderr verbatim.
//! Progress detail belongs in `tracing` and only shows with `--verbose`.
//!
//! All user-facing text goes through a [`Console`], which is carried on the
//! execution context. [`Console::capture`] swaps both streams for in-memory
//! buffers.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

fn sink(writer: impl Write + Send + 'static) -> Sink {
    Arc::new(Mutex::new(Box::new(writer)))
}

/// The stdout/stderr pair an invocation writes to.
///
/// Clones share the same streams.
#[derive(Clone)]
pub struct Console {
    out: Sink,
    err: Sink,
}

impl Console {
    /// A console over the process streams.
    pub fn stdio() -> Self {
        Self {
            out: sink(io::stdout()),
            err: sink(io::stderr()),
        }
    }

    /// A console writing into buffers, and the handle to read them back.
    pub fn capture() -> (Self, Captured) {
        let captured = Captured::default();
        let console = Self {
            out: sink(captured.out.clone()),
            err: sink(captured.err.clone()),
        };
        (console, captured)
    }

    /// Print a message to stdout.
    pub fn print(&self, message: impl Display) {
        write_line(&self.out, message);
    }

    /// Print a success message for a finished stage.
    pub fn success(&self, message: impl Display) {
        write_line(&self.out, format!("✓ {}", message));
    }

    /// Print a failure message to stderr, unchanged.
    pub fn error(&self, message: impl Display) {
        write_line(&self.err, message);
    }

    /// Write pre-rendered text to stdout without adding a newline.
    pub fn write_out(&self, text: impl Display) {
        write_raw(&self.out, text);
    }

    /// Write pre-rendered text to stderr without adding a newline.
    pub fn write_err(&self, text: impl Display) {
        write_raw(&self.err, text);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdio()
    }
}

// A closed pipe must not turn into a failure of the operation.
fn write_line(sink: &Sink, message: impl Display) {
    if let Ok(mut w) = sink.lock() {
        let _ = writeln!(w, "{}", message);
        let _ = w.flush();
    }
}

fn write_raw(sink: &Sink, text: impl Display) {
    if let Ok(mut w) = sink.lock() {
        let _ = write!(w, "{}", text);
        let _ = w.flush();
    }
}

/// In-memory buffer shared between a [`Console`] and its reader.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        match self.0.lock() {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => String::new(),
        }
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output buffer poisoned"))?;
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Read side of [`Console::capture`].
#[derive(Debug, Clone, Default)]
pub struct Captured {
    out: SharedBuffer,
    err: SharedBuffer,
}

impl Captured {
    pub fn stdout(&self) -> String {
        self.out.contents()
    }

    pub fn stderr(&self) -> String {
        self.err.contents()
    }
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_list_prefixes_each_item() {
        let items = ["build", "dev"];
        assert_eq!(format_list(&items, "  "), "  build\n  dev");
    }

    #[test]
    fn format_list_empty() {
        let items: [&str; 0] = [];
        assert_eq!(format_list(&items, "- "), "");
    }

    #[test]
    fn success_is_marked_and_print_is_not() {
        let (console, captured) = Console::capture();
        console.print("Watching resume.yml");
        console.success("Generated resume.tex");

        assert_eq!(
            captured.stdout(),
            "Watching resume.yml\n✓ Generated resume.tex\n"
        );
        assert!(captured.stderr().is_empty());
    }

    #[test]
    fn errors_go_to_stderr_verbatim() {
        let (console, captured) = Console::capture();
        console.error("resume.yml: No such file or directory");

        assert_eq!(captured.stderr(), "resume.yml: No such file or directory\n");
        assert!(captured.stdout().is_empty());
    }

    #[test]
    fn clones_share_streams() {
        let (console, captured) = Console::capture();
        let other = console.clone();
        console.write_out("a");
        other.write_out("b");

        assert_eq!(captured.stdout(), "ab");
    }
}
