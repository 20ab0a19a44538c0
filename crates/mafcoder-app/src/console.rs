//! Terminal rendering for the chat loop.
//!
//! Model text is written verbatim; only our own chrome (prompt, function
//! call log, errors) is colored.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use colored::Colorize;
use tracing::debug;

pub const SAMPLES_HINT: &str = "Enter for samples";

/// Shared, cloneable handle on the output stream.
#[derive(Clone)]
pub struct Console {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Console {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            debug!(error = %e, "Console write failed");
        }
    }

    pub fn banner(&self) {
        let title = format!("mafcoder v{}", env!("CARGO_PKG_VERSION"));
        let rule = "─".repeat(50);
        self.emit(&format!(
            "{}\n  {}\n  {} - {}\n{}\n\n",
            rule.blue(),
            title.blue().bold(),
            "a CLI coding agent you can actually understand".blue(),
            "built on Rust".green(),
            rule.blue(),
        ));
    }

    /// A plain line of status text.
    pub fn line(&self, text: &str) {
        self.emit(&format!("{text}\n"));
    }

    pub fn prompt(&self) {
        self.emit(&format!(
            "\n\n{}{} ",
            "> ".red(),
            format!("({SAMPLES_HINT})").dimmed()
        ));
    }

    /// A fragment of model output, exactly as received.
    pub fn stream(&self, chunk: &str) {
        self.emit(chunk);
    }

    pub fn function_log(&self, line: &str) {
        self.emit(&format!("\n{}\n", line.yellow()));
    }

    pub fn sample_menu(&self, samples: &[String]) {
        let mut menu = format!("{}\n", "Select a sample prompt:".bold());
        for (i, sample) in samples.iter().enumerate() {
            menu.push_str(&format!("  {}. {sample}\n", i + 1));
        }
        menu.push_str(&format!("{} ", "Choice:".bold()));
        self.emit(&menu);
    }

    pub fn sample_echo(&self, sample: &str) {
        self.emit(&format!("{}\n\n", sample.yellow()));
    }

    pub fn error(&self, message: &str) {
        self.emit(&format!("\n{}\n", message.red()));
    }
}

/// Map a 1-based menu answer onto an index into `count` samples.
pub fn parse_menu_choice(input: &str, count: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

/// In-memory console for tests.
#[cfg(test)]
pub(crate) fn capture() -> (Console, Arc<Mutex<Vec<u8>>>) {
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buffer = Arc::new(Mutex::new(Vec::new()));
    (Console::new(Shared(Arc::clone(&buffer))), buffer)
}

#[cfg(test)]
pub(crate) fn captured(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8_lossy(&buffer.lock().unwrap()).into_owned()
}
