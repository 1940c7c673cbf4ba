//! Terminal front end
//!
//! Implements the UI handles on top of stdout/stderr and command-line
//! `Field=value` arguments.

use std::collections::HashMap;
use std::io::{self, IsTerminal, Write};

use crate::form::is_field_name;
use crate::render::{ResultPanel, Theme};
use crate::view::{FieldSource, ResultSurface, TriggerControl};

/// Cells in the confidence bar
const BAR_WIDTH: usize = 20;

// ============================================================================
// FORM
// ============================================================================

/// Form values given as `Field=value` arguments
#[derive(Debug, Default, Clone)]
pub struct ArgsForm {
    values: HashMap<String, String>,
}

impl ArgsForm {
    /// Parse `Field=value` pairs. Unknown names and malformed pairs are
    /// skipped with a warning; a repeated field keeps the last value.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = HashMap::new();

        for arg in args {
            let arg = arg.as_ref();
            match arg.split_once('=') {
                Some((name, value)) if is_field_name(name) => {
                    values.insert(name.to_string(), value.to_string());
                }
                Some((name, _)) => tracing::warn!("Ignoring unknown field '{}'", name),
                None => tracing::warn!("Ignoring argument '{}' (expected Field=value)", arg),
            }
        }

        Self { values }
    }
}

impl FieldSource for ArgsForm {
    fn value(&self, name: &str) -> String {
        self.values.value(name)
    }
}

// ============================================================================
// TRIGGER
// ============================================================================

/// Stand-in for the analyze button: announces the loading state on stderr
pub struct TerminalTrigger<E: Write> {
    label: String,
    enabled: bool,
    err: E,
}

impl TerminalTrigger<io::Stderr> {
    pub fn stderr(label: &str) -> Self {
        Self::new(label, io::stderr())
    }
}

impl<E: Write> TerminalTrigger<E> {
    pub fn new(label: &str, err: E) -> Self {
        Self { label: label.to_string(), enabled: true, err }
    }
}

impl<E: Write> TriggerControl for TerminalTrigger<E> {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
        if !self.enabled {
            if let Err(e) = writeln!(self.err, "{}", label) {
                tracing::warn!("Failed to write status line: {}", e);
            }
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

// ============================================================================
// SURFACE
// ============================================================================

/// Prints panels to `out` and alerts to `err`
pub struct TerminalSurface<O: Write, E: Write> {
    out: O,
    err: E,
    visible: bool,
    ansi: bool,
}

impl TerminalSurface<io::Stdout, io::Stderr> {
    /// Colored output only when stdout is a terminal
    pub fn stdio() -> Self {
        let ansi = io::stdout().is_terminal();
        Self::new(io::stdout(), io::stderr()).with_ansi(ansi)
    }
}

impl<O: Write, E: Write> TerminalSurface<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err, visible: false, ansi: false }
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_panel(&mut self, panel: &ResultPanel) -> io::Result<()> {
        let (open, close) = if self.ansi {
            (ansi_code(panel.theme), "\x1b[0m")
        } else {
            ("", "")
        };

        writeln!(self.out, "{}[{}] {}{}", open, panel.theme.icon(), panel.decision_text, close)?;
        writeln!(
            self.out,
            "    {}[{}]{} {}",
            open,
            bar(panel.fill_percent),
            close,
            panel.confidence_label
        )?;
        writeln!(self.out, "    {}", panel.reason_line)?;
        if let Some(reason) = &panel.service_reason {
            writeln!(self.out, "    {}", reason)?;
        }
        for line in &panel.breakdown {
            writeln!(self.out, "    - {}", line.text())?;
        }
        self.out.flush()
    }
}

impl<O: Write, E: Write> ResultSurface for TerminalSurface<O, E> {
    fn hide(&mut self) {
        self.visible = false;
    }

    fn show(&mut self, panel: &ResultPanel) {
        self.visible = true;
        if let Err(e) = self.write_panel(panel) {
            tracing::warn!("Failed to print result: {}", e);
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.err, "! {}", message) {
            tracing::warn!("Failed to print alert: {}", e);
        }
    }
}

/// Escape sequence for the theme color
fn ansi_code(theme: Theme) -> &'static str {
    match theme.color() {
        "danger" => "\x1b[1;31m",
        "success" => "\x1b[1;32m",
        _ => "",
    }
}

/// Text fill proportional to `fill_percent`
fn bar(fill_percent: f64) -> String {
    let filled = ((fill_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
