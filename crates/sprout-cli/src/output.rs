//! Final result lines on stdout.
//!
//! Action reports and diagnostics go through tracing on stderr; this is only
//! for what a run *produced*.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Note,
}

pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// `--no-color` on the command line or `output.no_color` in config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// `✓ <msg>`, unless quiet.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Success, msg)
    }

    /// `ℹ <msg>`, unless quiet.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Note, msg)
    }

    /// One bare item per line. Printed even when quiet, since it is the
    /// whole point of the invocation.
    pub fn list<'a>(&self, items: impl IntoIterator<Item = &'a str>) -> io::Result<()> {
        for item in items {
            self.term.write_line(item)?;
        }
        Ok(())
    }

    fn emit(&self, tone: Tone, msg: &str) -> io::Result<()> {
        match self.render(tone, msg) {
            Some(line) => self.term.write_line(&line),
            None => Ok(()),
        }
    }

    fn render(&self, tone: Tone, msg: &str) -> Option<String> {
        if self.quiet {
            return None;
        }
        let glyph = match tone {
            Tone::Success => "\u{2713}",
            Tone::Note => "\u{2139}",
        };
        Some(match (self.no_color, tone) {
            (true, _) => format!("{glyph} {msg}"),
            (false, Tone::Success) => format!("{} {}", glyph.green().bold(), msg.green()),
            (false, Tone::Note) => format!("{} {}", glyph.blue().bold(), msg.blue()),
        })
    }
}
