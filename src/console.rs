//! Line-oriented input and styled output ports.
//!
//! The game never touches stdin/stdout directly. It reads through a
//! [`LineSource`] and writes through a [`TextSink`], both bundled in a
//! [`Console`]. Input is canonicalized here (trimmed, lowercased) so the rest of
//! the crate only ever sees normalized tokens.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::debug;

use crate::game::errors::GameError;
use crate::game::narration::{Narration, Segment, Tone};
use crate::logutil::escape_log;

/// Source of raw input lines. `Ok(None)` means the stream is exhausted.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Append-only sink for styled text.
pub trait TextSink {
    fn append(&mut self, text: &str, tone: Option<Tone>) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn render(&mut self, narration: &Narration) -> io::Result<()> {
        for seg in narration.segments() {
            self.append(&seg.text, seg.tone)?;
        }
        Ok(())
    }
}

/// Reads lines from any buffered reader, typically a locked stdin.
pub struct StdinLines<R: BufRead> {
    reader: R,
}

impl<R: BufRead> StdinLines<R> {
    pub fn new(reader: R) -> Self {
        StdinLines { reader }
    }
}

impl<R: BufRead> LineSource for StdinLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Pre-recorded input, one entry per prompt.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Writes ANSI-colored text to a terminal (or plain text when color is off).
pub struct AnsiTerminal<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> AnsiTerminal<W> {
    pub fn new(out: W, color: bool) -> Self {
        AnsiTerminal { out, color }
    }
}

const RESET: &str = "\u{1b}[0m";

fn ansi_code(tone: Tone) -> &'static str {
    match tone {
        Tone::White => "\u{1b}[37m",
        Tone::Blue => "\u{1b}[34m",
        Tone::Red => "\u{1b}[31m",
        Tone::BrightYellow => "\u{1b}[93m",
        Tone::Green => "\u{1b}[32m",
        Tone::Yellow => "\u{1b}[33m",
        Tone::Cyan => "\u{1b}[36m",
        Tone::Purple => "\u{1b}[35m",
        Tone::Gray => "\u{1b}[90m",
    }
}

impl<W: Write> TextSink for AnsiTerminal<W> {
    fn append(&mut self, text: &str, tone: Option<Tone>) -> io::Result<()> {
        match tone {
            Some(t) if self.color => write!(self.out, "{}{}{}", ansi_code(t), text, RESET),
            _ => self.out.write_all(text.as_bytes()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Keeps every segment it receives; used by tests and transcripts.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    segments: Vec<Segment>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

impl TextSink for Recorder {
    fn append(&mut self, text: &str, tone: Option<Tone>) -> io::Result<()> {
        self.segments.push(Segment {
            text: text.to_string(),
            tone,
        });
        Ok(())
    }
}

/// An input port and an output port driven together.
pub struct Console<I: LineSource, O: TextSink> {
    input: I,
    output: O,
}

impl<I: LineSource, O: TextSink> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Console { input, output }
    }

    /// Render a narration immediately.
    pub fn show(&mut self, narration: &Narration) -> Result<(), GameError> {
        self.output.render(narration)?;
        self.output.flush()?;
        Ok(())
    }

    /// Render `question`, then read one line, trimmed and lowercased.
    pub fn ask(&mut self, question: &Narration) -> Result<String, GameError> {
        self.show(question)?;
        let raw = self.input.next_line()?.ok_or(GameError::InputClosed)?;
        debug!("input: {}", escape_log(&raw));
        Ok(normalize(&raw))
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

/// Canonical form of a typed line.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
