#![allow(unused)]

use console_logger::Capture;
use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";

/// A writer that rejects the first write containing `needle`,
/// then behaves like the wrapped capture.
#[derive(Debug, Clone)]
pub struct FailOnce {
    needle: &'static str,
    failed: bool,
    out: Capture,
}

impl FailOnce {
    pub fn new(needle: &'static str, out: Capture) -> Self {
        Self {
            needle,
            failed: false,
            out,
        }
    }
}

impl io::Write for FailOnce {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.failed && String::from_utf8_lossy(buf).contains(self.needle) {
            self.failed = true;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Splits captured output into lines, each with its trailing reset.
///
/// A line is written as `prefix color message \n reset`, so the
/// reset of one line is found at the start of the next chunk.
pub fn lines(contents: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = contents;
    while let Some(end) = rest.find('\n') {
        let mut line = rest[..end].to_string();
        rest = &rest[end + 1..];
        if let Some(tail) = rest.strip_prefix(RESET) {
            line.push_str(RESET);
            rest = tail;
        }
        lines.push(line);
    }
    lines
}

/// Asserts `line` matches `HH:MM:SS <location>: <color><msg><reset>`.
pub fn assert_line(line: &str, location: &str, color: &str, msg: &str) {
    let (time, rest) = line.split_at(8);
    assert!(is_clock(time), "bad timestamp in {line:?}");
    assert_eq!(rest, format!(" {location}: {color}{msg}{RESET}"), "in {line:?}");
}

fn is_clock(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 8
        && b[2] == b':'
        && b[5] == b':'
        && [0, 1, 3, 4, 6, 7].iter().all(|&i| b[i].is_ascii_digit())
}
