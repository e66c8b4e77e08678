use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Parses a page bound, falling back to `0` when `token` is not an integer.
pub fn parse_bound(token: &str) -> i64 {
    token.trim().parse().unwrap_or_else(|_| {
        warn!(token, "not an integer, using 0");
        0
    })
}

/// Reads whitespace separated tokens from a line based reader, so several
/// answers may be typed on one line.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps `reader` with no tokens buffered yet.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Writes `prompt` to `out` and reads one page bound.
    ///
    /// Missing input counts as `0`, like an unparsable token.
    pub fn prompt_bound<W: Write>(&mut self, prompt: &str, out: &mut W) -> io::Result<i64> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        match self.next_token()? {
            Some(token) => Ok(parse_bound(&token)),
            None => {
                warn!("no input, using 0");
                Ok(0)
            }
        }
    }
}
