use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Whitespace-separated token reader over any [`BufRead`], so values can be
/// typed on one line or spread across several, like a C++ `cin >>` stream.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Tokens<R> {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Parses the next token as `T`. `what` names the value being read and
    /// shows up in the error message on garbage or premature end of input.
    pub fn next<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("failed to read from standard input")?;
            if read == 0 {
                bail!("unexpected end of input while reading {what}");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        let token = self
            .pending
            .pop_front()
            .expect("pending token queue was just refilled");
        token
            .parse()
            .with_context(|| format!("invalid input for {what}: {token:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_tokens_across_lines() {
        let mut tokens = Tokens::new(Cursor::new("4 5\n0 1\n  2\t3\n"));
        let values: Vec<usize> = (0..6).map(|_| tokens.next("a value").unwrap()).collect();
        assert_eq!(values, vec![4, 5, 0, 1, 2, 3]);
    }

    #[test]
    fn garbage_token_is_a_descriptive_error() {
        let mut tokens = Tokens::new(Cursor::new("abc"));
        let err = tokens.next::<usize>("the array size").unwrap_err();
        assert!(err.to_string().contains("invalid input for the array size"));
    }

    #[test]
    fn negative_value_does_not_parse_as_unsigned() {
        let mut tokens = Tokens::new(Cursor::new("-3"));
        assert!(tokens.next::<usize>("the array size").is_err());
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut tokens = Tokens::new(Cursor::new("1"));
        assert_eq!(tokens.next::<usize>("a value").unwrap(), 1);
        let err = tokens.next::<usize>("a value").unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }
}
