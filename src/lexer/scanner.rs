use super::config::{ScannerConfig, UnknownCharPolicy};
use super::token::{Number, Token, TokenKind};
use crate::error::{Error, Result};
use std::iter::FusedIterator;

/// Single-pass scanner for arithmetic expressions
///
/// Produces one token per [`next_token`](Scanner::next_token) call and never
/// backtracks.
#[derive(Debug, Clone)]
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Current position in source
    current: usize,
    /// Scanner settings
    config: ScannerConfig,
    /// Set once iteration has seen end of input or an error
    finished: bool,
}

impl Scanner {
    /// Creates a new scanner with the default configuration
    pub fn new(source: &str) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    /// Creates a new scanner with the given configuration
    pub fn with_config(source: &str, config: ScannerConfig) -> Self {
        Scanner {
            source: source.chars().collect(),
            current: 0,
            config,
            finished: false,
        }
    }

    /// Scans the next token
    ///
    /// Returns [`TokenKind::EndOfInput`] once the source is exhausted. Under
    /// the default [`UnknownCharPolicy::EndOfInput`] an unrecognized character
    /// is consumed and also reported as end of input.
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            self.skip_whitespace();

            let c = match self.current_char() {
                Some(c) => c,
                None => return Ok(Token::end_of_input()),
            };

            if c.is_ascii_digit() || c == '.' {
                return self.scan_number();
            }

            let start = self.current;
            self.advance();

            if let Some(kind) = TokenKind::from_symbol(c) {
                let token = Token::symbol(kind, c);
                tracing::trace!(%token, position = start, "scanned token");
                return Ok(token);
            }

            tracing::debug!(
                character = %c,
                position = start,
                policy = ?self.config.unknown_char,
                "unrecognized character"
            );
            match self.config.unknown_char {
                UnknownCharPolicy::EndOfInput => return Ok(Token::end_of_input()),
                UnknownCharPolicy::Skip => continue,
                UnknownCharPolicy::Reject => {
                    return Err(Error::UnexpectedCharacter {
                        ch: c,
                        position: start,
                    })
                }
            }
        }
    }

    /// Scans tokens until end of input and returns them, end marker excluded
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            if token.is_end_of_input() {
                break;
            }
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Current cursor position (character offset)
    pub fn position(&self) -> usize {
        self.current
    }

    /// Character under the cursor, `None` past the end
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Source length in characters
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(c) if is_space(c)) {
            self.advance();
        }
    }

    // Accepts any run of digits and dots; conversion decides validity.
    fn scan_number(&mut self) -> Result<Token> {
        let start = self.current;
        while matches!(self.current_char(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }

        let text: String = self.source[start..self.current].iter().collect();
        let invalid = || Error::InvalidNumber {
            text: text.clone(),
            position: start,
        };

        let value = if text.contains('.') {
            Number::Float(text.parse().map_err(|_| invalid())?)
        } else {
            match text.parse::<i64>() {
                Ok(n) => Number::Integer(n),
                // Only overflow can fail here; widen to a float.
                Err(_) => {
                    tracing::debug!(%text, position = start, "integer out of i64 range");
                    Number::Float(text.parse().map_err(|_| invalid())?)
                }
            }
        };

        let token = Token::number(value);
        tracing::trace!(%token, position = start, "scanned token");
        Ok(token)
    }
}

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F
fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Yields tokens up to (not including) end of input; stops after an error
impl Iterator for Scanner {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_end_of_input() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Scanner {}
