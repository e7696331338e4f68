//! Lexical analysis for arithmetic expressions
//!
//! Converts source text into a stream of number, operator and parenthesis tokens.

mod config;
mod scanner;
mod token;

pub use config::{ScannerConfig, UnknownCharPolicy};
pub use scanner::Scanner;
pub use token::{Number, Token, TokenKind, TokenValue};

use crate::error::Result;

/// Tokenizes `source` with the default configuration
///
/// Stops at the first end-of-input token, which is not included. With the
/// default configuration an unrecognized character also ends the sequence.
///
/// ```
/// use calclex::{tokenize_all, Token, TokenKind};
///
/// let tokens = tokenize_all("2 ^ 10").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::number(2),
///         Token::symbol(TokenKind::Power, '^'),
///         Token::number(10),
///     ]
/// );
/// ```
pub fn tokenize_all(source: &str) -> Result<Vec<Token>> {
    tokenize_with(source, ScannerConfig::default())
}

/// Tokenizes `source` with the given configuration
pub fn tokenize_with(source: &str, config: ScannerConfig) -> Result<Vec<Token>> {
    let mut scanner = Scanner::with_config(source, config);
    let tokens = match scanner.scan_tokens() {
        Ok(tokens) => tokens,
        Err(err) => {
            tracing::debug!(position = ?err.position(), error = %err, "tokenize failed");
            return Err(err);
        }
    };
    tracing::trace!(
        count = tokens.len(),
        consumed = scanner.position(),
        len = scanner.source_len(),
        "tokenized input"
    );
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_at_unknown_char() {
        let tokens = tokenize_all("1 + 2 $ 3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::number(1),
                Token::symbol(TokenKind::Add, '+'),
                Token::number(2),
            ]
        );
    }

    #[test]
    fn test_leading_unknown_char_gives_empty() {
        assert!(tokenize_all("x + 1").unwrap().is_empty());
    }

    #[test]
    fn test_skip_policy_keeps_going() {
        let config = ScannerConfig::default().with_unknown_char(UnknownCharPolicy::Skip);
        let tokens = tokenize_with("x + 1", config).unwrap();
        assert_eq!(
            tokens,
            vec![Token::symbol(TokenKind::Add, '+'), Token::number(1)]
        );
    }
}
