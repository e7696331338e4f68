//! # Calclex - Arithmetic Expression Lexer
//!
//! Turns calculator input such as `3 + 4.2 * (1 - 2) ^ 2!` into a sequence of
//! typed tokens for a parser or evaluator to consume.
//!
//! ## Quick Start
//!
//! ```rust
//! use calclex::{tokenize_all, Token, TokenKind};
//!
//! # fn main() -> calclex::Result<()> {
//! let tokens = tokenize_all("3 + 4.2")?;
//!
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::number(3),
//!         Token::symbol(TokenKind::Add, '+'),
//!         Token::number(4.2),
//!     ]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Token by token
//!
//! ```rust
//! use calclex::{Scanner, TokenKind};
//!
//! # fn main() -> calclex::Result<()> {
//! let mut scanner = Scanner::new("()");
//! assert_eq!(scanner.next_token()?.kind, TokenKind::LeftParen);
//! assert_eq!(scanner.next_token()?.kind, TokenKind::RightParen);
//! assert_eq!(scanner.next_token()?.kind, TokenKind::EndOfInput);
//! # Ok(())
//! # }
//! ```
//!
//! ## Recognized Input
//!
//! - **Numbers**: unsigned runs of digits and `.`, e.g. `42`, `3.14`, `.5`
//! - **Operators**: `+ - * / ^ !`
//! - **Parentheses**: `( )`
//! - Whitespace separates tokens and is otherwise ignored
//!
//! ## Error Handling
//!
//! A numeral the number parser rejects (`1.2.3`) fails with
//! [`Error::InvalidNumber`]. Any other character ends the token stream by
//! default; [`ScannerConfig`] can skip such characters or reject them:
//!
//! ```rust
//! use calclex::{tokenize_with, Error, ScannerConfig, UnknownCharPolicy};
//!
//! let config = ScannerConfig::default().with_unknown_char(UnknownCharPolicy::Reject);
//! let err = tokenize_with("2 % 3", config).unwrap_err();
//! assert_eq!(err, Error::UnexpectedCharacter { ch: '%', position: 2 });
//! ```

/// Version of the Calclex crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Error, ErrorSeverity, Result};
pub use lexer::{
    tokenize_all, tokenize_with, Number, Scanner, ScannerConfig, Token, TokenKind, TokenValue,
    UnknownCharPolicy,
};
