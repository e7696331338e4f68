use serde::{Deserialize, Serialize};
use std::fmt;

/// All possible token kinds in an arithmetic expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Unsigned integer or decimal literal
    Number,
    /// Addition operator (+)
    Add,
    /// Subtraction operator (-)
    Subtract,
    /// Multiplication operator (*)
    Multiply,
    /// Division operator (/)
    Divide,
    /// Power operator (^)
    Power,
    /// Factorial operator (!)
    Factorial,
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// End of input marker
    EndOfInput,
}

impl TokenKind {
    /// Get the kind for a single-character symbol
    pub fn from_symbol(c: char) -> Option<TokenKind> {
        match c {
            '+' => Some(TokenKind::Add),
            '-' => Some(TokenKind::Subtract),
            '*' => Some(TokenKind::Multiply),
            '/' => Some(TokenKind::Divide),
            '^' => Some(TokenKind::Power),
            '!' => Some(TokenKind::Factorial),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            _ => None,
        }
    }

    /// The character this kind is spelled with, if it is a symbol
    pub fn symbol(&self) -> Option<char> {
        match self {
            TokenKind::Add => Some('+'),
            TokenKind::Subtract => Some('-'),
            TokenKind::Multiply => Some('*'),
            TokenKind::Divide => Some('/'),
            TokenKind::Power => Some('^'),
            TokenKind::Factorial => Some('!'),
            TokenKind::LeftParen => Some('('),
            TokenKind::RightParen => Some(')'),
            TokenKind::Number | TokenKind::EndOfInput => None,
        }
    }

    /// Variant name, used in token rendering
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number => "Number",
            TokenKind::Add => "Add",
            TokenKind::Subtract => "Subtract",
            TokenKind::Multiply => "Multiply",
            TokenKind::Divide => "Divide",
            TokenKind::Power => "Power",
            TokenKind::Factorial => "Factorial",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric value of a number literal
///
/// Integers and floats compare by numeric value, so `Integer(2)` equals
/// `Float(2.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Literal without a decimal point
    Integer(i64),
    /// Literal containing a decimal point
    Float(f64),
}

impl Number {
    /// Value as a float
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    /// Check if the literal had no decimal point
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Integer(i), Number::Float(f)) | (Number::Float(f), Number::Integer(i)) => {
                int_eq_float(i, f)
            }
        }
    }
}

// Compares without rounding the integer through f64.
fn int_eq_float(i: i64, f: f64) -> bool {
    // 2^63, exactly representable
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) && f as i64 == i
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(n.into())
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(fl) => write!(f, "{:?}", fl),
        }
    }
}

/// Payload carried by a token
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Value of a number literal
    Number(Number),
    /// Literal character of an operator or parenthesis
    Symbol(char),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Symbol(c) => write!(f, "'{}'", c),
        }
    }
}

/// A single token from an arithmetic expression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Number value, symbol character, or nothing for end of input
    pub value: Option<TokenValue>,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, value: Option<TokenValue>) -> Self {
        Token { kind, value }
    }

    /// Creates a number token
    pub fn number(value: impl Into<Number>) -> Self {
        Token::new(TokenKind::Number, Some(TokenValue::Number(value.into())))
    }

    /// Creates an operator or parenthesis token, carrying its character
    pub fn symbol(kind: TokenKind, c: char) -> Self {
        Token::new(kind, Some(TokenValue::Symbol(c)))
    }

    /// Creates the end-of-input marker
    pub fn end_of_input() -> Self {
        Token::new(TokenKind::EndOfInput, None)
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// The number carried by a `Number` token
    pub fn as_number(&self) -> Option<Number> {
        match self.value {
            Some(TokenValue::Number(n)) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Token({}, {})", self.kind, value),
            None => write!(f, "Token({})", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_mapping() {
        for c in "+-*/^!()".chars() {
            let kind = TokenKind::from_symbol(c).unwrap();
            assert_eq!(kind.symbol(), Some(c));
        }
        assert_eq!(TokenKind::from_symbol('%'), None);
        assert_eq!(TokenKind::Number.symbol(), None);
        assert_eq!(TokenKind::EndOfInput.symbol(), None);
    }

    #[test]
    fn test_number_equality_is_numeric() {
        assert_eq!(Number::Integer(2), Number::Float(2.0));
        assert_ne!(Number::Integer(2), Number::Float(2.5));
        assert_eq!(Number::Float(-7.0), Number::Integer(-7));
        assert_eq!(Token::number(3), Token::number(3.0));
        assert_ne!(Token::number(3), Token::symbol(TokenKind::Add, '+'));
    }

    #[test]
    fn test_large_integer_float_equality_is_exact() {
        assert_ne!(
            Number::Integer(9_007_199_254_740_993),
            Number::Float(9_007_199_254_740_992.0)
        );
        assert_eq!(
            Number::Integer(9_007_199_254_740_992),
            Number::Float(9_007_199_254_740_992.0)
        );
        assert_ne!(Number::Integer(i64::MAX), Number::Float(9_223_372_036_854_775_808.0));
        assert_ne!(Number::Integer(0), Number::Float(f64::NAN));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::number(123).to_string(), "Token(Number, 123)");
        assert_eq!(Token::number(4.0).to_string(), "Token(Number, 4.0)");
        assert_eq!(
            Token::symbol(TokenKind::Power, '^').to_string(),
            "Token(Power, '^')"
        );
        assert_eq!(Token::end_of_input().to_string(), "Token(EndOfInput)");
    }

    #[test]
    fn test_serde() {
        let token = Token::number(4.2);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"Number","value":4.2}"#);

        let back: Token = serde_json::from_str(r#"{"kind":"Add","value":"+"}"#).unwrap();
        assert_eq!(back, Token::symbol(TokenKind::Add, '+'));

        let eof: Token = serde_json::from_str(r#"{"kind":"EndOfInput","value":null}"#).unwrap();
        assert!(eof.is_end_of_input());
    }
}
