#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Everything that happens after parsing reports failures as first-class
/// `Value::Error` values instead, so this is the only Rust-side error type
/// in the crate.
pub enum ParseError {
    /// Found a character that is not part of the language.
    UnexpectedCharacter {
        /// The offending source text.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line of the unmatched `(`.
        line: usize,
    },
    /// A closing brace `}` was expected but not found.
    ExpectedClosingBrace {
        /// The source line of the unmatched `{`.
        line: usize,
    },
    /// Expressions were nested deeper than the interpreter allows.
    NestingTooDeep {
        /// The source line where the limit was exceeded.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line } => {
                write!(f, "Error on line {line}: Unexpected character: {found}.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedClosingBrace { line } => write!(f,
                                                          "Error on line {line}: Expected closing brace '}}' but none found."),

            Self::NestingTooDeep { line } => {
                write!(f, "Error on line {line}: Expressions are nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
