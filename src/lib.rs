//! # qlisp
//!
//! qlisp is a small interpreter for a prefix, Lisp-like expression
//! language written in Rust. It evaluates numbers, symbols, and function
//! applications, and manipulates unevaluated list literals (Q-expressions)
//! with a fixed builtin library.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{
        env::Env,
        evaluator,
        lexer::{LexerExtras, Token},
        parser::parse_program,
        reader,
        value::Value,
    },
};

use logos::Logos;

/// Defines the structure of parsed code.
///
/// This module declares the `Node` type: a generic tagged tree carrying a
/// rule tag, matched contents, and an ordered list of children. The tree
/// is built by the parser and converted into runtime values by the reader.
///
/// # Responsibilities
/// - Defines the parse-tree node and helpers for each node kind.
/// - Keeps syntactic children (brackets, anchors) in the tree so the
///   reader decides what is meaningful.
pub mod ast;
/// Provides the error type for lexing and parsing.
///
/// This module defines all errors that can be raised before evaluation
/// begins. Runtime failures are not represented here: once a value tree
/// exists, every failure is an ordinary `Value::Error` that propagates
/// through evaluation.
///
/// # Responsibilities
/// - Defines the `ParseError` enum for all lexer and parser failure modes.
/// - Attaches line numbers for context.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, reading, evaluation, the
/// value model, the environment, and the builtin library to provide a
/// complete runtime for the language.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, reader, evaluator.
/// - Provides the value and environment types that carry session state.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates one piece of source text against an environment.
///
/// The source is lexed and parsed into a tagged tree, read into a value,
/// and evaluated to completion. The whole input behaves as one
/// S-expression, so `+ 1 2` works without outer parentheses and an empty
/// input evaluates to `()`.
///
/// Runtime failures are returned as ordinary error values inside `Ok`;
/// only malformed input reaches the `Err` branch.
///
/// # Errors
/// Returns a [`ParseError`] if the source cannot be tokenized or parsed.
///
/// # Examples
/// ```
/// use qlisp::{eval_source, interpreter::{builtin, env::Env}};
///
/// let mut env = Env::new();
/// builtin::add_builtins(&mut env);
///
/// let result = eval_source(&mut env, "(+ 1 (* 2 3))").unwrap();
/// assert_eq!(result.to_string(), "7");
///
/// // Runtime errors are values, not Err:
/// let result = eval_source(&mut env, "(/ 10 0)").unwrap();
/// assert_eq!(result.to_string(), "Error: Division By Zero!");
/// ```
pub fn eval_source(env: &mut Env, source: &str) -> Result<Value, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedCharacter { found: slice.to_string(),
                                                         line:  lexer.extras.line, });
        }
    }

    let mut iter = tokens.iter();
    let tree = parse_program(&mut iter)?;

    Ok(evaluator::eval(env, reader::read(tree)))
}
