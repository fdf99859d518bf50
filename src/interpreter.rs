/// The builtin module provides the fixed function library.
///
/// Builtins are the only functions in the language: the list operations
/// (`list`, `head`, `tail`, `join`, `eval`) and the arithmetic operators.
/// They are registered into an environment at startup and dispatched by
/// the evaluator through `Value::Function`.
///
/// # Responsibilities
/// - Implements every builtin, consuming its evaluated argument list.
/// - Reports arity, type, and arithmetic failures as error values.
/// - Registers the whole library into an environment in one call.
pub mod builtin;
/// The env module stores variable bindings for a session.
///
/// The environment is one flat namespace from symbol names to values,
/// created at startup, populated with the builtins, and passed explicitly
/// to every evaluation call.
///
/// # Responsibilities
/// - Owns deep copies of every bound value.
/// - Resolves symbol lookups, returning fresh copies to callers.
/// - Replaces (never shadows) bindings on rebinding.
pub mod env;
/// The evaluator module reduces value trees to final results.
///
/// The evaluator recursively walks a value, resolving symbols against the
/// environment and applying builtin functions to evaluated S-expressions.
/// It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates S-expression children eagerly, left to right.
/// - Short-circuits on the first error value in position order.
/// - Applies the head function of an S-expression to its arguments.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// number literals, symbols, and the four bracket characters. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Keeps number literals as raw text for the reader to interpret.
/// - Rejects characters that are not part of the language.
pub mod lexer;
/// The parser module builds the tagged parse tree from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs a generic tagged tree (`Node`) that represents the grouping
/// structure of the input, brackets and anchors included.
///
/// # Responsibilities
/// - Matches brackets and reports unbalanced input with location info.
/// - Guards against pathologically deep nesting.
/// - Produces the tree shape the reader expects to filter.
pub mod parser;
/// The reader module converts parse trees into value trees.
///
/// The reader walks a tagged parse tree and produces the value AST that
/// the evaluator consumes, discarding purely syntactic nodes along the
/// way.
///
/// # Responsibilities
/// - Maps leaf rules to numbers and symbols, grouping rules to containers.
/// - Turns out-of-range number literals into `invalid number` error values.
/// - Preserves child order while filtering brackets and anchors.
pub mod reader;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the tagged `Value` union covering every
/// intermediate and final result: numbers, symbols, errors, builtin
/// functions, and the two list forms (S-expressions and Q-expressions).
///
/// # Responsibilities
/// - Defines the `Value` enum and constructor helpers for each variant.
/// - Implements deep copying through ownership (`Clone`) and printing
///   (`Display`).
/// - Defines the `Builtin` function signature shared with the library.
pub mod value;
