use crate::{ast::Node, error::ParseError, interpreter::lexer::Token};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum expression nesting depth accepted by the parser.
///
/// The grammar allows arbitrarily deep nesting, and the reader, the
/// evaluator and the destructors all recurse over the structure the parser
/// builds, so the bound is enforced once, here.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses a whole program into the root node of a tagged parse tree.
///
/// The root carries the `>` tag and behaves as an S-expression when read:
/// a line like `+ 1 2` evaluates without outer parentheses. Anchor children
/// are emitted at both edges, and grouping nodes keep their bracket
/// children, matching the tree shape the reader expects to filter.
///
/// Grammar:
/// ```text
///     program : expr*
///     expr    : number | symbol | sexpr | qexpr
///     sexpr   : '(' expr* ')'
///     qexpr   : '{' expr* '}'
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The root parse-tree node.
///
/// # Errors
/// - `UnexpectedToken` for a stray closing bracket.
/// - `ExpectedClosingParen` / `ExpectedClosingBrace` for an unmatched
///   opening bracket.
/// - `NestingTooDeep` when expressions nest past `MAX_NESTING_DEPTH`.
pub fn parse_program<'a, I>(tokens: &mut I) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut root = Node::new(">");
    root.children.push(Node::anchor());

    while let Some((token, line)) = tokens.next() {
        let expr = parse_expr(token, *line, tokens, 1)?;
        root.children.push(expr);
    }

    root.children.push(Node::anchor());
    Ok(root)
}

/// Parses a single expression starting from an already-consumed token.
///
/// # Errors
/// - `UnexpectedToken` if `token` cannot begin an expression.
/// - Propagates any errors from nested expressions.
fn parse_expr<'a, I>(token: &Token, line: usize, tokens: &mut I, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { line });
    }

    match token {
        Token::Number(text) => Ok(Node::leaf("number", text)),
        Token::Symbol(text) => Ok(Node::leaf("symbol", text)),
        Token::LParen => parse_sexpr(tokens, line, depth),
        Token::LBrace => parse_qexpr(tokens, line, depth),
        Token::RParen | Token::RBrace => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                                           line }),
        Token::NewLine | Token::Ignored => {
            // The lexer skips these; they never reach the parser.
            Err(ParseError::UnexpectedToken { token: token.to_string(),
                                              line })
        },
    }
}

/// Parses the remainder of an S-expression after its `(`.
fn parse_sexpr<'a, I>(tokens: &mut I, open_line: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut node = Node::new("sexpr");
    node.children.push(Node::bracket("("));

    loop {
        match tokens.next() {
            Some((Token::RParen, _)) => {
                node.children.push(Node::bracket(")"));
                return Ok(node);
            },
            Some((token, line)) => {
                let expr = parse_expr(token, *line, tokens, depth + 1)?;
                node.children.push(expr);
            },
            None => return Err(ParseError::ExpectedClosingParen { line: open_line }),
        }
    }
}

/// Parses the remainder of a Q-expression after its `{`.
fn parse_qexpr<'a, I>(tokens: &mut I, open_line: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut node = Node::new("qexpr");
    node.children.push(Node::bracket("{"));

    loop {
        match tokens.next() {
            Some((Token::RBrace, _)) => {
                node.children.push(Node::bracket("}"));
                return Ok(node);
            },
            Some((token, line)) => {
                let expr = parse_expr(token, *line, tokens, depth + 1)?;
                node.children.push(expr);
            },
            None => return Err(ParseError::ExpectedClosingBrace { line: open_line }),
        }
    }
}
