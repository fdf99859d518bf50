use crate::interpreter::env::Env;

/// The signature shared by every builtin function.
///
/// A builtin receives the evaluation environment and the already-evaluated
/// argument list of its S-expression, takes ownership of the arguments, and
/// returns the result value (which may be an error value).
pub type Builtin = fn(&mut Env, Vec<Value>) -> Value;

/// Represents a runtime value in the interpreter.
///
/// Every intermediate and final result of evaluation is a `Value`. The two
/// container variants own their children outright, so `Clone` is a deep,
/// fully independent copy and dropping a container drops every child.
///
/// # Example
/// ```
/// use qlisp::interpreter::value::Value;
///
/// let v = Value::sexpr(vec![Value::symbol("+"), Value::number(1), Value::number(2)]);
/// assert_eq!(v.to_string(), "(+ 1 2)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer. Arithmetic on numbers wraps on overflow.
    Number(i64),
    /// A name: an identifier or operator, resolved against the environment
    /// when evaluated.
    Symbol(String),
    /// An error message. Errors are ordinary values: they propagate by
    /// replacing the result of any evaluation that contains them, and are
    /// never applied or operated on.
    Error(String),
    /// A builtin function. Opaque; printed as `<function>`.
    Function(Builtin),
    /// An S-expression: an ordered list evaluated eagerly, left to right,
    /// whose head is applied to the rest.
    SExpr(Vec<Value>),
    /// A Q-expression: a literal list that is never evaluated on its own.
    QExpr(Vec<Value>),
}

impl Value {
    /// Creates a number value.
    #[must_use]
    pub const fn number(n: i64) -> Self {
        Self::Number(n)
    }

    /// Creates a symbol value.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates an error value.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Creates an S-expression from its children, taking ownership.
    #[must_use]
    pub const fn sexpr(children: Vec<Self>) -> Self {
        Self::SExpr(children)
    }

    /// Creates a Q-expression from its children, taking ownership.
    #[must_use]
    pub const fn qexpr(children: Vec<Self>) -> Self {
        Self::QExpr(children)
    }

    /// Returns `true` if the value is [`Error`].
    ///
    /// [`Error`]: Value::Error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    /// Returns `true` if the value is [`QExpr`].
    ///
    /// [`QExpr`]: Value::QExpr
    #[must_use]
    pub const fn is_qexpr(&self) -> bool {
        matches!(self, Self::QExpr(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::Error(message) => write!(f, "Error: {message}"),
            Self::Function(_) => write!(f, "<function>"),
            Self::SExpr(children) => write_children(f, children, '(', ')'),
            Self::QExpr(children) => write_children(f, children, '{', '}'),
        }
    }
}

/// Writes the children of a container space-joined between its brackets.
fn write_children(f: &mut std::fmt::Formatter<'_>,
                  children: &[Value],
                  open: char,
                  close: char)
                  -> std::fmt::Result {
    write!(f, "{open}")?;

    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }

        write!(f, "{child}")?;
    }

    write!(f, "{close}")
}
