use crate::interpreter::{env::Env, value::Value};

/// Evaluates a value to its final result.
///
/// Dispatches on the value's variant:
/// - a symbol looks up its binding and evaluates to a deep copy of it (or
///   to `Error: symbol not found!`),
/// - an S-expression evaluates its children left to right and applies its
///   head function to the rest,
/// - numbers, errors, functions and Q-expressions are self-evaluating.
///
/// # Example
/// ```
/// use qlisp::interpreter::{builtin, env::Env, evaluator::eval, value::Value};
///
/// let mut env = Env::new();
/// builtin::add_builtins(&mut env);
///
/// let expr = Value::sexpr(vec![Value::symbol("+"), Value::number(1), Value::number(2)]);
/// assert_eq!(eval(&mut env, expr), Value::number(3));
/// ```
#[must_use]
pub fn eval(env: &mut Env, value: Value) -> Value {
    match value {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(children) => eval_sexpr(env, children),
        other => other,
    }
}

/// Reduces an S-expression's children to a single result.
///
/// Every child is evaluated in place, left to right, before anything else
/// is decided. The first error value in position order then wins and the
/// remaining children are discarded. An empty expression evaluates to
/// itself, a singleton reduces to its only child, and anything longer
/// applies its head (which must be a function) to the rest.
fn eval_sexpr(env: &mut Env, children: Vec<Value>) -> Value {
    let mut cells: Vec<Value> = children.into_iter().map(|child| eval(env, child)).collect();

    if let Some(index) = cells.iter().position(Value::is_error) {
        return cells.swap_remove(index);
    }

    if cells.is_empty() {
        return Value::SExpr(cells);
    }

    if cells.len() == 1 {
        return cells.remove(0);
    }

    let head = cells.remove(0);
    match head {
        Value::Function(function) => function(env, cells),
        _ => Value::error("First element is not a function!"),
    }
}
