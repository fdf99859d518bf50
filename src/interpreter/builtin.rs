use crate::interpreter::{env::Env, evaluator, value::Value};

/// Registers the builtin library into an environment.
///
/// Binds the list operations (`list`, `head`, `tail`, `join`, `eval`) and
/// the arithmetic operators (`+`, `-`, `*`, `/`). Called once per session,
/// right after the environment is created.
pub fn add_builtins(env: &mut Env) {
    env.add_builtin("list", list);
    env.add_builtin("head", head);
    env.add_builtin("tail", tail);
    env.add_builtin("join", join);
    env.add_builtin("eval", eval);

    env.add_builtin("+", add);
    env.add_builtin("-", sub);
    env.add_builtin("*", mul);
    env.add_builtin("/", div);
}

/// Turns its arguments into a Q-expression.
///
/// The evaluated argument list is relabeled in place; no copy is made.
pub fn list(_env: &mut Env, args: Vec<Value>) -> Value {
    Value::qexpr(args)
}

/// Evaluates a Q-expression as if it were an S-expression.
///
/// Takes exactly one Q-expression argument, relabels it, and re-enters the
/// evaluator on the relabeled object. This is the only way a Q-expression
/// ever gets evaluated.
pub fn eval(env: &mut Env, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return Value::error("Function 'eval' passed too many arguments!");
    }

    match args.remove(0) {
        Value::QExpr(children) => evaluator::eval(env, Value::sexpr(children)),
        _ => Value::error("Function 'eval' passed incorrect type!"),
    }
}

/// Returns a Q-expression with only the first element of its argument.
pub fn head(_env: &mut Env, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return Value::error("Function 'head' passed too many arguments!");
    }

    match args.remove(0) {
        Value::QExpr(mut children) => {
            if children.is_empty() {
                return Value::error("Function 'head' passed {}!");
            }

            children.truncate(1);
            Value::qexpr(children)
        },
        _ => Value::error("Function 'head' passed incorrect type!"),
    }
}

/// Returns a Q-expression with the first element of its argument removed.
pub fn tail(_env: &mut Env, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return Value::error("Function 'tail' passed too many arguments!");
    }

    match args.remove(0) {
        Value::QExpr(mut children) => {
            if children.is_empty() {
                return Value::error("Function 'tail' passed {}!");
            }

            children.remove(0);
            Value::qexpr(children)
        },
        _ => Value::error("Function 'tail' passed incorrect type!"),
    }
}

/// Concatenates any number of Q-expressions into one, in argument order.
pub fn join(_env: &mut Env, args: Vec<Value>) -> Value {
    if !args.iter().all(Value::is_qexpr) {
        return Value::error("Function 'join' passed incorrect type!");
    }

    let mut joined = Vec::new();

    for arg in args {
        if let Value::QExpr(children) = arg {
            joined.extend(children);
        }
    }

    Value::qexpr(joined)
}

/// `+`
pub fn add(_env: &mut Env, args: Vec<Value>) -> Value {
    builtin_op(args, "+")
}

/// `-`
pub fn sub(_env: &mut Env, args: Vec<Value>) -> Value {
    builtin_op(args, "-")
}

/// `*`
pub fn mul(_env: &mut Env, args: Vec<Value>) -> Value {
    builtin_op(args, "*")
}

/// `/`
pub fn div(_env: &mut Env, args: Vec<Value>) -> Value {
    builtin_op(args, "/")
}

/// Applies an arithmetic operator as a left fold over number arguments.
///
/// All arguments must be numbers. The fold starts from the first argument
/// and runs strictly left to right, which fixes the meaning of subtraction
/// and division chains (`- 10 2 3` is `(10 - 2) - 3`). A lone operand with
/// `-` is negated. Arithmetic wraps on overflow, matching the language's
/// unchecked 64-bit numbers; division by a zero number aborts the fold
/// with `Division By Zero!`.
///
/// Operator names outside `+ - * /` yield `Unknown Function!`.
#[must_use]
pub fn builtin_op(args: Vec<Value>, op: &str) -> Value {
    let mut numbers = Vec::with_capacity(args.len());

    for arg in args {
        if let Value::Number(n) = arg {
            numbers.push(n);
        } else {
            return Value::error("Cannot operate on non-number!");
        }
    }

    let Some((&first, rest)) = numbers.split_first() else {
        return Value::error(format!("Function '{op}' passed no arguments!"));
    };

    if op == "-" && rest.is_empty() {
        return Value::number(first.wrapping_neg());
    }

    let mut acc = first;

    for &y in rest {
        acc = match op {
            "+" => acc.wrapping_add(y),
            "-" => acc.wrapping_sub(y),
            "*" => acc.wrapping_mul(y),
            "/" => {
                if y == 0 {
                    return Value::error("Division By Zero!");
                }
                acc.wrapping_div(y)
            },
            _ => return Value::error("Unknown Function!"),
        };
    }

    Value::number(acc)
}
