use qlisp::{eval_source,
            interpreter::{builtin, env::Env}};

/// Evaluates one expression in a fresh environment and returns its
/// printed form.
fn run(source: &str) -> String {
    let mut env = Env::new();
    builtin::add_builtins(&mut env);

    eval_source(&mut env, source).expect("source should parse")
                                 .to_string()
}

#[test]
fn addition_folds_left_to_right() {
    assert_eq!(run("(+ 1 2)"), "3");
    assert_eq!(run("(+ 1 2 3 4 5)"), "15");
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(run("(- 10 2 3)"), "5");
}

#[test]
fn multiplication_folds_left_to_right() {
    assert_eq!(run("(* 2 3 4)"), "24");
}

#[test]
fn division_truncates() {
    assert_eq!(run("(/ 10 3)"), "3");
    assert_eq!(run("(/ -7 2)"), "-3");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(run("(/ 10 0)"), "Error: Division By Zero!");
    // The fold aborts at the zero; later operands never apply.
    assert_eq!(run("(/ 10 0 2)"), "Error: Division By Zero!");
}

#[test]
fn lone_minus_operand_negates() {
    assert_eq!(run("(- 5)"), "-5");
    assert_eq!(run("(- -5)"), "5");
}

#[test]
fn expressions_nest() {
    assert_eq!(run("(+ 1 (* 2 3) (- 8 2))"), "13");
}

#[test]
fn overflow_wraps() {
    assert_eq!(run("(* 9223372036854775807 2)"), "-2");
    assert_eq!(run("(/ -9223372036854775808 -1)"), "-9223372036854775808");
}

#[test]
fn non_number_operands_are_an_error() {
    assert_eq!(run("(+ 1 {2})"), "Error: Cannot operate on non-number!");
    assert_eq!(run("(* head 2)"), "Error: Cannot operate on non-number!");
}

#[test]
fn head_keeps_the_first_element() {
    assert_eq!(run("(head {1 2 3})"), "{1}");
    assert_eq!(run("(head {{1 2} 3})"), "{{1 2}}");
}

#[test]
fn tail_drops_the_first_element() {
    assert_eq!(run("(tail {1 2 3})"), "{2 3}");
    assert_eq!(run("(tail {1})"), "{}");
}

#[test]
fn head_and_tail_reject_bad_arguments() {
    assert_eq!(run("(head {})"), "Error: Function 'head' passed {}!");
    assert_eq!(run("(tail {})"), "Error: Function 'tail' passed {}!");
    assert_eq!(run("(head 5)"), "Error: Function 'head' passed incorrect type!");
    assert_eq!(run("(tail 5)"), "Error: Function 'tail' passed incorrect type!");
    assert_eq!(run("(head {1} {2})"),
               "Error: Function 'head' passed too many arguments!");
    assert_eq!(run("(tail {1} {2})"),
               "Error: Function 'tail' passed too many arguments!");
}

#[test]
fn join_concatenates_in_argument_order() {
    assert_eq!(run("(join {1 2} {3})"), "{1 2 3}");
    assert_eq!(run("(join {1} {2} {3 4})"), "{1 2 3 4}");
    assert_eq!(run("(join {1 2})"), "{1 2}");
}

#[test]
fn join_rejects_non_qexprs() {
    assert_eq!(run("(join {1} 2)"), "Error: Function 'join' passed incorrect type!");
}

#[test]
fn list_quotes_its_arguments() {
    assert_eq!(run("(list 1 2 3)"), "{1 2 3}");
    assert_eq!(run("(list 1)"), "{1}");
}

#[test]
fn eval_unquotes_a_qexpr() {
    assert_eq!(run("(eval {+ 1 2})"), "3");
    assert_eq!(run("(eval (tail {tail tail {5 6 7}}))"), "{6 7}");
    assert_eq!(run("(eval {})"), "()");
}

#[test]
fn eval_rejects_bad_arguments() {
    assert_eq!(run("(eval 5)"), "Error: Function 'eval' passed incorrect type!");
    assert_eq!(run("(eval {} {})"),
               "Error: Function 'eval' passed too many arguments!");
}

#[test]
fn evaluating_a_plain_list_fails_on_its_head() {
    // (eval (list 1 2 3)) behaves as (1 2 3): 1 is not a function.
    assert_eq!(run("(eval (list 1 2 3))"),
               "Error: First element is not a function!");
    assert_eq!(run("(1 2 3)"), "Error: First element is not a function!");
}

#[test]
fn unknown_symbols_are_an_error() {
    assert_eq!(run("undefinedSym"), "Error: symbol not found!");
    assert_eq!(run("(+ 1 x)"), "Error: symbol not found!");
}

#[test]
fn qexprs_are_self_evaluating() {
    assert_eq!(run("{1 2 3}"), "{1 2 3}");
    assert_eq!(run("{head (list 1 2)}"), "{head (list 1 2)}");
}

#[test]
fn functions_print_opaquely() {
    assert_eq!(run("head"), "<function>");
    assert_eq!(run("+"), "<function>");
}

#[test]
fn empty_input_is_the_empty_sexpr() {
    assert_eq!(run(""), "()");
    assert_eq!(run("()"), "()");
}

#[test]
fn singletons_reduce_to_their_contents() {
    assert_eq!(run("(5)"), "5");
    assert_eq!(run("((+ 1 2))"), "3");
}

#[test]
fn the_top_level_behaves_as_an_sexpr() {
    assert_eq!(run("+ 1 2"), "3");
    assert_eq!(run("head {1 2 3}"), "{1}");
}

#[test]
fn the_first_error_in_position_order_wins() {
    assert_eq!(run("(+ 1 (/ 1 0) (head {}))"), "Error: Division By Zero!");
    assert_eq!(run("(+ 1 (head {}) (/ 1 0))"), "Error: Function 'head' passed {}!");
}

#[test]
fn errors_propagate_through_enclosing_expressions() {
    assert_eq!(run("(* 2 (+ 1 (/ 3 0)))"), "Error: Division By Zero!");
}

#[test]
fn out_of_range_literals_are_invalid_numbers() {
    assert_eq!(run("9999999999999999999999"), "Error: invalid number");
    assert_eq!(run("(+ 1 99999999999999999999)"), "Error: invalid number");
}

#[test]
fn a_session_environment_survives_across_inputs() {
    let mut env = Env::new();
    builtin::add_builtins(&mut env);

    for _ in 0..2 {
        let result = eval_source(&mut env, "(+ 1 2)").expect("source should parse");
        assert_eq!(result.to_string(), "3");
    }
}

#[test]
fn runtime_errors_do_not_poison_the_session() {
    let mut env = Env::new();
    builtin::add_builtins(&mut env);

    let result = eval_source(&mut env, "(/ 1 0)").expect("source should parse");
    assert_eq!(result.to_string(), "Error: Division By Zero!");

    let result = eval_source(&mut env, "(+ 2 2)").expect("source should parse");
    assert_eq!(result.to_string(), "4");
}
