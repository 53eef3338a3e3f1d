use calctree::{Ast, CalcError, NoBindings, evaluate, parse, print, simplify};

#[test]
fn mixed_precedence() {
    let t = parse("1+2*3").unwrap();
    assert_eq!(print(&t), "(1 + (2 * 3))");
    assert_eq!(evaluate(&t, &NoBindings).unwrap(), 7);
}

#[test]
fn double_negation_simplifies_to_literal() {
    let t = simplify(parse("--5").unwrap());
    assert_eq!(t, Ast::Num(5));
    assert_eq!(print(&t), "5");
    assert_eq!(evaluate(&t, &NoBindings).unwrap(), 5);
}

#[test]
fn product_with_zero() {
    let t = simplify(parse("a*0").unwrap());
    assert_eq!(print(&t), "0");
    for a in [-3, 0, 12345] {
        assert_eq!(evaluate(&t, &[('a', a)]).unwrap(), 0);
    }
}

#[test]
fn common_factor() {
    let original = parse("(x*y)+(x*z)").unwrap();
    let simplified = simplify(original.clone());
    assert_eq!(print(&simplified), "(x * (y + z))");
    let vars = [('x', 2), ('y', 3), ('z', 4)];
    assert_eq!(evaluate(&original, &vars).unwrap(), 14);
    assert_eq!(evaluate(&simplified, &vars).unwrap(), 14);
}

#[test]
fn empty_input_fails() {
    assert_eq!(parse(""), Err(CalcError::EmptyExpression));
}

#[test]
fn division_by_zero_fails_at_evaluation() {
    let t = parse("3/0").unwrap();
    assert_eq!(evaluate(&t, &NoBindings), Err(CalcError::DivisionByZero));
}

#[test]
fn missing_right_operand() {
    assert_eq!(parse("3+"), Err(CalcError::UnexpectedEnd));
}
