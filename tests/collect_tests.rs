use calctree::{Ast, collect_variables, parse};

#[test]
fn first_appearance_order() {
    let t = parse("b * a + c - a * b").unwrap();
    assert_eq!(collect_variables(&t), vec!['b', 'a', 'c']);
}

#[test]
fn duplicates_listed_once() {
    let t = parse("x + x + x").unwrap();
    assert_eq!(collect_variables(&t), vec!['x']);
}

#[test]
fn no_variables() {
    let t = parse("1 + 2 * (3 - 4)").unwrap();
    assert!(collect_variables(&t).is_empty());
}

#[test]
fn case_sensitive_names() {
    let t = parse("-(q / Q) + q").unwrap();
    assert_eq!(collect_variables(&t), vec!['q', 'Q']);
}

#[test]
fn walks_unary_plus() {
    let t = Ast::Pos(Box::new(Ast::var('m')));
    assert_eq!(collect_variables(&t), vec!['m']);
}
