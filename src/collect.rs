use crate::ast::Ast;

/// Variables in left-to-right first-appearance order, each listed once.
pub fn collect_variables(ast: &Ast) -> Vec<char> {
    fn walk(node: &Ast, out: &mut Vec<char>) {
        match node {
            Ast::Num(_) => {}
            Ast::Var(name) => {
                // At most 52 distinct names, a linear scan is enough.
                if !out.contains(name) {
                    out.push(*name);
                }
            }
            Ast::Neg(a) | Ast::Pos(a) => walk(a, out),
            Ast::Add(a, b) | Ast::Sub(a, b) | Ast::Mul(a, b) | Ast::Div(a, b) => {
                walk(a, out);
                walk(b, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(ast, &mut out);
    out
}
