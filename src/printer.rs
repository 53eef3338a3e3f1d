use crate::ast::Ast;
use std::fmt;

/// Canonical, fully parenthesized rendering of a tree.
///
/// Every binary node is wrapped as `(left OP right)` regardless of precedence;
/// a negation of a leaf is `-x`, of anything else `-(expr)`. The output always
/// parses back to a structurally equal tree.
pub fn print(ast: &Ast) -> String {
    ast.to_string()
}

fn write_prefix(f: &mut fmt::Formatter<'_>, sign: char, operand: &Ast) -> fmt::Result {
    if operand.is_leaf() {
        write!(f, "{}{}", sign, operand)
    } else {
        write!(f, "{}({})", sign, operand)
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Num(v) => write!(f, "{}", v),
            Ast::Var(name) => write!(f, "{}", name),
            Ast::Neg(a) => write_prefix(f, '-', a),
            Ast::Pos(a) => write_prefix(f, '+', a),
            Ast::Add(a, b) | Ast::Sub(a, b) | Ast::Mul(a, b) | Ast::Div(a, b) => {
                let op = self.op_symbol().ok_or(fmt::Error)?;
                write!(f, "({} {} {})", a, op, b)
            }
        }
    }
}
