use crate::ast::Ast;
use crate::bindings::Bindings;
use crate::error::CalcError;

/// Evaluates a tree with the given variable values.
///
/// Division truncates toward zero. Any overflow of `i64` is reported as
/// `ArithmeticOverflow` rather than wrapping.
pub fn evaluate<B: Bindings + ?Sized>(ast: &Ast, vars: &B) -> Result<i64, CalcError> {
    match ast {
        Ast::Num(v) => Ok(*v),
        Ast::Var(name) => vars
            .lookup(*name)
            .ok_or(CalcError::UndefinedVariable(*name)),
        Ast::Neg(a) => evaluate(a, vars)?
            .checked_neg()
            .ok_or(CalcError::ArithmeticOverflow),
        Ast::Pos(_) => Err(CalcError::InvalidNodeStructure),
        Ast::Add(a, b) => binary(a, b, vars, i64::checked_add),
        Ast::Sub(a, b) => binary(a, b, vars, i64::checked_sub),
        Ast::Mul(a, b) => binary(a, b, vars, i64::checked_mul),
        Ast::Div(a, b) => {
            let x = evaluate(a, vars)?;
            let y = evaluate(b, vars)?;
            if y == 0 {
                return Err(CalcError::DivisionByZero);
            }
            x.checked_div(y).ok_or(CalcError::ArithmeticOverflow)
        }
    }
}

fn binary<B, F>(a: &Ast, b: &Ast, vars: &B, op: F) -> Result<i64, CalcError>
where
    B: Bindings + ?Sized,
    F: Fn(i64, i64) -> Option<i64>,
{
    let x = evaluate(a, vars)?;
    let y = evaluate(b, vars)?;
    op(x, y).ok_or(CalcError::ArithmeticOverflow)
}
