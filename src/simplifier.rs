use crate::ast::Ast;
use log::trace;

// Fixed local rewrite rules, applied bottom-up. Subtrees are moved into the
// result, never shared.
pub fn simplify(ast: Ast) -> Ast {
    match ast {
        Ast::Num(_) | Ast::Var(_) => ast,
        Ast::Neg(a) => match simplify(*a) {
            Ast::Neg(inner) => {
                trace!("rewrite -(-a) -> a");
                simplify(*inner)
            }
            a => Ast::Neg(Box::new(a)),
        },
        Ast::Pos(a) => match simplify(*a) {
            neg @ Ast::Neg(_) => {
                trace!("rewrite +(-a) -> -a");
                simplify(neg)
            }
            a => Ast::Pos(Box::new(a)),
        },
        Ast::Mul(a, b) => simplify_mul(simplify(*a), simplify(*b)),
        Ast::Add(a, b) => simplify_add(simplify(*a), simplify(*b)),
        Ast::Sub(a, b) => simplify_sub(simplify(*a), simplify(*b)),
        Ast::Div(a, b) => Ast::Div(Box::new(simplify(*a)), Box::new(simplify(*b))),
    }
}

fn simplify_mul(a: Ast, b: Ast) -> Ast {
    if a.is_lit(0) || b.is_lit(0) {
        trace!("rewrite a * 0 -> 0");
        return Ast::Num(0);
    }
    if a.is_lit(1) {
        trace!("rewrite 1 * a -> a");
        return b;
    }
    if b.is_lit(1) {
        trace!("rewrite a * 1 -> a");
        return a;
    }
    Ast::Mul(Box::new(a), Box::new(b))
}

fn simplify_add(a: Ast, b: Ast) -> Ast {
    if a.is_lit(0) {
        trace!("rewrite 0 + a -> a");
        return b;
    }
    if b.is_lit(0) {
        trace!("rewrite a + 0 -> a");
        return a;
    }
    match factor_common(a, b, Ast::Add) {
        Ok(factored) => {
            trace!("rewrite (a*b) + (a*c) -> a * (b + c)");
            simplify(factored)
        }
        Err((a, b)) => Ast::Add(Box::new(a), Box::new(b)),
    }
}

fn simplify_sub(a: Ast, b: Ast) -> Ast {
    if b.is_lit(0) {
        trace!("rewrite a - 0 -> a");
        return a;
    }
    match factor_common(a, b, Ast::Sub) {
        Ok(factored) => {
            trace!("rewrite (a*b) - (a*c) -> a * (b - c)");
            simplify(factored)
        }
        Err((a, b)) => Ast::Sub(Box::new(a), Box::new(b)),
    }
}

/// One factor of a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

/// Candidate (left product factor, right product factor) pairs, in the
/// order they are tried. The first structurally equal pair wins.
const PAIRINGS: [(Side, Side); 4] = [
    (Side::First, Side::First),
    (Side::First, Side::Second),
    (Side::Second, Side::First),
    (Side::Second, Side::Second),
];

fn pick<'a>(first: &'a Ast, second: &'a Ast, side: Side) -> &'a Ast {
    match side {
        Side::First => first,
        Side::Second => second,
    }
}

/// Splits a product into (chosen factor, remaining factor).
fn take(first: Box<Ast>, second: Box<Ast>, side: Side) -> (Box<Ast>, Box<Ast>) {
    match side {
        Side::First => (first, second),
        Side::Second => (second, first),
    }
}

/// Rewrites `(p*q) op (r*s)` into `common * (rest_left op rest_right)` when
/// the two products share a structurally equal factor. On no match the
/// operands are handed back untouched.
fn factor_common(
    lhs: Ast,
    rhs: Ast,
    rebuild: fn(Box<Ast>, Box<Ast>) -> Ast,
) -> Result<Ast, (Ast, Ast)> {
    let (p, q, r, s) = match (lhs, rhs) {
        (Ast::Mul(p, q), Ast::Mul(r, s)) => (p, q, r, s),
        other => return Err(other),
    };
    let found = PAIRINGS
        .iter()
        .copied()
        .find(|&(ls, rs)| pick(&p, &q, ls) == pick(&r, &s, rs));
    match found {
        Some((ls, rs)) => {
            let (common, rest_left) = take(p, q, ls);
            let (_, rest_right) = take(r, s, rs);
            Ok(Ast::Mul(common, Box::new(rebuild(rest_left, rest_right))))
        }
        None => Err((Ast::Mul(p, q), Ast::Mul(r, s))),
    }
}
