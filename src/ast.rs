/// Expression tree nodes.
///
/// Every node owns its operands, so a tree can be moved, cloned (deep copy)
/// and compared structurally (`==` checks kind, value and operands, never the
/// numeric result).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ast {
    /// Non-negative integer literal (e.g. 42)
    Num(i64),
    /// Single-letter variable, case-sensitive (e.g. x, X)
    Var(char),
    /// Unary minus (-a)
    Neg(Box<Ast>),
    /// Unary plus (+a). Never produced by the parser and rejected by the
    /// evaluator; the simplifier still folds `+(-a)` into `-a`.
    Pos(Box<Ast>),
    /// Addition (a + b)
    Add(Box<Ast>, Box<Ast>),
    /// Subtraction (a - b)
    Sub(Box<Ast>, Box<Ast>),
    /// Multiplication (a * b)
    Mul(Box<Ast>, Box<Ast>),
    /// Truncating division (a / b)
    Div(Box<Ast>, Box<Ast>),
}

impl Ast {
    /// Literal node. Literals are never negative; write `-5` as `neg(num(5))`.
    pub fn num(v: i64) -> Ast {
        debug_assert!(v >= 0, "negative literal {v}");
        Ast::Num(v)
    }

    pub fn var(name: char) -> Ast {
        Ast::Var(name)
    }

    pub fn neg(a: Ast) -> Ast {
        Ast::Neg(Box::new(a))
    }

    pub fn add(a: Ast, b: Ast) -> Ast {
        Ast::Add(Box::new(a), Box::new(b))
    }

    pub fn sub(a: Ast, b: Ast) -> Ast {
        Ast::Sub(Box::new(a), Box::new(b))
    }

    pub fn mul(a: Ast, b: Ast) -> Ast {
        Ast::Mul(Box::new(a), Box::new(b))
    }

    pub fn div(a: Ast, b: Ast) -> Ast {
        Ast::Div(Box::new(a), Box::new(b))
    }

    /// Literals and variables.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Ast::Num(_) | Ast::Var(_))
    }

    pub(crate) fn is_lit(&self, v: i64) -> bool {
        matches!(self, Ast::Num(n) if *n == v)
    }

    /// Operator symbol for binary nodes.
    pub fn op_symbol(&self) -> Option<char> {
        match self {
            Ast::Add(..) => Some('+'),
            Ast::Sub(..) => Some('-'),
            Ast::Mul(..) => Some('*'),
            Ast::Div(..) => Some('/'),
            _ => None,
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Ast::Num(_) | Ast::Var(_) => 1,
            Ast::Neg(a) | Ast::Pos(a) => 1 + a.size(),
            Ast::Add(a, b) | Ast::Sub(a, b) | Ast::Mul(a, b) | Ast::Div(a, b) => {
                1 + a.size() + b.size()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_structurally_equal() {
        let t = Ast::add(Ast::mul(Ast::var('x'), Ast::num(2)), Ast::neg(Ast::var('y')));
        let copy = t.clone();
        assert_eq!(t, copy);
        assert_eq!(t.size(), 6);
    }

    #[test]
    fn structural_equality_is_not_commutative() {
        let ab = Ast::add(Ast::var('a'), Ast::var('b'));
        let ba = Ast::add(Ast::var('b'), Ast::var('a'));
        assert_ne!(ab, ba);
        assert_ne!(Ast::var('a'), Ast::var('A'));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative literal")]
    fn negative_literal_rejected() {
        let _ = Ast::num(-5);
    }
}
