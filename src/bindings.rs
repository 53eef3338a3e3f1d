use std::collections::{BTreeMap, HashMap};

/// Source of variable values for evaluation.
///
/// Implement this trait to plug your own storage into the evaluator. Return
/// `None` for names you don't know; the evaluator turns that into
/// `CalcError::UndefinedVariable`.
pub trait Bindings {
    fn lookup(&self, name: char) -> Option<i64>;
}

impl Bindings for HashMap<char, i64> {
    fn lookup(&self, name: char) -> Option<i64> {
        self.get(&name).copied()
    }
}

impl Bindings for BTreeMap<char, i64> {
    fn lookup(&self, name: char) -> Option<i64> {
        self.get(&name).copied()
    }
}

/// Association list; the first pair with a matching name wins.
impl Bindings for [(char, i64)] {
    fn lookup(&self, name: char) -> Option<i64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> Bindings for [(char, i64); N] {
    fn lookup(&self, name: char) -> Option<i64> {
        self.as_slice().lookup(name)
    }
}

impl Bindings for Vec<(char, i64)> {
    fn lookup(&self, name: char) -> Option<i64> {
        self.as_slice().lookup(name)
    }
}

impl<T: Fn(char) -> Option<i64>> Bindings for T {
    fn lookup(&self, name: char) -> Option<i64> {
        self(name)
    }
}

/// No variables at all.
pub struct NoBindings;

impl Bindings for NoBindings {
    fn lookup(&self, _name: char) -> Option<i64> {
        None
    }
}
