use crate::ast::Ast;
use crate::bindings::Bindings;
use crate::collect::collect_variables;
use crate::error::CalcError;
use crate::eval::evaluate;

/// A parsed formula ready for evaluation.
///
/// Keeps the tree exactly as parsed next to an independently owned copy that
/// may have been simplified; evaluation always uses the latter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedFormula {
    original: Ast,
    simplified: Ast,
    /// Variables of the simplified tree in left-to-right first-appearance
    /// order. These are exactly the bindings `eval` needs.
    variables: Vec<char>,
}

impl PreparedFormula {
    pub(crate) fn new(original: Ast, simplified: Ast) -> Self {
        let variables = collect_variables(&simplified);
        Self { original, simplified, variables }
    }

    pub fn original(&self) -> &Ast {
        &self.original
    }

    pub fn simplified(&self) -> &Ast {
        &self.simplified
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn eval<B: Bindings + ?Sized>(&self, vars: &B) -> Result<i64, CalcError> {
        evaluate(&self.simplified, vars)
    }

    /// Same as `eval` but on the tree as it was parsed.
    pub fn eval_original<B: Bindings + ?Sized>(&self, vars: &B) -> Result<i64, CalcError> {
        evaluate(&self.original, vars)
    }

    pub fn into_parts(self) -> (Ast, Ast, Vec<char>) {
        (self.original, self.simplified, self.variables)
    }
}
