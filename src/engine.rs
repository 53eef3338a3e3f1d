use crate::bindings::Bindings;
use crate::error::CalcError;
use crate::parser::Parser;
use crate::prepared::PreparedFormula;
use crate::simplifier::simplify;
use log::debug;

/// Runtime knobs for [`Engine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    /// Run the simplifier on a copy of the parsed tree before evaluation.
    pub simplify: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { simplify: true }
    }
}

/// Parse, simplify and evaluate formulas in one place.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Parses `text` and, when enabled, simplifies a deep copy of the tree.
    pub fn prepare(&self, text: &str) -> Result<PreparedFormula, CalcError> {
        let original = Parser::new(text).parse()?;
        debug!("parsed: {}", original);
        let simplified = if self.options.simplify {
            let s = simplify(original.clone());
            debug!("simplified: {}", s);
            s
        } else {
            original.clone()
        };
        Ok(PreparedFormula::new(original, simplified))
    }

    pub fn eval_str<B: Bindings + ?Sized>(&self, text: &str, vars: &B) -> Result<i64, CalcError> {
        self.prepare(text)?.eval(vars)
    }
}
