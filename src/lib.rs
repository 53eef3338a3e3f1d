mod error;
mod ast;
mod parser;
mod printer;
mod collect;
mod simplifier;
mod bindings;
mod eval;
mod prepared;
mod engine;
#[cfg(feature = "generate")]
mod generate;

pub use error::CalcError;
pub use ast::Ast;
pub use parser::{Parser, parse};
pub use printer::print;
pub use collect::collect_variables;
pub use simplifier::simplify;
pub use bindings::{Bindings, NoBindings};
pub use eval::evaluate;
pub use prepared::PreparedFormula;
pub use engine::{Engine, EngineOptions};
#[cfg(feature = "generate")]
pub use generate::random_formula;
