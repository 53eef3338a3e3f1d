use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("unexpected character '{found}' at {pos}")]
    UnexpectedCharacter { found: char, pos: usize },
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("expected ')' at {pos}")]
    MissingCloseParen { pos: usize },
    #[error("unexpected trailing input at {pos}")]
    TrailingInput { pos: usize },
    #[error("integer literal out of range: {0}")]
    LiteralOutOfRange(String),
    #[error("undefined variable: {0}")]
    UndefinedVariable(char),
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
    #[error("invalid node structure")]
    InvalidNodeStructure,
}

impl CalcError {
    /// True for failures raised while reading formula text.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            CalcError::EmptyExpression
                | CalcError::UnexpectedCharacter { .. }
                | CalcError::UnexpectedEnd
                | CalcError::MissingCloseParen { .. }
                | CalcError::TrailingInput { .. }
                | CalcError::LiteralOutOfRange(_)
        )
    }
}
