pub use lexer::{Token, Tokenizer};
pub use parser::{precedence, to_postfix, Assoc, ParseError, ShuntingParser};
pub use rpneval::{eval_postfix, EvalContext, EvalErr, OperandGrouping};
pub use arith::apply;

mod lexer;
pub mod parser;

mod arith;
mod rpneval;
