use crate::arith::apply;
use crate::lexer::{Token, Tokenizer};
use stacks::{ResizableStack, Stack, StackError, DEFAULT_CAPACITY};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum EvalErr {
    #[error("malformed expression: {0}")]
    Stack(#[from] StackError),
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown operator '{0}'")]
    UnknownOperator(char),
    #[error("integer overflow")]
    Overflow,
    #[error("bad number '{0}'")]
    BadNumber(String),
}

/// How digits in a postfix expression are grouped into operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OperandGrouping {
    /// Every digit is an operand of its own, parens are ignored.
    #[default]
    Digit,
    /// `(123)` is a single operand, bare digits are still one each.
    Parenthesized,
    /// A run of consecutive digits is one operand, use whitespace to separate.
    DigitRun,
}

impl FromStr for OperandGrouping {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "digit" => Ok(OperandGrouping::Digit),
            "paren" => Ok(OperandGrouping::Parenthesized),
            "run" => Ok(OperandGrouping::DigitRun),
            _ => Err(format!("unknown grouping '{}', expected digit|paren|run", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EvalContext {
    pub grouping: OperandGrouping,
}

impl EvalContext {
    pub fn new() -> EvalContext {
        EvalContext::default()
    }

    pub fn with_grouping(grouping: OperandGrouping) -> EvalContext {
        EvalContext { grouping }
    }

    pub fn eval(&self, postfix: &str) -> Result<i64, EvalErr> {
        let mut operands = ResizableStack::<i64>::with_capacity(postfix.len().min(DEFAULT_CAPACITY))?;
        self.eval_with(postfix.chars(), &mut operands)
    }

    /// Evaluates postfix using `operands` as the value stack.
    ///
    /// The result is whatever sits on top of the stack once the input is
    /// consumed; extra values left below it are not reported.
    pub fn eval_with<S: Stack<i64>>(
        &self,
        src: impl Iterator<Item = char>,
        operands: &mut S,
    ) -> Result<i64, EvalErr> {
        operands.clear()?;
        let mut lex = Tokenizer::new(src);

        while let Some(token) = lex.next() {
            match token {
                Token::Operand(c) => {
                    let digit = match c.to_digit(10) {
                        Some(d) => i64::from(d),
                        None => continue, // variables have no value here
                    };
                    let value = match self.grouping {
                        OperandGrouping::DigitRun => parse_number(&lex.scan_digit_run(c))?,
                        _ => digit,
                    };
                    log::trace!("push {}", value);
                    operands.push(value)?;
                }
                Token::OParen if self.grouping == OperandGrouping::Parenthesized => {
                    let group = lex
                        .scan_until(')')
                        .map_err(|partial| EvalErr::BadNumber(format!("({}", partial)))?;
                    let value = parse_number(&group)?;
                    log::trace!("push {}", value);
                    operands.push(value)?;
                }
                Token::BOp(op) => {
                    let r = operands.pop()?;
                    let l = operands.pop()?;
                    let result = apply(l, r, op)?;
                    log::trace!("{} {} {} = {}", l, op, r, result);
                    operands.push(result)?;
                }
                _ => (),
            }
        }
        let result = *operands.peek()?;
        log::debug!("result: {} ({} values left)", result, operands.len());
        Ok(result)
    }
}

fn parse_number(digits: &str) -> Result<i64, EvalErr> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(EvalErr::BadNumber(digits.to_string()));
    }
    digits
        .parse::<i64>()
        .map_err(|_| EvalErr::BadNumber(digits.to_string()))
}

pub fn eval_postfix(postfix: &str) -> Result<i64, EvalErr> {
    EvalContext::new().eval(postfix)
}
