use crate::lexer::{Token, Tokenizer};
use stacks::{LinkedStack, Stack, StackError};
use thiserror::Error;

#[derive(PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
    None,
}

pub fn precedence(op: char) -> (usize, Assoc) {
    match op {
        '^' => (3, Assoc::Right),
        '*' | '/' => (2, Assoc::Left),
        '+' | '-' => (1, Assoc::Left),
        // parens sit at the bottom, only a closing paren removes them
        _ => (0, Assoc::None),
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("malformed expression: {0}")]
    Stack(#[from] StackError),
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<String, ParseError> {
        Self::parse(expr.chars())
    }

    pub fn parse(src: impl Iterator<Item = char>) -> Result<String, ParseError> {
        Self::parse_with(src, &mut LinkedStack::new())
    }

    /// Reorders an infix expression into postfix using `stack` for operators.
    ///
    /// Balance isn't checked up front: an unmatched `)` runs the stack dry and
    /// fails with `StackError::EmptyStackAccess`, an unmatched `(` is dropped.
    /// Characters that are neither operands nor operators are skipped.
    pub fn parse_with<S: Stack<char>>(
        src: impl Iterator<Item = char>,
        stack: &mut S,
    ) -> Result<String, ParseError> {
        stack.clear()?;
        let mut out = String::new();

        for token in Tokenizer::new(src) {
            log::trace!("{:?} -> out: {:?}", token, out);
            match token {
                Token::Operand(c) => out.push(c),
                Token::OParen => stack.push('(')?,
                Token::CParen => loop {
                    match stack.pop()? {
                        '(' => break,
                        op => out.push(op),
                    }
                },
                Token::BOp(op) => {
                    let (prec_rhs, assoc_rhs) = precedence(op);
                    while !stack.is_empty() {
                        let (prec_lhs, _) = precedence(*stack.peek()?);
                        if prec_lhs < prec_rhs {
                            break;
                        } else if prec_lhs > prec_rhs {
                            out.push(stack.pop()?);
                        } else {
                            match assoc_rhs {
                                Assoc::Left => out.push(stack.pop()?),
                                Assoc::Right | Assoc::None => break,
                            }
                        }
                    }
                    stack.push(op)?;
                }
                Token::Whitespace | Token::Unknown(_) => (),
            }
        }
        while !stack.is_empty() {
            match stack.pop()? {
                '(' => (), // missing closing paren
                op => out.push(op),
            }
        }
        log::debug!("postfix: {}", out);
        Ok(out)
    }
}

pub fn to_postfix(infix: &str) -> Result<String, ParseError> {
    ShuntingParser::parse_str(infix)
}
