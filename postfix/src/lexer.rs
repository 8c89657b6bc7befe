use std::iter::Peekable;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Token {
    Operand(char), // letter or digit
    BOp(char),     // + - * / ^
    OParen,
    CParen,
    Whitespace,
    Unknown(char),
}

impl Token {
    pub fn classify(c: char) -> Token {
        match c {
            '+' | '-' | '*' | '/' | '^' => Token::BOp(c),
            '(' => Token::OParen,
            ')' => Token::CParen,
            c if c.is_whitespace() => Token::Whitespace,
            c if c.is_alphanumeric() => Token::Operand(c),
            c => Token::Unknown(c),
        }
    }
}

/// Classifies one character at a time. Multi-character operands are only
/// scanned on request, through `scan_digit_run` and `scan_until`.
pub struct Tokenizer<I: Iterator<Item = char>> {
    src: Peekable<I>,
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    pub fn new(source: I) -> Self {
        Tokenizer { src: source.peekable() }
    }

    // Extend an already consumed digit with the ascii digits that follow it.
    pub fn scan_digit_run(&mut self, first: char) -> String {
        let mut run = String::from(first);
        while let Some(c) = self.src.next_if(|c| c.is_ascii_digit()) {
            run.push(c);
        }
        run
    }

    // Consume everything up to and including `end`. The text before `end` is
    // returned, or handed back as the error if the input ran out first.
    pub fn scan_until(&mut self, end: char) -> Result<String, String> {
        let mut text = String::new();
        for c in self.src.by_ref() {
            if c == end {
                return Ok(text);
            }
            text.push(c);
        }
        Err(text)
    }
}

impl<I: Iterator<Item = char>> Iterator for Tokenizer<I> {
    type Item = Token;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.next().map(Token::classify)
    }
}

///////////////////////////////////////////////////////////////////////////////
