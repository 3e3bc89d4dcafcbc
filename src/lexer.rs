use crate::token::Token;

pub struct Lexer {
    input: String,
    position: usize,
    read_position: usize,
    ch: u8,
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_number_start(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.'
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_token())
    }
}

impl Lexer {
    pub fn new(input: String) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = *self.input.as_bytes().get(self.read_position).unwrap_or(&0);
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        *self.input.as_bytes().get(self.read_position).unwrap_or(&0)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        if self.at_end() {
            return Token::Eof;
        }

        let token = match self.ch {
            b'=' => Token::Assign,
            b'-' => Token::Minus,
            c if is_letter(c) => return self.read_identifier().into(),
            c if is_number_start(c) => return Token::Number(self.read_number().to_owned()),
            c => self.read_illegal(c),
        };

        self.read_char();
        token
    }

    // Identifiers and numbers are ASCII, so `position` is always on a char boundary here.
    fn read_illegal(&mut self, c: u8) -> Token {
        let ch = self
            .input
            .get(self.position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or_else(|| char::from(c));
        for _ in 1..ch.len_utf8() {
            self.read_char();
        }
        Token::Illegal(ch)
    }

    fn skip_whitespace(&mut self) {
        while !self.at_end() && self.ch.is_ascii_whitespace() {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> &str {
        let start = self.position;
        while is_letter(self.ch) || self.ch.is_ascii_digit() {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    fn read_number(&mut self) -> &str {
        let start = self.position;
        while is_number_start(self.ch) {
            self.read_char();
        }
        // exponent, only when digits actually follow
        if self.ch == b'e' || self.ch == b'E' {
            let next = self.peek_char();
            let signed = next == b'+' || next == b'-';
            let digit_at = if signed {
                self.read_position + 1
            } else {
                self.read_position
            };
            let has_digits = self
                .input
                .as_bytes()
                .get(digit_at)
                .map_or(false, u8::is_ascii_digit);
            if has_digits {
                self.read_char();
                if signed {
                    self.read_char();
                }
                while self.ch.is_ascii_digit() {
                    self.read_char();
                }
            }
        }
        &self.input[start..self.position]
    }
}
