use crate::lexer::Lexer;
use crate::token::{Token, TokenType};
use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub ParseError

    UnexpectedToken{expected: TokenType, got: TokenType} = "expected next token to be {expected}, got {got} instead",
    InvalidNumber{literal: String} = "could not parse {literal} as a number",
    IllegalCharacter{ch: char} = "illegal character: '{ch}'",
}

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Assign { name: String, value: f64 },
    Lookup { name: String },
    Show,
}

struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
}

impl Parser {
    fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Self {
            lexer,
            cur_token,
            peek_token,
        }
    }

    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    fn unexpected(&self, expected: TokenType) -> ParseError {
        match self.cur_token {
            Token::Illegal(ch) => ParseError::IllegalCharacter { ch },
            ref token => ParseError::UnexpectedToken {
                expected,
                got: token.into(),
            },
        }
    }

    fn expect_peek(&mut self, token_type: TokenType) -> Result<(), ParseError> {
        self.next_token();
        if self.cur_token.is(token_type) {
            Ok(())
        } else {
            Err(self.unexpected(token_type))
        }
    }

    fn parse_command(mut self) -> Result<Option<Command>, ParseError> {
        let command = match self.cur_token.clone() {
            Token::Eof => return Ok(None),
            Token::Env => Command::Show,
            Token::Ident(name) => {
                if self.peek_token.is(TokenType::Assign) {
                    self.next_token();
                    let value = self.parse_number()?;
                    Command::Assign { name, value }
                } else {
                    Command::Lookup { name }
                }
            }
            _ => return Err(self.unexpected(TokenType::Ident)),
        };

        self.expect_peek(TokenType::Eof)?;
        Ok(Some(command))
    }

    // The sign is part of the literal; no arithmetic happens here.
    fn parse_number(&mut self) -> Result<f64, ParseError> {
        let negative = self.peek_token.is(TokenType::Minus);
        if negative {
            self.next_token();
        }
        self.next_token();

        let literal = match &self.cur_token {
            Token::Number(literal) => literal.clone(),
            _ => return Err(self.unexpected(TokenType::Number)),
        };
        let value: f64 = literal
            .parse()
            .map_err(|_| ParseError::InvalidNumber { literal })?;

        Ok(if negative { -value } else { value })
    }
}

/// Parses a single line; blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    Parser::new(Lexer::new(line.to_owned())).parse_command()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let cases = vec![
            ("", None),
            ("   \n", None),
            ("env", Some(Command::Show)),
            (
                "x",
                Some(Command::Lookup {
                    name: "x".to_owned(),
                }),
            ),
            (
                "pi = 3.14159",
                Some(Command::Assign {
                    name: "pi".to_owned(),
                    value: 3.14159,
                }),
            ),
            (
                "x=-5",
                Some(Command::Assign {
                    name: "x".to_owned(),
                    value: -5.0,
                }),
            ),
            (
                "avogadro = 6.022e23\n",
                Some(Command::Assign {
                    name: "avogadro".to_owned(),
                    value: 6.022e23,
                }),
            ),
        ];

        for (input, expected) in cases.into_iter() {
            assert_eq!(parse_command(input), Ok(expected), "input: {:?}", input);
        }
    }

    #[test]
    fn test_parse_errors() {
        let cases = vec![
            (
                "x = y",
                ParseError::UnexpectedToken {
                    expected: TokenType::Number,
                    got: TokenType::Ident,
                },
            ),
            (
                "x =",
                ParseError::UnexpectedToken {
                    expected: TokenType::Number,
                    got: TokenType::Eof,
                },
            ),
            (
                "5",
                ParseError::UnexpectedToken {
                    expected: TokenType::Ident,
                    got: TokenType::Number,
                },
            ),
            (
                "x y",
                ParseError::UnexpectedToken {
                    expected: TokenType::Eof,
                    got: TokenType::Ident,
                },
            ),
            (
                "x = 1.2.3",
                ParseError::InvalidNumber {
                    literal: "1.2.3".to_owned(),
                },
            ),
            ("x = 1 + 2", ParseError::IllegalCharacter { ch: '+' }),
            ("x\0garbage junk", ParseError::IllegalCharacter { ch: '\0' }),
            ("x = \0", ParseError::IllegalCharacter { ch: '\0' }),
            ("x = é", ParseError::IllegalCharacter { ch: 'é' }),
            (
                "env = 5",
                ParseError::UnexpectedToken {
                    expected: TokenType::Eof,
                    got: TokenType::Assign,
                },
            ),
            (
                "= 2",
                ParseError::UnexpectedToken {
                    expected: TokenType::Ident,
                    got: TokenType::Assign,
                },
            ),
        ];

        for (input, expected) in cases.into_iter() {
            assert_eq!(parse_command(input), Err(expected), "input: {:?}", input);
        }
    }

    #[test]
    fn test_error_message() {
        let err = parse_command("x = y").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected next token to be Number, got Ident instead"
        );

        let err = parse_command("x = é").unwrap_err();
        assert_eq!(err.to_string(), "illegal character: 'é'");
    }
}
