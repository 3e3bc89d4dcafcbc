use strum_macros::{Display, EnumDiscriminants};

#[derive(Debug, Display, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(derive(Hash, Display))]
#[strum_discriminants(name(TokenType))]
pub enum Token {
    Illegal(char),
    Eof,

    // Identifiers and literals
    Ident(String),
    Number(String),

    // Operators
    Assign,
    Minus,

    // Keywords
    Env,
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        match text {
            "env" => Self::Env,
            identifier => Self::Ident(identifier.to_owned()),
        }
    }
}

impl Token {
    pub fn is(&self, token_type: TokenType) -> bool {
        TokenType::from(self) == token_type
    }
}
