mod command;
mod constants;
mod env_error;
mod environment;
mod lexer;
pub mod repl;
mod token;

pub use command::{parse_command, Command, ParseError};
pub use constants::CONSTANTS;
pub use env_error::{EnvError, Result};
pub use environment::Environment;
pub use token::TokenType;
