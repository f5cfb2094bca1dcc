mod commands;
mod completer;
mod context;
mod flags;
mod fs;
mod input;
mod tables;


pub use completer::Completer;
pub use context::{CompletionContext, TokenKind};
pub use tables::{Tables, FLAG_PREFIX, HOME_SHORTHAND};
