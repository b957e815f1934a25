mod decl;
mod validate;

pub use decl::{OptionDecl, SubcommandDecl};
pub use validate::ConfigError;

pub(crate) use validate::check;
