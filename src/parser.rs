mod base;
mod collector;
mod matcher;

pub use base::{parse, parse_env, parse_with, ParsedArgument};
