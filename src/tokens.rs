mod model;
mod normalize;

pub use model::{Span, Token};

pub(crate) use normalize::normalize;
