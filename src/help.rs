mod render;
mod style;

pub use style::{Enclosure, MicrosoftFormat, Padding, PosixFormat, Style, StyledText};
