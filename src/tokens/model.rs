use crate::model::ArgumentType;

/// A byte range into one of a token's two renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Offset of the range start.
    pub pos: usize,
    /// Length of the range.
    pub len: usize,
}

impl Span {
    pub(crate) fn new(pos: usize, len: usize) -> Self {
        Self { pos, len }
    }

    /// Offset one past the range end.
    pub fn end(&self) -> usize {
        self.pos + self.len
    }
}

/// One normalized command line argument.
///
/// `original` is the argument exactly as received; `modified` is the text
/// after delimiter splitting and combined flag expansion.  Several tokens may
/// share one `original` while carrying disjoint `original_span`s, which is
/// enough to reconstruct where in the raw input a diagnostic points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The argument exactly as received.
    pub original: String,
    /// The normalized text this token represents.
    pub modified: String,
    /// Classification of the token.
    pub arg_type: ArgumentType,
    /// Where `modified` came from within `original`.
    pub original_span: Span,
    /// The interesting range within `modified`.
    pub modified_span: Span,
}

impl Token {
    /// A token covering an entire, untouched argument.
    pub(crate) fn whole(original: impl Into<String>, arg_type: ArgumentType) -> Self {
        let original = original.into();
        let span = Span::new(0, original.len());
        Self {
            modified: original.clone(),
            original,
            arg_type,
            original_span: span,
            modified_span: span,
        }
    }

    /// A token representing part of a split or expanded argument.
    pub(crate) fn fragment(
        original: impl Into<String>,
        modified: impl Into<String>,
        arg_type: ArgumentType,
        original_span: Span,
        modified_span: Span,
    ) -> Self {
        Self {
            original: original.into(),
            modified: modified.into(),
            arg_type,
            original_span,
            modified_span,
        }
    }
}
