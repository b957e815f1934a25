use crate::constant::*;
use crate::model::ArgumentType;
use crate::tokens::model::{Span, Token};

/// Normalize the raw argument list into the token stream the matcher runs on.
///
/// Two passes, both growing the list:
/// 1. Classify each argument and split option shaped ones at the first `=` or
///    `:`.  The head keeps the option's type and its range in the original;
///    the tail becomes a fresh value fragment.  A bare `--` stops the scan;
///    it keeps its own type and everything after it passes through untyped.
/// 2. Expand combined short flags, so `-abc` behaves exactly like `-a -b -c`.
///    Each expanded token points back at its character in the original.
pub(crate) fn normalize<S: AsRef<str>>(args: &[S]) -> Vec<Token> {
    let mut split = Vec::with_capacity(args.len());
    let mut terminator = None;

    for (index, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();
        let arg_type = ArgumentType::classify(arg);

        if arg_type == ArgumentType::DoubleHyphen {
            terminator = Some(index);
            break;
        }

        let delimiter = match arg_type {
            ArgumentType::LongOption
            | ArgumentType::ShortOption
            | ArgumentType::MicrosoftSwitch => arg.find(&VALUE_DELIMITERS[..]),
            _ => None,
        };

        match delimiter {
            None => split.push(Token::whole(arg, arg_type)),
            Some(pos) => {
                let head = &arg[..pos];
                let tail = &arg[pos + 1..];
                split.push(Token::fragment(
                    arg,
                    head,
                    arg_type,
                    Span::new(0, pos),
                    Span::new(0, head.len()),
                ));
                split.push(Token::fragment(
                    arg,
                    tail,
                    ArgumentType::RegularArgument,
                    Span::new(pos + 1, tail.len()),
                    Span::new(0, tail.len()),
                ));
            }
        }
    }

    if let Some(stop) = terminator {
        split.push(Token::whole(args[stop].as_ref(), ArgumentType::DoubleHyphen));

        for arg in &args[stop + 1..] {
            split.push(Token::whole(arg.as_ref(), ArgumentType::Unknown));
        }
    }

    let mut tokens = Vec::with_capacity(split.len());

    for token in split {
        if token.arg_type != ArgumentType::ShortOption || token.modified.len() <= 2 {
            tokens.push(token);
            continue;
        }

        for (offset, single) in token.modified.char_indices().skip(1) {
            tokens.push(Token::fragment(
                token.original.clone(),
                format!("{SHORT_PREFIX}{single}"),
                ArgumentType::ShortOption,
                Span::new(token.original_span.pos + offset, single.len_utf8()),
                Span::new(1, single.len_utf8()),
            ));
        }
    }

    tokens
}
