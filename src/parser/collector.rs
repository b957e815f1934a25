use crate::model::Variadicity;
use crate::tokens::Token;

/// Values gathered for one matched option or subcommand.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Collected {
    /// Collected values, including any back-filled defaults.
    pub values: Vec<String>,
    /// Whether the mandatory portion of the parameter list was met.
    pub satisfied: bool,
    /// Number of tokens consumed from the stream.
    pub consumed: usize,
}

/// Consume value-eligible tokens starting at `tokens[from]` for the given
/// parameter list.
///
/// Non-variadic lists take at most one token per parameter; any shortfall is
/// covered by `defaults_from_back`, aligned so the defaults fill the *last*
/// slots, unless the shortfall reaches into the mandatory prefix, in which
/// case no defaults apply and the collection is unsatisfied.  Variadic lists
/// take every eligible token and ignore defaults; `OneOrMore` additionally
/// requires a value for its trailing parameter.
///
/// Eligible tokens beyond a satisfied non-variadic list are deliberately left
/// in the stream: they surface as top-level tokens on the next matcher
/// iteration rather than being dropped.
pub(crate) fn collect_values(
    tokens: &[Token],
    from: usize,
    parameters: &[String],
    defaults_from_back: &[String],
) -> Collected {
    let variadic = Variadicity::of_parameters(parameters);
    let mut values = Vec::default();

    for token in &tokens[from..] {
        if !token.arg_type.is_value() {
            break;
        }

        if variadic == Variadicity::NotVariadic && values.len() == parameters.len() {
            break;
        }

        values.push(token.modified.clone());
    }

    let consumed = values.len();

    let required = match variadic {
        Variadicity::NotVariadic => {
            let missing = parameters.len() - values.len();

            if missing > 0 && missing <= defaults_from_back.len() {
                let start = defaults_from_back.len() - missing;
                values.extend(defaults_from_back[start..].iter().cloned());
            }

            parameters.len()
        }
        Variadicity::OneOrMore => parameters.len(),
        Variadicity::ZeroOrMore => parameters.len() - 1,
    };

    Collected {
        satisfied: values.len() >= required,
        values,
        consumed,
    }
}
