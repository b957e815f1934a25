use crate::constant::*;

/// The shape of a command line argument, decided by prefix inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentType {
    /// Trails the `--` terminator; passed through without interpretation.
    Unknown,
    /// A zero length argument.
    Empty,
    /// `-c`, possibly combined (`-abc`) or delimited (`-c=value`).
    ShortOption,
    /// `--name`, possibly delimited (`--name=value`).
    LongOption,
    /// `/name` or `/c`, possibly delimited (`/name:value`).
    MicrosoftSwitch,
    /// A lone `-`; only ever meaningful as a regular value.
    SingleHyphen,
    /// A lone `--`; ends option and subcommand recognition.
    DoubleHyphen,
    /// Anything else.
    RegularArgument,
}

impl ArgumentType {
    /// Classify a raw command line argument.
    pub fn classify(argument: &str) -> Self {
        if argument.is_empty() {
            return ArgumentType::Empty;
        }

        if let Some(rest) = argument.strip_prefix(LONG_PREFIX) {
            return if rest.is_empty() {
                ArgumentType::DoubleHyphen
            } else {
                ArgumentType::LongOption
            };
        }

        if let Some(rest) = argument.strip_prefix(SHORT_PREFIX) {
            return if rest.is_empty() {
                ArgumentType::SingleHyphen
            } else {
                ArgumentType::ShortOption
            };
        }

        if argument.starts_with(SWITCH_PREFIX) {
            return ArgumentType::MicrosoftSwitch;
        }

        ArgumentType::RegularArgument
    }

    /// Whether a token of this type may be consumed as a parameter value.
    pub(crate) fn is_value(&self) -> bool {
        matches!(
            self,
            ArgumentType::RegularArgument | ArgumentType::SingleHyphen
        )
    }
}

impl std::fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ArgumentType::Unknown => "unknown",
            ArgumentType::Empty => "empty",
            ArgumentType::ShortOption => "short_option",
            ArgumentType::LongOption => "long_option",
            ArgumentType::MicrosoftSwitch => "microsoft_switch",
            ArgumentType::SingleHyphen => "single_hyphen",
            ArgumentType::DoubleHyphen => "double_hyphen",
            ArgumentType::RegularArgument => "regular_argument",
        })
    }
}

/// Whether a trailing parameter consumes an unbounded number of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variadicity {
    /// An ordinary parameter, matched one value at a time.
    NotVariadic,
    /// The parameter is literally `...`; consumes any number of values.
    ZeroOrMore,
    /// The parameter name ends in `...`; requires at least one value.
    OneOrMore,
}

impl Variadicity {
    /// The variadicity declared by a single parameter name.
    pub fn of(parameter: &str) -> Self {
        if parameter == ELLIPSIS {
            Variadicity::ZeroOrMore
        } else if parameter.ends_with(ELLIPSIS) {
            Variadicity::OneOrMore
        } else {
            Variadicity::NotVariadic
        }
    }

    /// The variadicity of a parameter list; only the last entry may carry it.
    pub(crate) fn of_parameters(parameters: &[String]) -> Self {
        parameters
            .last()
            .map(|parameter| Variadicity::of(parameter))
            .unwrap_or(Variadicity::NotVariadic)
    }
}

impl std::fmt::Display for Variadicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Variadicity::NotVariadic => "not_variadic",
            Variadicity::ZeroOrMore => "zero_or_more",
            Variadicity::OneOrMore => "one_or_more",
        })
    }
}

/// The per token outcome of a parse.
///
/// These are user input problems, surfaced as data so the caller decides how
/// to react.  Mistakes in the declarations themselves are reported through
/// [`ConfigError`](crate::ConfigError) instead, before any token is examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validity {
    /// The token was recognized and its parameter requirements were met.
    Valid,
    /// An option shaped token matched no declared option.
    UnrecognizedOption,
    /// A regular token matched no subcommand in the current scope.
    UnrecognizedSubcommand,
    /// Fewer values than mandatory parameters were found.
    NotEnoughValues,
}

impl std::fmt::Display for Validity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Validity::Valid => "valid",
            Validity::UnrecognizedOption => "unrecognized_option",
            Validity::UnrecognizedSubcommand => "unrecognized_subcommand",
            Validity::NotEnoughValues => "not_enough_values",
        })
    }
}
