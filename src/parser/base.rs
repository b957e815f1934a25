use crate::api::{check, ConfigError, OptionDecl, SubcommandDecl};
use crate::model::{ArgumentType, Validity};
use crate::parser::collector::collect_values;
use crate::parser::matcher::{match_subcommand, resolve_option};
use crate::tokens::{normalize, Token};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The outcome for one recognized (or passed-through) token.
///
/// Every top level token of the normalized stream produces exactly one of
/// these, in order; tokens consumed as parameter values fold into the owning
/// entry's `values` instead of appearing on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgument<'d> {
    /// The normalized token this entry reports on.
    pub token: Token,
    /// The per token outcome.
    pub validity: Validity,
    /// False only for the `--` terminator and everything after it, which are
    /// reported [`Validity::Valid`] without having been interpreted.
    pub is_parsed: bool,
    /// The matched option, if this token named one.
    pub option: Option<&'d OptionDecl>,
    /// The matched subcommand, if this token named one.  Mutually exclusive
    /// with `option`.
    pub subcommand: Option<&'d SubcommandDecl<'d>>,
    /// Collected parameter values, including any back-filled defaults.
    pub values: Vec<String>,
}

impl<'d> ParsedArgument<'d> {
    fn unattached(token: Token, validity: Validity) -> Self {
        Self {
            token,
            validity,
            is_parsed: true,
            option: None,
            subcommand: None,
            values: Vec::default(),
        }
    }

    fn unparsed(token: Token) -> Self {
        Self {
            token,
            validity: Validity::Valid,
            is_parsed: false,
            option: None,
            subcommand: None,
            values: Vec::default(),
        }
    }
}

/// Parse command line arguments against the declared options and subcommands,
/// matching Microsoft-style switches case insensitively.
///
/// `args` excludes the program name.  The declarations are only borrowed for
/// the duration of the call; the result references them but never copies
/// them.  Declaration mistakes surface as a [`ConfigError`] before any token
/// is examined; user input problems surface per token through
/// [`Validity`].
///
/// ```
/// use slashdash::{parse, OptionDecl, Validity};
///
/// let verbose = OptionDecl::new("Noisy output.").long("verbose").short('v');
/// let args = vec!["--verbose".to_string()];
///
/// let result = parse(&args, &[&verbose], &[]).unwrap();
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].validity, Validity::Valid);
/// ```
pub fn parse<'d, S: AsRef<str>>(
    args: &[S],
    options: &[&'d OptionDecl],
    subcommands: &[&'d SubcommandDecl<'d>],
) -> Result<Vec<ParsedArgument<'d>>, ConfigError> {
    parse_with(args, options, subcommands, true)
}

/// [`parse`], with explicit control over switch case sensitivity.
///
/// The flag only affects Microsoft-style switch names; POSIX long and short
/// names always match case sensitively.
pub fn parse_with<'d, S: AsRef<str>>(
    args: &[S],
    options: &[&'d OptionDecl],
    subcommands: &[&'d SubcommandDecl<'d>],
    switch_insensitive: bool,
) -> Result<Vec<ParsedArgument<'d>>, ConfigError> {
    check(options, subcommands)?;

    let tokens = normalize(args);

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Normalized {} arguments into {} tokens.",
            args.len(),
            tokens.len()
        );
    }

    let mut result = Vec::with_capacity(tokens.len());
    let mut current_subcommand: Option<&'d SubcommandDecl<'d>> = None;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        if token.arg_type == ArgumentType::DoubleHyphen {
            break;
        }

        if token.arg_type == ArgumentType::RegularArgument {
            let scope = match current_subcommand {
                Some(subcommand) => subcommand.subcommands.as_slice(),
                None => subcommands,
            };

            match match_subcommand(token, scope) {
                None => {
                    result.push(ParsedArgument::unattached(
                        token.clone(),
                        Validity::UnrecognizedSubcommand,
                    ));
                }
                Some(matched) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token '{}' matched a subcommand.", token.modified);
                    }

                    // A branch point leaves value collection to its leaves.
                    let (values, validity, consumed) = if matched.subcommands.is_empty() {
                        let collected = collect_values(
                            &tokens,
                            i + 1,
                            &matched.parameters,
                            &matched.defaults_from_back,
                        );
                        let validity = if collected.satisfied {
                            Validity::Valid
                        } else {
                            Validity::NotEnoughValues
                        };
                        (collected.values, validity, collected.consumed)
                    } else {
                        (Vec::default(), Validity::Valid, 0)
                    };

                    result.push(ParsedArgument {
                        token: token.clone(),
                        validity,
                        is_parsed: true,
                        option: None,
                        subcommand: Some(matched),
                        values,
                    });
                    current_subcommand = Some(matched);
                    i += consumed;
                }
            }

            i += 1;
            continue;
        }

        match resolve_option(token, current_subcommand, options, switch_insensitive) {
            None => {
                result.push(ParsedArgument::unattached(
                    token.clone(),
                    Validity::UnrecognizedOption,
                ));
            }
            Some(matched) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token '{}' matched an option.", token.modified);
                }

                let collected = collect_values(
                    &tokens,
                    i + 1,
                    &matched.parameters,
                    &matched.defaults_from_back,
                );
                let validity = if collected.satisfied {
                    Validity::Valid
                } else {
                    Validity::NotEnoughValues
                };

                result.push(ParsedArgument {
                    token: token.clone(),
                    validity,
                    is_parsed: true,
                    option: Some(matched),
                    subcommand: None,
                    values: collected.values,
                });
                i += collected.consumed;
            }
        }

        i += 1;
    }

    // The terminator and everything after it pass through uninterpreted.
    for token in &tokens[i..] {
        result.push(ParsedArgument::unparsed(token.clone()));
    }

    Ok(result)
}

/// Parse the process arguments, skipping the program name.
///
/// Convenience glue around [`parse`] for the common `main()` case.
pub fn parse_env<'d>(
    options: &[&'d OptionDecl],
    subcommands: &[&'d SubcommandDecl<'d>],
) -> Result<Vec<ParsedArgument<'d>>, ConfigError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse(&args, options, subcommands)
}
