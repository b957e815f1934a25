use thiserror::Error;

use crate::api::decl::{OptionDecl, SubcommandDecl};
use crate::model::Variadicity;

/// A rule broken by the caller's option/subcommand declarations.
///
/// These are programmer errors in the command line surface itself, so they
/// abort the parse before any token is examined.  The walk visits options in
/// declaration order, then subcommands recursively (own rules first, then
/// local options, then nested subcommands one depth further), and reports the
/// first violation found.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An option declares more defaults than parameters.
    #[error("option {index}: more defaults than parameters (defaults={defaults}, parameters={parameters})")]
    OptionDefaultsExceedParameters {
        /// Position of the option within its declaration list.
        index: usize,
        /// Number of declared defaults.
        defaults: usize,
        /// Number of declared parameters.
        parameters: usize,
    },

    /// An option declares a variadic parameter before the end of the list.
    #[error("option {index}: parameter {position} is variadic but not last")]
    OptionVariadicNotLast {
        /// Position of the option within its declaration list.
        index: usize,
        /// Position of the offending parameter.
        position: usize,
    },

    /// An option combines a variadic parameter list with defaults.
    #[error("option {index}: defaults combined with a variadic parameter")]
    OptionDefaultsWithVariadic {
        /// Position of the option within its declaration list.
        index: usize,
    },

    /// A subcommand declares more defaults than parameters.
    #[error("subcommand {index} (depth {depth}): more defaults than parameters (defaults={defaults}, parameters={parameters})")]
    SubcommandDefaultsExceedParameters {
        /// Position of the subcommand within its declaration list.
        index: usize,
        /// Nesting depth; the top level list is depth 0.
        depth: usize,
        /// Number of declared defaults.
        defaults: usize,
        /// Number of declared parameters.
        parameters: usize,
    },

    /// A subcommand declares a variadic parameter before the end of the list.
    #[error("subcommand {index} (depth {depth}): parameter {position} is variadic but not last")]
    SubcommandVariadicNotLast {
        /// Position of the subcommand within its declaration list.
        index: usize,
        /// Nesting depth; the top level list is depth 0.
        depth: usize,
        /// Position of the offending parameter.
        position: usize,
    },

    /// A subcommand combines a variadic parameter list with defaults.
    #[error("subcommand {index} (depth {depth}): defaults combined with a variadic parameter")]
    SubcommandDefaultsWithVariadic {
        /// Position of the subcommand within its declaration list.
        index: usize,
        /// Nesting depth; the top level list is depth 0.
        depth: usize,
    },

    /// A subcommand combines a variadic parameter list with nesting.
    #[error("subcommand {index} (depth {depth}): nested subcommands combined with a variadic parameter")]
    SubcommandVariadicWithNested {
        /// Position of the subcommand within its declaration list.
        index: usize,
        /// Nesting depth; the top level list is depth 0.
        depth: usize,
    },
}

enum Violation {
    DefaultsExceedParameters { defaults: usize, parameters: usize },
    VariadicNotLast { position: usize },
    DefaultsWithVariadic,
}

fn check_parameters(parameters: &[String], defaults: &[String]) -> Result<(), Violation> {
    if defaults.len() > parameters.len() {
        return Err(Violation::DefaultsExceedParameters {
            defaults: defaults.len(),
            parameters: parameters.len(),
        });
    }

    for (position, parameter) in parameters.iter().enumerate() {
        if Variadicity::of(parameter) != Variadicity::NotVariadic
            && position + 1 != parameters.len()
        {
            return Err(Violation::VariadicNotLast { position });
        }
    }

    if Variadicity::of_parameters(parameters) != Variadicity::NotVariadic && !defaults.is_empty() {
        return Err(Violation::DefaultsWithVariadic);
    }

    Ok(())
}

fn check_options(options: &[&OptionDecl]) -> Result<(), ConfigError> {
    for (index, option) in options.iter().enumerate() {
        check_parameters(&option.parameters, &option.defaults_from_back).map_err(|violation| {
            match violation {
                Violation::DefaultsExceedParameters {
                    defaults,
                    parameters,
                } => ConfigError::OptionDefaultsExceedParameters {
                    index,
                    defaults,
                    parameters,
                },
                Violation::VariadicNotLast { position } => {
                    ConfigError::OptionVariadicNotLast { index, position }
                }
                Violation::DefaultsWithVariadic => {
                    ConfigError::OptionDefaultsWithVariadic { index }
                }
            }
        })?;
    }

    Ok(())
}

fn check_subcommands(subcommands: &[&SubcommandDecl<'_>], depth: usize) -> Result<(), ConfigError> {
    for (index, subcommand) in subcommands.iter().enumerate() {
        check_parameters(&subcommand.parameters, &subcommand.defaults_from_back).map_err(
            |violation| match violation {
                Violation::DefaultsExceedParameters {
                    defaults,
                    parameters,
                } => ConfigError::SubcommandDefaultsExceedParameters {
                    index,
                    depth,
                    defaults,
                    parameters,
                },
                Violation::VariadicNotLast { position } => ConfigError::SubcommandVariadicNotLast {
                    index,
                    depth,
                    position,
                },
                Violation::DefaultsWithVariadic => {
                    ConfigError::SubcommandDefaultsWithVariadic { index, depth }
                }
            },
        )?;

        if Variadicity::of_parameters(&subcommand.parameters) != Variadicity::NotVariadic
            && !subcommand.subcommands.is_empty()
        {
            return Err(ConfigError::SubcommandVariadicWithNested { index, depth });
        }

        check_options(&subcommand.options)?;
        check_subcommands(&subcommand.subcommands, depth + 1)?;
    }

    Ok(())
}

/// Walk the full declaration forest, reporting the first broken rule.
pub(crate) fn check(
    options: &[&OptionDecl],
    subcommands: &[&SubcommandDecl<'_>],
) -> Result<(), ConfigError> {
    check_options(options)?;
    check_subcommands(subcommands, 0)
}
