/// A recognizable option or switch, declared by the caller ahead of parsing.
///
/// The same declaration matches every accepted syntax: `--name` for each of
/// the `long_names`, `-c` for each of the `short_names`, and `/name` or `/c`
/// in the legacy switch style.
///
/// `defaults_from_back` covers the *trailing* parameter slots, leaving the
/// leading `parameters.len() - defaults_from_back.len()` slots mandatory.
/// This expresses the common "required head, optional tail" arrangement
/// without a per-parameter flag:
///
/// ```
/// use slashdash::OptionDecl;
///
/// let add = OptionDecl::new("Add a password.")
///     .long("add")
///     .short('a')
///     .parameter("id")
///     .parameter("password")
///     .parameter("encryption-key")
///     .parameter("require-password-to-decrypt")
///     .default_from_back("DEFAULT_ENCRYPTION_KEY")
///     .default_from_back("false");
/// # assert_eq!(add.defaults_from_back.len(), 2);
/// ```
///
/// Here `id` and `password` are mandatory; the last two slots fall back to
/// their defaults when omitted.
///
/// A trailing parameter of `...` (or `name...` to require at least one value)
/// makes the list variadic; variadic lists may not carry defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionDecl {
    /// Usage description, rendered into help output.
    pub description: String,
    /// Long names, such as `version` for the argument `--version`.
    ///
    /// Names of at least 2 characters are recommended; a 1 character long
    /// name competes with short names under the switch syntax, where the
    /// short name is always tried first.
    pub long_names: Vec<String>,
    /// Short names, such as `v` for the argument `-v`.
    pub short_names: Vec<char>,
    /// Names of the parameters this option collects values for.
    pub parameters: Vec<String>,
    /// Default values for the trailing parameters, in forward order.
    pub defaults_from_back: Vec<String>,
}

impl OptionDecl {
    /// Create an option declaration with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Add a long name.
    pub fn long(mut self, name: impl Into<String>) -> Self {
        self.long_names.push(name.into());
        self
    }

    /// Add a short name.
    pub fn short(mut self, name: char) -> Self {
        self.short_names.push(name);
        self
    }

    /// Add a parameter.
    pub fn parameter(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(name.into());
        self
    }

    /// Add a default value for the next uncovered trailing parameter.
    pub fn default_from_back(mut self, value: impl Into<String>) -> Self {
        self.defaults_from_back.push(value.into());
        self
    }
}

/// A named subcommand, possibly carrying nested subcommands of its own.
///
/// Subcommands hold borrowed references into caller owned declarations, so a
/// command tree of any depth (`program remote add ...`) is built bottom up
/// and shared read-only with the parser for the duration of one call.
///
/// While a subcommand is active, its `options` shadow the global option set.
/// When `subcommands` is non-empty the subcommand is a pure branch point:
/// `parameters` and `defaults_from_back` are ignored and value collection is
/// left to the leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubcommandDecl<'d> {
    /// Usage description, rendered into help output.
    pub description: String,
    /// Command names, such as `get` for the invocation `program get`.
    pub names: Vec<String>,
    /// Names of the parameters this subcommand collects values for.
    pub parameters: Vec<String>,
    /// Default values for the trailing parameters, in forward order.
    pub defaults_from_back: Vec<String>,
    /// Nested subcommands; non-empty turns this into a branch point.
    pub subcommands: Vec<&'d SubcommandDecl<'d>>,
    /// Options local to this subcommand, shadowing the global set.
    pub options: Vec<&'d OptionDecl>,
}

impl<'d> SubcommandDecl<'d> {
    /// Create a subcommand declaration with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Add a command name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add a parameter.
    pub fn parameter(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(name.into());
        self
    }

    /// Add a default value for the next uncovered trailing parameter.
    pub fn default_from_back(mut self, value: impl Into<String>) -> Self {
        self.defaults_from_back.push(value.into());
        self
    }

    /// Nest a subcommand.
    pub fn subcommand(mut self, subcommand: &'d SubcommandDecl<'d>) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    /// Add a subcommand local option.
    pub fn option(mut self, option: &'d OptionDecl) -> Self {
        self.options.push(option);
        self
    }
}
