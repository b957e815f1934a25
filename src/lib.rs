//! `slashdash` is a declarative command line argument parser for Rust.
//!
//! Most argument parser crates own the whole interaction: they match, convert,
//! validate, and exit on error.  `slashdash` deliberately sits lower.  You
//! declare the surface of your command line (options, switches, subcommands,
//! parameters, defaults) and one pure function reports what each argument
//! turned out to be.  Nothing is converted, nothing is printed, and no process
//! is ever terminated on your behalf; every token's outcome is data you can
//! inspect.  We built it for programs that want full control over their error
//! reporting and for porting tools whose existing flag conventions (including
//! the old `/switch` style) must be preserved exactly.
//!
//! # Usage
//! ```
//! use slashdash::{parse, OptionDecl, Validity};
//!
//! let add = OptionDecl::new("Add a password.")
//!     .long("add")
//!     .short('a')
//!     .parameter("id")
//!     .parameter("password")
//!     .parameter("encryption-key")
//!     .default_from_back("DEFAULT_ENCRYPTION_KEY");
//!
//! let args: Vec<String> = vec!["--add".into(), "id-0".into(), "hunter2".into()];
//! let result = parse(&args, &[&add], &[]).unwrap();
//!
//! assert_eq!(result[0].validity, Validity::Valid);
//! assert_eq!(result[0].values, vec!["id-0", "hunter2", "DEFAULT_ENCRYPTION_KEY"]);
//! ```
//!
//! # Argument syntax
//! Both the POSIX style and the legacy Microsoft style are recognized, over
//! the same declarations:
//!
//! * A long option starts with `--` followed by one of the declared long
//!   names: `--long-name`.
//! * A short option starts with `-` followed by a declared short name
//!   character: `-a`.  Multiple short options combine into a single argument;
//!   `-abc` behaves exactly like `-a -b -c`.
//! * A switch starts with `/`.  `/name` matches the long names; a single
//!   character switch such as `/c` tries the short names first, then the long
//!   names.  Switch matching is case insensitive by default (see
//!   [`parse_with`]); POSIX matching never is.
//! * In all three shapes, the first `=` or `:` splits the argument into name
//!   and value: `--key=123`, `-k:123`, `/key=123`.  Only the first delimiter
//!   counts, so `--key=a=b` carries the value `a=b`.
//! * A bare `--` ends parsing; everything after it is passed through
//!   unexamined.  A bare `-` is an ordinary value.
//!
//! An option may declare parameters, which consume the following regular
//! arguments as values.  Trailing parameters covered by
//! [`OptionDecl::defaults_from_back`] are optional; the rest are mandatory,
//! and a shortfall is reported as [`Validity::NotEnoughValues`].  A final
//! parameter of `...` collects every remaining value (`name...` to require at
//! least one).
//!
//! Subcommands are matched by regular arguments, nest arbitrarily deep
//! (`program remote add ...`), and may carry local options that shadow the
//! global set while the subcommand is active.
//!
//! # Outcomes, not exceptions
//! A mistake in the *declarations* (more defaults than parameters, a variadic
//! parameter that is not last, defaults or nesting combined with a variadic
//! list) is a programmer error: [`parse`] refuses to run and returns a
//! [`ConfigError`] naming the offending declaration.  A mistake in the *input*
//! is the user's, and is never an error: each [`ParsedArgument`] carries a
//! [`Validity`] and the caller decides what to do.  Every argument produces
//! exactly one entry (values fold into the entry that consumed them), so the
//! outcome of the whole command line can always be audited token by token.
//!
//! # Help output
//! The declarations double as the help model.  [`PosixFormat`] renders
//! `-x, --long=PARAM [OPTIONAL]` style entries and [`MicrosoftFormat`]
//! renders `/X[:PARAM]` style entries; both expose every padding, separator,
//! enclosure, and wrap width, and can carry ANSI [`Style`]s that never upset
//! column alignment.  Rendering produces plain `Vec<String>` lines; printing
//! them is up to you.
//!
//! # Limitations
//! Short names are single `char`s and combined flag splitting works on ASCII;
//! multi byte short option names are unsupported.  The parser is a pure
//! function over borrowed, read-only declarations, so concurrent calls need
//! no synchronization.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events from the parse pipeline.
#![deny(missing_docs)]
mod api;
mod constant;
mod help;
mod model;
mod parser;
mod tokens;

pub use api::{ConfigError, OptionDecl, SubcommandDecl};
pub use help::{Enclosure, MicrosoftFormat, Padding, PosixFormat, Style, StyledText};
pub use model::{ArgumentType, Validity, Variadicity};
pub use parser::{parse, parse_env, parse_with, ParsedArgument};
pub use tokens::{Span, Token};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
