use crate::api::{OptionDecl, SubcommandDecl};
use crate::model::ArgumentType;
use crate::tokens::Token;

/// Resolve an option shaped token, searching the active subcommand's local
/// options before the global set.  First declared match wins in either list.
pub(crate) fn resolve_option<'d>(
    token: &Token,
    current: Option<&'d SubcommandDecl<'d>>,
    globals: &[&'d OptionDecl],
    switch_insensitive: bool,
) -> Option<&'d OptionDecl> {
    if let Some(subcommand) = current {
        if let Some(found) = match_option(token, &subcommand.options, switch_insensitive) {
            return Some(found);
        }
    }

    match_option(token, globals, switch_insensitive)
}

/// Match an option shaped token against one declaration list.
///
/// POSIX long and short names always match exactly.  Microsoft-style switches
/// honor `switch_insensitive`, and a single character switch tries the short
/// names before the long names.
pub(crate) fn match_option<'d>(
    token: &Token,
    options: &[&'d OptionDecl],
    switch_insensitive: bool,
) -> Option<&'d OptionDecl> {
    match token.arg_type {
        ArgumentType::LongOption => match_long_names(options, &token.modified[2..], false),
        ArgumentType::ShortOption => {
            let short_name = token.modified.chars().nth(1)?;
            match_short_names(options, short_name, false)
        }
        ArgumentType::MicrosoftSwitch => {
            if token.modified.chars().count() == 2 {
                if let Some(short_name) = token.modified.chars().nth(1) {
                    if let Some(found) =
                        match_short_names(options, short_name, switch_insensitive)
                    {
                        return Some(found);
                    }
                }
            }

            match_long_names(options, &token.modified[1..], switch_insensitive)
        }
        _ => None,
    }
}

fn match_long_names<'d>(
    options: &[&'d OptionDecl],
    long_name: &str,
    insensitive: bool,
) -> Option<&'d OptionDecl> {
    options
        .iter()
        .find(|option| {
            option
                .long_names
                .iter()
                .any(|name| name == long_name || (insensitive && name.eq_ignore_ascii_case(long_name)))
        })
        .copied()
}

fn match_short_names<'d>(
    options: &[&'d OptionDecl],
    short_name: char,
    insensitive: bool,
) -> Option<&'d OptionDecl> {
    options
        .iter()
        .find(|option| {
            option
                .short_names
                .iter()
                .any(|name| *name == short_name || (insensitive && name.eq_ignore_ascii_case(&short_name)))
        })
        .copied()
}

/// Match a regular token against the subcommand list in scope, by exact name.
pub(crate) fn match_subcommand<'d>(
    token: &Token,
    subcommands: &[&'d SubcommandDecl<'d>],
) -> Option<&'d SubcommandDecl<'d>> {
    subcommands
        .iter()
        .find(|subcommand| subcommand.names.iter().any(|name| name == &token.modified))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn token(argument: &str) -> Token {
        crate::tokens::normalize(&[argument]).remove(0)
    }

    #[rstest]
    #[case("--verbose", true)]
    #[case("--Verbose", false)]
    #[case("--verbos", false)]
    #[case("-v", true)]
    #[case("-V", false)]
    #[case("-x", false)]
    fn posix_matching_is_exact(#[case] argument: &str, #[case] expected: bool) {
        let verbose = OptionDecl::new("").long("verbose").short('v');

        let found = match_option(&token(argument), &[&verbose], true);
        assert_eq!(found.is_some(), expected);
    }

    #[rstest]
    #[case("/verbose", true, true)]
    #[case("/VERBOSE", true, true)]
    #[case("/VERBOSE", false, false)]
    #[case("/v", true, true)]
    #[case("/V", true, true)]
    #[case("/V", false, false)]
    fn switch_matching_honors_the_flag(
        #[case] argument: &str,
        #[case] switch_insensitive: bool,
        #[case] expected: bool,
    ) {
        let verbose = OptionDecl::new("").long("verbose").short('v');

        let found = match_option(&token(argument), &[&verbose], switch_insensitive);
        assert_eq!(found.is_some(), expected);
    }

    #[test]
    fn single_character_switch_tries_short_names_first() {
        let long_s = OptionDecl::new("").long("s");
        let short_s = OptionDecl::new("").short('s');

        let found = match_option(&token("/s"), &[&long_s, &short_s], true).unwrap();
        assert!(std::ptr::eq(found, &short_s));
    }

    #[test]
    fn first_declared_option_wins() {
        let first = OptionDecl::new("").long("flag");
        let second = OptionDecl::new("").long("flag");

        let found = match_option(&token("--flag"), &[&first, &second], true).unwrap();
        assert!(std::ptr::eq(found, &first));
    }

    #[test]
    fn local_options_shadow_globals() {
        let global = OptionDecl::new("").long("verbose");
        let local = OptionDecl::new("").long("verbose");
        let subcommand = SubcommandDecl::new("").name("sub").option(&local);

        let found = resolve_option(&token("--verbose"), Some(&subcommand), &[&global], true).unwrap();
        assert!(std::ptr::eq(found, &local));

        let found = resolve_option(&token("--verbose"), None, &[&global], true).unwrap();
        assert!(std::ptr::eq(found, &global));
    }

    #[test]
    fn subcommand_matching_is_exact() {
        let get = SubcommandDecl::new("").name("get").name("fetch");

        assert!(match_subcommand(&token("fetch"), &[&get]).is_some());
        assert!(match_subcommand(&token("Fetch"), &[&get]).is_none());
        assert!(match_subcommand(&token("set"), &[&get]).is_none());
    }

    #[test]
    fn regular_tokens_never_match_options() {
        let verbose = OptionDecl::new("").long("verbose");

        assert!(match_option(&token("verbose"), &[&verbose], true).is_none());
        assert!(match_option(&token("-"), &[&verbose], true).is_none());
    }
}
