use assert_matches::assert_matches;
use rstest::rstest;

use slashdash::{
    parse, parse_with, ArgumentType, ConfigError, MicrosoftFormat, OptionDecl, ParsedArgument,
    PosixFormat, SubcommandDecl, Validity,
};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn no_arguments_parse_to_an_empty_result() {
    let verbose = OptionDecl::new("Noisy output.").long("verbose").short('v');
    let get = SubcommandDecl::new("Fetch a value.").name("get");

    let result = parse(&args(&[]), &[&verbose], &[&get]).unwrap();

    assert_eq!(result, Vec::<ParsedArgument<'_>>::default());
}

#[rstest]
#[case(&["--verbose"])]
#[case(&["-v"])]
#[case(&["/verbose"])]
#[case(&["/v"])]
#[case(&["/VERBOSE"])]
fn every_syntax_reaches_the_same_declaration(#[case] input: &[&str]) {
    let verbose = OptionDecl::new("Noisy output.").long("verbose").short('v');

    let result = parse(&args(input), &[&verbose], &[]).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].validity, Validity::Valid);
    assert!(result[0].is_parsed);
    assert!(std::ptr::eq(result[0].option.unwrap(), &verbose));
    assert_eq!(result[0].subcommand, None);
}

#[test]
fn combined_short_flags_match_like_separate_flags() {
    let a = OptionDecl::new("").short('a');
    let b = OptionDecl::new("").short('b');
    let c = OptionDecl::new("").short('c').parameter("value");
    let options = [&a, &b, &c];

    let combined = parse(&args(&["-abc", "x"]), &options, &[]).unwrap();
    let separate = parse(&args(&["-a", "-b", "-c", "x"]), &options, &[]).unwrap();

    assert_eq!(combined.len(), 3);
    assert_eq!(separate.len(), 3);

    for (combined, separate) in combined.iter().zip(separate.iter()) {
        assert!(std::ptr::eq(
            combined.option.unwrap(),
            separate.option.unwrap()
        ));
        assert_eq!(combined.validity, separate.validity);
        assert_eq!(combined.values, separate.values);
    }

    // The expansions share the original argument; the separate flags do not.
    assert!(combined.iter().all(|p| p.token.original == "-abc"));
    assert_eq!(combined[2].values, vec!["x"]);
}

#[test]
fn delimiter_splitting_uses_the_first_match_only() {
    let name = OptionDecl::new("").long("name").parameter("value");

    let result = parse(&args(&["--name=a=b"]), &[&name], &[]).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].validity, Validity::Valid);
    assert_eq!(result[0].values, vec!["a=b"]);
}

#[rstest]
#[case(&["--key=123"])]
#[case(&["--key:123"])]
#[case(&["-k=123"])]
#[case(&["-k:123"])]
#[case(&["/key=123"])]
#[case(&["/key:123"])]
#[case(&["/k:123"])]
#[case(&["--key", "123"])]
fn delimited_and_spaced_values_are_equivalent(#[case] input: &[&str]) {
    let key = OptionDecl::new("").long("key").short('k').parameter("value");

    let result = parse(&args(input), &[&key], &[]).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].validity, Validity::Valid);
    assert_eq!(result[0].values, vec!["123"]);
}

#[rstest]
// All four supplied.
#[case(&["--add", "id-0", "hunter2", "my-key", "true"],
       vec!["id-0", "hunter2", "my-key", "true"], Validity::Valid)]
// The trailing defaulted slots back-fill.
#[case(&["--add", "id-0", "hunter2"],
       vec!["id-0", "hunter2", "DEFAULT_ENCRYPTION_KEY", "false"], Validity::Valid)]
#[case(&["--add", "id-0", "hunter2", "my-key"],
       vec!["id-0", "hunter2", "my-key", "false"], Validity::Valid)]
// The mandatory prefix is unmet: no defaults apply.
#[case(&["--add", "id-0"], vec!["id-0"], Validity::NotEnoughValues)]
fn defaults_back_fill_the_trailing_parameters(
    #[case] input: &[&str],
    #[case] values: Vec<&str>,
    #[case] validity: Validity,
) {
    let add = OptionDecl::new("Add a password.")
        .long("add")
        .parameter("id")
        .parameter("password")
        .parameter("encryption-key")
        .parameter("require-password-to-decrypt")
        .default_from_back("DEFAULT_ENCRYPTION_KEY")
        .default_from_back("false");

    let result = parse(&args(input), &[&add], &[]).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].validity, validity);
    assert_eq!(result[0].values, values);
}

#[rstest]
#[case(&["--files"], vec![])]
#[case(&["--files", "a"], vec!["a"])]
#[case(&["--files", "a", "b", "c", "d", "e"], vec!["a", "b", "c", "d", "e"])]
fn zero_or_more_consumes_every_following_value(#[case] input: &[&str], #[case] values: Vec<&str>) {
    let files = OptionDecl::new("").long("files").parameter("...");

    let result = parse(&args(input), &[&files], &[]).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].validity, Validity::Valid);
    assert_eq!(result[0].values, values);
}

#[test]
fn one_or_more_requires_at_least_one_value() {
    let files = OptionDecl::new("").long("files").parameter("files...");

    let empty = parse(&args(&["--files"]), &[&files], &[]).unwrap();
    assert_eq!(empty[0].validity, Validity::NotEnoughValues);

    let supplied = parse(&args(&["--files", "a", "b"]), &[&files], &[]).unwrap();
    assert_eq!(supplied[0].validity, Validity::Valid);
    assert_eq!(supplied[0].values, vec!["a", "b"]);
}

#[test]
fn variadic_collection_still_stops_at_options() {
    let files = OptionDecl::new("").long("files").parameter("...");
    let verbose = OptionDecl::new("").long("verbose");

    let result = parse(
        &args(&["--files", "a", "b", "--verbose"]),
        &[&files, &verbose],
        &[],
    )
    .unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].values, vec!["a", "b"]);
    assert!(std::ptr::eq(result[1].option.unwrap(), &verbose));
}

#[test]
fn terminator_passes_everything_through_unparsed() {
    let opt = OptionDecl::new("").long("opt");

    let result = parse(&args(&["--opt", "--", "--opt"]), &[&opt], &[]).unwrap();

    assert_eq!(result.len(), 3);

    assert_eq!(result[0].validity, Validity::Valid);
    assert!(result[0].is_parsed);
    assert!(std::ptr::eq(result[0].option.unwrap(), &opt));

    assert_eq!(result[1].token.arg_type, ArgumentType::DoubleHyphen);
    assert_eq!(result[2].token.original, "--opt");
    assert_eq!(result[2].token.arg_type, ArgumentType::Unknown);

    for trailing in &result[1..] {
        assert_eq!(trailing.validity, Validity::Valid);
        assert!(!trailing.is_parsed);
        assert_eq!(trailing.option, None);
        assert_eq!(trailing.subcommand, None);
        assert_eq!(trailing.values, Vec::<String>::default());
    }
}

#[test]
fn collection_never_crosses_an_option_boundary() {
    let arg_1 = OptionDecl::new("")
        .long("arg-1")
        .parameter("a")
        .parameter("b");
    let arg_2 = OptionDecl::new("").long("arg-2");

    let result = parse(&args(&["--arg-1", "value", "--arg-2"]), &[&arg_1, &arg_2], &[]).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].validity, Validity::NotEnoughValues);
    assert_eq!(result[0].values, vec!["value"]);
    assert_eq!(result[1].validity, Validity::Valid);
    assert!(std::ptr::eq(result[1].option.unwrap(), &arg_2));
}

#[test]
fn excess_values_reappear_as_top_level_tokens() {
    let single = OptionDecl::new("").long("single").parameter("value");

    let result = parse(&args(&["--single", "one", "two"]), &[&single], &[]).unwrap();

    // The second value is not silently dropped; it surfaces as its own entry.
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].validity, Validity::Valid);
    assert_eq!(result[0].values, vec!["one"]);
    assert_eq!(result[1].validity, Validity::UnrecognizedSubcommand);
    assert_eq!(result[1].token.original, "two");
}

#[test]
fn a_single_hyphen_is_collected_as_a_value() {
    let input = OptionDecl::new("").long("input").parameter("file");

    let result = parse(&args(&["--input", "-"]), &[&input], &[]).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].values, vec!["-"]);
    assert_eq!(result[0].validity, Validity::Valid);
}

#[test]
fn subcommands_nest_and_collect_at_the_leaves() {
    let set = SubcommandDecl::new("Set a key.")
        .name("set")
        .parameter("key")
        .parameter("value");
    let config = SubcommandDecl::new("Configuration.")
        .name("config")
        .subcommand(&set);

    let result = parse(&args(&["config", "set", "retries", "3"]), &[], &[&config]).unwrap();

    assert_eq!(result.len(), 2);
    assert!(std::ptr::eq(result[0].subcommand.unwrap(), &config));
    // The branch point collects nothing; its leaf takes the values.
    assert_eq!(result[0].values, Vec::<String>::default());
    assert!(std::ptr::eq(result[1].subcommand.unwrap(), &set));
    assert_eq!(result[1].values, vec!["retries", "3"]);
    assert_eq!(result[1].validity, Validity::Valid);
}

#[test]
fn subcommand_defaults_follow_the_same_back_alignment() {
    let serve = SubcommandDecl::new("Serve.")
        .name("serve")
        .parameter("host")
        .parameter("port")
        .default_from_back("8080");

    let result = parse(&args(&["serve", "localhost"]), &[], &[&serve]).unwrap();

    assert_eq!(result[0].validity, Validity::Valid);
    assert_eq!(result[0].values, vec!["localhost", "8080"]);
}

#[test]
fn local_options_shadow_globals_while_a_subcommand_is_active() {
    let global_verbose = OptionDecl::new("Global.").long("verbose");
    let local_verbose = OptionDecl::new("Local.").long("verbose");
    let global_force = OptionDecl::new("Force.").long("force");
    let push = SubcommandDecl::new("Push.").name("push").option(&local_verbose);

    let result = parse(
        &args(&["--verbose", "push", "--verbose", "--force"]),
        &[&global_verbose, &global_force],
        &[&push],
    )
    .unwrap();

    assert_eq!(result.len(), 4);
    assert!(std::ptr::eq(result[0].option.unwrap(), &global_verbose));
    assert!(std::ptr::eq(result[1].subcommand.unwrap(), &push));
    assert!(std::ptr::eq(result[2].option.unwrap(), &local_verbose));
    // Unshadowed options still fall back to the global set.
    assert!(std::ptr::eq(result[3].option.unwrap(), &global_force));
}

#[test]
fn switch_matching_is_case_insensitive_unless_disabled() {
    let verbose = OptionDecl::new("").long("verbose");

    let insensitive = parse(&args(&["/VERBOSE"]), &[&verbose], &[]).unwrap();
    assert_eq!(insensitive[0].validity, Validity::Valid);

    let sensitive = parse_with(&args(&["/VERBOSE"]), &[&verbose], &[], false).unwrap();
    assert_eq!(sensitive[0].validity, Validity::UnrecognizedOption);
}

#[test]
fn posix_names_never_match_case_insensitively() {
    let verbose = OptionDecl::new("").long("verbose").short('v');

    let result = parse(&args(&["--VERBOSE", "-V"]), &[&verbose], &[]).unwrap();

    assert_eq!(result[0].validity, Validity::UnrecognizedOption);
    assert_eq!(result[1].validity, Validity::UnrecognizedOption);
}

#[test]
fn single_character_switches_try_short_names_first() {
    let long_s = OptionDecl::new("").long("s");
    let short_s = OptionDecl::new("").short('s');

    let result = parse(&args(&["/s"]), &[&long_s, &short_s], &[]).unwrap();

    assert!(std::ptr::eq(result[0].option.unwrap(), &short_s));
}

#[test]
fn unrecognized_input_is_reported_per_token() {
    let result = parse(&args(&["--mystery", "stray"]), &[], &[]).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].validity, Validity::UnrecognizedOption);
    assert_eq!(result[1].validity, Validity::UnrecognizedSubcommand);
    assert!(result.iter().all(|p| p.is_parsed));
}

#[test]
fn declaration_mistakes_abort_before_parsing() {
    let broken = OptionDecl::new("")
        .long("broken")
        .parameter("a")
        .default_from_back("x")
        .default_from_back("y");

    let error = parse(&args(&["--broken"]), &[&broken], &[]).unwrap_err();

    assert_eq!(
        error,
        ConfigError::OptionDefaultsExceedParameters {
            index: 0,
            defaults: 2,
            parameters: 1,
        }
    );
}

#[test]
fn nested_declaration_mistakes_identify_index_and_depth() {
    let leaf = SubcommandDecl::new("").name("leaf");
    let fine = SubcommandDecl::new("").name("fine");
    let broken = SubcommandDecl::new("")
        .name("broken")
        .parameter("...")
        .subcommand(&leaf);
    let root = SubcommandDecl::new("")
        .name("root")
        .subcommand(&fine)
        .subcommand(&broken);

    let error = parse(&args(&["root"]), &[], &[&root]).unwrap_err();

    assert_matches!(
        error,
        ConfigError::SubcommandVariadicWithNested { index: 1, depth: 1 }
    );
    assert!(error.to_string().contains("depth 1"));
}

#[rstest]
#[case(&["--broken"])]
#[case(&[])]
fn variadic_parameters_reject_defaults(#[case] input: &[&str]) {
    let broken = OptionDecl::new("")
        .long("broken")
        .parameter("files...")
        .default_from_back("x");

    let error = parse(&args(input), &[&broken], &[]).unwrap_err();

    assert_matches!(error, ConfigError::OptionDefaultsWithVariadic { index: 0 });
}

#[test]
fn help_profiles_render_the_same_declaration() {
    let add = OptionDecl::new("Add a password.")
        .long("add")
        .short('a')
        .parameter("id")
        .parameter("encryption-key")
        .default_from_back("DEFAULT_KEY");

    let posix = PosixFormat::default().option_lines(&add);
    assert_eq!(posix.len(), 1);
    assert!(posix[0].starts_with("  -a, --add=id [encryption-key] "));
    assert!(posix[0].ends_with(" Add a password."));

    let microsoft = MicrosoftFormat::default().option_lines(&add);
    assert_eq!(
        microsoft,
        vec![
            "/A, /ADD:id [encryption-key]".to_string(),
            "        Add a password.".to_string(),
        ]
    );
}

#[test]
fn help_lists_concatenate_declarations_in_order() {
    let verbose = OptionDecl::new("Noisy output.").long("verbose").short('v');
    let quiet = OptionDecl::new("No output.").long("quiet").short('q');
    let get = SubcommandDecl::new("Fetch a value.").name("get").parameter("key");

    let format = PosixFormat::default();
    let lines = format.options_lines(&[&verbose, &quiet]);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("-v, --verbose"));
    assert!(lines[1].contains("-q, --quiet"));

    let lines = format.subcommands_lines(&[&get]);
    assert!(lines[0].starts_with("    get=key "));
}

#[test]
fn results_can_drive_a_dispatch_loop() {
    // The shape of a realistic caller: walk the entries, react per validity.
    let verbose = OptionDecl::new("").long("verbose").short('v');
    let add = SubcommandDecl::new("")
        .name("add")
        .parameter("item")
        .parameter("quantity")
        .default_from_back("1");

    let result = parse(&args(&["-v", "add", "apples"]), &[&verbose], &[&add]).unwrap();

    let mut verbosity = 0;
    let mut added: Option<(String, u32)> = None;

    for parsed in &result {
        match parsed.validity {
            Validity::Valid => {
                if parsed.option.map(|o| std::ptr::eq(o, &verbose)).unwrap_or(false) {
                    verbosity += 1;
                } else if parsed.subcommand.is_some() {
                    let quantity = parsed.values[1].parse().unwrap();
                    added = Some((parsed.values[0].clone(), quantity));
                }
            }
            _ => panic!("unexpected outcome: {}", parsed.validity),
        }
    }

    assert_eq!(verbosity, 1);
    assert_eq!(added, Some(("apples".to_string(), 1)));
}
