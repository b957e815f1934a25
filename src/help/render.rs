use crate::api::{OptionDecl, SubcommandDecl};
use crate::constant::*;
use crate::help::style::{Enclosure, MicrosoftFormat, Padding, PosixFormat, Style, StyledText};

/// Accumulates one entry's name lines, tracking visible width separately so
/// ANSI styling never affects wrapping decisions.
struct LineBuilder {
    lines: Vec<(String, usize)>,
    line: String,
    size: usize,
}

impl LineBuilder {
    fn new(initial: &Padding) -> Self {
        Self {
            lines: Vec::default(),
            line: initial.render(0),
            size: initial.size(0),
        }
    }

    fn push(&mut self, text: &str, size: usize) {
        self.line.push_str(text);
        self.size += size;
    }

    /// Break the line before an incoming fragment that would overflow `width`.
    /// A fragment wider than the whole line is kept rather than wrapped forever.
    fn wrap_before(&mut self, incoming: usize, width: usize, wrap_pad: &Padding) {
        if self.size + incoming > width && self.size > wrap_pad.size(0) {
            let line = std::mem::replace(&mut self.line, wrap_pad.render(0));
            let size = std::mem::replace(&mut self.size, wrap_pad.size(0));
            self.lines.push((line, size));
        }
    }

    fn finish(mut self) -> Vec<(String, usize)> {
        self.lines.push((self.line, self.size));
        self.lines
    }
}

/// Append a separated name list, wrapping at `width` onto `wrap_pad` lines.
fn add_names<T>(
    builder: &mut LineBuilder,
    items: &[T],
    separator: &StyledText,
    wrap_pad: &Padding,
    width: usize,
    mut fragment: impl FnMut(usize, &T) -> (String, usize),
) {
    for (index, item) in items.iter().enumerate() {
        if index != 0 {
            builder.push(&separator.render(), separator.size());
        }

        let (text, size) = fragment(index, item);
        builder.wrap_before(size, width, wrap_pad);
        builder.push(&text, size);
    }
}

struct ParameterPieces<'f> {
    prefix_first: &'f StyledText,
    prefix: &'f StyledText,
    style: Style,
    mandatory: &'f Enclosure,
    optional: &'f Enclosure,
    enclose_before_prefix: bool,
}

impl ParameterPieces<'_> {
    /// Render one parameter name.  The enclosure is picked by the same back
    /// alignment rule the collector applies to defaults: the trailing
    /// `defaults` slots are optional, the rest mandatory.
    fn fragment(
        &self,
        index: usize,
        parameter: &str,
        parameters: usize,
        defaults: usize,
    ) -> (String, usize) {
        let optional = parameters.saturating_sub(defaults) < index + 1;
        let enclosure = if optional { self.optional } else { self.mandatory };
        let prefix = if index == 0 { self.prefix_first } else { self.prefix };
        let style = if enclosure.value_style == Style::PLAIN {
            self.style
        } else {
            enclosure.value_style
        };

        let text = if self.enclose_before_prefix {
            format!(
                "{}{}{}{}",
                prefix.render(),
                enclosure.prefix.render(),
                style.apply(parameter),
                enclosure.suffix.render()
            )
        } else {
            format!(
                "{}{}{}{}",
                enclosure.prefix.render(),
                prefix.render(),
                style.apply(parameter),
                enclosure.suffix.render()
            )
        };
        let size = prefix.size()
            + enclosure.prefix.size()
            + parameter.chars().count()
            + enclosure.suffix.size();

        (text, size)
    }
}

/// Attach the word-wrapped description to the finished name lines.
///
/// The description begins beside the last name line when that line leaves
/// room before the description column; otherwise, and for all wrapped
/// description lines, it continues on its own padded lines.
fn render_entry(
    name_lines: Vec<(String, usize)>,
    description: &str,
    description_width: usize,
    pad_description: &Padding,
    pad_description_wrapped: &Padding,
) -> Vec<String> {
    let wrapped = word_wrap(description, description_width);
    let beside = matches!(name_lines.last(), Some((_, size)) if *size <= pad_description.width);
    let last = name_lines.len().saturating_sub(1);
    let mut result = Vec::with_capacity(name_lines.len() + wrapped.len());

    for (index, (mut line, size)) in name_lines.into_iter().enumerate() {
        if beside && index == last {
            if let Some(first) = wrapped.first() {
                line.push_str(&pad_description.render(size));
                line.push_str(first);
            }
        }

        result.push(line);
    }

    let already_placed = if beside { 1 } else { 0 };

    for part in wrapped.iter().skip(already_placed) {
        result.push(format!("{}{}", pad_description_wrapped.render(0), part));
    }

    result
}

/// Greedy word wrap; words wider than the line are hyphenated.
pub(crate) fn word_wrap(paragraph: &str, width: usize) -> Vec<String> {
    let width = std::cmp::max(width, 2);
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.len() + word.len() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = width - 1;
    let mut left = 0;

    while left + increment + 1 < word.len() {
        lines.push(format!("{}-", &word[left..left + increment]));
        left += increment;
    }

    current.push_str(&word[left..]);
}

impl PosixFormat {
    /// Render the help lines for one option.
    pub fn option_lines(&self, option: &OptionDecl) -> Vec<String> {
        let mut builder = LineBuilder::new(&self.pad_short_names);
        let separate = !option.short_names.is_empty() && !option.long_names.is_empty();

        if self.long_names_first {
            self.add_long_names(&mut builder, option);
            if separate {
                builder.push(
                    &self.short_and_long_separator.render(),
                    self.short_and_long_separator.size(),
                );
            }
            self.add_short_names(&mut builder, option);
        } else {
            self.add_short_names(&mut builder, option);
            if separate {
                builder.push(
                    &self.short_and_long_separator.render(),
                    self.short_and_long_separator.size(),
                );
            }
            self.add_long_names(&mut builder, option);
        }

        self.add_parameters(&mut builder, &option.parameters, &option.defaults_from_back);

        render_entry(
            builder.finish(),
            &option.description,
            self.description_width,
            &self.pad_description,
            &self.pad_description_wrapped,
        )
    }

    /// Render the help lines for a list of options, in order.
    pub fn options_lines(&self, options: &[&OptionDecl]) -> Vec<String> {
        options
            .iter()
            .flat_map(|option| self.option_lines(option))
            .collect()
    }

    /// Render the help lines for one subcommand.
    pub fn subcommand_lines(&self, subcommand: &SubcommandDecl<'_>) -> Vec<String> {
        let mut builder = LineBuilder::new(&self.pad_subcommand);

        add_names(
            &mut builder,
            &subcommand.names,
            &self.subcommand_separator,
            &self.pad_subcommand,
            self.name_width,
            |_, name| {
                (
                    self.subcommand_style.apply(name),
                    name.chars().count(),
                )
            },
        );

        self.add_parameters(
            &mut builder,
            &subcommand.parameters,
            &subcommand.defaults_from_back,
        );

        render_entry(
            builder.finish(),
            &subcommand.description,
            self.description_width,
            &self.pad_description,
            &self.pad_description_wrapped,
        )
    }

    /// Render the help lines for a list of subcommands, in order.
    pub fn subcommands_lines(&self, subcommands: &[&SubcommandDecl<'_>]) -> Vec<String> {
        subcommands
            .iter()
            .flat_map(|subcommand| self.subcommand_lines(subcommand))
            .collect()
    }

    fn add_short_names(&self, builder: &mut LineBuilder, option: &OptionDecl) {
        add_names(
            builder,
            &option.short_names,
            &self.short_name_separator,
            &self.pad_short_names,
            self.name_width,
            |_, short| {
                (
                    format!(
                        "{}{}",
                        self.short_name_prefix_style.apply(SHORT_PREFIX),
                        self.short_name_style.apply(&short.to_string())
                    ),
                    2,
                )
            },
        );
    }

    fn add_long_names(&self, builder: &mut LineBuilder, option: &OptionDecl) {
        add_names(
            builder,
            &option.long_names,
            &self.long_name_separator,
            &self.pad_long_names,
            self.name_width,
            |_, long| {
                (
                    format!(
                        "{}{}",
                        self.long_name_prefix_style.apply(LONG_PREFIX),
                        self.long_name_style.apply(long)
                    ),
                    LONG_PREFIX.len() + long.chars().count(),
                )
            },
        );
    }

    fn add_parameters(&self, builder: &mut LineBuilder, parameters: &[String], defaults: &[String]) {
        let pieces = ParameterPieces {
            prefix_first: &self.parameter_prefix_first,
            prefix: &self.parameter_prefix,
            style: self.parameter_style,
            mandatory: &self.mandatory_enclosure,
            optional: &self.optional_enclosure,
            enclose_before_prefix: self.enclose_before_prefix,
        };

        add_names(
            builder,
            parameters,
            &self.parameter_separator,
            &self.pad_parameters_wrapped,
            self.name_width,
            |index, parameter| {
                pieces.fragment(index, parameter, parameters.len(), defaults.len())
            },
        );
    }
}

impl MicrosoftFormat {
    /// Render the help lines for one option, rendered as switches.
    pub fn option_lines(&self, option: &OptionDecl) -> Vec<String> {
        let mut builder = LineBuilder::new(&self.pad_switch);
        let separate = !option.short_names.is_empty() && !option.long_names.is_empty();

        if self.long_names_first {
            self.add_long_switches(&mut builder, option);
            if separate {
                builder.push(&self.switch_separator.render(), self.switch_separator.size());
            }
            self.add_short_switches(&mut builder, option);
        } else {
            self.add_short_switches(&mut builder, option);
            if separate {
                builder.push(&self.switch_separator.render(), self.switch_separator.size());
            }
            self.add_long_switches(&mut builder, option);
        }

        self.add_parameters(&mut builder, &option.parameters, &option.defaults_from_back);

        render_entry(
            builder.finish(),
            &option.description,
            self.description_width,
            &self.pad_description,
            &self.pad_description_wrapped,
        )
    }

    /// Render the help lines for a list of options, in order.
    pub fn options_lines(&self, options: &[&OptionDecl]) -> Vec<String> {
        options
            .iter()
            .flat_map(|option| self.option_lines(option))
            .collect()
    }

    /// Render the help lines for one subcommand.
    pub fn subcommand_lines(&self, subcommand: &SubcommandDecl<'_>) -> Vec<String> {
        let mut builder = LineBuilder::new(&self.pad_subcommand);

        add_names(
            &mut builder,
            &subcommand.names,
            &self.subcommand_separator,
            &self.pad_subcommand,
            self.name_width,
            |_, name| {
                (
                    self.subcommand_style.apply(name),
                    name.chars().count(),
                )
            },
        );

        self.add_parameters(
            &mut builder,
            &subcommand.parameters,
            &subcommand.defaults_from_back,
        );

        render_entry(
            builder.finish(),
            &subcommand.description,
            self.description_width,
            &self.pad_description,
            &self.pad_description_wrapped,
        )
    }

    /// Render the help lines for a list of subcommands, in order.
    pub fn subcommands_lines(&self, subcommands: &[&SubcommandDecl<'_>]) -> Vec<String> {
        subcommands
            .iter()
            .flat_map(|subcommand| self.subcommand_lines(subcommand))
            .collect()
    }

    fn switch_name(&self, name: &str) -> String {
        if self.uppercase_switch_names {
            name.to_uppercase()
        } else {
            name.to_string()
        }
    }

    fn add_short_switches(&self, builder: &mut LineBuilder, option: &OptionDecl) {
        add_names(
            builder,
            &option.short_names,
            &self.switch_separator,
            &self.pad_switch,
            self.name_width,
            |_, short| {
                (
                    format!(
                        "{}{}",
                        self.switch_prefix_style.apply(SWITCH_PREFIX),
                        self.switch_style.apply(&self.switch_name(&short.to_string()))
                    ),
                    2,
                )
            },
        );
    }

    fn add_long_switches(&self, builder: &mut LineBuilder, option: &OptionDecl) {
        add_names(
            builder,
            &option.long_names,
            &self.switch_separator,
            &self.pad_switch,
            self.name_width,
            |_, long| {
                (
                    format!(
                        "{}{}",
                        self.switch_prefix_style.apply(SWITCH_PREFIX),
                        self.switch_style.apply(&self.switch_name(long))
                    ),
                    SWITCH_PREFIX.len() + long.chars().count(),
                )
            },
        );
    }

    fn add_parameters(&self, builder: &mut LineBuilder, parameters: &[String], defaults: &[String]) {
        let pieces = ParameterPieces {
            prefix_first: &self.parameter_prefix_first,
            prefix: &self.parameter_prefix,
            style: self.parameter_style,
            mandatory: &self.mandatory_enclosure,
            optional: &self.optional_enclosure,
            enclose_before_prefix: self.enclose_before_prefix,
        };

        add_names(
            builder,
            parameters,
            &self.parameter_separator,
            &self.pad_parameters_wrapped,
            self.name_width,
            |index, parameter| {
                pieces.fragment(index, parameter, parameters.len(), defaults.len())
            },
        );
    }
}
