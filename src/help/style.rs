use terminal_size::{terminal_size, Width};

use crate::constant::*;

pub(crate) const RESET: &str = "\x1b[0m";

/// An ANSI escape sequence applied around a fragment of help text.
///
/// The default (empty) style leaves text untouched, so help output stays
/// plain unless a format is explicitly colored.  Styles never count toward
/// measured widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style(
    /// The escape sequence introducing the style; empty for plain text.
    pub &'static str,
);

impl Style {
    /// No styling.
    pub const PLAIN: Style = Style("");
    /// Bold.
    pub const BOLD: Style = Style("\x1b[1m");
    /// Dim.
    pub const DIM: Style = Style("\x1b[2m");
    /// Italic.
    pub const ITALIC: Style = Style("\x1b[3m");
    /// Underline.
    pub const UNDERLINE: Style = Style("\x1b[4m");
    /// Red foreground.
    pub const RED: Style = Style("\x1b[31m");
    /// Green foreground.
    pub const GREEN: Style = Style("\x1b[32m");
    /// Yellow foreground.
    pub const YELLOW: Style = Style("\x1b[33m");
    /// Blue foreground.
    pub const BLUE: Style = Style("\x1b[34m");
    /// Magenta foreground.
    pub const MAGENTA: Style = Style("\x1b[35m");
    /// Cyan foreground.
    pub const CYAN: Style = Style("\x1b[36m");

    /// Wrap `text` in this style, resetting afterwards.
    pub fn apply(&self, text: &str) -> String {
        if self.0.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.0, text, RESET)
        }
    }
}

/// A text fragment with its display style.
///
/// Width is always measured on the bare text, never the escape sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    /// The text itself.
    pub value: String,
    /// Style applied when rendering.
    pub style: Style,
}

impl StyledText {
    /// A styled fragment.
    pub fn new(value: impl Into<String>, style: Style) -> Self {
        Self {
            value: value.into(),
            style,
        }
    }

    /// An unstyled fragment.
    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(value, Style::PLAIN)
    }

    pub(crate) fn render(&self) -> String {
        self.style.apply(&self.value)
    }

    pub(crate) fn size(&self) -> usize {
        self.value.chars().count()
    }
}

/// Column filler built from first/mid/last elements.
///
/// `width` counts elements: a width of 1 renders only `mid`, 2 renders
/// `first` then `last`, and more render `first`, `width - 2` repetitions of
/// `mid`, then `last`.  Rendering can subtract the space already occupied on
/// the line, which is how description columns line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Padding {
    /// The leading element.
    pub first: StyledText,
    /// The repeated middle element.
    pub mid: StyledText,
    /// The trailing element.
    pub last: StyledText,
    /// Element count.
    pub width: usize,
}

impl Padding {
    /// Plain spaces at the given width.
    pub fn spaces(width: usize) -> Self {
        Self {
            first: StyledText::plain(" "),
            mid: StyledText::plain(" "),
            last: StyledText::plain(" "),
            width,
        }
    }

    pub(crate) fn render(&self, subtract: usize) -> String {
        if subtract > self.width {
            return String::default();
        }

        match self.width - subtract {
            0 => String::default(),
            1 => self.mid.render(),
            2 => format!("{}{}", self.first.render(), self.last.render()),
            n => format!(
                "{}{}{}",
                self.first.render(),
                self.mid.style.apply(&self.mid.value.repeat(n - 2)),
                self.last.render()
            ),
        }
    }

    pub(crate) fn size(&self, subtract: usize) -> usize {
        if subtract > self.width {
            return 0;
        }

        match self.width - subtract {
            0 => 0,
            1 => self.mid.size(),
            2 => self.first.size() + self.last.size(),
            n => self.first.size() + self.mid.size() * (n - 2) + self.last.size(),
        }
    }
}

/// Prefix/suffix pair drawn around a parameter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    /// Rendered before the parameter name.
    pub prefix: StyledText,
    /// Rendered after the parameter name.
    pub suffix: StyledText,
    /// Style for the parameter name itself.
    pub value_style: Style,
}

impl Enclosure {
    /// No enclosure; the name renders as-is.
    pub fn bare() -> Self {
        Self {
            prefix: StyledText::plain(""),
            suffix: StyledText::plain(""),
            value_style: Style::PLAIN,
        }
    }

    /// Square brackets, the conventional optional marker.
    pub fn brackets() -> Self {
        Self {
            prefix: StyledText::plain("["),
            suffix: StyledText::plain("]"),
            value_style: Style::PLAIN,
        }
    }

    pub(crate) fn render(&self, content: &str) -> String {
        format!(
            "{}{}{}",
            self.prefix.render(),
            self.value_style.apply(content),
            self.suffix.render()
        )
    }

    pub(crate) fn size(&self, content: &str) -> usize {
        self.prefix.size() + content.chars().count() + self.suffix.size()
    }
}

/// Help layout for POSIX-style options (`-x, --long=PARAM [OPTIONAL]`).
///
/// Every knob of the rendering is exposed: per column paddings, separators,
/// parameter prefixes, the mandatory/optional enclosures (chosen by the same
/// back-alignment rule the parser applies to defaults), and the two wrap
/// widths.  The defaults produce plain 80 column output with a dotted leader
/// in front of descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosixFormat {
    /// Indentation of the short name column; also the wrap padding for short
    /// names.
    pub pad_short_names: Padding,
    /// Wrap padding aligning continuation lines under the long name column.
    pub pad_long_names: Padding,
    /// Indentation of subcommand names.
    pub pad_subcommand: Padding,
    /// Wrap padding for parameter continuation lines.
    pub pad_parameters_wrapped: Padding,
    /// Column filler between the names and the first description line.
    pub pad_description: Padding,
    /// Column filler for wrapped description lines.
    pub pad_description_wrapped: Padding,
    /// Style for the `-` prefix before a short name.
    pub short_name_prefix_style: Style,
    /// Style for a short name.
    pub short_name_style: Style,
    /// Style for the `--` prefix before a long name.
    pub long_name_prefix_style: Style,
    /// Style for a long name.
    pub long_name_style: Style,
    /// Separator between short names.
    pub short_name_separator: StyledText,
    /// Separator between long names.
    pub long_name_separator: StyledText,
    /// Separator between the short name group and the long name group.
    pub short_and_long_separator: StyledText,
    /// Style for a subcommand name.
    pub subcommand_style: Style,
    /// Separator between subcommand names.
    pub subcommand_separator: StyledText,
    /// Prefix before the first parameter name.
    pub parameter_prefix_first: StyledText,
    /// Prefix before every other parameter name.
    pub parameter_prefix: StyledText,
    /// Style for a parameter name.
    pub parameter_style: Style,
    /// Separator between parameter names.
    pub parameter_separator: StyledText,
    /// Enclosure for parameters in the mandatory prefix.
    pub mandatory_enclosure: Enclosure,
    /// Enclosure for parameters covered by a default.
    pub optional_enclosure: Enclosure,
    /// Render the enclosure prefix before the parameter prefix.
    pub enclose_before_prefix: bool,
    /// List long names before short names.
    pub long_names_first: bool,
    /// Wrap width for the name list.
    pub name_width: usize,
    /// Wrap width for description text.
    pub description_width: usize,
}

impl Default for PosixFormat {
    fn default() -> Self {
        Self {
            pad_short_names: Padding::spaces(2),
            pad_long_names: Padding::spaces(6),
            pad_subcommand: Padding::spaces(4),
            pad_parameters_wrapped: Padding::spaces(6),
            pad_description: Padding {
                first: StyledText::plain(" "),
                mid: StyledText::plain("."),
                last: StyledText::plain(" "),
                width: 40,
            },
            pad_description_wrapped: Padding {
                first: StyledText::plain(" "),
                mid: StyledText::plain(" "),
                // Two characters here, hence the one-short width below.
                last: StyledText::plain(". "),
                width: 39,
            },
            short_name_prefix_style: Style::PLAIN,
            short_name_style: Style::PLAIN,
            long_name_prefix_style: Style::PLAIN,
            long_name_style: Style::PLAIN,
            short_name_separator: StyledText::plain(", "),
            long_name_separator: StyledText::plain(", "),
            short_and_long_separator: StyledText::plain(", "),
            subcommand_style: Style::PLAIN,
            subcommand_separator: StyledText::plain("|"),
            parameter_prefix_first: StyledText::plain("="),
            parameter_prefix: StyledText::plain(""),
            parameter_style: Style::PLAIN,
            parameter_separator: StyledText::plain(" "),
            mandatory_enclosure: Enclosure::bare(),
            optional_enclosure: Enclosure::brackets(),
            enclose_before_prefix: false,
            long_names_first: false,
            name_width: DEFAULT_NAME_WIDTH,
            description_width: DEFAULT_POSIX_DESCRIPTION_WIDTH,
        }
    }
}

impl PosixFormat {
    /// The default format, with the name width clamped to the live terminal.
    pub fn terminal() -> Self {
        let mut format = Self::default();

        if let Some((Width(width), _)) = terminal_size() {
            format.name_width = std::cmp::min(format.name_width, width as usize);
        }

        format
    }
}

/// Help layout for legacy Microsoft-style switches (`/X[:PARAM]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicrosoftFormat {
    /// Indentation of the switch column; also the wrap padding for switches.
    pub pad_switch: Padding,
    /// Indentation of subcommand names.
    pub pad_subcommand: Padding,
    /// Wrap padding for parameter continuation lines.
    pub pad_parameters_wrapped: Padding,
    /// Column filler between the names and the first description line.
    pub pad_description: Padding,
    /// Column filler for wrapped description lines.
    pub pad_description_wrapped: Padding,
    /// Style for the `/` prefix before a switch name.
    pub switch_prefix_style: Style,
    /// Style for a switch name.
    pub switch_style: Style,
    /// Separator between switch names.
    pub switch_separator: StyledText,
    /// Style for a subcommand name.
    pub subcommand_style: Style,
    /// Separator between subcommand names.
    pub subcommand_separator: StyledText,
    /// Prefix before the first parameter name.
    pub parameter_prefix_first: StyledText,
    /// Prefix before every other parameter name.
    pub parameter_prefix: StyledText,
    /// Style for a parameter name.
    pub parameter_style: Style,
    /// Separator between parameter names.
    pub parameter_separator: StyledText,
    /// Enclosure for parameters in the mandatory prefix.
    pub mandatory_enclosure: Enclosure,
    /// Enclosure for parameters covered by a default.
    pub optional_enclosure: Enclosure,
    /// Render the enclosure prefix before the parameter prefix.
    pub enclose_before_prefix: bool,
    /// List long names before short names.
    pub long_names_first: bool,
    /// Render switch names in uppercase.
    pub uppercase_switch_names: bool,
    /// Wrap width for the name list.
    pub name_width: usize,
    /// Wrap width for description text.
    pub description_width: usize,
}

impl Default for MicrosoftFormat {
    fn default() -> Self {
        Self {
            pad_switch: Padding::spaces(0),
            pad_subcommand: Padding::spaces(4),
            pad_parameters_wrapped: Padding::spaces(6),
            pad_description: Padding::spaces(8),
            pad_description_wrapped: Padding::spaces(8),
            switch_prefix_style: Style::PLAIN,
            switch_style: Style::PLAIN,
            switch_separator: StyledText::plain(", "),
            subcommand_style: Style::PLAIN,
            subcommand_separator: StyledText::plain("|"),
            parameter_prefix_first: StyledText::plain(":"),
            parameter_prefix: StyledText::plain(""),
            parameter_style: Style::PLAIN,
            parameter_separator: StyledText::plain(" "),
            mandatory_enclosure: Enclosure::bare(),
            optional_enclosure: Enclosure::brackets(),
            enclose_before_prefix: false,
            long_names_first: false,
            uppercase_switch_names: true,
            name_width: DEFAULT_NAME_WIDTH,
            description_width: DEFAULT_SWITCH_DESCRIPTION_WIDTH,
        }
    }
}

impl MicrosoftFormat {
    /// The default format, with the name width clamped to the live terminal.
    pub fn terminal() -> Self {
        let mut format = Self::default();

        if let Some((Width(width), _)) = terminal_size() {
            format.name_width = std::cmp::min(format.name_width, width as usize);
        }

        format
    }
}
