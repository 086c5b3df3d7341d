//! Help table for registered settings.
//!
//! Responsibilities:
//! - Render descriptors as aligned rows: name, type, description, default.
//! - Size the columns from the content and the terminal width.
//! - Colour the columns when writing to a terminal, unless `NO_COLOR` is non-empty.
//!
//! Does NOT handle:
//! - Machine-readable output.
//!
//! Invariants:
//! - Rows come out in the order given; callers pass `Registry::descriptors()`,
//!   which is sorted by name.
//! - Widths are measured in characters, so truncation never splits a UTF-8 sequence.
//! - Rendering degrades to plain text at 80 columns when terminal queries fail.

use std::ffi::OsStr;
use std::io::{self, IsTerminal, Write};

use crossterm::style::Stylize;

use crate::constants::{
    DEFAULT_TERMINAL_WIDTH, ELLIPSIS, FIXED_COLUMNS_WIDTH, MAX_DESCRIPTION_WIDTH,
    MIN_DEFAULT_WIDTH, TYPE_COLUMN_WIDTH,
};
use crate::types::Descriptor;

/// Column layout and styling for the help table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTable {
    term_width: usize,
    styled: bool,
}

impl Default for HelpTable {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINAL_WIDTH)
    }
}

impl HelpTable {
    /// Plain-text table for the given terminal width.
    pub fn new(term_width: usize) -> Self {
        Self {
            term_width,
            styled: false,
        }
    }

    /// Enable or disable colour.
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Table matching the current stdout: real width and colour when it is a
    /// terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        let term_width = crossterm::terminal::size()
            .ok()
            .map(|(cols, _)| usize::from(cols))
            .filter(|&cols| cols > 0)
            .unwrap_or(DEFAULT_TERMINAL_WIDTH);
        let styled = color_enabled(
            io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").as_deref(),
        );

        Self { term_width, styled }
    }

    pub fn term_width(&self) -> usize {
        self.term_width
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Write one row per descriptor to `out`.
    pub fn render<W: Write>(&self, descriptors: &[Descriptor], out: &mut W) -> io::Result<()> {
        let name_width = descriptors
            .iter()
            .map(|d| d.name.chars().count())
            .max()
            .unwrap_or(0);
        let desc_width = descriptors
            .iter()
            .map(|d| d.description.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_DESCRIPTION_WIDTH);
        let default_width = self
            .term_width
            .saturating_sub(name_width + FIXED_COLUMNS_WIDTH)
            .max(MIN_DEFAULT_WIDTH);

        for descriptor in descriptors {
            let name = pad(&descriptor.name, name_width);
            let kind = pad(descriptor.kind().label(), TYPE_COLUMN_WIDTH);
            let description = pad(&descriptor.description, desc_width);
            let default = truncate(&descriptor.default.to_string(), default_width);

            if self.styled {
                writeln!(
                    out,
                    "{}  {}  {}    {}",
                    name.yellow(),
                    kind.cyan(),
                    description.white(),
                    default.white().dim()
                )?;
            } else {
                writeln!(out, "{name}  {kind}  {description}    {default}")?;
            }
        }

        out.flush()
    }
}

/// Colour only on a terminal, and only while `NO_COLOR` is unset or empty.
fn color_enabled(is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    is_terminal && no_color.is_none_or(OsStr::is_empty)
}

/// Cut `value` to `width` characters, ending in `...` when shortened.
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }

    let ellipsis = ELLIPSIS.chars().count();
    if width <= ellipsis {
        return value.chars().take(width).collect();
    }

    let mut cut: String = value.chars().take(width - ellipsis).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Truncate or right-pad `value` to exactly `width` characters.
fn pad(value: &str, width: usize) -> String {
    let mut cell = truncate(value, width);
    let len = cell.chars().count();
    cell.extend(std::iter::repeat_n(' ', width - len));
    cell
}

/// Print the table for `descriptors` to stdout.
///
/// Write failures (closed pipe and the like) are logged and otherwise ignored.
pub fn print_help(descriptors: &[Descriptor]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = HelpTable::detect().render(descriptors, &mut out) {
        tracing::debug!(error = %e, "Failed to write help table");
    }
}
