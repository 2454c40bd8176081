//! Output formats for a [`SymbolTable`].
//!
//! The terminal layout is a fixed-width table. Address and size columns are
//! at least eight hex digits and widen to fit the largest value:
//!
//! ```text
//! ------------------------------------------------
//! Name                Section  Address  Size
//! ------------------------------------------------
//! print_buffer        .bss     20000000 000003e8
//! ```

use std::fmt;

use html_elements::{H1, HtmlElement, Table, Tr};
use owo_colors::OwoColorize;

use crate::{SymbolTable, SymbolTableEntry, SymbolsError};

/// Minimum digits of the address and size columns.
const MIN_HEX_WIDTH: usize = 8;

/// Single spaces between the four columns.
const SEPARATORS_WIDTH: usize = 3;

const HEADERS: [&str; 4] = ["Name", "Section", "Address", "Size"];

/// Column widths shared by every line of one rendering.
#[derive(Debug, Clone, Copy)]
struct Widths {
    name: usize,
    section: usize,
    address: usize,
    size: usize,
}

/// Number of lowercase hex digits needed to print `value`.
fn hex_digits(value: u64) -> usize {
    (u64::BITS - value.leading_zeros()).div_ceil(4).max(1) as usize
}

impl Widths {
    fn of(table: &SymbolTable) -> Self {
        let hex_width = |digits: Option<usize>| digits.unwrap_or(0).max(MIN_HEX_WIDTH);
        Widths {
            name: table.name_width(),
            section: table.section_width(),
            address: hex_width(table.iter().map(|e| hex_digits(e.address)).max()),
            size: hex_width(table.iter().map(|e| hex_digits(e.alignment_or_size)).max()),
        }
    }

    fn banner(self) -> String {
        "-".repeat(self.name + self.section + self.address + self.size + SEPARATORS_WIDTH)
    }

    fn header(self) -> String {
        format!(
            "{:n_width$} {:s_width$} {:a_width$} {:z_width$}",
            HEADERS[0],
            HEADERS[1],
            HEADERS[2],
            HEADERS[3],
            n_width = self.name,
            s_width = self.section,
            a_width = self.address,
            z_width = self.size
        )
    }

    fn row(self, entry: &SymbolTableEntry) -> String {
        format!(
            "{:n_width$} {:s_width$} {:0a_width$x} {:0z_width$x}",
            entry.name,
            entry.section,
            entry.address,
            entry.alignment_or_size,
            n_width = self.name,
            s_width = self.section,
            a_width = self.address,
            z_width = self.size
        )
    }
}

fn write_table(f: &mut impl fmt::Write, table: &SymbolTable, colored: bool) -> fmt::Result {
    let widths = Widths::of(table);
    let banner = widths.banner();
    let header = widths.header();

    writeln!(f, "{banner}")?;
    if colored {
        writeln!(f, "{}", header.bold())?;
    } else {
        writeln!(f, "{header}")?;
    }
    writeln!(f, "{banner}")?;
    for entry in table {
        writeln!(f, "{}", widths.row(entry))?;
    }
    Ok(())
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, self, false)
    }
}

/// Renders the fixed-width table, with a bold header when `colored`.
pub fn render_terminal(table: &SymbolTable, colored: bool) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_table(&mut out, table, colored);
    out
}

/// Renders the entries as a pretty-printed JSON array.
pub fn render_json(table: &SymbolTable) -> Result<String, SymbolsError> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Renders a heading and an HTML table of the entries.
pub fn render_html(table: &SymbolTable, title: &str) -> String {
    let mut html = Table::new();
    html.push(Tr::headers(HEADERS));
    for entry in table {
        html.push(Tr::data([
            entry.name.clone(),
            entry.section.clone(),
            format!("{:08x}", entry.address),
            format!("{:08x}", entry.alignment_or_size),
        ]));
    }

    let mut out = H1::new(title).to_html();
    out.push('\n');
    out += &html.to_html();
    out.push('\n');
    out
}
