//! The symbol table collection.

use std::io::BufRead;
use std::ops::{Deref, DerefMut};
use std::path::Path;

use serde::Serialize;
use strum::{Display, EnumString};
use tracing::{debug, instrument};

use crate::entry::{SymbolTableEntry, SymbolType};
use crate::lines::{read_lines, read_lines_from_file};
use crate::parse::parse_symbol_table_entry;
use crate::SymbolsError;

/// Header labels, which also set the minimum column widths.
pub const NAME_HEADER: &str = "Name";
pub const SECTION_HEADER: &str = "Section";

/// Which entries to keep, by symbol type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SymbolFilter {
    #[default]
    All,
    Objects,
    Functions,
    Files,
}

impl SymbolFilter {
    pub fn matches(self, entry: &SymbolTableEntry) -> bool {
        match self {
            Self::All => true,
            Self::Objects => entry.flags.symbol_type == SymbolType::Object,
            Self::Functions => entry.flags.symbol_type == SymbolType::Function,
            Self::Files => entry.flags.symbol_type == SymbolType::File,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    #[default]
    Size,
    Address,
    Name,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Entries parsed from `objdump -t` output, in input order until sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable(Vec<SymbolTableEntry>);

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a symbol table from a file, skipping lines that are not entries.
    ///
    /// ## Examples
    ///
    /// ```no_run
    /// use symtab_lib::SymbolTable;
    ///
    /// let table = SymbolTable::from_file("hello_world.sym").unwrap();
    /// println!("{table}");
    /// ```
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SymbolsError> {
        let lines = read_lines_from_file(path)?;
        Ok(Self::from_lines(&lines))
    }

    /// Reads a symbol table from any buffered reader, such as locked stdin.
    #[instrument(skip_all)]
    pub fn from_reader(reader: impl BufRead) -> Result<Self, SymbolsError> {
        let lines = read_lines(reader).map_err(SymbolsError::Read)?;
        Ok(Self::from_lines(&lines))
    }

    /// Builds a symbol table from lines already read.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let table: SymbolTable = lines
            .iter()
            .filter_map(|line| match parse_symbol_table_entry(line.as_ref()) {
                Ok(entry) => Some(entry),
                Err(error) => {
                    debug!(%error, "skipping line");
                    None
                }
            })
            .collect();
        debug!(lines = lines.len(), entries = table.len(), "parsed symbol table");
        table
    }

    pub fn sort_by_size_ascending(&mut self) {
        self.sort_by(SortKey::Size, SortOrder::Ascending);
    }

    pub fn sort_by_size_descending(&mut self) {
        self.sort_by(SortKey::Size, SortOrder::Descending);
    }

    /// Stable sort on `key`; ties keep their current relative order.
    pub fn sort_by(&mut self, key: SortKey, order: SortOrder) {
        self.0.sort_by(|x, y| {
            let ordering = match key {
                SortKey::Size => x.alignment_or_size.cmp(&y.alignment_or_size),
                SortKey::Address => x.address.cmp(&y.address),
                SortKey::Name => x.name.cmp(&y.name),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    /// Keeps the entries matching `filter`.
    pub fn filter(self, filter: SymbolFilter) -> Self {
        self.into_iter().filter(|e| filter.matches(e)).collect()
    }

    /// Keeps the entries located in `section`.
    pub fn in_section(self, section: &str) -> Self {
        self.into_iter().filter(|e| e.section == section).collect()
    }

    /// Sum of all entry sizes.
    pub fn total_size(&self) -> u64 {
        self.iter().map(|e| e.alignment_or_size).sum()
    }

    /// Width of the name column.
    pub fn name_width(&self) -> usize {
        self.iter()
            .map(|e| e.name.len())
            .max()
            .unwrap_or(0)
            .max(NAME_HEADER.len())
    }

    /// Width of the section column.
    pub fn section_width(&self) -> usize {
        self.iter()
            .map(|e| e.section.len())
            .max()
            .unwrap_or(0)
            .max(SECTION_HEADER.len())
    }
}

impl Deref for SymbolTable {
    type Target = Vec<SymbolTableEntry>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SymbolTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<SymbolTableEntry> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = SymbolTableEntry>>(iter: T) -> Self {
        SymbolTable(iter.into_iter().collect())
    }
}

impl IntoIterator for SymbolTable {
    type Item = SymbolTableEntry;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolTableEntry;
    type IntoIter = std::slice::Iter<'a, SymbolTableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
