//! Line oriented input helpers.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::SymbolsError;

/// Reads a file into a vector of lines.
///
/// ## Examples
///
/// ```no_run
/// use symtab_lib::lines::read_lines_from_file;
///
/// let lines = read_lines_from_file("symbols.txt").expect("Could not read lines");
/// ```
pub fn read_lines_from_file(path: impl AsRef<Path>) -> Result<Vec<String>, SymbolsError> {
    let path = path.as_ref();
    let io_err = |source| SymbolsError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    read_lines(BufReader::new(file)).map_err(io_err)
}

/// Reads every line from `reader`.
pub fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Splits `s` at the first occurrence of `d`.
///
/// ## Examples
///
/// ```
/// use symtab_lib::lines::split_into_tuple;
///
/// assert_eq!(split_into_tuple("ABC:DEF", ':'), Some(("ABC", "DEF")));
/// assert_eq!(split_into_tuple("ABC", ':'), None);
/// assert_eq!(split_into_tuple("ABC:DEF:GHI", ':'), Some(("ABC", "DEF:GHI")));
/// assert_eq!(split_into_tuple("ABC:", ':'), Some(("ABC", "")));
/// assert_eq!(split_into_tuple(":ABC", ':'), Some(("", "ABC")));
/// ```
pub fn split_into_tuple(s: &str, d: char) -> Option<(&str, &str)> {
    s.split_once(d)
}
