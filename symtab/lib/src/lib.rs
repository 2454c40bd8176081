//! Parsing and reporting for `objdump -t` symbol tables.
//!
//! ```
//! use symtab_lib::{SymbolFilter, SymbolTable};
//!
//! let table = SymbolTable::from_lines(&[
//!     "SYMBOL TABLE:",
//!     "20000000 l     O .bss\t000003e8 print_buffer",
//!     "08000130 g     F .text\t0000002c main",
//! ]);
//! let objects = table.filter(SymbolFilter::Objects);
//! assert_eq!(objects.len(), 1);
//! assert_eq!(objects[0].name, "print_buffer");
//! ```

pub mod entry;
pub mod error;
pub mod lines;
pub mod parse;
pub mod render;
pub mod table;

pub use entry::*;
pub use error::{ParseError, SymbolsError};
pub use parse::parse_symbol_table_entry;
pub use render::{render_html, render_json, render_terminal};
pub use table::{SortKey, SortOrder, SymbolFilter, SymbolTable};
