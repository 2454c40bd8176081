//! Parsing of `objdump -t` lines.
//!
//! An entry line looks like:
//!
//! ```text
//! 0803f76a  w    F .text	00000002 __printf_unlock
//! ```
//!
//! hex address, one space, seven flag characters, the section name up to a
//! tab, the hex size (or alignment), then the symbol name.

use std::sync::LazyLock;

use regex::Regex;

use crate::ParseError;
use crate::entry::{
    FlagBit, SymbolConstructor, SymbolDebugging, SymbolReference, SymbolScope, SymbolTableEntry,
    SymbolTableFlags, SymbolType, SymbolWarning, SymbolWeakness,
};

/// Number of flag characters between the address and the section.
pub const FLAG_COUNT: usize = 7;

static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<address>[0-9A-Fa-f]+) (?P<flags>.{7})\s*(?P<section>[^\t]*)\t\s*(?P<size>[0-9A-Fa-f]+)\s*(?P<name>\S.*)$",
    )
    .expect("Invalid symbol table entry regex")
});

/// Parses a hex number such as an address or a symbol size.
pub fn parse_hex(field: &'static str, value: &str) -> Result<u64, ParseError> {
    u64::from_str_radix(value, 16).map_err(|_| ParseError::InvalidHex {
        field,
        value: value.to_string(),
    })
}

/// Parses one flag character into the flag type for its column.
pub fn parse_flag_bit<T: FlagBit>(c: char) -> Result<T, ParseError> {
    T::from_flag(c).ok_or(ParseError::InvalidFlag {
        position: T::POSITION,
        found: c,
    })
}

pub fn parse_flag_bit_scope(c: char) -> Result<SymbolScope, ParseError> {
    parse_flag_bit(c)
}

pub fn parse_flag_bit_weakness(c: char) -> Result<SymbolWeakness, ParseError> {
    parse_flag_bit(c)
}

pub fn parse_flag_bit_constructor(c: char) -> Result<SymbolConstructor, ParseError> {
    parse_flag_bit(c)
}

pub fn parse_flag_bit_warning(c: char) -> Result<SymbolWarning, ParseError> {
    parse_flag_bit(c)
}

pub fn parse_flag_bit_reference(c: char) -> Result<SymbolReference, ParseError> {
    parse_flag_bit(c)
}

pub fn parse_flag_bit_debugging(c: char) -> Result<SymbolDebugging, ParseError> {
    parse_flag_bit(c)
}

pub fn parse_flag_bit_type(c: char) -> Result<SymbolType, ParseError> {
    parse_flag_bit(c)
}

/// Parses the seven flag characters of an entry.
pub fn parse_symbol_flags(input: &str) -> Result<SymbolTableFlags, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let [scope, weakness, constructor, warning, reference, debugging, symbol_type] =
        <[char; FLAG_COUNT]>::try_from(chars.as_slice()).map_err(|_| ParseError::FlagCount {
            found: chars.len(),
        })?;

    Ok(SymbolTableFlags {
        scope: parse_flag_bit(scope)?,
        weakness: parse_flag_bit(weakness)?,
        constructor: parse_flag_bit(constructor)?,
        warning: parse_flag_bit(warning)?,
        reference: parse_flag_bit(reference)?,
        debugging: parse_flag_bit(debugging)?,
        symbol_type: parse_flag_bit(symbol_type)?,
    })
}

/// Parses a symbol table entry from one line of `objdump -t` output.
///
/// Header lines, blank lines and anything else that is not an entry produce
/// [`ParseError::Malformed`].
///
/// ## Examples
///
/// ```
/// use symtab_lib::parse::parse_symbol_table_entry;
///
/// let entry = parse_symbol_table_entry("08000130 g     F .text\t0000002c main").unwrap();
/// assert_eq!(entry.name, "main");
/// assert_eq!(entry.alignment_or_size, 0x2c);
/// ```
pub fn parse_symbol_table_entry(input: &str) -> Result<SymbolTableEntry, ParseError> {
    let captures = ENTRY_PATTERN
        .captures(input)
        .ok_or_else(|| ParseError::Malformed {
            line: input.to_string(),
        })?;

    Ok(SymbolTableEntry {
        address: parse_hex("address", &captures["address"])?,
        flags: parse_symbol_flags(&captures["flags"])?,
        section: captures["section"].trim_end().to_string(),
        alignment_or_size: parse_hex("size", &captures["size"])?,
        name: captures["name"].trim_end().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular_flags() -> SymbolTableFlags {
        SymbolTableFlags {
            scope: SymbolScope::Neither,
            weakness: SymbolWeakness::Strong,
            constructor: SymbolConstructor::Regular,
            warning: SymbolWarning::Regular,
            reference: SymbolReference::Regular,
            debugging: SymbolDebugging::Regular,
            symbol_type: SymbolType::Regular,
        }
    }

    #[test]
    fn parse_hex_values() {
        assert_eq!(parse_hex("size", "12345"), Ok(0x12345));
        assert_eq!(parse_hex("size", "DeadBeef"), Ok(0xdead_beef));
        assert_eq!(
            parse_hex("address", "gabcdeg"),
            Err(ParseError::InvalidHex {
                field: "address",
                value: "gabcdeg".to_string()
            })
        );
    }

    #[test]
    fn parse_hex_rejects_overflow() {
        assert!(parse_hex("address", "1ffffffffffffffff").is_err());
        assert_eq!(parse_hex("address", "ffffffffffffffff"), Ok(u64::MAX));
    }

    #[test]
    fn scope_flag() {
        assert_eq!(parse_flag_bit_scope('l'), Ok(SymbolScope::Local));
        assert_eq!(parse_flag_bit_scope('g'), Ok(SymbolScope::Global));
        assert_eq!(parse_flag_bit_scope(' '), Ok(SymbolScope::Neither));
        assert_eq!(parse_flag_bit_scope('!'), Ok(SymbolScope::Both));
        assert_eq!(
            parse_flag_bit_scope('x'),
            Err(ParseError::InvalidFlag {
                position: 0,
                found: 'x'
            })
        );
    }

    #[test]
    fn weakness_flag() {
        assert_eq!(parse_flag_bit_weakness('w'), Ok(SymbolWeakness::Weak));
        assert_eq!(parse_flag_bit_weakness(' '), Ok(SymbolWeakness::Strong));
        assert!(parse_flag_bit_weakness('x').is_err());
    }

    #[test]
    fn constructor_flag() {
        assert_eq!(
            parse_flag_bit_constructor('C'),
            Ok(SymbolConstructor::Constructor)
        );
        assert_eq!(
            parse_flag_bit_constructor(' '),
            Ok(SymbolConstructor::Regular)
        );
        assert!(parse_flag_bit_constructor('c').is_err());
    }

    #[test]
    fn warning_flag() {
        assert_eq!(parse_flag_bit_warning('W'), Ok(SymbolWarning::Warning));
        assert_eq!(parse_flag_bit_warning(' '), Ok(SymbolWarning::Regular));
        assert!(parse_flag_bit_warning('w').is_err());
    }

    #[test]
    fn reference_flag() {
        assert_eq!(parse_flag_bit_reference('l'), Ok(SymbolReference::Reference));
        assert_eq!(parse_flag_bit_reference(' '), Ok(SymbolReference::Regular));
        assert_eq!(
            parse_flag_bit_reference('x'),
            Err(ParseError::InvalidFlag {
                position: 4,
                found: 'x'
            })
        );
    }

    #[test]
    fn debugging_flag() {
        assert_eq!(parse_flag_bit_debugging('d'), Ok(SymbolDebugging::Debug));
        assert_eq!(parse_flag_bit_debugging('D'), Ok(SymbolDebugging::Dynamic));
        assert_eq!(parse_flag_bit_debugging(' '), Ok(SymbolDebugging::Regular));
        assert!(parse_flag_bit_debugging('x').is_err());
    }

    #[test]
    fn type_flag() {
        assert_eq!(parse_flag_bit_type('F'), Ok(SymbolType::Function));
        assert_eq!(parse_flag_bit_type('f'), Ok(SymbolType::File));
        assert_eq!(parse_flag_bit_type('O'), Ok(SymbolType::Object));
        assert_eq!(parse_flag_bit_type(' '), Ok(SymbolType::Regular));
        assert_eq!(
            parse_flag_bit_type('x'),
            Err(ParseError::InvalidFlag {
                position: 6,
                found: 'x'
            })
        );
    }

    #[test]
    fn symbol_flags() {
        assert_eq!(
            parse_symbol_flags("l    df"),
            Ok(SymbolTableFlags {
                scope: SymbolScope::Local,
                debugging: SymbolDebugging::Debug,
                symbol_type: SymbolType::File,
                ..regular_flags()
            })
        );
    }

    #[test]
    fn symbol_flags_with_empty_start() {
        assert_eq!(
            parse_symbol_flags(" w   df"),
            Ok(SymbolTableFlags {
                weakness: SymbolWeakness::Weak,
                debugging: SymbolDebugging::Debug,
                symbol_type: SymbolType::File,
                ..regular_flags()
            })
        );
    }

    #[test]
    fn symbol_flags_require_seven_characters() {
        assert_eq!(
            parse_symbol_flags("l  d"),
            Err(ParseError::FlagCount { found: 4 })
        );
    }

    #[test]
    fn entry_for_section_symbol() {
        let entry = parse_symbol_table_entry("08020000 l    d  .vectors\t00000000 .vectors").unwrap();
        assert_eq!(entry.address, 134348800);
        assert_eq!(entry.name, ".vectors");
        assert_eq!(entry.alignment_or_size, 0);
        assert_eq!(entry.section, ".vectors");
        assert_eq!(
            entry.flags,
            SymbolTableFlags {
                scope: SymbolScope::Local,
                debugging: SymbolDebugging::Debug,
                ..regular_flags()
            }
        );
    }

    #[test]
    fn entry_with_empty_flag_start() {
        let entry =
            parse_symbol_table_entry("0803f76a  w    F .text\t00000002 __printf_unlock").unwrap();
        assert_eq!(entry.address, 134477674);
        assert_eq!(entry.section, ".text");
        assert_eq!(entry.alignment_or_size, 2);
        assert_eq!(entry.name, "__printf_unlock");
        assert_eq!(
            entry.flags,
            SymbolTableFlags {
                weakness: SymbolWeakness::Weak,
                symbol_type: SymbolType::Function,
                ..regular_flags()
            }
        );
    }

    #[test]
    fn entry_with_64_bit_address_and_crlf() {
        let entry = parse_symbol_table_entry(
            "0000000000004010 l     O .bss\t00000000000003e8              print_buffer\r",
        )
        .unwrap();
        assert_eq!(entry.address, 0x4010);
        assert_eq!(entry.alignment_or_size, 1000);
        assert_eq!(entry.section, ".bss");
        assert_eq!(entry.name, "print_buffer");
        assert_eq!(entry.flags.symbol_type, SymbolType::Object);
    }

    #[test]
    fn non_entry_lines_are_malformed() {
        for line in ["", "SYMBOL TABLE:", "hello_world.elf:     file format elf32-littlearm"] {
            assert!(matches!(
                parse_symbol_table_entry(line),
                Err(ParseError::Malformed { .. })
            ));
        }
    }

    #[test]
    fn invalid_flag_in_entry_is_reported() {
        assert_eq!(
            parse_symbol_table_entry("08000130 x     F .text\t0000002c main"),
            Err(ParseError::InvalidFlag {
                position: 0,
                found: 'x'
            })
        );
    }
}
