//! Symbol table entry types.
//!
//! Mirrors the seven flag columns `objdump -t` prints between the address and
//! the section name.

use serde::Serialize;

/// One line of an `objdump -t` symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTableEntry {
    pub address: u64,
    pub flags: SymbolTableFlags,
    pub section: String,
    /// Symbol size, or alignment for common symbols.
    pub alignment_or_size: u64,
    pub name: String,
}

/// The seven flag characters of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTableFlags {
    pub scope: SymbolScope,
    pub weakness: SymbolWeakness,
    pub constructor: SymbolConstructor,
    pub warning: SymbolWarning,
    pub reference: SymbolReference,
    pub debugging: SymbolDebugging,
    pub symbol_type: SymbolType,
}

/// A single flag column: its position in the flag field and the characters
/// it accepts.
pub trait FlagBit: Sized {
    const POSITION: usize;

    fn from_flag(c: char) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolScope {
    Local,
    Global,
    Neither,
    Both,
}

impl FlagBit for SymbolScope {
    const POSITION: usize = 0;

    fn from_flag(c: char) -> Option<Self> {
        match c {
            'l' => Some(Self::Local),
            'g' => Some(Self::Global),
            ' ' => Some(Self::Neither),
            '!' => Some(Self::Both),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolWeakness {
    Weak,
    Strong,
}

impl FlagBit for SymbolWeakness {
    const POSITION: usize = 1;

    fn from_flag(c: char) -> Option<Self> {
        match c {
            'w' => Some(Self::Weak),
            ' ' => Some(Self::Strong),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolConstructor {
    Constructor,
    Regular,
}

impl FlagBit for SymbolConstructor {
    const POSITION: usize = 2;

    fn from_flag(c: char) -> Option<Self> {
        match c {
            'C' => Some(Self::Constructor),
            ' ' => Some(Self::Regular),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolWarning {
    Warning,
    Regular,
}

impl FlagBit for SymbolWarning {
    const POSITION: usize = 3;

    fn from_flag(c: char) -> Option<Self> {
        match c {
            'W' => Some(Self::Warning),
            ' ' => Some(Self::Regular),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolReference {
    Reference,
    Regular,
}

impl FlagBit for SymbolReference {
    const POSITION: usize = 4;

    fn from_flag(c: char) -> Option<Self> {
        match c {
            'l' => Some(Self::Reference),
            ' ' => Some(Self::Regular),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolDebugging {
    Debug,
    Dynamic,
    Regular,
}

impl FlagBit for SymbolDebugging {
    const POSITION: usize = 5;

    fn from_flag(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::Debug),
            'D' => Some(Self::Dynamic),
            ' ' => Some(Self::Regular),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolType {
    Function,
    File,
    Object,
    Regular,
}

impl FlagBit for SymbolType {
    const POSITION: usize = 6;

    fn from_flag(c: char) -> Option<Self> {
        match c {
            'F' => Some(Self::Function),
            'f' => Some(Self::File),
            'O' => Some(Self::Object),
            ' ' => Some(Self::Regular),
            _ => None,
        }
    }
}
