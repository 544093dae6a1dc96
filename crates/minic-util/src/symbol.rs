//! String interning.
//!
//! Identifiers are looked up repeatedly through the binder and code
//! generator (locals tables, call resolution, slot assignment). Interning
//! them once into a [`Symbol`] turns every later comparison into a `u32`
//! equality check instead of a string compare, and keeps AST nodes `Copy`
//! where they would otherwise hold a `String`.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, OnceLock};

/// An interned identifier.
///
/// Two symbols compare equal iff the strings they were interned from are
/// equal; the inverse also holds, since the interner never returns the same
/// index for two different strings.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

struct Interner {
    names: Vec<String>,
    indices: HashMap<String, u32>,
}

impl Interner {
    fn new() -> Self {
        Self {
            names: Vec::new(),
            indices: HashMap::new(),
        }
    }

    fn intern(&mut self, s: &str) -> u32 {
        if let Some(&idx) = self.indices.get(s) {
            return idx;
        }
        let idx = self.names.len() as u32;
        self.names.push(s.to_owned());
        self.indices.insert(s.to_owned(), idx);
        idx
    }

    fn resolve(&self, idx: u32) -> String {
        self.names[idx as usize].clone()
    }
}

fn interner() -> &'static Mutex<Interner> {
    static INTERNER: OnceLock<Mutex<Interner>> = OnceLock::new();
    INTERNER.get_or_init(|| Mutex::new(Interner::new()))
}

impl Symbol {
    /// Intern `s`, returning a stable handle. Interning the same string
    /// twice returns the same `Symbol`.
    pub fn intern(s: &str) -> Self {
        let idx = interner().lock().unwrap().intern(s);
        Symbol(idx)
    }

    /// Recover the original string. Always succeeds: symbols cannot be
    /// constructed from an index that was never interned.
    pub fn as_str(&self) -> String {
        interner().lock().unwrap().resolve(self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_string_interns_to_same_symbol() {
        let a = Symbol::intern("main");
        let b = Symbol::intern("main");
        assert_eq!(a, b);
    }

    #[test]
    fn different_strings_intern_to_different_symbols() {
        let a = Symbol::intern("foo_unique_1");
        let b = Symbol::intern("bar_unique_2");
        assert_ne!(a, b);
    }

    #[test]
    fn round_trips_through_as_str() {
        let s = Symbol::intern("round_trip_case");
        assert_eq!(s.as_str(), "round_trip_case");
    }
}
