//! Ordered name-to-slot tables.
//!
//! Insertion order is the source order in which names were declared, and
//! becomes the slot assignment directly: the Nth name declared gets slot N.

use indexmap::IndexMap;
use minic_util::Symbol;

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    slots: IndexMap<Symbol, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
        }
    }

    pub fn contains(&self, name: Symbol) -> bool {
        self.slots.contains_key(&name)
    }

    /// Declares `name` at the next free slot. The caller is responsible for
    /// rejecting duplicates before calling this — it always succeeds.
    pub fn declare(&mut self, name: Symbol) -> usize {
        let slot = self.slots.len();
        self.slots.insert(name, slot);
        slot
    }

    pub fn get(&self, name: Symbol) -> Option<usize> {
        self.slots.get(&name).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_declaration_order() {
        let mut table = SymbolTable::new();
        let a = Symbol::intern("a");
        let b = Symbol::intern("b");
        assert_eq!(table.declare(a), 0);
        assert_eq!(table.declare(b), 1);
        assert_eq!(table.get(a), Some(0));
        assert_eq!(table.get(b), Some(1));
    }

    #[test]
    fn unknown_name_is_none() {
        let table = SymbolTable::new();
        assert_eq!(table.get(Symbol::intern("missing")), None);
    }
}
