//! FILENAME: core/engine/src/registry.rs
//! PURPOSE: An explicit collection of tables for catalog cross-referencing.
//! CONTEXT: Replaces a process-wide list of tables. Each registry is an
//! ordinary value, so independent sets of tables can coexist (e.g. one per
//! test).

use std::collections::BTreeSet;

use crate::logging::log_warn;
use crate::table::Table;

#[derive(Debug, Default)]
pub struct TableRegistry {
    tables: Vec<Table>,
}

impl TableRegistry {
    pub fn new() -> Self {
        TableRegistry { tables: Vec::new() }
    }

    /// Adds a table. Names are not required to be unique; `get` returns
    /// the first table registered under a name.
    pub fn register(&mut self, table: Table) {
        if self.get(table.id()).is_some() {
            log_warn!("REGISTRY", "table name {} registered twice", table.id());
        }
        self.tables.push(table);
    }

    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Every catalog identifier referenced by any registered table, sorted.
    pub fn anum_list(&self) -> BTreeSet<String> {
        self.tables
            .iter()
            .flat_map(|t| t.sim().iter().cloned())
            .collect()
    }

    /// Is the catalog identifier referenced by some registered table?
    pub fn anum_in_list(&self, anum: &str) -> bool {
        self.tables
            .iter()
            .any(|t| t.sim().iter().any(|s| s == anum))
    }
}

impl FromIterator<Table> for TableRegistry {
    fn from_iter<I: IntoIterator<Item = Table>>(iter: I) -> Self {
        let mut registry = TableRegistry::new();
        for table in iter {
            registry.register(table);
        }
        registry
    }
}

impl<'a> IntoIterator for &'a TableRegistry {
    type Item = &'a Table;
    type IntoIter = std::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}
