//! Decodes the module table into a typed module graph plus the reverse
//! alias index.
//!
//! Each table entry is `id: [factory, {alias: target, ...}, ...]`. The
//! reverse index records, for every (target id, alias) pair appearing in
//! any dependency map, which modules reference it — in table order.

use crate::decode::boundary::ModuleTableSpan;
use crate::decode::literal::{self, Value};
use crate::error::DecodeError;

/// Numeric module identifier. Identifiers double as canonical names in
/// this bundle format.
pub type ModuleId = u64;

/// One decoded module: its factory body (opaque, never interpreted) and
/// its dependency aliases in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleEntry {
    pub factory: String,
    pub dependencies: Vec<(String, ModuleId)>,
}

/// Module identifier → entry, in table order. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleGraph {
    modules: Vec<(ModuleId, ModuleEntry)>,
}

impl ModuleGraph {
    pub fn get(&self, id: ModuleId) -> Option<&ModuleEntry> {
        self.modules
            .iter()
            .find(|(mid, _)| *mid == id)
            .map(|(_, entry)| entry)
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &ModuleEntry)> {
        self.modules.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Referencing modules per alias, for one dependency target.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetAliases {
    pub target: ModuleId,
    /// alias → ordered list of modules using that alias for this target.
    pub aliases: Vec<(String, Vec<ModuleId>)>,
}

/// Reverse index: dependency target id → alias → referencing modules.
/// First-discovery order is preserved at every level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameIndex {
    targets: Vec<TargetAliases>,
}

impl NameIndex {
    fn record(&mut self, target: ModuleId, alias: &str, user: ModuleId) {
        let pos = match self.targets.iter().position(|t| t.target == target) {
            Some(pos) => pos,
            None => {
                self.targets.push(TargetAliases {
                    target,
                    aliases: Vec::new(),
                });
                self.targets.len() - 1
            }
        };
        let entry = &mut self.targets[pos];

        match entry.aliases.iter().position(|(name, _)| name == alias) {
            Some(pos) => entry.aliases[pos].1.push(user),
            None => entry.aliases.push((alias.to_string(), vec![user])),
        }
    }

    /// Targets in first-discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &TargetAliases> {
        self.targets.iter()
    }

    /// Modules referencing `target` under `alias`, in discovery order.
    pub fn users(&self, target: ModuleId, alias: &str) -> Option<&[ModuleId]> {
        self.targets
            .iter()
            .find(|t| t.target == target)?
            .aliases
            .iter()
            .find(|(name, _)| name == alias)
            .map(|(_, users)| users.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Decode the located span into the module graph and reverse index.
pub fn decode_modules(span: &ModuleTableSpan) -> Result<(ModuleGraph, NameIndex), DecodeError> {
    let value = literal::parse(&span.text).map_err(|e| DecodeError::NotStructuredData {
        reason: e.to_string(),
    })?;

    let Value::Object(entries) = value else {
        return Err(DecodeError::NotStructuredData {
            reason: "top-level value is not an object".to_string(),
        });
    };

    let mut graph = ModuleGraph::default();
    let mut index = NameIndex::default();

    for (key, value) in entries {
        let id: ModuleId = key.parse().map_err(|_| DecodeError::UnexpectedShape {
            id: key.clone(),
            reason: "module key is not a numeric identifier".to_string(),
        })?;
        let shape_error = |reason: &str| DecodeError::UnexpectedShape {
            id: key.clone(),
            reason: reason.to_string(),
        };

        let Value::Array(items) = value else {
            return Err(shape_error("entry is not a sequence"));
        };
        if !(2..=3).contains(&items.len()) {
            return Err(shape_error("entry is not a 2- or 3-element sequence"));
        }

        let mut items = items.into_iter();
        let factory = match items.next().unwrap() {
            Value::Opaque(text) => text,
            Value::Str(text) => text,
            _ => return Err(shape_error("factory slot is not code")),
        };

        let Value::Object(deps) = items.next().unwrap() else {
            return Err(shape_error("second element is not a dependency map"));
        };

        let mut dependencies = Vec::with_capacity(deps.len());
        for (alias, target) in deps {
            let target = target
                .as_u64()
                .ok_or_else(|| shape_error("dependency target is not a numeric identifier"))?;
            index.record(target, &alias, id);
            dependencies.push((alias, target));
        }

        graph.modules.push((
            id,
            ModuleEntry {
                factory,
                dependencies,
            },
        ));
    }

    Ok((graph, index))
}
