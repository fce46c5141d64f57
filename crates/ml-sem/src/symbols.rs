//! Name table shared by the whole program: one arena of names, one stable id
//! per name, one role each name is allowed to settle into.
//!
//! The id a name gets is its creation order, not its position in any sorted
//! view. Keeping symbols in a plain sorted array would mean a name's slot
//! moves every time an earlier name is inserted, so anything that saved a
//! position across an insertion would need to track the shuffle. Rust's
//! `Vec` doesn't reshuffle existing elements on push, so `SymbolId` can just
//! be stable storage order, with a separate `sorted` index handling lookup
//! by name.

use ml_util::{define_idx, IndexVec};

define_idx!(SymbolId);

/// The role a name has settled into. Once set (other than [`Usage::TransientKeep`],
/// which never commits anything), only a matching re-use of the same role is
/// allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Usage {
    Unclassified,
    /// Requested role when a name is referenced but its eventual role isn't
    /// known yet. Never stored; [`SymbolTable::mark`] treats it as a no-op.
    TransientKeep,
    GlobalVar,
    FuncName,
    FuncParam,
}

/// Which role an as-yet-unresolved reference should be nudged toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveHint {
    None,
    Variable,
}

/// A name is already registered with a role that conflicts with how it's
/// being used now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("symbol already registered with a conflicting role")]
pub struct NameCollision;

#[derive(Default, Debug, PartialEq)]
pub struct SymbolTable {
    arena: String,
    spans: IndexVec<SymbolId, (u32, u32)>,
    usages: IndexVec<SymbolId, Usage>,
    sorted: Vec<SymbolId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self, id: SymbolId) -> &str {
        let (offset, len) = self.spans[id];
        &self.arena[offset as usize..offset as usize + len as usize]
    }

    pub fn usage(&self, id: SymbolId) -> Usage {
        self.usages[id]
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Names in creation order, paired with their final role.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str, Usage)> {
        (0..self.spans.len() as u32).map(|i| {
            let id = SymbolId(i);
            (id, self.name(id), self.usage(id))
        })
    }

    /// Names in sorted order, paired with their final role.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (SymbolId, &str, Usage)> + '_ {
        self.sorted.iter().map(move |&id| (id, self.name(id), self.usage(id)))
    }

    fn position(&self, name: &str) -> Result<usize, usize> {
        self.sorted.binary_search_by(|&id| self.name(id).cmp(name))
    }

    /// Look up an existing name without registering it.
    pub fn find(&self, name: &str) -> Option<SymbolId> {
        self.position(name).ok().map(|pos| self.sorted[pos])
    }

    /// Register `name` if it isn't already known, then apply `usage` to it
    /// via [`SymbolTable::mark`].
    pub fn ensure(&mut self, name: &str, usage: Usage) -> Result<SymbolId, NameCollision> {
        let id = match self.position(name) {
            Ok(pos) => self.sorted[pos],
            Err(pos) => {
                let offset = self.arena.len() as u32;
                self.arena.push_str(name);
                let id = self.spans.push((offset, name.len() as u32));
                self.usages.push(Usage::Unclassified);
                self.sorted.insert(pos, id);
                id
            }
        };
        self.mark(id, usage)?;
        Ok(id)
    }

    /// Commit `requested` as the role of `id`. A [`Usage::TransientKeep`]
    /// request never touches the stored role. Any other request succeeds if
    /// the stored role is still [`Usage::Unclassified`] or already matches;
    /// any other combination is a collision.
    pub fn mark(&mut self, id: SymbolId, requested: Usage) -> Result<(), NameCollision> {
        if requested == Usage::TransientKeep {
            return Ok(());
        }
        let current = self.usages[id];
        if current == requested || current == Usage::Unclassified {
            self.usages[id] = requested;
            Ok(())
        } else {
            Err(NameCollision)
        }
    }

    /// Decide what role a reference to `id` should settle into.
    ///
    /// A name immediately followed by `(` is always a function name. Barring
    /// that: a `Variable`-hinted reference inside a function body keeps an
    /// existing global/param role, otherwise defaults to a global; an
    /// unhinted reference keeps whatever role is already on file, defaulting
    /// to a global only if none is on file yet.
    pub fn resolve(
        &self,
        id: SymbolId,
        next_is_lparen: bool,
        hint: ResolveHint,
        in_func_body: bool,
    ) -> Usage {
        if next_is_lparen {
            return Usage::FuncName;
        }
        let current = self.usages[id];
        match hint {
            ResolveHint::Variable => {
                if in_func_body && matches!(current, Usage::GlobalVar | Usage::FuncParam) {
                    current
                } else {
                    Usage::GlobalVar
                }
            }
            ResolveHint::None => {
                if current == Usage::Unclassified {
                    Usage::GlobalVar
                } else {
                    current
                }
            }
        }
    }
}
