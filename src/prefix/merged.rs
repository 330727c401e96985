use std::sync::Arc;

use crate::{
    oid::Oid,
    prefix::{builtin, PrefixTable},
    CollisionPolicy, ResolverConfig,
};

/// The built-in table and one custom table, queried as one.
///
/// Cheap to clone, the custom table is shared. Both lookup directions consult the two
/// tables in the order given by the [`CollisionPolicy`]; the first exact match answers.
///
/// # Examples
///
/// ```rust
/// use attrtyp::MergedPrefixTable;
///
/// let table = MergedPrefixTable::builtin_only();
/// assert_eq!(table.lookup(0x0000), Some(&[2u32, 5, 4][..]));
/// assert_eq!(table.reverse_lookup(&[2, 5, 4]), Some(0x0000));
/// assert_eq!(table.lookup(0x643B), None);
/// ```
#[derive(Debug, Clone)]
pub struct MergedPrefixTable {
    custom: Arc<PrefixTable>,
    policy: CollisionPolicy,
}

impl MergedPrefixTable {
    /// Merges `custom` over the built-in table with the default policy.
    pub fn new(custom: impl Into<Arc<PrefixTable>>) -> Self {
        Self::with_policy(custom, CollisionPolicy::default())
    }

    /// Merges `custom` with the built-in table under the configured policy.
    pub fn with_config(custom: impl Into<Arc<PrefixTable>>, config: &ResolverConfig) -> Self {
        Self::with_policy(custom, config.collision_policy)
    }

    /// Merges `custom` with the built-in table under `policy`.
    pub fn with_policy(custom: impl Into<Arc<PrefixTable>>, policy: CollisionPolicy) -> Self {
        MergedPrefixTable {
            custom: custom.into(),
            policy,
        }
    }

    /// A merged table with no custom entries.
    #[must_use]
    pub fn builtin_only() -> Self {
        Self::new(PrefixTable::new())
    }

    /// The custom half.
    #[must_use]
    pub fn custom(&self) -> &PrefixTable {
        &self.custom
    }

    /// The collision policy in effect.
    #[must_use]
    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// The OID prefix for `prefix`, if either table has one.
    #[must_use]
    pub fn lookup(&self, prefix: u16) -> Option<&[u32]> {
        let custom = self.custom.get(prefix).map(Oid::arcs);

        match self.policy {
            CollisionPolicy::CustomOverrides => custom.or_else(|| builtin::lookup(prefix)),
            CollisionPolicy::BuiltinWins => builtin::lookup(prefix).or(custom),
        }
    }

    /// The code whose OID prefix equals `arcs` exactly, if either table has one.
    ///
    /// Never a longest-prefix search: `arcs` must be the whole stored prefix. A code shadowed
    /// by the other table is never returned, so whatever this yields, [`Self::lookup`] maps
    /// back to `arcs`.
    #[must_use]
    pub fn reverse_lookup(&self, arcs: &[u32]) -> Option<u16> {
        match self.policy {
            CollisionPolicy::CustomOverrides => self.custom.find(arcs).or_else(|| {
                builtin::reverse_lookup(arcs).filter(|&prefix| !self.custom.contains_prefix(prefix))
            }),
            CollisionPolicy::BuiltinWins => builtin::reverse_lookup(arcs).or_else(|| {
                self.custom
                    .find(arcs)
                    .filter(|&prefix| !builtin::is_builtin_prefix(prefix))
            }),
        }
    }
}

impl Default for MergedPrefixTable {
    fn default() -> Self {
        Self::builtin_only()
    }
}
