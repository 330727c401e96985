//! Resolver configuration
//!
//! Controls how prefix tables are merged and how strictly `prefixMap` blobs are checked.
//! The defaults fail closed: trailing bytes are corruption, and the schema's own custom
//! entries win over the built-in table on a code collision.

/// Which table answers first when a custom entry collides with a built-in one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Consult the custom table first, then the built-in table
    /// Built-in codes redefined by the custom table no longer encode
    #[default]
    CustomOverrides,
    /// Consult the built-in table first, then the custom table
    /// Custom entries under built-in codes are ignored in both directions
    BuiltinWins,
}

/// Configuration for prefix table loading and lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Precedence between the custom and the built-in table, for both lookup directions
    pub collision_policy: CollisionPolicy,

    /// Accept bytes after the last `prefixMap` record
    /// The declared total length must still match the records
    pub allow_trailing_bytes: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            collision_policy: CollisionPolicy::CustomOverrides,
            allow_trailing_bytes: false,
        }
    }
}

impl ResolverConfig {
    /// Creates the strict configuration (same as [`ResolverConfig::default`])
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Creates a configuration tolerating padding behind the `prefixMap` records
    ///
    /// Some attribute stores hand out value buffers rounded up to an allocation size.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            collision_policy: CollisionPolicy::CustomOverrides,
            allow_trailing_bytes: true,
        }
    }

    /// Returns a copy with the given collision policy
    #[must_use]
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}
