//! # attrtyp Prelude
//!
//! The types and functions needed for everyday translation work, for glob import.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all attrtyp operations
pub use crate::Error;

/// The result type used throughout attrtyp
pub use crate::Result;

/// Configuration for prefix table loading and lookup
pub use crate::{CollisionPolicy, ResolverConfig};

// ================================================================================================
// Translation
// ================================================================================================

/// Compact reference and object identifier
pub use crate::{AttrTyp, Oid};

/// Text level translation
pub use crate::{decode, encode};

// ================================================================================================
// Prefix Tables
// ================================================================================================

/// Custom table, merged view and the swappable holder
pub use crate::prefix::{MergedPrefixTable, PrefixEntry, PrefixTable, PrefixTableHandle};

/// `prefixMap` blob codec
pub use crate::prefix::{parse_prefix_map, serialize_prefix_map};

// ================================================================================================
// Schema
// ================================================================================================

/// Attribute syntaxes and column names
pub use crate::schema::{column_name, parse_column_name, AttributeSyntax};
