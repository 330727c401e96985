// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # attrtyp
//!
//! [![Documentation](https://docs.rs/attrtyp/badge.svg)](https://docs.rs/attrtyp)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](LICENSE-APACHE)
//!
//! Translation between the compact 32-bit attribute references used inside directory
//! databases (ATTRTYPs) and the dotted-decimal OIDs they stand for.
//!
//! An ATTRTYP `0xPPPPIIII` splits into a 16-bit prefix code and a 16-bit item. The prefix code
//! is looked up in a prefix table, the item is appended as the last arc:
//!
//! ```text
//! 0x0008000C  =>  prefix 0x0008 (2.5.5)  +  item 12  =>  2.5.5.12
//! ```
//!
//! Prefix tables come in two halves. The built-in half is the same everywhere and compiled
//! into this crate. The custom half is specific to a schema and stored in its `prefixMap`
//! attribute as a little-endian blob of BER encoded OID prefixes.
//!
//! ## Features
//!
//! - **BER OID codec** - [`oid::encode_oid`] and [`oid::decode_oid`] for the X.690 arc encoding
//! - **`prefixMap` codec** - [`prefix::parse_prefix_map`] and [`prefix::serialize_prefix_map`]
//! - **Merged lookups** - [`MergedPrefixTable`] with a configurable [`CollisionPolicy`]
//! - **Hot reload** - [`PrefixTableHandle`] swaps the custom table under concurrent readers
//! - **Schema bootstrap** - [`schema`] carries the well-known ids and the column naming scheme
//!
//! ## Quick Start
//!
//! ```rust
//! use attrtyp::prelude::*;
//!
//! // The custom half, as read from the schema's prefixMap attribute
//! let blob = [
//!     0x02, 0x00, 0x00, 0x00, 0x25, 0x00, 0x00, 0x00,
//!     0x3B, 0x64, 0x0A, 0x00, 0x2B, 0x06, 0x01, 0x04, 0x01, 0x82, 0x8B, 0x13, 0x01, 0x45,
//!     0x3D, 0x56, 0x0B, 0x00, 0x2B, 0x06, 0x01, 0x04, 0x01, 0x82, 0x8B, 0x13, 0x01, 0x83, 0x24,
//! ];
//! let table = MergedPrefixTable::new(PrefixTable::from_prefix_map(&blob)?);
//!
//! assert_eq!(decode(&table, 0x643B_01A4)?, "1.3.6.1.4.1.34195.1.69.420");
//! assert_eq!(encode(&table, "2.5.5.12")?, 0x0008_000C);
//! # Ok::<(), attrtyp::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger. Parse and reload
//! summaries go out at `debug`, individual `prefixMap` records at `trace`, custom entries
//! that collide with the built-in table at `warn`.
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench --bench codec
//!
//! # Fuzzing the prefixMap parser
//! cargo +nightly fuzz run prefixmap --release
//! ```

#[macro_use]
pub(crate) mod error;


/// Convenient re-exports of the most commonly used types and functions.
///
/// ```rust
/// use attrtyp::prelude::*;
///
/// let table = MergedPrefixTable::builtin_only();
/// let oid = table.resolve(AttrTyp::from_parts(0x0001, 2))?;
/// assert_eq!(oid, "2.5.6.2".parse::<Oid>()?);
/// # Ok::<(), attrtyp::Error>(())
/// ```
pub mod prelude;

pub mod attrtyp;
pub mod config;
pub mod io;
pub mod oid;
pub mod prefix;
pub mod schema;

/// `attrtyp` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `attrtyp` Error type
///
/// Every fallible operation of this crate returns this error. See the variants for the
/// failure each one stands for.
pub use error::Error;

pub use crate::attrtyp::{decode, encode, AttrTyp};
pub use config::{CollisionPolicy, ResolverConfig};
pub use oid::Oid;
pub use prefix::{MergedPrefixTable, PrefixEntry, PrefixTable, PrefixTableHandle};
