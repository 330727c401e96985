use thiserror::Error;

macro_rules! malformed_ber_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::MalformedBerEncoding {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::MalformedBerEncoding {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! invalid_entry_error {
    ($index:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        crate::Error::InvalidEntry {
            index: $index,
            message: format!($fmt $(, $arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every invalid input maps to exactly one variant. None of the operations in this crate
/// return partial results alongside an error.
///
/// # Error Categories
///
/// ## OID encoding
/// - [`Error::MalformedBerEncoding`] - Truncated or overflowing base-128 stream
/// - [`Error::InvalidArcSequence`] - Arcs that violate the first-two-arc combination rule
/// - [`Error::InvalidOidSyntax`] - Malformed dotted-decimal text
/// - [`Error::ArcOutOfRange`] - An arc that does not fit its slot
///
/// ## `prefixMap` blobs
/// - [`Error::TruncatedPrefixMap`] - Blob ends before its header or a record does
/// - [`Error::LengthMismatch`] - Declared total length disagrees with the data
/// - [`Error::InvalidEntry`] - A record carries an empty or undecodable OID
///
/// ## Prefix tables
/// - [`Error::UnknownPrefix`] - No exact match in forward or reverse lookup
/// - [`Error::PrefixConflict`] - Prefix code already taken
/// - [`Error::PrefixSpaceExhausted`] - No free prefix code left to assign
///
/// # Examples
///
/// ```rust
/// use attrtyp::{decode, Error, MergedPrefixTable};
///
/// let table = MergedPrefixTable::builtin_only();
/// match decode(&table, 0x7FFF_0001) {
///     Ok(oid) => println!("{oid}"),
///     Err(Error::UnknownPrefix(what)) => eprintln!("not in the prefix table: {what}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The base-128 stream of an encoded OID is invalid.
    ///
    /// Raised for empty input, a final byte that still carries the continuation bit,
    /// a value overflowing the 64-bit accumulator, or an arc that does not fit into `u32`.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed BER encoding - {file}:{line}: {message}")]
    MalformedBerEncoding {
        /// The message to be printed for the error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The arcs cannot be BER encoded.
    ///
    /// Fewer than two arcs, a first arc outside `{0, 1, 2}`, or a second arc above 39
    /// under the `0` and `1` roots.
    #[error("Invalid arc sequence - {0}")]
    InvalidArcSequence(String),

    /// The `prefixMap` blob ends before its header or one of its records is complete.
    #[error("Truncated prefixMap - {0}")]
    TruncatedPrefixMap(String),

    /// The declared total length of a `prefixMap` blob disagrees with its records or the
    /// number of bytes supplied.
    #[error("prefixMap length mismatch - declared {declared}, records span {expected}, buffer holds {actual}")]
    LengthMismatch {
        /// The `totalLength` header field
        declared: u32,
        /// Header plus the summed record lengths
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    /// A `prefixMap` record (or an entry about to be serialized) is unusable.
    #[error("Invalid prefixMap entry #{index} - {message}")]
    InvalidEntry {
        /// Position of the record within the blob
        index: usize,
        /// What is wrong with it
        message: String,
    },

    /// Neither the custom nor the built-in table knows the prefix.
    #[error("Unknown prefix - {0}")]
    UnknownPrefix(String),

    /// An arc is too large for the position it has to occupy.
    ///
    /// During encode this is the item, which must fit into 16 bits. While parsing text it is
    /// any component that overflows `u32`.
    #[error("Arc out of range - {0}")]
    ArcOutOfRange(u64),

    /// The OID text is not a dotted-decimal string with at least two components.
    #[error("Invalid OID syntax - '{0}'")]
    InvalidOidSyntax(String),

    /// An out of bound access was attempted while reading or writing a buffer.
    #[error("Out of Bound access would have occurred!")]
    OutOfBounds,

    /// The prefix code is already assigned in the custom table or reserved by the
    /// built-in table.
    #[error("Prefix 0x{0:04x} is already assigned")]
    PrefixConflict(u16),

    /// Every prefix code above the built-in range is in use.
    #[error("No free prefix code left")]
    PrefixSpaceExhausted,

    /// A database column name does not follow the `ATT<syntax><id>` scheme.
    #[error("Invalid column name - '{0}'")]
    InvalidColumnName(String),
}
