//! Car identifiers.
//!
//! Every identifier handed out by the factory is a [`ULID`] rendered in its
//! canonical 26-character Crockford Base32 form. ULIDs embed a millisecond
//! timestamp followed by 80 random bits. Identifiers come from a thread-local
//! monotonic generator, so on any one thread an identifier always sorts after
//! the previous one, even within the same millisecond.

use ferroid::{base32::Base32UlidExt, generator::thread_local::Ulid, id::ULID};

/// Length of an encoded identifier.
pub const IDENTIFIER_LEN: usize = 26;

/// Mints a fresh identifier.
pub fn next_identifier() -> String {
    Ulid::new_ulid_mono().encode().to_string()
}

/// Parses an identifier previously produced by [`next_identifier`].
///
/// Returns `None` if the string is not a valid Crockford Base32 ULID.
pub fn parse_identifier(identifier: &str) -> Option<ULID> {
    if identifier.len() != IDENTIFIER_LEN {
        return None;
    }
    ULID::decode(identifier).ok()
}
