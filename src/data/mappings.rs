use std::ops::Index;

/// Marks a byte without an index in a [`ByteIndexMap`].
const UNMAPPED: u8 = u8::MAX;

/// Represents a mapping between bytes and indices. For example, this could be a
/// map from DNA bases to the rows of a substitution matrix, such as
/// [`DNA_PROFILE_MAP`].
///
/// Bytes not listed as keys map to the index of the `catch_all` byte if one
/// was given, and otherwise have no index at all.
///
/// ## Type Parameters
/// * `KEYS` - The number of bytes being mapped (such as 5 for DNA including
///   *N*)
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct ByteIndexMap<const KEYS: usize> {
    pub(crate) index_map: [u8; 256],
    pub(crate) byte_keys: [u8; KEYS],
}

impl<const S: usize> ByteIndexMap<S> {
    /// Create a new [`ByteIndexMap`] representing a mapping between bytes and
    /// indices. Any byte not in `byte_keys` maps to the same index as
    /// `catch_all`, or is left unmapped if `catch_all` is `None`.
    ///
    /// ## Panics
    ///
    /// No duplicates can be present in `byte_keys`, which can have at most 255
    /// keys. `catch_all` must be present in `byte_keys`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn new(byte_keys: [u8; S], catch_all: Option<u8>) -> Self {
        assert!(S < UNMAPPED as usize, "Too many byte keys were provided.");
        assert!(is_unique(&byte_keys), "The byte keys must be unique.");

        let mut out = ByteIndexMap {
            index_map: [UNMAPPED; 256],
            byte_keys,
        };
        if let Some(catch_all) = catch_all {
            out.index_map = [catch_all_index(&byte_keys, catch_all); 256];
        }

        let mut i = 0;
        while i < S {
            // Truncation will not occur since S < 255
            out.index_map[byte_keys[i] as usize] = i as u8;
            i += 1;
        }
        out
    }

    /// Create a new [`ByteIndexMap`] like [`new`], where both `byte_keys` and
    /// `catch_all` ignore case.
    ///
    /// ## Panics
    ///
    /// Same as [`new`], after converting the keys to uppercase.
    ///
    /// [`new`]: ByteIndexMap::new
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn new_ignoring_case(byte_keys: [u8; S], catch_all: Option<u8>) -> Self {
        let byte_keys = make_uppercase(&byte_keys);
        let catch_all = match catch_all {
            Some(byte) => Some(byte.to_ascii_uppercase()),
            None => None,
        };

        let mut out = Self::new(byte_keys, catch_all);
        let mut i = 0;
        while i < S {
            out.index_map[byte_keys[i].to_ascii_lowercase() as usize] = i as u8;
            i += 1;
        }
        out
    }

    /// Change the [`ByteIndexMap`] so that `new_key` maps to the same index as
    /// `previous_key`, in both cases.
    #[inline]
    #[must_use]
    pub const fn add_synonym_ignoring_case(mut self, new_key: u8, previous_key: u8) -> Self {
        let index = self.index_map[previous_key as usize];
        self.index_map[new_key.to_ascii_lowercase() as usize] = index;
        self.index_map[new_key.to_ascii_uppercase() as usize] = index;
        self
    }

    /// Get the length of `byte_keys`.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.byte_keys.len()
    }

    /// The keys of the mapping, in index order.
    #[inline]
    #[must_use]
    pub const fn byte_keys(&self) -> &[u8; S] {
        &self.byte_keys
    }

    /// Convert a byte into an index, if it has one.
    #[inline]
    #[must_use]
    pub const fn to_index(&self, b: u8) -> Option<usize> {
        match self.index_map[b as usize] {
            UNMAPPED => None,
            index => Some(index as usize),
        }
    }

    /// Whether the byte has an index, either directly or via the catch-all.
    #[inline]
    #[must_use]
    pub const fn contains(&self, b: u8) -> bool {
        self.index_map[b as usize] != UNMAPPED
    }

    /// Whether `b` is one of the keys of the mapping (not via the catch-all).
    #[inline]
    #[must_use]
    pub const fn in_byte_keys(&self, b: u8) -> bool {
        position(&self.byte_keys, b).is_some()
    }
}

impl<const S: usize> Index<u8> for ByteIndexMap<S> {
    type Output = u8;

    #[inline]
    fn index(&self, index: u8) -> &u8 {
        &self.index_map[index as usize]
    }
}

/// Maps DNA bases to indices `{A: 0, C: 1, G: 2, T: 3, N: 4}`, ignoring case.
/// `U` is treated as `T`, and any other byte is treated as `N`.
pub const DNA_PROFILE_MAP: ByteIndexMap<5> =
    ByteIndexMap::new_ignoring_case(*b"ACGTN", Some(b'N')).add_synonym_ignoring_case(b'U', b'T');

/// Maps DNA bases to indices `{A: 0, C: 1, G: 2, T: 3}`, ignoring case. `U` is
/// treated as `T`, and any other byte is unmapped.
pub const DNA_STRICT_MAP: ByteIndexMap<4> =
    ByteIndexMap::new_ignoring_case(*b"ACGT", None).add_synonym_ignoring_case(b'U', b'T');

#[allow(clippy::cast_possible_truncation)]
const fn catch_all_index<const N: usize>(byte_keys: &[u8; N], catch_all: u8) -> u8 {
    match position(byte_keys, catch_all) {
        Some(index) => index as u8,
        None => panic!("The catch_all must be present in the byte_keys."),
    }
}

const fn make_uppercase<const N: usize>(a: &[u8; N]) -> [u8; N] {
    let mut b = [0; N];
    let mut i = 0;
    while i < N {
        b[i] = a[i].to_ascii_uppercase();
        i += 1;
    }
    b
}

const fn position<const N: usize>(a: &[u8; N], needle: u8) -> Option<usize> {
    let mut i = 0;
    while i < N {
        if needle == a[i] {
            return Some(i);
        }
        i += 1;
    }
    None
}

const fn is_unique<const N: usize>(a: &[u8; N]) -> bool {
    let mut i = 0;
    while i < N {
        let mut j = i + 1;
        while j < N {
            if a[i] == a[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dna_profile_map() {
        assert_eq!(DNA_PROFILE_MAP.to_index(b'A'), Some(0));
        assert_eq!(DNA_PROFILE_MAP.to_index(b'g'), Some(2));
        assert_eq!(DNA_PROFILE_MAP.to_index(b'u'), Some(3));
        assert_eq!(DNA_PROFILE_MAP.to_index(b'X'), Some(4));
        assert!(DNA_PROFILE_MAP.contains(b'-'));
        assert!(!DNA_PROFILE_MAP.in_byte_keys(b'-'));
        assert_eq!(DNA_PROFILE_MAP[b'c'], 1);
    }

    #[test]
    fn strict_map_leaves_bytes_unmapped() {
        assert_eq!(DNA_STRICT_MAP.to_index(b't'), Some(3));
        assert_eq!(DNA_STRICT_MAP.to_index(b'U'), Some(3));
        assert_eq!(DNA_STRICT_MAP.to_index(b'N'), None);
        assert!(!DNA_STRICT_MAP.contains(b'*'));
        assert_eq!(DNA_STRICT_MAP.len(), 4);
    }

    #[test]
    fn is_unique_keys() {
        assert!(is_unique(b"ACGT"));
        assert!(!is_unique(b"ACGA"));
        assert!(is_unique(b""));
    }
}
