use super::{AlignmentStates, Ciglet, is_valid_op};
use crate::alignment::StatesParseError;
use std::fmt::Write;

impl AsRef<[Ciglet]> for AlignmentStates {
    #[inline]
    fn as_ref(&self) -> &[Ciglet] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a AlignmentStates {
    type Item = Ciglet;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Ciglet>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl IntoIterator for AlignmentStates {
    type Item = Ciglet;
    type IntoIter = <Vec<Ciglet> as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Ciglet> for AlignmentStates {
    /// Collects ciglets, merging adjacent equal operations and dropping zero
    /// increments.
    #[inline]
    fn from_iter<T: IntoIterator<Item = Ciglet>>(iter: T) -> Self {
        let mut states = AlignmentStates::new();
        for ciglet in iter {
            states.add_ciglet(ciglet);
        }
        states
    }
}

impl std::fmt::Debug for AlignmentStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter().map(|c| (c.inc, c.op as char))).finish()
    }
}

impl std::fmt::Display for AlignmentStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buff = itoa::Buffer::new();
        for Ciglet { inc, op } in self {
            f.write_str(buff.format(inc))?;
            f.write_char(op as char)?;
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for AlignmentStates {
    type Error = StatesParseError;

    /// Parses states such as `3M1D2M`. Adjacent repeated operations are merged.
    /// The empty string and `*` both parse to empty states.
    fn try_from(v: &[u8]) -> Result<Self, StatesParseError> {
        let mut states = AlignmentStates::new();
        if v == b"*" {
            return Ok(states);
        }

        let mut inc: Option<usize> = None;
        for &byte in v {
            if byte.is_ascii_digit() {
                let digit = usize::from(byte - b'0');
                let next = inc
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(digit))
                    .ok_or(StatesParseError::IncrementOverflow)?;
                inc = Some(next);
            } else if !is_valid_op(byte) {
                return Err(StatesParseError::InvalidOp(byte));
            } else {
                match inc.take() {
                    None => return Err(StatesParseError::MissingIncrement(byte)),
                    Some(0) => return Err(StatesParseError::ZeroIncrement),
                    Some(inc) => states.add_inc_op(inc, byte),
                }
            }
        }

        if inc.is_some() {
            return Err(StatesParseError::DanglingIncrement);
        }
        Ok(states)
    }
}

impl<const N: usize> TryFrom<&[u8; N]> for AlignmentStates {
    type Error = StatesParseError;

    #[inline]
    fn try_from(v: &[u8; N]) -> Result<Self, Self::Error> {
        AlignmentStates::try_from(v.as_slice())
    }
}

impl TryFrom<&str> for AlignmentStates {
    type Error = StatesParseError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        AlignmentStates::try_from(s.as_bytes())
    }
}

impl std::str::FromStr for AlignmentStates {
    type Err = StatesParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlignmentStates::try_from(s.as_bytes())
    }
}
