//! Container identity.
//!
//! Serial numbers have the form `KON-<prefix>-<sequence>`, where the prefix
//! encodes the container kind and the sequence comes from a [`SerialIssuer`].
//! One issuer hands out a single increasing sequence across all kinds, so
//! serials are unique for as long as the issuer lives.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::SERIAL_PREFIX;
use crate::container::ContainerKind;
use crate::error::{Error, Result};

/// Unique identifier of a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SerialNumber {
    kind: ContainerKind,
    sequence: u64,
}

impl SerialNumber {
    /// The container kind encoded in the serial's prefix.
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// The issuer sequence number.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            SERIAL_PREFIX,
            self.kind.serial_prefix(),
            self.sequence
        )
    }
}

impl Serialize for SerialNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Monotonic source of serial numbers.
///
/// Not `Clone`: every serial an issuer hands out is unique. Once sequence
/// `u64::MAX` has been issued the issuer is exhausted.
#[derive(Debug)]
pub struct SerialIssuer {
    next: Option<u64>,
}

impl SerialIssuer {
    /// Issuer whose first serial has sequence number 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Issuer whose first serial has sequence number `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// Sequence number the next call to [`issue`](Self::issue) will use, or
    /// `None` when the issuer is exhausted.
    pub fn peek_next(&self) -> Option<u64> {
        self.next
    }

    /// Issue the next serial number for a container of `kind`.
    ///
    /// # Errors
    ///
    /// [`Error::SerialsExhausted`] once every sequence number has been used.
    pub fn issue(&mut self, kind: ContainerKind) -> Result<SerialNumber> {
        let sequence = self.next.ok_or(Error::SerialsExhausted)?;
        self.next = sequence.checked_add(1);
        Ok(SerialNumber { kind, sequence })
    }
}

impl Default for SerialIssuer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_shared_across_kinds() {
        let mut issuer = SerialIssuer::new();
        let liquid = issuer.issue(ContainerKind::Liquid).unwrap();
        let gas = issuer.issue(ContainerKind::Gas).unwrap();
        let cold = issuer.issue(ContainerKind::Refrigerated).unwrap();

        assert_eq!(liquid.to_string(), "KON-L-1");
        assert_eq!(gas.to_string(), "KON-G-2");
        assert_eq!(cold.to_string(), "KON-C-3");
        assert_eq!(issuer.peek_next(), Some(4));
    }

    #[test]
    fn issuers_are_independent() {
        let mut first = SerialIssuer::starting_at(100);
        let mut second = SerialIssuer::new();

        assert_eq!(first.issue(ContainerKind::Gas).unwrap().sequence(), 100);
        assert_eq!(second.issue(ContainerKind::Gas).unwrap().sequence(), 1);
    }

    #[test]
    fn last_sequence_number_is_issued_once() {
        let mut issuer = SerialIssuer::starting_at(u64::MAX);
        let last = issuer.issue(ContainerKind::Liquid).unwrap();
        assert_eq!(last.sequence(), u64::MAX);
        assert_eq!(issuer.peek_next(), None);
        assert!(matches!(
            issuer.issue(ContainerKind::Gas),
            Err(Error::SerialsExhausted)
        ));
    }
}
