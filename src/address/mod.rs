//! Hardware address codec.
//!
//! Addresses are 48-bit values kept in a `u64` so that they can be used as
//! ordered keys. The canonical text form is upper-case, colon separated hex.

use std::{fmt, str::FromStr};

use thiserror::Error;

const ADDRESS_BITS: u32 = 48;
const ADDRESS_MASK: u64 = (1 << ADDRESS_BITS) - 1;
const OCTETS: usize = 6;

/// A 48-bit MAC-style address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u64);

/// Error returned when a string is not a valid address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid address '{input}'")]
pub struct AddressParseError {
    /// The rejected input
    pub input: String,
}

impl Address {
    /// Builds an address from its integer key. Bits above 48 are discarded.
    pub const fn from_u64(value: u64) -> Self {
        Self(value & ADDRESS_MASK)
    }

    /// Returns the integer key of the address.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the six octets, most significant first.
    pub fn octets(self) -> [u8; OCTETS] {
        let bytes = self.0.to_be_bytes();
        let mut octets = [0; OCTETS];
        octets.copy_from_slice(&bytes[2..]);
        octets
    }
}

impl From<[u8; OCTETS]> for Address {
    fn from(octets: [u8; OCTETS]) -> Self {
        Self(octets.iter().fold(0, |acc, &octet| (acc << 8) | u64::from(octet)))
    }
}

impl From<Address> for u64 {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    /// Accepts `00:11:22:33:44:55`, `00-11-22-33-44-55`, and `001122334455`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let error = || AddressParseError {
            input: input.to_string(),
        };
        let text = input.trim();

        let groups: Vec<&str> = if text.contains(':') {
            text.split(':').collect()
        } else if text.contains('-') {
            text.split('-').collect()
        } else if text.len() == OCTETS * 2 && text.is_ascii() {
            (0..OCTETS).map(|i| &text[i * 2..i * 2 + 2]).collect()
        } else {
            return Err(error());
        };

        if groups.len() != OCTETS {
            return Err(error());
        }

        let mut octets = [0; OCTETS];
        for (octet, group) in octets.iter_mut().zip(&groups) {
            if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(error());
            }
            *octet = u8::from_str_radix(group, 16).map_err(|_| error())?;
        }

        Ok(Self::from(octets))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.octets();
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}
