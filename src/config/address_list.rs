use std::collections::{BTreeSet, btree_set};

use serde::{Serialize, Serializer, ser::SerializeSeq};
use tracing::debug;

use super::reading::read_boolean;
use crate::{address::Address, keyfile::KeyFile};

/// A set of addresses with an optional inverted polarity.
///
/// When `inverted` is set, an address present in storage is logically *not*
/// on the list and every absent address is. [`add`](Self::add),
/// [`remove`](Self::remove), and [`contains`](Self::contains) always speak in
/// logical terms; the storage operation flips with the polarity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressList {
    /// Whether the list is applied to scan results.
    pub enabled: bool,

    /// Whether stored addresses denote exclusion instead of membership.
    pub inverted: bool,

    #[serde(serialize_with = "serialize_stored")]
    stored: BTreeSet<Address>,
}

impl AddressList {
    /// Creates an empty, disabled, non-inverted list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the address is logically on the list.
    pub fn contains(&self, address: Address) -> bool {
        self.stored.contains(&address) != self.inverted
    }

    /// Puts the address on the list.
    pub fn add(&mut self, address: Address) {
        self.set_stored(address, !self.inverted);
    }

    /// Takes the address off the list.
    pub fn remove(&mut self, address: Address) {
        self.set_stored(address, self.inverted);
    }

    /// Iterates the stored addresses in ascending order.
    ///
    /// This is the raw storage, not the logical membership.
    pub fn stored(&self) -> btree_set::Iter<'_, Address> {
        self.stored.iter()
    }

    /// Replaces the stored addresses with the given ones.
    pub fn replace_stored<I>(&mut self, addresses: I)
    where
        I: IntoIterator<Item = Address>,
    {
        self.stored = addresses.into_iter().collect();
    }

    /// Number of stored addresses.
    pub fn len(&self) -> usize {
        self.stored.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.stored.is_empty()
    }

    fn set_stored(&mut self, address: Address, present: bool) {
        if present {
            self.stored.insert(address);
        } else {
            self.stored.remove(&address);
        }
    }

    /// Reads `<key>`, `<key>_enabled`, and `<key>_inverted` from a group.
    ///
    /// Entries that are not valid addresses are skipped.
    pub(crate) fn read_from(document: &KeyFile, group: &str, key: &str) -> Self {
        let entries = document.get_string_list(group, key).unwrap_or_default();

        let stored = entries
            .iter()
            .filter_map(|entry| match entry.parse::<Address>() {
                Ok(address) => Some(address),
                Err(error) => {
                    debug!(%error, list = key, "skipping list entry");
                    None
                }
            })
            .collect();

        Self {
            enabled: read_boolean(document, group, &format!("{key}_enabled"), false),
            inverted: read_boolean(document, group, &format!("{key}_inverted"), false),
            stored,
        }
    }

    pub(crate) fn write_to(&self, document: &mut KeyFile, group: &str, key: &str) {
        document.set_boolean(group, &format!("{key}_enabled"), self.enabled);
        document.set_boolean(group, &format!("{key}_inverted"), self.inverted);
        document.set_string_list(group, key, self.stored.iter().map(Address::to_string));
    }
}

impl FromIterator<Address> for AddressList {
    fn from_iter<I: IntoIterator<Item = Address>>(addresses: I) -> Self {
        Self {
            stored: addresses.into_iter().collect(),
            ..Self::default()
        }
    }
}

fn serialize_stored<S>(stored: &BTreeSet<Address>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(stored.len()))?;
    for address in stored {
        seq.serialize_element(&address.to_string())?;
    }
    seq.end()
}
