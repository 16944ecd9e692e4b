// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{convert::TryFrom, fmt, str::FromStr};

/// Identifies the network a full node belongs to (mainnet, testnet, a local swarm, ...).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChainId(u8);

impl ChainId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for ChainId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// A 16 byte account address, hex encoded on the wire.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AccountAddress([u8; AccountAddress::LENGTH]);

impl AccountAddress {
    pub const LENGTH: usize = 16;

    pub const fn new(address: [u8; Self::LENGTH]) -> Self {
        Self(address)
    }

    pub fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, AccountAddressParseError> {
        let bytes = hex::decode(hex).map_err(|_| AccountAddressParseError)?;
        Self::try_from(bytes.as_slice())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for AccountAddress {
    type Error = AccountAddressParseError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; Self::LENGTH]>::try_from(bytes)
            .map(Self)
            .map_err(|_| AccountAddressParseError)
    }
}

impl FromStr for AccountAddress {
    type Err = AccountAddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String>::deserialize(deserializer)?;
        AccountAddress::from_hex(&s).map_err(de::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("AccountAddress must be {} hex encoded bytes", AccountAddress::LENGTH)]
pub struct AccountAddressParseError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_address_hex() {
        let address: AccountAddress = "d738a0b9851305dfe1d17707f0841dbc".parse().unwrap();
        assert_eq!("d738a0b9851305dfe1d17707f0841dbc", address.to_string());
        assert_eq!(
            serde_json::json!("d738a0b9851305dfe1d17707f0841dbc"),
            serde_json::to_value(&address).unwrap()
        );
        assert!("d738a0b9".parse::<AccountAddress>().is_err());
        assert!("not hex".parse::<AccountAddress>().is_err());
    }

    #[test]
    fn test_chain_id_is_a_plain_number_on_the_wire() {
        let chain_id: ChainId = serde_json::from_value(serde_json::json!(4)).unwrap();
        assert_eq!(ChainId::new(4), chain_id);
        assert_eq!(serde_json::json!(4), serde_json::to_value(chain_id).unwrap());
    }
}
