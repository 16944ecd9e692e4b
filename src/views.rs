// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

//! Typed views of JSON-RPC results. Fields not listed here are ignored when decoding.

use crate::{AccountAddress, ChainId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const VM_STATUS_EXECUTED: &str = "executed";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AmountView {
    pub amount: u64,
    pub currency: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AccountView {
    pub address: AccountAddress,
    pub sequence_number: u64,
    pub authentication_key: String,
    #[serde(default)]
    pub balances: Vec<AmountView>,
    pub sent_events_key: String,
    pub received_events_key: String,
    #[serde(default)]
    pub delegated_key_rotation_capability: bool,
    #[serde(default)]
    pub delegated_withdrawal_capability: bool,
    #[serde(default)]
    pub is_frozen: bool,
    #[serde(default)]
    pub role: Value,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MetadataView {
    pub version: u64,
    pub timestamp: u64,
    pub chain_id: ChainId,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CurrencyInfoView {
    pub code: String,
    pub scaling_factor: u64,
    pub fractional_part: u64,
    pub to_xdx_exchange_rate: f32,
    #[serde(default)]
    pub mint_events_key: String,
    #[serde(default)]
    pub burn_events_key: String,
    #[serde(default)]
    pub preburn_events_key: String,
    #[serde(default)]
    pub cancel_burn_events_key: String,
    #[serde(default)]
    pub exchange_rate_update_events_key: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EventView {
    pub key: String,
    pub sequence_number: u64,
    pub transaction_version: u64,
    pub data: Value,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VmStatusView {
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TransactionView {
    pub version: u64,
    pub hash: String,
    #[serde(default)]
    pub bytes: String,
    #[serde(default)]
    pub gas_used: u64,
    #[serde(default)]
    pub transaction: Value,
    #[serde(default)]
    pub events: Vec<EventView>,
    #[serde(default)]
    pub vm_status: Option<VmStatusView>,
}

impl TransactionView {
    /// A transaction without a vm status is not considered executed.
    pub fn is_executed(&self) -> bool {
        self.vm_status
            .as_ref()
            .map(|status| status.r#type.eq_ignore_ascii_case(VM_STATUS_EXECUTED))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transaction(vm_status: Value) -> TransactionView {
        serde_json::from_value(json!({
            "version": 27,
            "hash": "f55c91fdc36b9246c423258b74eb579a0972a86b3394e2cfdab528a37f18d1f9",
            "gas_used": 476,
            "vm_status": vm_status,
        }))
        .unwrap()
    }

    #[test]
    fn test_is_executed() {
        assert!(transaction(json!({"type": "executed"})).is_executed());
        assert!(transaction(json!({"type": "EXECUTED"})).is_executed());
        assert!(!transaction(json!({"type": "out_of_gas"})).is_executed());
        assert!(!transaction(json!(null)).is_executed());
    }

    #[test]
    fn test_vm_status_keeps_details() {
        let txn = transaction(json!({"type": "move_abort", "abort_code": 5, "location": "00000000000000000000000000000001::DiemAccount"}));
        let status = txn.vm_status.unwrap();
        assert_eq!("move_abort", status.r#type);
        assert_eq!(Some(&json!(5)), status.details.get("abort_code"));
    }
}
