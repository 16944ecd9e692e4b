// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::{AccountAddress, Method};
use serde::Serialize;
use serde_json::{json, Value};

/// Single requests are always sent with this id.
pub const REQUEST_ID: u64 = 0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JsonRpcRequest {
    jsonrpc: &'static str,
    id: u64,
    method: Method,
    params: Vec<Value>,
}

impl JsonRpcRequest {
    pub fn new(method: Method, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            id: REQUEST_ID,
            method,
            params,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn to_json(&self) -> Value {
        json!({
            "jsonrpc": self.jsonrpc,
            "id": self.id,
            "method": self.method,
            "params": self.params,
        })
    }

    pub fn submit(signed_txn_hex: &str) -> Self {
        Self::new(Method::Submit, vec![json!(signed_txn_hex)])
    }

    pub fn get_metadata() -> Self {
        Self::new(Method::GetMetadata, vec![])
    }

    pub fn get_metadata_by_version(version: u64) -> Self {
        Self::new(Method::GetMetadata, vec![json!(version)])
    }

    pub fn get_account(address: AccountAddress) -> Self {
        Self::new(Method::GetAccount, vec![json!(address)])
    }

    pub fn get_transactions(start_version: u64, limit: u64, include_events: bool) -> Self {
        Self::new(
            Method::GetTransactions,
            vec![json!(start_version), json!(limit), json!(include_events)],
        )
    }

    pub fn get_account_transaction(
        address: AccountAddress,
        seq_num: u64,
        include_events: bool,
    ) -> Self {
        Self::new(
            Method::GetAccountTransaction,
            vec![json!(address), json!(seq_num), json!(include_events)],
        )
    }

    pub fn get_account_transactions(
        address: AccountAddress,
        start_seq_num: u64,
        limit: u64,
        include_events: bool,
    ) -> Self {
        Self::new(
            Method::GetAccountTransactions,
            vec![
                json!(address),
                json!(start_seq_num),
                json!(limit),
                json!(include_events),
            ],
        )
    }

    pub fn get_events(key: &str, start_seq: u64, limit: u64) -> Self {
        Self::new(
            Method::GetEvents,
            vec![json!(key), json!(start_seq), json!(limit)],
        )
    }

    pub fn get_currencies() -> Self {
        Self::new(Method::GetCurrencies, vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope() {
        let address: AccountAddress = "d738a0b9851305dfe1d17707f0841dbc".parse().unwrap();
        let request = JsonRpcRequest::get_account_transactions(address, 3, 10, true);
        assert_eq!(
            json!({
                "jsonrpc": "2.0",
                "id": 0,
                "method": "get_account_transactions",
                "params": ["d738a0b9851305dfe1d17707f0841dbc", 3, 10, true],
            }),
            request.to_json()
        );
        assert_eq!(request.to_json(), serde_json::to_value(&request).unwrap());
    }

    #[test]
    fn test_metadata_params() {
        assert!(JsonRpcRequest::get_metadata().params().is_empty());
        assert_eq!(
            &[json!(42)],
            JsonRpcRequest::get_metadata_by_version(42).params()
        );
        assert_eq!(Method::GetMetadata, JsonRpcRequest::get_metadata().method());
    }
}
