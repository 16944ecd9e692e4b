// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::{ChainId, Error, Method, Result, State};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct JsonRpcResponse {
    pub diem_chain_id: ChainId,
    pub diem_ledger_version: u64,
    pub diem_ledger_timestampusec: u64,

    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct JsonRpcError {
    pub code: i16,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl std::error::Error for JsonRpcError {}

impl std::fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

/// A decoded result together with the ledger state of the response that carried it.
#[derive(Debug)]
pub struct Response<T> {
    inner: T,
    state: State,
}

impl<T> Response<T> {
    pub fn new(inner: T, state: State) -> Self {
        Self { inner, state }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn into_parts(self) -> (T, State) {
        (self.inner, self.state)
    }

    pub fn and_then<U, F>(self, f: F) -> Result<Response<U>>
    where
        F: FnOnce(T) -> Result<U>,
    {
        let (inner, state) = self.into_parts();
        Ok(Response::new(f(inner)?, state))
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

// Result decoding, one function per result shape. A missing result is `null`.

/// `null` decodes to `None`, an object to `Some`.
pub(crate) fn decode_optional<T: DeserializeOwned>(result: Value) -> Result<Option<T>> {
    match result {
        Value::Null => Ok(None),
        Value::Object(_) => decode(result).map(Some),
        other => Err(Error::unexpected_result("an object or null", other)),
    }
}

/// `null` decodes to an empty list.
pub(crate) fn decode_list<T: DeserializeOwned>(result: Value) -> Result<Vec<T>> {
    match result {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.into_iter().map(decode).collect(),
        other => Err(Error::unexpected_result("an array or null", other)),
    }
}

pub(crate) fn decode_required<T: DeserializeOwned>(method: Method, result: Value) -> Result<T> {
    decode_optional(result)?.ok_or(Error::ResultNotFound(method))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(Error::InvalidResponse)
}
