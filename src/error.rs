// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::{views::TransactionView, ChainId, JsonRpcError, Method, State};
use std::time::Duration;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("remote call failed: {0}")]
    RemoteCall(#[source] anyhow::Error),
    #[error("invalid http status {status}, response body: {body}")]
    InvalidHttpStatus { status: u16, body: String },
    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(#[source] serde_json::Error),
    #[error("unexpected result, expected {expected} but got: {result}")]
    UnexpectedResultShape {
        expected: &'static str,
        result: serde_json::Value,
    },
    #[error("result not found for method {0}")]
    ResultNotFound(Method),
    #[error("JSON-RPC error: {0}")]
    JsonRpc(#[source] JsonRpcError),
    #[error("chain id mismatch, expected {expected} but server responded with {received}")]
    ChainIdMismatch { expected: ChainId, received: ChainId },
    #[error("received response with stale metadata: {received:?}, expected a response at least as recent as: {known:?}")]
    StaleResponse { known: State, received: State },
}

/// Coarse classification of [`Error`]; retry decisions are made on this, never on the variant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    ChainIdMismatch,
    StaleResponse,
    JsonRpc,
    InvalidResponse,
    RemoteCall,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RemoteCall(_) => ErrorKind::RemoteCall,
            Error::InvalidHttpStatus { .. }
            | Error::InvalidResponse(_)
            | Error::UnexpectedResultShape { .. }
            | Error::ResultNotFound(_) => ErrorKind::InvalidResponse,
            Error::JsonRpc(_) => ErrorKind::JsonRpc,
            Error::ChainIdMismatch { .. } => ErrorKind::ChainIdMismatch,
            Error::StaleResponse { .. } => ErrorKind::StaleResponse,
        }
    }

    pub fn json_rpc_error(&self) -> Option<&JsonRpcError> {
        match self {
            Error::JsonRpc(err) => Some(err),
            _ => None,
        }
    }

    pub(crate) fn remote_call<E: Into<anyhow::Error>>(err: E) -> Self {
        Error::RemoteCall(err.into())
    }

    pub(crate) fn unexpected_result(expected: &'static str, result: serde_json::Value) -> Self {
        Error::UnexpectedResultShape { expected, result }
    }
}

/// Why waiting for a submitted transaction did not end with an executed transaction.
#[derive(Debug, Error)]
pub enum WaitForTransactionError {
    #[error("failed to get transaction: {0}")]
    GetTransactionError(#[source] Error),
    #[error("transaction hash mismatch, expected {expected} but found {}", .transaction.hash)]
    TransactionHashMismatch {
        expected: String,
        transaction: Box<TransactionView>,
    },
    #[error("transaction execution failed: {:?}", .0.vm_status)]
    TransactionExecutionFailed(Box<TransactionView>),
    #[error("transaction expired at {expiration_time_secs}s, ledger timestamp is {ledger_timestamp_usecs}us")]
    TransactionExpired {
        expiration_time_secs: u64,
        ledger_timestamp_usecs: u64,
    },
    #[error("timed out after {0:?} waiting for transaction")]
    Timeout(Duration),
}
