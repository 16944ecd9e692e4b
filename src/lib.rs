// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! A blocking client for the Diem JSON-RPC API.
//!
//! Every response carries the ledger metadata of the full node that served it. The client
//! remembers the most recent `(chain_id, version, timestamp)` it has seen and rejects responses
//! coming from a different chain or from a replica that is behind what was already observed.
//! Stale responses on read methods are retried; submissions never are.
//!
//! ```rust, no_run
//! use diem_json_rpc_client::{BlockingClient, ChainId};
//!
//! # fn doc() -> anyhow::Result<()> {
//! let client = BlockingClient::new("http://testnet.diem.com/v1", ChainId::new(2))?;
//! let metadata = client.get_metadata()?;
//! println!("ledger version {}", metadata.state().version);
//! # Ok(())
//! # }
//! ```

// The `debug!` and friends macros in `slog_scope` expand to `slog_debug!` and co, which have
// to be in scope at the call site.
#[allow(unused_imports)]
#[macro_use]
extern crate slog;

mod client;
pub use client::BlockingClient;

pub mod config;
pub use config::ClientConfig;

mod error;
pub use error::{Error, ErrorKind, Result, WaitForTransactionError};

mod request;
pub use request::JsonRpcRequest;

mod response;
pub use response::{JsonRpcError, JsonRpcResponse, Response};

mod retry;
pub use retry::{Outcome, Retry};

mod state;
pub use state::State;

pub mod time;
pub use time::{RealTimeService, TimeService};

pub mod transport;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

mod types;
pub use types::{AccountAddress, AccountAddressParseError, ChainId};

pub mod views;

mod wait;
pub use wait::TransactionWaitRequest;


use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Submit,
    GetMetadata,
    GetAccount,
    GetTransactions,
    GetAccountTransaction,
    GetAccountTransactions,
    GetEvents,
    GetCurrencies,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Submit => "submit",
            Method::GetMetadata => "get_metadata",
            Method::GetAccount => "get_account",
            Method::GetTransactions => "get_transactions",
            Method::GetAccountTransaction => "get_account_transaction",
            Method::GetAccountTransactions => "get_account_transactions",
            Method::GetEvents => "get_events",
            Method::GetCurrencies => "get_currencies",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
