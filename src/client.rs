// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::{
    config::defaults,
    response::{decode_list, decode_optional, decode_required},
    state::StateManager,
    views::{AccountView, CurrencyInfoView, EventView, MetadataView, TransactionView},
    AccountAddress, ChainId, ClientConfig, Error, HttpTransport, JsonRpcRequest, JsonRpcResponse,
    RealTimeService, ReqwestTransport, Response, Result, Retry, State, TimeService,
};
use reqwest::Url;
use serde_json::Value;
use slog_scope::debug;
use std::{sync::Arc, time::Duration};

/// A blocking JSON-RPC client bound to one full node endpoint and one chain.
///
/// Read methods are retried according to the configured [`Retry`] (stale responses by default).
/// [`BlockingClient::submit`] is never retried: a stale response to a submission is returned to
/// the caller, who decides whether re-submitting is safe.
pub struct BlockingClient {
    url: Url,
    transport: Arc<dyn HttpTransport>,
    state: StateManager,
    retry: Retry,
    pub(crate) time: Arc<dyn TimeService>,
    pub(crate) wait_delay: Duration,
    pub(crate) wait_timeout: Duration,
}

impl BlockingClient {
    pub fn new<U: AsRef<str>>(server_url: U, chain_id: ChainId) -> anyhow::Result<Self> {
        Ok(Self::with_transport(
            Url::parse(server_url.as_ref())?,
            chain_id,
            Arc::new(ReqwestTransport::new()?),
        ))
    }

    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::with_timeout(config.http_request_timeout())?;
        Ok(Self::with_transport(
            Url::parse(&config.server_url)?,
            config.chain_id,
            Arc::new(transport),
        )
        .with_retry(config.retry())
        .with_wait_delay(config.wait_delay())
        .with_wait_timeout(config.wait_timeout()))
    }

    pub fn with_transport(url: Url, chain_id: ChainId, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            url,
            transport,
            state: StateManager::new(chain_id),
            retry: Retry::default(),
            time: Arc::new(RealTimeService::new()),
            wait_delay: defaults::WAIT_DELAY,
            wait_timeout: defaults::WAIT_TIMEOUT,
        }
    }

    pub fn with_retry(mut self, retry: Retry) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_time_service(mut self, time: Arc<dyn TimeService>) -> Self {
        self.time = time;
        self
    }

    /// Interval between two polls of [`BlockingClient::wait_for_transaction`].
    pub fn with_wait_delay(mut self, delay: Duration) -> Self {
        self.wait_delay = delay;
        self
    }

    /// Timeout used by [`BlockingClient::wait_for_transaction`] when none is given.
    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn retry(&self) -> &Retry {
        &self.retry
    }

    pub fn last_known_state(&self) -> State {
        self.state.last_known_state()
    }

    pub(crate) fn ledger_timestamp_usecs(&self) -> u64 {
        self.state.timestamp_usecs()
    }

    pub fn get_metadata(&self) -> Result<Response<MetadataView>> {
        let request = JsonRpcRequest::get_metadata();
        self.call(&request)?
            .and_then(|result| decode_required(request.method(), result))
    }

    pub fn get_metadata_by_version(&self, version: u64) -> Result<Response<MetadataView>> {
        let request = JsonRpcRequest::get_metadata_by_version(version);
        self.call(&request)?
            .and_then(|result| decode_required(request.method(), result))
    }

    pub fn get_account(&self, address: AccountAddress) -> Result<Response<Option<AccountView>>> {
        self.call(&JsonRpcRequest::get_account(address))?
            .and_then(decode_optional)
    }

    pub fn get_transactions(
        &self,
        start_version: u64,
        limit: u64,
        include_events: bool,
    ) -> Result<Response<Vec<TransactionView>>> {
        self.call(&JsonRpcRequest::get_transactions(
            start_version,
            limit,
            include_events,
        ))?
        .and_then(decode_list)
    }

    pub fn get_account_transaction(
        &self,
        address: AccountAddress,
        seq_num: u64,
        include_events: bool,
    ) -> Result<Response<Option<TransactionView>>> {
        self.call(&JsonRpcRequest::get_account_transaction(
            address,
            seq_num,
            include_events,
        ))?
        .and_then(decode_optional)
    }

    pub fn get_account_transactions(
        &self,
        address: AccountAddress,
        start_seq_num: u64,
        limit: u64,
        include_events: bool,
    ) -> Result<Response<Vec<TransactionView>>> {
        self.call(&JsonRpcRequest::get_account_transactions(
            address,
            start_seq_num,
            limit,
            include_events,
        ))?
        .and_then(decode_list)
    }

    pub fn get_events(
        &self,
        key: &str,
        start_seq: u64,
        limit: u64,
    ) -> Result<Response<Vec<EventView>>> {
        self.call(&JsonRpcRequest::get_events(key, start_seq, limit))?
            .and_then(decode_list)
    }

    pub fn get_currencies(&self) -> Result<Response<Vec<CurrencyInfoView>>> {
        self.call(&JsonRpcRequest::get_currencies())?
            .and_then(decode_list)
    }

    /// Submits BCS serialized signed transaction bytes.
    pub fn submit(&self, signed_txn: &[u8]) -> Result<Response<()>> {
        self.submit_hex(&hex::encode(signed_txn))
    }

    pub fn submit_hex(&self, signed_txn_hex: &str) -> Result<Response<()>> {
        self.call_once(&JsonRpcRequest::submit(signed_txn_hex))?
            .and_then(|_| Ok(()))
    }

    /// Sends `request`, retrying according to the client's [`Retry`]. Use for reads only.
    pub fn call(&self, request: &JsonRpcRequest) -> Result<Response<Value>> {
        self.retry
            .execute(self.time.as_ref(), || self.call_once(request))
    }

    /// Sends `request` exactly once.
    ///
    /// A response carrying a JSON-RPC error is returned as [`Error::JsonRpc`] without updating the
    /// last known state. Otherwise the response's ledger state must pass the chain id and
    /// staleness checks before its result is handed back; an absent result is `null`.
    pub fn call_once(&self, request: &JsonRpcRequest) -> Result<Response<Value>> {
        debug!("sending {} request to {}", request.method(), self.url);
        let http_resp = self
            .transport
            .post(&self.url, &request.to_json())
            .map_err(Error::remote_call)?;
        if http_resp.status != 200 {
            return Err(Error::InvalidHttpStatus {
                status: http_resp.status,
                body: http_resp.body,
            });
        }

        let resp: JsonRpcResponse =
            serde_json::from_str(&http_resp.body).map_err(Error::InvalidResponse)?;
        if let Some(err) = resp.error {
            return Err(Error::JsonRpc(err));
        }

        let state = State::from_response(&resp);
        self.state.update_state(&state)?;

        Ok(Response::new(resp.result.unwrap_or(Value::Null), state))
    }
}

impl std::fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("url", &self.url)
            .field("state", &self.state)
            .field("retry", &self.retry)
            .field("wait_delay", &self.wait_delay)
            .field("wait_timeout", &self.wait_timeout)
            .finish()
    }
}
