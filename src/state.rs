// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::{ChainId, Error, JsonRpcResponse, Result};
use slog_scope::warn;
use std::sync::{Mutex, MutexGuard};

/// The ledger metadata attached to every JSON-RPC response.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct State {
    pub chain_id: ChainId,
    pub version: u64,
    pub timestamp_usecs: u64,
}

impl State {
    pub fn from_response(resp: &JsonRpcResponse) -> Self {
        Self {
            chain_id: resp.diem_chain_id,
            version: resp.diem_ledger_version,
            timestamp_usecs: resp.diem_ledger_timestampusec,
        }
    }

    fn genesis(chain_id: ChainId) -> Self {
        Self {
            chain_id,
            version: 0,
            timestamp_usecs: 0,
        }
    }
}

/// Tracks the latest ledger state observed by one client.
///
/// Responses must come from the expected chain and must not be older than what was already
/// seen; anything else is rejected without touching the stored state.
#[derive(Debug)]
pub(crate) struct StateManager {
    last_known_state: Mutex<State>,
}

impl StateManager {
    pub(crate) fn new(chain_id: ChainId) -> Self {
        Self {
            last_known_state: Mutex::new(State::genesis(chain_id)),
        }
    }

    pub(crate) fn last_known_state(&self) -> State {
        self.lock().clone()
    }

    pub(crate) fn timestamp_usecs(&self) -> u64 {
        self.lock().timestamp_usecs
    }

    pub(crate) fn update_state(&self, resp_state: &State) -> Result<()> {
        // Check and write happen under the same guard.
        let mut curr_state = self.lock();

        if curr_state.chain_id != resp_state.chain_id {
            warn!(
                "server responded with chain id {}, expected {}",
                resp_state.chain_id, curr_state.chain_id
            );
            return Err(Error::ChainIdMismatch {
                expected: curr_state.chain_id,
                received: resp_state.chain_id,
            });
        }

        if resp_state.version < curr_state.version {
            return Err(Error::StaleResponse {
                known: curr_state.clone(),
                received: resp_state.clone(),
            });
        }

        *curr_state = resp_state.clone();
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.last_known_state
            .lock()
            .expect("diem cannot currently handle a poisoned lock")
    }
}
