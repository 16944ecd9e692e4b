// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::{
    views::TransactionView, AccountAddress, BlockingClient, Response, WaitForTransactionError,
};
use slog_scope::{debug, info, warn};
use std::time::Duration;

/// Identifies a submitted transaction by the slot it has to land in: `(address, sequence_number)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionWaitRequest {
    pub address: AccountAddress,
    pub sequence_number: u64,
    /// Hex encoded transaction hash, compared case-insensitively.
    pub expected_hash: String,
    /// Ledger time (seconds) after which the transaction can no longer be committed.
    pub expiration_time_secs: u64,
    /// Wall clock budget for the whole wait.
    pub timeout: Duration,
}

impl TransactionWaitRequest {
    pub fn new<T: Into<String>>(
        address: AccountAddress,
        sequence_number: u64,
        expected_hash: T,
        expiration_time_secs: u64,
        timeout: Duration,
    ) -> Self {
        Self {
            address,
            sequence_number,
            expected_hash: expected_hash.into(),
            expiration_time_secs,
            timeout,
        }
    }
}

impl BlockingClient {
    /// Polls `get_account_transaction` until the transaction at `(address, seq_num)` shows up
    /// executed. Uses the client's wait timeout when `timeout` is `None`.
    pub fn wait_for_transaction(
        &self,
        address: AccountAddress,
        seq_num: u64,
        txn_hash: &str,
        expiration_time_secs: u64,
        timeout: Option<Duration>,
    ) -> Result<Response<TransactionView>, WaitForTransactionError> {
        self.wait_for_transaction_request(&TransactionWaitRequest::new(
            address,
            seq_num,
            txn_hash,
            expiration_time_secs,
            timeout.unwrap_or(self.wait_timeout),
        ))
    }

    pub fn wait_for_transaction_request(
        &self,
        request: &TransactionWaitRequest,
    ) -> Result<Response<TransactionView>, WaitForTransactionError> {
        let start = self.time.now();
        let deadline = start
            .checked_add(request.timeout)
            .unwrap_or(Duration::MAX);
        let expiration_usecs = request.expiration_time_secs.saturating_mul(1_000_000);

        while self.time.now() < deadline {
            let (txn, state) = self
                .get_account_transaction(request.address, request.sequence_number, true)
                .map_err(WaitForTransactionError::GetTransactionError)?
                .into_parts();

            if let Some(txn) = txn {
                return check_transaction(request, txn).map(|txn| Response::new(txn, state));
            }

            // Expiration is judged against the ledger clock last observed, not the local one.
            let ledger_timestamp_usecs = self.ledger_timestamp_usecs();
            if expiration_usecs <= ledger_timestamp_usecs {
                warn!(
                    "transaction {}:{} expired at {}s, ledger time is {}us",
                    request.address,
                    request.sequence_number,
                    request.expiration_time_secs,
                    ledger_timestamp_usecs
                );
                return Err(WaitForTransactionError::TransactionExpired {
                    expiration_time_secs: request.expiration_time_secs,
                    ledger_timestamp_usecs,
                });
            }

            debug!(
                "transaction {}:{} not found at version {}, polling again in {:?}",
                request.address, request.sequence_number, state.version, self.wait_delay
            );
            self.time.sleep_blocking(self.wait_delay);
        }

        let elapsed = self.time.now().saturating_sub(start);
        warn!(
            "timed out after {:?} waiting for transaction {}:{}",
            elapsed, request.address, request.sequence_number
        );
        Err(WaitForTransactionError::Timeout(elapsed))
    }
}

fn check_transaction(
    request: &TransactionWaitRequest,
    txn: TransactionView,
) -> Result<TransactionView, WaitForTransactionError> {
    if !txn.hash.eq_ignore_ascii_case(&request.expected_hash) {
        warn!(
            "transaction {}:{} has hash {}, expected {}",
            request.address, request.sequence_number, txn.hash, request.expected_hash
        );
        return Err(WaitForTransactionError::TransactionHashMismatch {
            expected: request.expected_hash.clone(),
            transaction: Box::new(txn),
        });
    }
    if !txn.is_executed() {
        warn!(
            "transaction {}:{} failed at version {}: {:?}",
            request.address, request.sequence_number, txn.version, txn.vm_status
        );
        return Err(WaitForTransactionError::TransactionExecutionFailed(
            Box::new(txn),
        ));
    }

    info!(
        "transaction {}:{} executed at version {}",
        request.address, request.sequence_number, txn.version
    );
    Ok(txn)
}
