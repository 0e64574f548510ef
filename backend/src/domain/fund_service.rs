//! Fund allocation bookkeeping for the temple tracker.
//!
//! Donations, expenses, and transfers move money between named fund
//! categories (Annadhanam, Maintenance, Festival, ...). Balances live in
//! memory behind a mutex; durable storage belongs to the surrounding
//! application, not this service.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};
use chrono::Utc;
use shared::{Fund, FundBalancesResponse, FundTransfer, TransferFundsRequest};
use tracing::info;

#[derive(Default)]
struct FundLedger {
    balances: BTreeMap<String, f64>,
    transfers: Vec<FundTransfer>,
}

/// Service responsible for fund balances and transfers between categories.
#[derive(Clone, Default)]
pub struct FundService {
    ledger: Arc<Mutex<FundLedger>>,
}

impl FundService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named fund with a zero balance.
    pub fn create_fund(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            bail!("fund name cannot be empty");
        }
        let mut ledger = self.lock();
        if ledger.balances.contains_key(name) {
            bail!("fund already exists: {}", name);
        }
        ledger.balances.insert(name.to_string(), 0.0);
        info!("created fund {}", name);
        Ok(())
    }

    /// Record a donation receipt into a fund. Returns the new balance.
    pub fn credit(&self, fund: &str, amount: f64) -> Result<f64> {
        if amount <= 0.0 {
            bail!("credit amount must be positive, got {:.2}", amount);
        }
        let mut ledger = self.lock();
        let balance = ledger
            .balances
            .get_mut(fund)
            .ok_or_else(|| anyhow!("unknown fund: {}", fund))?;
        *balance += amount;
        info!("credited {:.2} to {}, new balance {:.2}", amount, fund, balance);
        Ok(*balance)
    }

    /// Record an expense against a fund. Returns the new balance.
    pub fn debit(&self, fund: &str, amount: f64) -> Result<f64> {
        if amount <= 0.0 {
            bail!("debit amount must be positive, got {:.2}", amount);
        }
        let mut ledger = self.lock();
        let balance = ledger
            .balances
            .get_mut(fund)
            .ok_or_else(|| anyhow!("unknown fund: {}", fund))?;
        if *balance < amount {
            bail!(
                "insufficient balance in {}: have {:.2}, need {:.2}",
                fund,
                balance,
                amount
            );
        }
        *balance -= amount;
        info!("debited {:.2} from {}, new balance {:.2}", amount, fund, balance);
        Ok(*balance)
    }

    /// Move money between two funds.
    ///
    /// The debit and credit are applied under one lock, so the total across
    /// all funds is conserved and the history never records a half-applied
    /// transfer.
    pub fn transfer(&self, request: TransferFundsRequest) -> Result<FundTransfer> {
        let from = request.from_fund.as_str();
        let to = request.to_fund.as_str();
        let amount = request.amount;

        if amount <= 0.0 {
            bail!("transfer amount must be positive, got {:.2}", amount);
        }
        if from == to {
            bail!("cannot transfer within the same fund: {}", from);
        }

        let mut ledger = self.lock();
        if !ledger.balances.contains_key(to) {
            bail!("unknown fund: {}", to);
        }
        let source = ledger
            .balances
            .get_mut(from)
            .ok_or_else(|| anyhow!("unknown fund: {}", from))?;
        if *source < amount {
            bail!(
                "insufficient balance in {}: have {:.2}, need {:.2}",
                from,
                source,
                amount
            );
        }
        *source -= amount;
        *ledger
            .balances
            .get_mut(to)
            .expect("destination checked above") += amount;

        let transfer = FundTransfer {
            id: generate_transfer_id(),
            from_fund: request.from_fund,
            to_fund: request.to_fund,
            amount,
            date: Utc::now().to_rfc3339(),
            note: request.note.unwrap_or_default(),
        };
        info!(
            "transferred {:.2} from {} to {} ({})",
            amount, transfer.from_fund, transfer.to_fund, transfer.id
        );
        ledger.transfers.push(transfer.clone());
        Ok(transfer)
    }

    /// Current balances, in stable name order.
    pub fn balances(&self) -> FundBalancesResponse {
        let funds = self
            .lock()
            .balances
            .iter()
            .map(|(name, balance)| Fund {
                name: name.clone(),
                balance: *balance,
            })
            .collect();
        FundBalancesResponse { funds }
    }

    /// Transfer history, oldest first.
    pub fn transfers(&self) -> Vec<FundTransfer> {
        self.lock().transfers.clone()
    }

    // Recover the guard from a poisoned lock; every mutation completes
    // before its guard drops, so the ledger inside stays consistent.
    fn lock(&self) -> MutexGuard<'_, FundLedger> {
        self.ledger
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Generate a transfer ID: "transfer-<epoch_millis>-<hex suffix>".
fn generate_transfer_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards");
    let suffix: String = format!("{:x}", now.as_nanos() % 0x10000)
        .chars()
        .take(4)
        .collect();
    format!("transfer-{}-{}", now.as_millis(), suffix)
}
