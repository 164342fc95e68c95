//! Process-wide decision for what `with_txn` does with a successful transaction.

use once_cell::sync::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnPolicy {
    /// Production behaviour
    CommitOnOk,
    /// Keeps test databases clean without per-test teardown
    RollbackOnOk,
}

impl TxnPolicy {
    /// `commit` selects `CommitOnOk`; anything else (including empty) rolls back.
    pub fn from_env_value(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("commit") {
            TxnPolicy::CommitOnOk
        } else {
            TxnPolicy::RollbackOnOk
        }
    }
}

static POLICY: OnceCell<TxnPolicy> = OnceCell::new();

/// `CommitOnOk` until a policy is installed.
pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or(TxnPolicy::CommitOnOk)
}

/// First call wins; later calls are ignored.
pub fn set_txn_policy(policy: TxnPolicy) {
    if POLICY.set(policy).is_err() {
        tracing::debug!(requested = ?policy, active = ?current(), "txn policy already set");
    }
}
