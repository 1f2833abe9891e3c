//! Confirmation gate for state-changing operations.

/// Asks the caller whether a state-changing operation should proceed.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmPrompt: Send + Sync {
    /// Return `true` to proceed. `target` describes what will be changed.
    fn confirm(&self, operation: &str, target: &str) -> bool;
}

/// Approves everything. For unattended callers that already decided.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, _operation: &str, _target: &str) -> bool {
        true
    }
}

/// Declines everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl ConfirmPrompt for DenyAll {
    fn confirm(&self, _operation: &str, _target: &str) -> bool {
        false
    }
}
