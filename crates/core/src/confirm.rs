//! Confirmation gate for mutating operations.
//!
//! Controllers expose unconditional mutations. A caller that needs the user
//! to confirm first wraps the call with [`gated`]:
//!
//! ```
//! use birthday_pass_core::confirm::{gated, AutoDecline, Gated};
//!
//! let mut ran = false;
//! let outcome = gated(&mut AutoDecline, "Reset all passes?", || {
//!     ran = true;
//!     Ok::<_, std::convert::Infallible>(())
//! })
//! .unwrap();
//!
//! assert_eq!(outcome, Gated::Declined);
//! assert!(!ran);
//! ```

/// Prompt shown before redeeming a pass.
pub const REDEEM_PROMPT: &str = "Redeem this pass now? You can't undo this.";

/// Prompt shown before resetting every pass.
pub const RESET_PROMPT: &str = "Reset all passes?";

/// Decides whether a mutating operation may proceed.
pub trait ConfirmationGate {
    /// Ask for confirmation. `true` means proceed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A gate that always confirms (e.g. `--yes` on the command line).
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// A gate that always declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoDecline;

impl ConfirmationGate for AutoDecline {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}

/// Result of a gated operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gated<T> {
    /// The gate confirmed and the operation ran.
    Committed(T),
    /// The gate declined; nothing ran.
    Declined,
}

impl<T> Gated<T> {
    /// Whether the operation ran.
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    /// The operation's output, if it ran.
    #[must_use]
    pub fn committed(self) -> Option<T> {
        match self {
            Self::Committed(value) => Some(value),
            Self::Declined => None,
        }
    }
}

/// Ask `gate` with `prompt`, and run `action` only if it confirms.
///
/// # Errors
///
/// Propagates the error returned by `action`.
pub fn gated<G, T, E, F>(gate: &mut G, prompt: &str, action: F) -> Result<Gated<T>, E>
where
    G: ConfirmationGate + ?Sized,
    F: FnOnce() -> Result<T, E>,
{
    if !gate.confirm(prompt) {
        tracing::debug!(prompt, "confirmation declined");
        return Ok(Gated::Declined);
    }
    action().map(Gated::Committed)
}
