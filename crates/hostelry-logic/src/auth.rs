//! Session gate — bounded-attempt secret check for the admin session.
//!
//! The gate holds the expected secret and an attempt budget. Callers feed
//! it raw input; it answers granted, denied-with-budget-left, or locked
//! out. Once the budget is exhausted the gate stays shut for the rest of
//! the run. The comparison is an exact string match today; a
//! hashed-credential check could replace it behind the same contract.
//!
//! ```
//! use hostelry_logic::auth::{AccessGate, AttemptOutcome};
//!
//! let mut gate = AccessGate::new("1234", 3);
//! assert_eq!(gate.submit("0000"), AttemptOutcome::Denied { remaining: 2 });
//! assert_eq!(gate.submit("1234"), AttemptOutcome::Granted);
//! ```

/// Outcome of submitting one secret attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The secret matched; the session is authorized.
    Granted,
    /// Wrong secret, with attempts still left.
    Denied { remaining: u32 },
    /// The attempt budget is exhausted; the gate stays shut.
    LockedOut,
}

/// Bounded-attempt credential check.
#[derive(Debug, Clone)]
pub struct AccessGate {
    secret: String,
    max_attempts: u32,
    used: u32,
}

impl AccessGate {
    pub fn new(secret: impl Into<String>, max_attempts: u32) -> Self {
        Self {
            secret: secret.into(),
            max_attempts,
            used: 0,
        }
    }

    /// Check one attempt against the secret.
    ///
    /// A locked-out gate never grants, even on a correct secret.
    pub fn submit(&mut self, input: &str) -> AttemptOutcome {
        if self.used >= self.max_attempts {
            return AttemptOutcome::LockedOut;
        }
        if input == self.secret {
            return AttemptOutcome::Granted;
        }
        self.used += 1;
        if self.used >= self.max_attempts {
            AttemptOutcome::LockedOut
        } else {
            AttemptOutcome::Denied {
                remaining: self.max_attempts - self.used,
            }
        }
    }

    /// Failed attempts consumed so far.
    pub fn attempts_used(&self) -> u32 {
        self.used
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn is_locked_out(&self) -> bool {
        self.used >= self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_on_first_match() {
        let mut gate = AccessGate::new("1234", 3);
        assert_eq!(gate.submit("1234"), AttemptOutcome::Granted);
        assert_eq!(gate.attempts_used(), 0);
    }

    #[test]
    fn grants_on_last_remaining_attempt() {
        let mut gate = AccessGate::new("1234", 3);
        assert_eq!(gate.submit("a"), AttemptOutcome::Denied { remaining: 2 });
        assert_eq!(gate.submit("b"), AttemptOutcome::Denied { remaining: 1 });
        assert_eq!(gate.submit("1234"), AttemptOutcome::Granted);
    }

    #[test]
    fn locks_out_after_budget_spent() {
        let mut gate = AccessGate::new("1234", 3);
        gate.submit("a");
        gate.submit("b");
        assert_eq!(gate.submit("c"), AttemptOutcome::LockedOut);
        assert!(gate.is_locked_out());
    }

    #[test]
    fn locked_gate_rejects_correct_secret() {
        let mut gate = AccessGate::new("1234", 2);
        gate.submit("a");
        gate.submit("b");
        assert_eq!(gate.submit("1234"), AttemptOutcome::LockedOut);
    }

    #[test]
    fn secret_match_is_exact() {
        let mut gate = AccessGate::new("1234", 3);
        assert_eq!(gate.submit(" 1234"), AttemptOutcome::Denied { remaining: 2 });
        assert_eq!(gate.submit("12345"), AttemptOutcome::Denied { remaining: 1 });
    }

    #[test]
    fn zero_budget_gate_is_born_locked() {
        let mut gate = AccessGate::new("1234", 0);
        assert_eq!(gate.submit("1234"), AttemptOutcome::LockedOut);
    }
}
