use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};

use super::pin::{PinCode, PinInput};

/// The two gates of the desk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    /// Settings and catalog administration
    Admin,
    /// Reservations overview
    Overview,
}

impl GateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Overview => "overview",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin area",
            Self::Overview => "Reservations overview",
        }
    }
}

/// Hook fired on gate transitions, receives the gate label
pub type GateCallback = Box<dyn FnMut(&str) + Send>;

/// PIN gate in front of one view
///
/// ```text
///            submit(secret)
///   Locked ─────────────────▶ Unlocked
///     ▲   submit(other):            │
///     │   clear input, stay locked  │
///     └────────── lock() ───────────┘
/// ```
///
/// `change_code` works in either state; callers that expose it only to
/// unlocked users enforce that themselves.
pub struct AccessGate {
    label: String,
    secret: PinCode,
    unlocked: bool,
    input: PinInput,
    on_unlock: Option<GateCallback>,
    on_lock: Option<GateCallback>,
    on_code_change: Option<GateCallback>,
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("label", &self.label)
            .field("unlocked", &self.unlocked)
            .field("input_len", &self.input.len())
            .finish_non_exhaustive()
    }
}

impl AccessGate {
    pub fn new(label: impl Into<String>, secret: PinCode) -> Self {
        Self {
            label: label.into(),
            secret,
            unlocked: false,
            input: PinInput::default(),
            on_unlock: None,
            on_lock: None,
            on_code_change: None,
        }
    }

    pub fn with_on_unlock(mut self, callback: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_unlock = Some(Box::new(callback));
        self
    }

    pub fn with_on_lock(mut self, callback: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_lock = Some(Box::new(callback));
        self
    }

    pub fn with_on_code_change(mut self, callback: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_code_change = Some(Box::new(callback));
        self
    }

    /// Install or replace the unlock hook on an existing gate
    pub fn set_on_unlock(&mut self, callback: GateCallback) {
        self.on_unlock = Some(callback);
    }

    pub fn set_on_lock(&mut self, callback: GateCallback) {
        self.on_lock = Some(callback);
    }

    pub fn set_on_code_change(&mut self, callback: GateCallback) {
        self.on_code_change = Some(callback);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn input(&self) -> &PinInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut PinInput {
        &mut self.input
    }

    /// Typed or pasted entry, sanitized to digits
    pub fn set_input(&mut self, raw: &str) {
        self.input.set(raw);
    }

    /// Compare `entered` against the secret
    ///
    /// On a match the gate unlocks and the unlock hook fires. Otherwise the
    /// entry buffer is cleared, the lock state is left as it was and
    /// `PinIncorrect` is returned.
    pub fn submit(&mut self, entered: &str) -> AppResult<()> {
        self.input.clear();

        if !self.secret.matches(entered) {
            tracing::warn!(gate = %self.label, "PIN rejected");
            return Err(
                AppError::new(ErrorCode::PinIncorrect).with_detail("gate", self.label.as_str())
            );
        }

        self.unlocked = true;
        tracing::info!(gate = %self.label, "Gate unlocked");
        if let Some(cb) = self.on_unlock.as_mut() {
            cb(&self.label);
        }
        Ok(())
    }

    /// Submit whatever is in the keypad buffer
    pub fn submit_input(&mut self) -> AppResult<()> {
        let entered = self.input.as_str().to_string();
        self.submit(&entered)
    }

    /// Re-lock the gate and drop any partial entry
    pub fn lock(&mut self) {
        self.input.clear();
        let was_unlocked = std::mem::replace(&mut self.unlocked, false);
        if was_unlocked {
            tracing::info!(gate = %self.label, "Gate locked");
        }
        if let Some(cb) = self.on_lock.as_mut() {
            cb(&self.label);
        }
    }

    /// Replace the secret
    ///
    /// Succeeds iff `new_code` is exactly four digits and `confirm_code`
    /// equals it. On failure the old secret stays in place.
    pub fn change_code(&mut self, new_code: &str, confirm_code: &str) -> AppResult<()> {
        let code = PinCode::parse(new_code)?;
        if new_code != confirm_code {
            return Err(AppError::new(ErrorCode::PinConfirmationMismatch));
        }

        self.secret = code;
        tracing::info!(gate = %self.label, "Gate PIN changed");
        if let Some(cb) = self.on_code_change.as_mut() {
            cb(&self.label);
        }
        Ok(())
    }

    /// Fail with `GateLocked` unless unlocked
    pub fn ensure_unlocked(&self) -> AppResult<()> {
        if self.unlocked {
            Ok(())
        } else {
            Err(AppError::gate_locked(&self.label))
        }
    }
}
