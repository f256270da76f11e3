//! PIN 门禁
//!
//! A gate protects one view behind a 4-digit PIN. The desk runs two gates
//! with independent secrets and lock state (settings and reservations
//! overview); both are instances of [`AccessGate`].
//!
//! The secret is compared in plain text and lives only in process memory.
//! There is no hashing, attempt limiting or persistence.

mod access_gate;
mod pin;

pub use access_gate::{AccessGate, GateCallback, GateKind};
pub use pin::{PIN_LENGTH, PinCode, PinInput, sanitize_pin_input};
