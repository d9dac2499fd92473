//! Shutdown command wire format.
//!
//! The "protocol" is a single fixed ASCII token delivered to a listener on
//! the target, agreed out-of-band; that listener is not part of this
//! system. The token is sent redundantly over UDP and TCP because the
//! listener treats it as idempotent — duplicate delivery is harmless.

/// The literal command the target's listener acts on.
pub const SHUTDOWN_COMMAND: &str = "shutdown-my-pc";

/// Token as wire bytes.
pub fn command_payload() -> &'static [u8] {
    SHUTDOWN_COMMAND.as_bytes()
}
