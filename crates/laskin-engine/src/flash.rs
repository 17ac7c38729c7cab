// Keypress flash: the ephemeral "pressed" visual state for keyboard
// feedback.
//
// The model is synchronous; the host scheduler supplies the delay. A
// press activates the flag and returns a generation token, and the host
// arranges for `expire(token)` to run after `FLASH_DURATION_MS`. A newer
// press invalidates older tokens, so a rapid re-press keeps the flag
// active instead of being cleared by the earlier press's callback. None
// of this touches arithmetic state.

/// Recommended host delay before expiring a flash, in milliseconds.
pub const FLASH_DURATION_MS: u64 = 100;

/// Cancellation token for one flash activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlashToken(u64);

impl FlashToken {
    /// The raw generation number, for hosts that round-trip the token
    /// through a foreign boundary.
    pub fn generation(self) -> u64 {
        self.0
    }

    /// Rebuild a token from a raw generation number.
    pub fn from_generation(generation: u64) -> Self {
        Self(generation)
    }
}

/// Pressed-state flag with generation-based cancellation.
#[derive(Debug, Default)]
pub struct KeypressFlash {
    generation: u64,
    active: bool,
}

impl KeypressFlash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the flag and return the token the host must pass back
    /// to `expire` after the delay.
    pub fn press(&mut self) -> FlashToken {
        self.generation += 1;
        self.active = true;
        FlashToken(self.generation)
    }

    /// Clear the flag if `token` is still the latest press. Returns
    /// whether the flag was cleared; a stale token does nothing.
    pub fn expire(&mut self, token: FlashToken) -> bool {
        if token.0 == self.generation && self.active {
            self.active = false;
            return true;
        }
        false
    }

    /// Whether the pressed style should currently be shown.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
