//! The connection-mode sub-choice.
//!
//! A resolved entry with a single capability connects with it immediately.
//! With more than one, the user picks from a numbered sub-menu: ssh is
//! option 1 whenever the entry has it, lftp and mount follow in that fixed
//! order. No input (timeout or bare Enter) falls back to the first offered
//! mode; anything else has to name an offered option number.

use super::errors::SelectionError;
use super::select::{Capability, CapabilitySet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeMenu {
    options: Vec<Capability>,
}

impl ModeMenu {
    pub fn new(capabilities: &CapabilitySet) -> Self {
        Self {
            options: capabilities.modes().to_vec(),
        }
    }

    /// The offered modes, in prompt order (option 1 first).
    pub fn options(&self) -> &[Capability] {
        &self.options
    }

    /// The single offered mode, when no prompt is needed.
    pub fn sole_option(&self) -> Option<Capability> {
        match self.options.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Applies the prompt outcome. `None` is a timed-out read; empty or
    /// whitespace input is a bare Enter. Both default to option 1. Non-empty
    /// input that is not an offered option number is rejected, not defaulted.
    pub fn decide(&self, input: Option<&str>) -> Result<Capability, SelectionError> {
        let default = self
            .options
            .first()
            .copied()
            .ok_or_else(|| SelectionError::InvalidModeChoice("entry offers no connection mode".to_string()))?;

        let Some(raw) = input else { return Ok(default) };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }

        let choice: usize = trimmed
            .parse()
            .map_err(|_| SelectionError::InvalidModeChoice(trimmed.to_string()))?;
        choice
            .checked_sub(1)
            .and_then(|position| self.options.get(position))
            .copied()
            .ok_or_else(|| SelectionError::InvalidModeChoice(trimmed.to_string()))
    }
}

#[cfg(test)]
#[path = "../test/menu/mode.rs"]
mod tests;
