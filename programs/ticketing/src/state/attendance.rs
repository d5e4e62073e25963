use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::CONFIRMATION_CODE_TAG;

/// Per-principal ticket record for one event.
///
/// A principal that never bought a ticket has no account; clients read that
/// as `Attendance::default()`. Blacklisting resets the record to the same
/// default state.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Attendance {
    pub event: Pubkey,
    pub owner: Pubkey,
    #[max_len(32)]
    pub name: String,
    pub valid: bool,
    /// Zero until the manager issues a challenge
    pub confirmation_code: u64,
    pub confirmed: bool,
    pub bump: u8,
}

impl Attendance {
    pub fn admit(&mut self, event: Pubkey, owner: Pubkey, name: String, bump: u8) {
        self.event = event;
        self.owner = owner;
        self.name = name;
        self.valid = true;
        self.confirmation_code = 0;
        self.confirmed = false;
        self.bump = bump;
    }

    /// Clear the record back to "no ticket". Returns whether a valid ticket
    /// was revoked.
    pub fn revoke(&mut self, event: Pubkey, owner: Pubkey, bump: u8) -> bool {
        let was_valid = self.valid;
        *self = Attendance {
            event,
            owner,
            bump,
            ..Attendance::default()
        };
        was_valid
    }

    pub fn issue_challenge(&mut self, code: u64) {
        self.confirmation_code = code;
        self.confirmed = false;
    }

    /// Record a confirmation attempt. A wrong code leaves the record untouched.
    pub fn confirm(&mut self, code: u64) -> bool {
        if self.valid && self.confirmation_code != 0 && self.confirmation_code == code {
            self.confirmed = true;
        }
        self.confirmed
    }

    pub fn confirm_response(&self) -> bool {
        self.confirmed
    }
}

/// Derive a fresh confirmation code for `principal`.
///
/// The result is never zero (zero means "not challenged") and never equal to
/// `previous`.
pub fn derive_confirmation_code(
    event: &Pubkey,
    principal: &Pubkey,
    seed: u64,
    slot: u64,
    unix_timestamp: i64,
    nonce: u64,
    previous: u64,
) -> u64 {
    let digest = hashv(&[
        CONFIRMATION_CODE_TAG,
        event.as_ref(),
        principal.as_ref(),
        &seed.to_le_bytes(),
        &slot.to_le_bytes(),
        &unix_timestamp.to_le_bytes(),
        &nonce.to_le_bytes(),
        &previous.to_le_bytes(),
    ])
    .to_bytes();

    let mut word = [0u8; 8];
    word.copy_from_slice(&digest[..8]);

    let mut code = u64::from_le_bytes(word);
    while code == 0 || code == previous {
        code = code.wrapping_add(1);
    }
    code
}
