use anchor_lang::prelude::*;

/// Marker account: its existence puts `principal` on the event blacklist.
#[account]
#[derive(InitSpace)]
pub struct BlacklistEntry {
    pub event: Pubkey,
    pub principal: Pubkey,
    pub added_at: i64,
    pub bump: u8,
}
