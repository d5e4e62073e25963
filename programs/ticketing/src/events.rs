use anchor_lang::prelude::*;

#[event]
pub struct FactoryInitialized {
    pub factory: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct EventCreated {
    pub factory: Pubkey,
    pub event: Pubkey,
    pub manager: Pubkey,
    pub index: u64,
    pub title: String,
    pub event_date: i64,
    pub ticket_cost: u64,
    pub max_attendees: u32,
}

#[event]
pub struct TicketPurchased {
    pub event: Pubkey,
    pub attendee: Pubkey,
    pub payment: u64,
    pub tickets_sold: u32,
}

#[event]
pub struct AttendeeBlacklisted {
    pub event: Pubkey,
    pub principal: Pubkey,
    /// Whether a valid ticket was revoked by this call
    pub revoked: bool,
    pub tickets_sold: u32,
}

/// Sanitized: the issued code itself is never logged.
#[event]
pub struct AttendeeChallenged {
    pub event: Pubkey,
    pub principal: Pubkey,
    pub challenge_nonce: u64,
}

#[event]
pub struct OwnershipConfirmationSubmitted {
    pub event: Pubkey,
    pub attendee: Pubkey,
    pub confirmed: bool,
}

#[event]
pub struct ProceedsWithdrawn {
    pub event: Pubkey,
    pub manager: Pubkey,
    pub amount: u64,
}
