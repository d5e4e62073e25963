use anchor_lang::prelude::*;

use crate::errors::TicketingError;

#[account]
#[derive(InitSpace)]
pub struct EventAccount {
    pub factory: Pubkey,
    pub index: u64,
    pub manager: Pubkey,
    #[max_len(64)]
    pub title: String,
    #[max_len(200)]
    pub event_description: String,
    #[max_len(64)]
    pub event_location: String,
    pub event_date: i64,
    pub max_attendees: u32,
    pub ticket_cost: u64,
    pub tickets_sold: u32,
    pub challenge_nonce: u64,
    pub created_at: i64,
    pub bump: u8,
    pub vault_bump: u8,
}

/// Scalar event fields in the order `get_event_details` reports them.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventDetails {
    pub title: String,
    pub max_attendees: u32,
    pub tickets_sold: u32,
    pub ticket_cost: u64,
    pub event_description: String,
    pub event_location: String,
    pub event_date: i64,
}

impl EventAccount {
    pub fn is_sold_out(&self) -> bool {
        self.tickets_sold >= self.max_attendees
    }

    /// Admission rules for a purchase, checked in a fixed order so the
    /// reported error is deterministic. Nothing is mutated here.
    pub fn check_admission(&self, blacklisted: bool, holds_ticket: bool, payment: u64) -> Result<()> {
        require!(!blacklisted, TicketingError::Blacklisted);
        require!(!holds_ticket, TicketingError::DuplicatePurchase);
        require!(!self.is_sold_out(), TicketingError::CapacityExceeded);
        require!(payment == self.ticket_cost, TicketingError::WrongPayment);
        Ok(())
    }

    pub fn record_sale(&mut self) -> Result<()> {
        require!(!self.is_sold_out(), TicketingError::CapacityExceeded);
        self.tickets_sold = self
            .tickets_sold
            .checked_add(1)
            .ok_or(TicketingError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn release_seat(&mut self) {
        self.tickets_sold = self.tickets_sold.saturating_sub(1);
    }

    /// Account for a blacklisting. Seats are only handed back when a valid
    /// ticket was revoked and the `release-seat-on-blacklist` feature is on.
    pub fn settle_revocation(&mut self, revoked: bool) {
        if revoked && cfg!(feature = "release-seat-on-blacklist") {
            self.release_seat();
        }
    }

    /// Bump the challenge nonce and return the value to use for this challenge.
    pub fn next_challenge_nonce(&mut self) -> Result<u64> {
        let nonce = self.challenge_nonce;
        self.challenge_nonce = nonce
            .checked_add(1)
            .ok_or(TicketingError::ArithmeticOverflow)?;
        Ok(nonce)
    }

    pub fn details(&self) -> EventDetails {
        EventDetails {
            title: self.title.clone(),
            max_attendees: self.max_attendees,
            tickets_sold: self.tickets_sold,
            ticket_cost: self.ticket_cost,
            event_description: self.event_description.clone(),
            event_location: self.event_location.clone(),
            event_date: self.event_date,
        }
    }
}
