use anchor_lang::prelude::*;

use crate::constants::{MAX_ACCOUNT_DATA_LEN, MAX_EVENTS_PER_PAGE};
use crate::errors::TicketingError;

/// Registry of every event created through this program.
///
/// The account starts with an empty list and is grown by 32 bytes on every
/// `create_event`, so its size always matches `deployed_events`.
#[account]
pub struct EventFactory {
    pub authority: Pubkey,
    /// Index handed to the next event; also part of its PDA seeds
    pub event_count: u64,
    pub deployed_events: Vec<Pubkey>,
    pub bump: u8,
}

/// One window of the registry, small enough for transaction return data.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeployedEventsPage {
    pub total: u64,
    pub offset: u32,
    pub events: Vec<Pubkey>,
}

impl EventFactory {
    // 32 + 8 + 4 + 1 = 45 bytes
    pub const BASE_SPACE: usize = 32 + 8 + 4 + 1;

    /// Largest registry that still fits in one account, discriminator included.
    pub const MAX_DEPLOYED_EVENTS: usize = (MAX_ACCOUNT_DATA_LEN - 8 - Self::BASE_SPACE) / 32;

    /// Account data length (without discriminator) for `events` entries.
    pub const fn space_for(events: usize) -> usize {
        Self::BASE_SPACE + events * 32
    }

    pub fn has_room(&self) -> bool {
        self.deployed_events.len() < Self::MAX_DEPLOYED_EVENTS
    }

    /// Append `event` to the registry and return the index it was stored under.
    pub fn register(&mut self, event: Pubkey) -> Result<u64> {
        require!(self.has_room(), TicketingError::RegistryFull);

        let index = self.event_count;
        self.deployed_events.push(event);
        self.event_count = index
            .checked_add(1)
            .ok_or(TicketingError::ArithmeticOverflow)?;

        Ok(index)
    }

    /// Events `offset..offset + limit` in creation order, with `limit` capped
    /// at `MAX_EVENTS_PER_PAGE`. An offset past the end yields an empty page.
    pub fn page(&self, offset: u32, limit: u8) -> DeployedEventsPage {
        let limit = usize::from(limit).min(MAX_EVENTS_PER_PAGE);
        let events = self
            .deployed_events
            .iter()
            .skip(offset as usize)
            .take(limit)
            .copied()
            .collect();

        DeployedEventsPage {
            total: self.deployed_events.len() as u64,
            offset,
            events,
        }
    }
}
