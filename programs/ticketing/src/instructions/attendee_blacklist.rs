use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TicketingError;
use crate::events::AttendeeBlacklisted;
use crate::state::{Attendance, BlacklistEntry, EventAccount};

#[derive(Accounts)]
#[instruction(principal: Pubkey)]
pub struct AddToBlacklist<'info> {
    #[account(mut)]
    pub manager: Signer<'info>,

    #[account(
        mut,
        seeds = [EVENT_SEED, event.factory.as_ref(), &event.index.to_le_bytes()],
        bump = event.bump,
        has_one = manager @ TicketingError::Unauthorized
    )]
    pub event: Account<'info, EventAccount>,

    #[account(
        init_if_needed,
        payer = manager,
        space = 8 + BlacklistEntry::INIT_SPACE,
        seeds = [BLACKLIST_SEED, event.key().as_ref(), principal.as_ref()],
        bump
    )]
    pub blacklist_entry: Account<'info, BlacklistEntry>,

    /// Created empty when the principal never bought a ticket
    #[account(
        init_if_needed,
        payer = manager,
        space = 8 + Attendance::INIT_SPACE,
        seeds = [ATTENDEE_SEED, event.key().as_ref(), principal.as_ref()],
        bump
    )]
    pub attendance: Account<'info, Attendance>,

    pub system_program: Program<'info, System>,
}

/// Ban `principal` from this event and revoke any ticket it holds.
///
/// Blacklisting an already banned principal is a no-op apart from the reset
/// of its (already empty) attendance record.
pub fn add_to_blacklist(ctx: Context<AddToBlacklist>, principal: Pubkey) -> Result<()> {
    let event_key = ctx.accounts.event.key();

    let entry = &mut ctx.accounts.blacklist_entry;
    if entry.event == Pubkey::default() {
        entry.event = event_key;
        entry.principal = principal;
        entry.added_at = Clock::get()?.unix_timestamp;
        entry.bump = ctx.bumps.blacklist_entry;
    }

    let revoked = ctx
        .accounts
        .attendance
        .revoke(event_key, principal, ctx.bumps.attendance);

    let event = &mut ctx.accounts.event;
    event.settle_revocation(revoked);

    msg!("Principal {} blacklisted (ticket revoked: {})", principal, revoked);

    emit!(AttendeeBlacklisted {
        event: event_key,
        principal,
        revoked,
        tickets_sold: event.tickets_sold,
    });

    Ok(())
}
