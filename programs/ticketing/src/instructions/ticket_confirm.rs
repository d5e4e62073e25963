use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::OwnershipConfirmationSubmitted;
use crate::state::{Attendance, EventAccount};

#[derive(Accounts)]
pub struct ConfirmTicketOwnership<'info> {
    /// Must be the holder of the record; the record PDA is keyed by this signer
    pub attendee: Signer<'info>,

    #[account(
        seeds = [EVENT_SEED, event.factory.as_ref(), &event.index.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, EventAccount>,

    #[account(
        mut,
        seeds = [ATTENDEE_SEED, event.key().as_ref(), attendee.key().as_ref()],
        bump = attendance.bump,
    )]
    pub attendance: Account<'info, Attendance>,
}

/// Answer a challenge with `code`.
///
/// A wrong code is not an error: the call succeeds and the record stays
/// unconfirmed.
pub fn confirm_ticket_ownership(ctx: Context<ConfirmTicketOwnership>, code: u64) -> Result<()> {
    let attendee = ctx.accounts.attendee.key();
    let confirmed = ctx.accounts.attendance.confirm(code);

    msg!("Ownership confirmation for {}: {}", attendee, confirmed);

    emit!(OwnershipConfirmationSubmitted {
        event: ctx.accounts.event.key(),
        attendee,
        confirmed,
    });

    Ok(())
}
