use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TicketingError;
use crate::events::AttendeeChallenged;
use crate::state::{derive_confirmation_code, Attendance, EventAccount};

#[derive(Accounts)]
#[instruction(principal: Pubkey)]
pub struct ChallengeAttendee<'info> {
    pub manager: Signer<'info>,

    #[account(
        mut,
        seeds = [EVENT_SEED, event.factory.as_ref(), &event.index.to_le_bytes()],
        bump = event.bump,
        has_one = manager @ TicketingError::Unauthorized
    )]
    pub event: Account<'info, EventAccount>,

    #[account(
        mut,
        seeds = [ATTENDEE_SEED, event.key().as_ref(), principal.as_ref()],
        bump = attendance.bump,
    )]
    pub attendance: Account<'info, Attendance>,
}

/// Issue a fresh confirmation code to a ticket holder.
///
/// The code is derived from the manager's `seed`, the current slot and
/// timestamp, and the event's challenge nonce. Any earlier confirmation is
/// cleared; the holder has to answer the new challenge.
pub fn challenge_attendee(
    ctx: Context<ChallengeAttendee>,
    principal: Pubkey,
    seed: u64,
) -> Result<()> {
    require!(ctx.accounts.attendance.valid, TicketingError::NotAttendee);

    let clock = Clock::get()?;
    let event_key = ctx.accounts.event.key();
    let nonce = ctx.accounts.event.next_challenge_nonce()?;

    let attendance = &mut ctx.accounts.attendance;
    let code = derive_confirmation_code(
        &event_key,
        &principal,
        seed,
        clock.slot,
        clock.unix_timestamp,
        nonce,
        attendance.confirmation_code,
    );
    attendance.issue_challenge(code);

    msg!("Challenge {} issued to {}", nonce, principal);

    emit!(AttendeeChallenged {
        event: event_key,
        principal,
        challenge_nonce: nonce,
    });

    Ok(())
}
