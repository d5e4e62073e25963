use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TicketingError;
use crate::events::TicketPurchased;
use crate::state::{Attendance, EventAccount};

#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The principal purchasing (and later holding) the ticket
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [EVENT_SEED, event.factory.as_ref(), &event.index.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, EventAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, event.key().as_ref()],
        bump = event.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// CHECK: Only inspected for existence; an initialized account at this
    /// PDA means the buyer is blacklisted
    #[account(
        seeds = [BLACKLIST_SEED, event.key().as_ref(), buyer.key().as_ref()],
        bump,
    )]
    pub blacklist_entry: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Attendance::INIT_SPACE,
        seeds = [ATTENDEE_SEED, event.key().as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub attendance: Account<'info, Attendance>,

    pub system_program: Program<'info, System>,
}

/// Buy one ticket for the signer.
///
/// # Operations
/// 1. Check blacklist, existing ticket, capacity and exact payment (in that order)
/// 2. Move `payment` lamports from the buyer into the event vault
/// 3. Write the attendance record and bump `tickets_sold`
pub fn buy_ticket(ctx: Context<BuyTicket>, name: String, payment: u64) -> Result<()> {
    require!(
        name.len() <= MAX_ATTENDEE_NAME_LEN,
        TicketingError::AttendeeNameTooLong
    );

    let blacklisted = !ctx.accounts.blacklist_entry.data_is_empty();
    ctx.accounts
        .event
        .check_admission(blacklisted, ctx.accounts.attendance.valid, payment)?;

    if payment > 0 {
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                },
            ),
            payment,
        )?;
    }

    let event_key = ctx.accounts.event.key();
    let buyer_key = ctx.accounts.buyer.key();

    ctx.accounts
        .attendance
        .admit(event_key, buyer_key, name, ctx.bumps.attendance);

    let event = &mut ctx.accounts.event;
    event.record_sale()?;

    msg!(
        "Ticket {}/{} sold to {}",
        event.tickets_sold,
        event.max_attendees,
        buyer_key
    );

    emit!(TicketPurchased {
        event: event_key,
        attendee: buyer_key,
        payment,
        tickets_sold: event.tickets_sold,
    });

    Ok(())
}
