use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TicketingError;
use crate::events::ProceedsWithdrawn;
use crate::state::EventAccount;

#[derive(Accounts)]
pub struct WithdrawProceeds<'info> {
    #[account(mut)]
    pub manager: Signer<'info>,

    #[account(
        seeds = [EVENT_SEED, event.factory.as_ref(), &event.index.to_le_bytes()],
        bump = event.bump,
        has_one = manager @ TicketingError::Unauthorized
    )]
    pub event: Account<'info, EventAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, event.key().as_ref()],
        bump = event.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Send every lamport above the vault's rent-exempt floor to the manager.
pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>) -> Result<()> {
    let event_key = ctx.accounts.event.key();
    let vault_bump = ctx.accounts.event.vault_bump;

    let floor = Rent::get()?.minimum_balance(0);
    let amount = ctx.accounts.vault.lamports().saturating_sub(floor);
    require!(amount > 0, TicketingError::NoProceeds);

    let vault_seeds: &[&[u8]] = &[VAULT_SEED, event_key.as_ref(), &[vault_bump]];

    anchor_lang::system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.manager.to_account_info(),
            },
            &[vault_seeds],
        ),
        amount,
    )?;

    msg!("Withdrew {} lamports from vault of {}", amount, event_key);

    emit!(ProceedsWithdrawn {
        event: event_key,
        manager: ctx.accounts.manager.key(),
        amount,
    });

    Ok(())
}
