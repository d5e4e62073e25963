use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TicketingError;
use crate::events::EventCreated;
use crate::state::{EventAccount, EventFactory};

#[derive(Accounts)]
pub struct CreateEvent<'info> {
    #[account(mut)]
    pub manager: Signer<'info>,

    /// Grown by one registry slot, paid by the manager
    #[account(
        mut,
        seeds = [FACTORY_SEED],
        bump = factory.bump,
        realloc = 8 + EventFactory::space_for(factory.deployed_events.len() + 1),
        realloc::payer = manager,
        realloc::zero = false,
    )]
    pub factory: Account<'info, EventFactory>,

    #[account(
        init,
        payer = manager,
        space = 8 + EventAccount::INIT_SPACE,
        seeds = [EVENT_SEED, factory.key().as_ref(), &factory.event_count.to_le_bytes()],
        bump
    )]
    pub event: Account<'info, EventAccount>,

    /// Vault PDA collecting ticket payments for this event
    #[account(
        mut,
        seeds = [VAULT_SEED, event.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Create a new event managed by the signer and register it in the factory.
///
/// # Operations
/// 1. Validate capacity and text bounds
/// 2. Initialize the event account
/// 3. Seed the vault with its rent-exempt minimum so any ticket price can land
/// 4. Append the event address to the factory registry
///
/// Returns the address of the new event.
pub fn create_event(
    ctx: Context<CreateEvent>,
    title: String,
    event_date: i64,
    ticket_cost: u64,
    event_description: String,
    event_location: String,
    max_attendees: u32,
) -> Result<Pubkey> {
    require!(max_attendees > 0, TicketingError::InvalidCapacity);
    require!(title.len() <= MAX_TITLE_LEN, TicketingError::TitleTooLong);
    require!(
        event_description.len() <= MAX_EVENT_DESCRIPTION_LEN,
        TicketingError::DescriptionTooLong
    );
    require!(
        event_location.len() <= MAX_EVENT_LOCATION_LEN,
        TicketingError::LocationTooLong
    );
    require!(ctx.accounts.factory.has_room(), TicketingError::RegistryFull);

    let clock = Clock::get()?;
    let event_key = ctx.accounts.event.key();

    let vault_floor = Rent::get()?.minimum_balance(0);
    let vault_balance = ctx.accounts.vault.lamports();
    if vault_balance < vault_floor {
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.manager.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                },
            ),
            vault_floor - vault_balance,
        )?;
    }

    let index = ctx.accounts.factory.register(event_key)?;

    let event = &mut ctx.accounts.event;
    event.factory = ctx.accounts.factory.key();
    event.index = index;
    event.manager = ctx.accounts.manager.key();
    event.title = title.clone();
    event.event_description = event_description;
    event.event_location = event_location;
    event.event_date = event_date;
    event.max_attendees = max_attendees;
    event.ticket_cost = ticket_cost;
    event.tickets_sold = 0;
    event.challenge_nonce = 0;
    event.created_at = clock.unix_timestamp;
    event.bump = ctx.bumps.event;
    event.vault_bump = ctx.bumps.vault;

    msg!("Event {} created at index {}", event_key, index);

    emit!(EventCreated {
        factory: event.factory,
        event: event_key,
        manager: event.manager,
        index,
        title,
        event_date,
        ticket_cost,
        max_attendees,
    });

    Ok(event_key)
}
