use anchor_lang::prelude::*;

use crate::constants::FACTORY_SEED;
use crate::events::FactoryInitialized;
use crate::state::EventFactory;

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + EventFactory::space_for(0),
        seeds = [FACTORY_SEED],
        bump
    )]
    pub factory: Account<'info, EventFactory>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    factory.authority = ctx.accounts.authority.key();
    factory.event_count = 0;
    factory.deployed_events = Vec::new();
    factory.bump = ctx.bumps.factory;

    emit!(FactoryInitialized {
        factory: factory.key(),
        authority: factory.authority,
    });

    Ok(())
}
