//! Read-only instructions. Clients call these through transaction
//! simulation and decode the Anchor return data; nothing is written.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{Attendance, DeployedEventsPage, EventAccount, EventDetails, EventFactory};

#[derive(Accounts)]
pub struct ReadFactory<'info> {
    #[account(seeds = [FACTORY_SEED], bump = factory.bump)]
    pub factory: Account<'info, EventFactory>,
}

#[derive(Accounts)]
pub struct ReadEvent<'info> {
    #[account(
        seeds = [EVENT_SEED, event.factory.as_ref(), &event.index.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, EventAccount>,
}

#[derive(Accounts)]
#[instruction(principal: Pubkey)]
pub struct ReadAttendance<'info> {
    #[account(
        seeds = [EVENT_SEED, event.factory.as_ref(), &event.index.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, EventAccount>,

    /// CHECK: May be uninitialized, which reads as the default record
    #[account(
        seeds = [ATTENDEE_SEED, event.key().as_ref(), principal.as_ref()],
        bump,
    )]
    pub attendance: UncheckedAccount<'info>,
}

impl<'info> ReadAttendance<'info> {
    fn load(&self) -> Result<Attendance> {
        let info = self.attendance.to_account_info();
        if info.data_is_empty() {
            return Ok(Attendance::default());
        }
        require_keys_eq!(
            *info.owner,
            crate::ID,
            anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
        );
        let data = info.try_borrow_data()?;
        let attendance = Attendance::try_deserialize(&mut &data[..])?;
        Ok(attendance)
    }
}

/// Registry reads are paged: the full list outgrows the return data limit
/// after a few dozen events. Page until `offset + events.len() == total`.
pub fn get_deployed_events(
    ctx: Context<ReadFactory>,
    offset: u32,
    limit: u8,
) -> Result<DeployedEventsPage> {
    Ok(ctx.accounts.factory.page(offset, limit))
}

pub fn get_event_details(ctx: Context<ReadEvent>) -> Result<EventDetails> {
    Ok(ctx.accounts.event.details())
}

pub fn get_attendance(ctx: Context<ReadAttendance>, _principal: Pubkey) -> Result<Attendance> {
    ctx.accounts.load()
}

pub fn get_confirmation_code(ctx: Context<ReadAttendance>, _principal: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.load()?.confirmation_code)
}

pub fn confirm_response(ctx: Context<ReadAttendance>, _principal: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.load()?.confirm_response())
}
