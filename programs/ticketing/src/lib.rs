use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{Attendance, DeployedEventsPage, EventDetails};

declare_id!("8E7uPNpMQak95C2bQmf4uhsLuBE23aNTkbuwfqiwp5Mc");

#[program]
pub mod ticketing {
    use super::*;

    pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
        instructions::initialize_factory(ctx)
    }

    pub fn create_event(
        ctx: Context<CreateEvent>,
        title: String,
        event_date: i64,
        ticket_cost: u64,
        event_description: String,
        event_location: String,
        max_attendees: u32,
    ) -> Result<Pubkey> {
        instructions::create_event(
            ctx,
            title,
            event_date,
            ticket_cost,
            event_description,
            event_location,
            max_attendees,
        )
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>, name: String, payment: u64) -> Result<()> {
        instructions::buy_ticket(ctx, name, payment)
    }

    pub fn add_to_blacklist(ctx: Context<AddToBlacklist>, principal: Pubkey) -> Result<()> {
        instructions::add_to_blacklist(ctx, principal)
    }

    pub fn challenge_attendee(
        ctx: Context<ChallengeAttendee>,
        principal: Pubkey,
        seed: u64,
    ) -> Result<()> {
        instructions::challenge_attendee(ctx, principal, seed)
    }

    pub fn confirm_ticket_ownership(ctx: Context<ConfirmTicketOwnership>, code: u64) -> Result<()> {
        instructions::confirm_ticket_ownership(ctx, code)
    }

    pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>) -> Result<()> {
        instructions::withdraw_proceeds(ctx)
    }

    pub fn get_deployed_events(
        ctx: Context<ReadFactory>,
        offset: u32,
        limit: u8,
    ) -> Result<DeployedEventsPage> {
        instructions::get_deployed_events(ctx, offset, limit)
    }

    pub fn get_event_details(ctx: Context<ReadEvent>) -> Result<EventDetails> {
        instructions::get_event_details(ctx)
    }

    pub fn get_attendance(ctx: Context<ReadAttendance>, principal: Pubkey) -> Result<Attendance> {
        instructions::get_attendance(ctx, principal)
    }

    pub fn get_confirmation_code(ctx: Context<ReadAttendance>, principal: Pubkey) -> Result<u64> {
        instructions::get_confirmation_code(ctx, principal)
    }

    pub fn confirm_response(ctx: Context<ReadAttendance>, principal: Pubkey) -> Result<bool> {
        instructions::confirm_response(ctx, principal)
    }
}
