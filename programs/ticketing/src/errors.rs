use anchor_lang::prelude::*;

#[error_code]
pub enum TicketingError {
    #[msg("Unauthorized: signer is not the event manager")]
    Unauthorized,

    #[msg("Caller is on the event blacklist")]
    Blacklisted,

    #[msg("Caller already holds a valid ticket for this event")]
    DuplicatePurchase,

    #[msg("No tickets remain for this event")]
    CapacityExceeded,

    #[msg("Payment must equal the ticket cost exactly")]
    WrongPayment,

    #[msg("Maximum attendees must be greater than zero")]
    InvalidCapacity,

    #[msg("Event title exceeds maximum length")]
    TitleTooLong,

    #[msg("Event description exceeds maximum length")]
    DescriptionTooLong,

    #[msg("Event location exceeds maximum length")]
    LocationTooLong,

    #[msg("Attendee name exceeds maximum length")]
    AttendeeNameTooLong,

    #[msg("Event registry is full")]
    RegistryFull,

    #[msg("Principal does not hold a valid ticket")]
    NotAttendee,

    #[msg("Vault holds no proceeds to withdraw")]
    NoProceeds,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
