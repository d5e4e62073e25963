pub mod attendee_blacklist;
pub mod attendee_challenge;
pub mod event_create;
pub mod event_views;
pub mod factory_init;
pub mod proceeds_withdraw;
pub mod ticket_buy;
pub mod ticket_confirm;

pub use attendee_blacklist::*;
pub use attendee_challenge::*;
pub use event_create::*;
pub use event_views::*;
pub use factory_init::*;
pub use proceeds_withdraw::*;
pub use ticket_buy::*;
pub use ticket_confirm::*;
