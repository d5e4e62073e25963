//! State account definitions

pub mod attendance;
pub mod blacklist;
pub mod event;
pub mod factory;

pub use attendance::*;
pub use blacklist::*;
pub use event::*;
pub use factory::*;
