pub const FACTORY_SEED: &[u8] = b"factory";
pub const EVENT_SEED: &[u8] = b"event";
pub const VAULT_SEED: &[u8] = b"vault";
pub const ATTENDEE_SEED: &[u8] = b"attendee";
pub const BLACKLIST_SEED: &[u8] = b"blacklist";

/// Domain tag mixed into every confirmation code derivation.
pub const CONFIRMATION_CODE_TAG: &[u8] = b"ticketing:confirmation-code";

/// Solana's cap on a single account's data length.
pub const MAX_ACCOUNT_DATA_LEN: usize = 10 * 1024 * 1024;

/// Registry page size: 4 + 30 * 32 bytes of keys plus the page header stays
/// under the 1024 byte return data limit.
pub const MAX_EVENTS_PER_PAGE: usize = 30;

pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_EVENT_DESCRIPTION_LEN: usize = 200;
pub const MAX_EVENT_LOCATION_LEN: usize = 64;

pub const MAX_ATTENDEE_NAME_LEN: usize = 32;
