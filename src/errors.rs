// Revert reasons. These strings are part of the public interface: callers
// match on them, so they must not change.

// ── Round creation ──
pub const ERR_NOT_CREATOR: &str = "Must be creator";
pub const ERR_INVALID_TIMING: &str = "Invalid timing";
pub const ERR_INVALID_AUCTION_LENGTH: &str = "Invalid auction length";
pub const ERR_START_IN_PAST: &str = "Start time is in past";
pub const ERR_LEAD_TIME_TOO_SHORT: &str = "Too close to start time";
pub const ERR_INVALID_TARGET_AMOUNTS: &str = "Invalid target amounts";
pub const ERR_INVALID_MIN_WEI: &str = "Invalid min wei";
pub const ERR_AUCTION_OVERLAP: &str = "Auction overlap not allowed";

// ── Contribution ──
pub const ERR_GAS_PRICE_TOO_HIGH: &str = "Gas price too high";
pub const ERR_INVALID_ROUND_INDEX: &str = "Invalid round index";
pub const ERR_ROUND_ENDED: &str = "Round has ended";
pub const ERR_ROUND_NOT_STARTED: &str = "Round has not started";
pub const ERR_INVALID_CONTRIBUTION_VALUE: &str = "Invalid contribution value";
pub const ERR_ROUND_MAX_REACHED: &str = "Round max reached";
pub const ERR_MAX_CONTRIBUTION_REACHED: &str = "Max contribution reached";

// ── Round funds ──
pub const ERR_ROUND_NOT_ENDED: &str = "Round has not ended";
pub const ERR_ALREADY_WITHDRAWN: &str = "Round funds already withdrawn";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "Nothing to withdraw";
