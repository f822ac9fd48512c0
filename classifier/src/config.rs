//! # Explorer Constants
//!
//! Every magic number shared between this library and the explorer
//! frontend lives here. The numeric values mirror what the master node
//! backend serves — changing one without coordinating a backend release
//! breaks the implicit wire contract, so don't.

// ---------------------------------------------------------------------------
// Node Endpoint Defaults
// ---------------------------------------------------------------------------

/// Default master node host for local development.
pub const DEFAULT_NODE_HOST: &str = "127.0.0.1";

/// Default master node API port. The node serves both the dashboard and
/// the explorer API on this single port.
pub const DEFAULT_NODE_PORT: u16 = 6001;

/// The default `host:port` authority, assembled for CLI defaults and
/// connection fallbacks.
pub fn default_node_address() -> String {
    format!("{}:{}", DEFAULT_NODE_HOST, DEFAULT_NODE_PORT)
}

// ---------------------------------------------------------------------------
// Explorer Query Limits
// ---------------------------------------------------------------------------

/// Default number of rows an explorer table requests per page.
pub const TABLE_DEFAULT_ROW_COUNT: usize = 100;

/// Return-count tiers accepted by the explorer's listing endpoints.
/// The node clamps out-of-window requests server-side;
/// [`clamp_return_count`] applies the same window client-side.
pub const RETURN_COUNT_LOW: usize = 5;
pub const RETURN_COUNT_MIN: usize = 25;
pub const RETURN_COUNT_MID: usize = 50;
pub const RETURN_COUNT_HIGH: usize = 75;
pub const RETURN_COUNT_MAX: usize = 100;

/// Clamps a requested row count into the window the explorer endpoints
/// accept.
pub fn clamp_return_count(requested: usize) -> usize {
    requested.clamp(RETURN_COUNT_LOW, RETURN_COUNT_MAX)
}

// ---------------------------------------------------------------------------
// Explorer API Paths
// ---------------------------------------------------------------------------

/// Route prefix for every explorer endpoint on the master node.
pub const EXPLORER_PREFIX: &str = "/explorer";

/// `GET /explorer/` — chain overview formatted for display.
pub const EXPLORER_CHAIN_PATH: &str = "/explorer/";

/// `GET /explorer/blocks` — all blocks, newest first.
pub const EXPLORER_BLOCKS_PATH: &str = "/explorer/blocks";

/// `GET /explorer/transactions` — transactions across all blocks.
pub const EXPLORER_TRANSACTIONS_PATH: &str = "/explorer/transactions";

/// `GET /explorer/addresses` — every address recorded on-chain.
pub const EXPLORER_ADDRESSES_PATH: &str = "/explorer/addresses";

/// `GET /explorer/search` — entity search (block, transaction, address).
pub const EXPLORER_SEARCH_PATH: &str = "/explorer/search";

/// Path for a single block by its numeric id.
pub fn block_path(block_id: u64) -> String {
    format!("{}/block/{}", EXPLORER_PREFIX, block_id)
}

/// Path for a single transaction by its hash.
pub fn transaction_path(tx_hash: &str) -> String {
    format!("{}/transaction/{}", EXPLORER_PREFIX, tx_hash)
}

/// Path for a single address by its UUID.
pub fn address_path(address: &str) -> String {
    format!("{}/address/{}", EXPLORER_PREFIX, address)
}
