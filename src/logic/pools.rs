//! Draw-sheet and promotion slicing.
//!
//! Neither function ranks or shuffles anything: both work purely on the order
//! the store enumerated the teams in. Promotion in particular is a placeholder
//! selection, not a leaderboard.

/// Number of teams per draw-sheet pool.
pub const POOL_SIZE: usize = 8;

/// Number of teams returned by promotion results when the caller gives no count.
pub const DEFAULT_PROMOTION_COUNT: usize = 4;

/// Split `items` into consecutive groups of `pool_size`; only the last group
/// may be shorter. An empty input yields no groups.
pub fn partition_into_pools<T>(items: Vec<T>, pool_size: usize) -> Vec<Vec<T>> {
    assert!(pool_size > 0, "pool size must be positive");

    let mut pools = Vec::with_capacity(items.len().div_ceil(pool_size));
    let mut items = items.into_iter().peekable();
    while items.peek().is_some() {
        pools.push(items.by_ref().take(pool_size).collect());
    }
    pools
}

/// The first `count` items, or all of them when there are fewer.
pub fn take_top<T>(mut items: Vec<T>, count: usize) -> Vec<T> {
    items.truncate(count);
    items
}
