use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the seed for each new map.
pub trait SeedSource {
    fn next_seed(&mut self) -> i32;
}

/// Wall-clock milliseconds mixed with a draw counter.
#[derive(Debug, Default)]
pub struct TimeSeeds {
    draws: u64,
}

impl TimeSeeds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeedSource for TimeSeeds {
    fn next_seed(&mut self) -> i32 {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.draws = self.draws.wrapping_add(1);
        mix64(millis ^ self.draws.wrapping_mul(0x9e37_79b9_7f4a_7c15)) as i32
    }
}

/// Replays a fixed list, then keeps counting up from the last value.
#[derive(Debug, Default)]
pub struct FixedSeeds {
    queued: VecDeque<i32>,
    last: i32,
}

impl FixedSeeds {
    pub fn new(seeds: impl IntoIterator<Item = i32>) -> Self {
        Self {
            queued: seeds.into_iter().collect(),
            last: 0,
        }
    }
}

impl SeedSource for FixedSeeds {
    fn next_seed(&mut self) -> i32 {
        self.last = match self.queued.pop_front() {
            Some(s) => s,
            None => self.last.wrapping_add(1),
        };
        self.last
    }
}

/// A caller-provided first seed, then time-derived ones.
#[derive(Debug)]
pub struct FirstThenTime {
    first: Option<i32>,
    rest: TimeSeeds,
}

impl FirstThenTime {
    pub fn new(first: Option<i32>) -> Self {
        Self {
            first,
            rest: TimeSeeds::new(),
        }
    }
}

impl SeedSource for FirstThenTime {
    fn next_seed(&mut self) -> i32 {
        self.first.take().unwrap_or_else(|| self.rest.next_seed())
    }
}

// splitmix64 finalizer
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
