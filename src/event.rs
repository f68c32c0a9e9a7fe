use std::collections::{BTreeMap, VecDeque};

use treasure_gen::MapEvent;

pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: MapEvent,
}

/// Tick-bucketed FIFO of input events; one tick per frame.
pub struct EventQueue {
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: MapEvent) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope {
            id,
            tick: self.now,
            kind,
        };
        self.by_tick.entry(self.now).or_default().push_back(env);
        id
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        let q = self.by_tick.get_mut(&self.now)?;
        q.pop_front()
    }

    pub fn advance_tick(&mut self) {
        if self.by_tick.get(&self.now).is_some_and(|q| q.is_empty()) {
            self.by_tick.remove(&self.now);
        }
        self.now = self.now.wrapping_add(1);
    }

    /// Events still waiting in the current or earlier buckets.
    pub fn pending(&self) -> usize {
        self.by_tick.values().map(VecDeque::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_emit_order_within_a_tick() {
        let mut q = EventQueue::new();
        let a = q.emit_now(MapEvent::Regenerate);
        let b = q.emit_now(MapEvent::Export);
        assert!(b > a);
        let first = q.pop_ready().unwrap();
        assert_eq!((first.id, first.kind), (a, MapEvent::Regenerate));
        assert_eq!(q.pop_ready().unwrap().kind, MapEvent::Export);
        assert!(q.pop_ready().is_none());
    }

    #[test]
    fn advancing_clears_drained_bucket() {
        let mut q = EventQueue::new();
        q.emit_now(MapEvent::ToggleFullscreen);
        assert_eq!(q.pending(), 1);
        let env = q.pop_ready().unwrap();
        assert_eq!(env.tick, 0);
        q.advance_tick();
        assert_eq!(q.now, 1);
        assert_eq!(q.pending(), 0);
        q.emit_now(MapEvent::Resize {
            width: 10,
            height: 10,
        });
        assert_eq!(q.pop_ready().unwrap().tick, 1);
    }
}
