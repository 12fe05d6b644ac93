//! Arena storage for playlist nodes.
//!
//! Entries live in a slab owned by the playlist and address their
//! neighbours by index, so the doubly linked structure carries no owning
//! references and no reference cycles. Slots are recycled through a free
//! list; every removal bumps the slot's generation so ids handed out
//! earlier cannot silently alias a newer entry in the same slot.

use super::list::Track;

/// Opaque handle to an entry in the playlist arena.
///
/// An id stays valid until its entry is removed. A stale id never matches
/// again, even after the underlying slot has been reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug)]
pub(super) struct Node {
    pub(super) track: Track,
    pub(super) next: Option<NodeId>,
    pub(super) prev: Option<NodeId>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug, Default)]
pub(super) struct Arena {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl Arena {
    pub(super) fn insert(&mut self, track: Track) -> NodeId {
        let node = Node {
            track,
            next: None,
            prev: None,
        };
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    pub(super) fn remove(&mut self, id: NodeId) -> Option<Node> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(node)
    }

    pub(super) fn get(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    pub(super) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    pub(super) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Drop every node. Occupied slots get their generation bumped so ids
    /// issued before the clear stay stale.
    pub(super) fn clear(&mut self) {
        for slot in &mut self.slots {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
        self.free = (0..self.slots.len()).rev().collect();
    }
}
