//! Slot storage for tree nodes. Nodes refer to each other by [`NodeId`] rather than by pointer so
//! that parent back-links never carry ownership and a `Tree` can be moved without fixing up any
//! links.

use std::num::NonZeroU32;

/// A handle to an occupied slot in an [`Arena`]. Zero is never a valid handle so an
/// `Option<NodeId>` costs nothing extra.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct NodeId(NonZeroU32);

impl NodeId {
    pub(crate) const MAX: usize = (u32::MAX - 1) as usize;

    fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`NodeId::from_index` - index exceeds `NodeId::MAX`");
        // `index + 1` is at most `u32::MAX` and never zero.
        Self(NonZeroU32::new((index + 1) as u32).expect("index + 1 is non-zero"))
    }

    fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// How many times a slot has been vacated. A handle paired with the generation it was allocated
/// in names exactly one element, even after the slot is reused.
pub(crate) type Generation = u32;

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: Generation,
    element: Option<T>,
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<NodeId>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// The number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.slots[id.to_index()].element = Some(element);
            id
        } else {
            self.slots.push(Slot {
                generation: 0,
                element: Some(element),
            });
            NodeId::from_index(self.slots.len() - 1)
        }
    }

    /// The generation of the slot `id` names.
    pub(crate) fn generation(&self, id: NodeId) -> Generation {
        self.slots[id.to_index()].generation
    }

    /// Returns `true` if `id` names an occupied slot that hasn't been vacated since `generation`.
    pub(crate) fn contains(&self, id: NodeId, generation: Generation) -> bool {
        matches!(
            self.slots.get(id.to_index()),
            Some(Slot { generation: g, element: Some(_) }) if *g == generation
        )
    }

    pub(crate) fn get(&self, id: NodeId) -> &T {
        self.slots[id.to_index()]
            .element
            .as_ref()
            .expect("`Arena::get` - handle refers to a freed slot")
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        self.slots[id.to_index()]
            .element
            .as_mut()
            .expect("`Arena::get_mut` - handle refers to a freed slot")
    }

    /// Removes the element from its slot and makes the slot available for reuse.
    pub(crate) fn take(&mut self, id: NodeId) -> T {
        let slot = &mut self.slots[id.to_index()];
        let element = slot
            .element
            .take()
            .expect("`Arena::take` - handle refers to a freed slot");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id);
        element
    }

    /// Drops every element. Slots are kept, one generation on, so handles from before the clear
    /// never match a later element.
    pub(crate) fn clear(&mut self) {
        for slot in &mut self.slots {
            if slot.element.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
        // Reversed so the lowest slots are handed out first, as for a fresh arena.
        self.free = (0..self.slots.len()).rev().map(NodeId::from_index).collect();
    }
}
