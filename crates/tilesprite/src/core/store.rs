use crate::api::types::InstanceId;
use crate::components::object::Object;

struct Slot {
    generation: u32,
    object: Option<Object>,
}

/// Instance storage for one object type.
///
/// Slots are index-stable: removing an instance frees its slot for reuse
/// (most recently freed first) without moving any other instance. Slot
/// capacity starts at the configured size and doubles when full; it never
/// shrinks.
pub struct InstanceStore {
    slots: Vec<Slot>,
    free: Vec<u32>,
    capacity: usize,
    live: usize,
}

impl InstanceStore {
    /// `capacity` is rounded up to a power of two.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1).next_power_of_two();
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            capacity,
            live: 0,
        }
    }

    /// Store an instance and return its handle.
    pub fn insert(&mut self, object: Object) -> InstanceId {
        self.live += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.object = Some(object);
            return InstanceId {
                index,
                generation: slot.generation,
            };
        }

        if self.slots.len() == self.capacity {
            self.capacity *= 2;
            self.slots.reserve_exact(self.capacity - self.slots.len());
            log::debug!("instance store grown to {} slots", self.capacity);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            object: Some(object),
        });
        InstanceId {
            index,
            generation: 0,
        }
    }

    /// Remove an instance. Returns it if the handle was live.
    pub fn remove(&mut self, id: InstanceId) -> Option<Object> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let object = slot.object.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(object)
    }

    pub fn get(&self, id: InstanceId) -> Option<&Object> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.object.as_ref()
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut Object> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.object.as_mut()
    }

    /// Iterate live instances in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (InstanceId, &Object)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let id = InstanceId {
                index: index as u32,
                generation: slot.generation,
            };
            slot.object.as_ref().map(|object| (id, object))
        })
    }

    /// Iterate live instances mutably in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (InstanceId, &mut Object)> {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let id = InstanceId {
                index: index as u32,
                generation: slot.generation,
            };
            slot.object.as_mut().map(|object| (id, object))
        })
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Slots allocated so far (live or free).
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
