//! Game objects and the table that owns them.

use std::collections::HashMap;

use crate::hitbox::{Aabb, Collidable, Contact, HitBox};
use crate::panel::DrawListener;
use crate::Vector;

/// Handle to an object slot. Stable until the owning table is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Motion state shared by every game object.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vector,
    pub velocity: Vector,
    pub acceleration: Vector,
    pub hitbox: HitBox,
    immutable: bool,
}

impl Body {
    pub fn new(position: Vector, hitbox: HitBox) -> Self {
        Self {
            position,
            velocity: Vector::ZERO,
            acceleration: Vector::ZERO,
            hitbox,
            immutable: false,
        }
    }

    /// A body that never moves, e.g. a wall.
    pub fn fixed(position: Vector, hitbox: HitBox) -> Self {
        Self {
            immutable: true,
            ..Self::new(position, hitbox)
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// One step of the discrete motion model: acceleration into velocity,
    /// velocity into position. Immutable bodies stay put.
    pub fn integrate(&mut self) {
        if self.immutable {
            return;
        }
        self.velocity += self.acceleration;
        self.position += self.velocity;
    }

    pub fn bounds(&self) -> Aabb {
        self.hitbox.bounds(self.position)
    }
}

/// An entity advanced once per logic tick and drawn once per frame.
///
/// Collision participation is an optional capability: objects that want
/// physics callbacks return themselves from `collidable`/`collidable_mut`.
pub trait GameObject: DrawListener + Send {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    fn run_logic(&mut self) {
        self.body_mut().integrate();
    }

    fn collidable(&self) -> Option<&dyn Collidable> {
        None
    }

    fn collidable_mut(&mut self) -> Option<&mut dyn Collidable> {
        None
    }
}

pub type BoxedObject = Box<dyn GameObject>;

/// Name-keyed object storage with stable iteration order.
///
/// Names are unique; iteration follows slot order, which is the order names
/// were first inserted. Replacing an object under an existing name keeps its
/// slot.
#[derive(Default)]
pub struct ObjectTable {
    slots: Vec<Option<BoxedObject>>,
    names: HashMap<String, ObjectId>,
}

impl ObjectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under `name`, returning the slot and any object it displaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        object: BoxedObject,
    ) -> (ObjectId, Option<BoxedObject>) {
        let name = name.into();
        if let Some(&id) = self.names.get(&name) {
            let previous = self.slots[id.0].replace(object);
            return (id, previous);
        }
        let id = ObjectId(self.slots.len());
        self.slots.push(Some(object));
        self.names.insert(name, id);
        (id, None)
    }

    pub fn remove(&mut self, name: &str) -> Option<(ObjectId, BoxedObject)> {
        let id = self.names.remove(name)?;
        let object = self.slots.get_mut(id.0)?.take()?;
        Some((id, object))
    }

    pub fn id(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).copied()
    }

    pub fn get(&self, id: ObjectId) -> Option<&(dyn GameObject + 'static)> {
        self.slots.get(id.0)?.as_deref()
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut (dyn GameObject + 'static)> {
        self.slots.get_mut(id.0)?.as_deref_mut()
    }

    pub fn by_name(&self, name: &str) -> Option<&(dyn GameObject + 'static)> {
        self.get(self.id(name)?)
    }

    pub fn by_name_mut(&mut self, name: &str) -> Option<&mut (dyn GameObject + 'static)> {
        let id = self.id(name)?;
        self.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &(dyn GameObject + 'static))> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|o| (ObjectId(i), o)))
    }

    pub fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (ObjectId, &mut (dyn GameObject + 'static))> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref_mut().map(|o| (ObjectId(i), o)))
    }

    /// Snapshot of a collidable object for dispatch to its partner.
    /// `None` if the slot is empty or the object is not collidable.
    pub fn contact(&self, id: ObjectId) -> Option<Contact> {
        let object = self.get(id)?;
        let collidable = object.collidable()?;
        let body = object.body();
        Some(Contact {
            owner: id,
            name: collidable.name(),
            bounds: body.bounds(),
            position: body.position,
            velocity: body.velocity,
            immutable: body.is_immutable(),
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.names.clear();
    }
}
