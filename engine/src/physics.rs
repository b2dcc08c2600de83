//! Pairwise AABB collision detection and callback dispatch.

use std::collections::HashSet;

use crate::command::Commands;
use crate::hitbox::Contact;
use crate::object::{ObjectId, ObjectTable};

/// Counts from one physics pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Pairs checked for overlap.
    pub pairs_checked: usize,
    /// Overlapping pairs (each got `touch` on both sides).
    pub touching: usize,
    /// Pairs that started overlapping this pass (each also got `collision`).
    pub collisions: usize,
}

/// Owns the set of physics participants and the contacts seen last pass.
///
/// Detection only: the engine never writes to a body's vectors. Immutable
/// participants are additionally pinned, so even their own callbacks cannot
/// move them during a pass.
#[derive(Debug, Default)]
pub struct PhysicsEngine {
    members: Vec<ObjectId>,
    contacts: HashSet<(ObjectId, ObjectId)>,
}

impl PhysicsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant. Registering the same id twice is a no-op.
    pub fn register(&mut self, id: ObjectId) {
        if !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    pub fn unregister(&mut self, id: ObjectId) {
        self.members.retain(|&m| m != id);
        self.contacts.retain(|&(a, b)| a != id && b != id);
    }

    pub fn is_registered(&self, id: ObjectId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.contacts.clear();
    }

    /// Check every unordered pair of participants once, in registration
    /// order. Each overlapping pair gets `touch` on both sides; a pair that
    /// did not overlap on the previous pass gets `collision` on both sides
    /// first. Both snapshots are taken before either callback runs, and a
    /// pair's callbacks finish before the next pair is examined.
    ///
    /// Participants that are missing or not collidable are skipped.
    pub fn check_collisions(
        &mut self,
        objects: &mut ObjectTable,
        commands: &mut Commands,
    ) -> PassSummary {
        let mut summary = PassSummary::default();
        let mut current = HashSet::new();

        for (i, &a) in self.members.iter().enumerate() {
            for &b in &self.members[i + 1..] {
                summary.pairs_checked += 1;
                let (Some(contact_a), Some(contact_b)) = (objects.contact(a), objects.contact(b))
                else {
                    continue;
                };
                if !contact_a.bounds.overlaps(&contact_b.bounds) {
                    continue;
                }

                let key = pair_key(a, b);
                let started = !self.contacts.contains(&key);
                current.insert(key);

                summary.touching += 1;
                if started {
                    summary.collisions += 1;
                }
                dispatch(objects, a, &contact_b, started, commands);
                dispatch(objects, b, &contact_a, started, commands);
            }
        }

        self.contacts = current;
        summary
    }
}

fn pair_key(a: ObjectId, b: ObjectId) -> (ObjectId, ObjectId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn dispatch(
    objects: &mut ObjectTable,
    id: ObjectId,
    other: &Contact,
    started: bool,
    commands: &mut Commands,
) {
    let Some(object) = objects.get_mut(id) else {
        return;
    };
    let pinned = object
        .body()
        .is_immutable()
        .then_some(object.body().position);

    if let Some(collidable) = object.collidable_mut() {
        if started {
            collidable.collision(other, commands);
        }
        collidable.touch(other, commands);
    }

    if let Some(position) = pinned {
        object.body_mut().position = position;
    }
}
