//! Game objects and the global object list.
//! Kinds are a closed enum; per-kind behaviour (name, opacity, exposed actions)
//! is matched here instead of spread over a type hierarchy.

use slotmap::SlotMap;

use crate::actions::{Action, ActionKind};
use crate::types::{ObjectId, ObjectKind, Pos};

impl ObjectKind {
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Player => "player",
            ObjectKind::Tree => "tree",
            ObjectKind::Wood => "wood",
        }
    }

    pub fn is_transparent(self) -> bool {
        match self {
            ObjectKind::Tree => false,
            ObjectKind::Player | ObjectKind::Wood => true,
        }
    }

    /// Actions an object of this kind exposes from `location`, in display order.
    pub fn actions_for(self, source: ObjectId, location: Pos) -> Vec<Action> {
        match self {
            ObjectKind::Tree => vec![Action {
                source,
                target: location,
                text: "CUT TREE".to_string(),
                kind: ActionKind::DropObject { destroy_self: true, spawn: ObjectKind::Wood },
            }],
            ObjectKind::Player | ObjectKind::Wood => Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub location: Pos,
    pub name: String,
}

impl GameObject {
    pub fn is_transparent(&self) -> bool {
        self.kind.is_transparent()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.kind.actions_for(self.id, self.location)
    }
}

/// The global object list. Iteration follows insertion order so draw/update
/// passes are deterministic regardless of slot reuse.
#[derive(Clone, Debug, Default)]
pub struct ObjectStore {
    objects: SlotMap<ObjectId, GameObject>,
    order: Vec<ObjectId>,
}

impl ObjectStore {
    pub(crate) fn insert(&mut self, kind: ObjectKind, location: Pos) -> ObjectId {
        self.insert_named(kind, location, kind.name().to_string())
    }

    pub(crate) fn insert_named(&mut self, kind: ObjectKind, location: Pos, name: String) -> ObjectId {
        let id = self.objects.insert_with_key(|id| GameObject { id, kind, location, name });
        self.order.push(id);
        id
    }

    pub(crate) fn remove(&mut self, id: ObjectId) -> Option<GameObject> {
        let removed = self.objects.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(removed)
    }

    pub(crate) fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameObject> {
        self.order.iter().filter_map(|&id| self.objects.get(id))
    }

    pub fn count_kind(&self, kind: ObjectKind) -> usize {
        self.iter().filter(|object| object.kind == kind).count()
    }
}
