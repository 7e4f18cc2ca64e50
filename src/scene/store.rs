//! Object store - the sole mutation surface for a scene's objects
//!
//! Every mutation of a scene's object list goes through [`ObjectStore`], which
//! updates the [`UsageIndex`] in the same logical step. Callers never touch
//! the object list directly, so the scene and the index can never drift apart.
//!
//! All operations are synchronous, in-memory, and total: an unknown object or
//! asset id is a silent no-op (or empty result), never an error. Exclusivity
//! is structural - each method takes the scene by `&mut`, so no observer can
//! see the scene and the index in a mutually inconsistent state.

use std::collections::HashSet;
use std::mem;

use super::object::SceneObject;
use super::scene::Scene;
use super::usage_index::UsageIndex;

/// Mutation surface for scene objects, with a maintained usage index
///
/// One store (and therefore one index) per editing session. After loading a
/// scene from persistence, call [`sync_index`](Self::sync_index) once before
/// any other mutation.
#[derive(Debug, Default)]
pub struct ObjectStore {
    index: UsageIndex,
}

impl ObjectStore {
    /// Create a store with an empty usage index
    pub fn new() -> Self {
        Self {
            index: UsageIndex::new(),
        }
    }

    /// Read access to the usage index
    pub fn index(&self) -> &UsageIndex {
        &self.index
    }

    /// Populate the index from an already-materialized object list
    ///
    /// Registers every (object id, asset id) pair. Does not touch the scene
    /// itself. Call once per freshly loaded scene; registration is idempotent,
    /// so an accidental second call is harmless. When switching scenes within
    /// one session, clear via [`UsageIndex::clear`] first - this method only
    /// adds entries.
    pub fn sync_index(&mut self, objects: &[SceneObject]) {
        for object in objects {
            self.index.register(object.id(), &object.asset_id);
        }
    }

    /// Clear the index and re-populate it from the given objects
    ///
    /// Convenience for switching to a different scene in the same session.
    pub fn resync_index(&mut self, objects: &[SceneObject]) {
        self.index.clear();
        self.sync_index(objects);
    }

    /// All objects in the scene, in insertion order
    pub fn get_all_objects<'a>(&self, scene: &'a Scene) -> &'a [SceneObject] {
        &scene.objects
    }

    /// Look up an object by id
    pub fn get_object<'a>(&self, scene: &'a Scene, id: u64) -> Option<&'a SceneObject> {
        scene.objects.iter().find(|o| o.id() == id)
    }

    /// Append an object to the scene and register its asset reference
    pub fn add_object(&mut self, scene: &mut Scene, object: SceneObject) {
        let id = object.id();
        let asset_id = object.asset_id.clone();
        scene.objects.push(object);
        self.index.register(id, &asset_id);
    }

    /// Mutate an object in place, re-indexing only if its asset reference changed
    ///
    /// The closure receives the object by `&mut`. The pre-mutation asset id is
    /// captured first; if the closure changes `asset_id`, the old pair is
    /// unregistered and the new pair registered. Mutations that leave
    /// `asset_id` untouched never touch the index. Silent no-op if `id` is
    /// not in the scene.
    pub fn update_object<F>(&mut self, scene: &mut Scene, id: u64, mutate: F)
    where
        F: FnOnce(&mut SceneObject),
    {
        let Some(object) = scene.objects.iter_mut().find(|o| o.id() == id) else {
            return;
        };

        let old_asset_id = object.asset_id.clone();
        mutate(object);

        if object.asset_id != old_asset_id {
            let new_asset_id = object.asset_id.clone();
            self.index.unregister(id, &old_asset_id);
            self.index.register(id, &new_asset_id);
        }
    }

    /// Remove an object by id, unregistering its asset reference
    ///
    /// Returns the removed object, or `None` if `id` is not in the scene.
    pub fn delete_object(&mut self, scene: &mut Scene, id: u64) -> Option<SceneObject> {
        let position = scene.objects.iter().position(|o| o.id() == id)?;
        let object = scene.objects.remove(position);
        self.index.unregister(object.id(), &object.asset_id);
        Some(object)
    }

    /// Remove every object whose id is in `ids`
    ///
    /// One pass over the scene regardless of how many ids are given. Unknown
    /// ids are ignored. Returns the removed objects in insertion order.
    pub fn delete_objects(&mut self, scene: &mut Scene, ids: &HashSet<u64>) -> Vec<SceneObject> {
        if ids.is_empty() {
            return Vec::new();
        }

        let (removed, kept): (Vec<_>, Vec<_>) = mem::take(&mut scene.objects)
            .into_iter()
            .partition(|o| ids.contains(&o.id()));
        scene.objects = kept;

        for object in &removed {
            self.index.unregister(object.id(), &object.asset_id);
        }
        removed
    }

    /// Remove every object referencing `asset_id`
    ///
    /// The candidate set comes from the usage index rather than a scan over
    /// the scene, so the lookup cost scales with the number of matches. The
    /// removed objects are returned so the caller can release whatever it
    /// derived from them (rendered entities, playing audio). Empty result if
    /// nothing references the asset.
    pub fn remove_all_referencing(
        &mut self,
        scene: &mut Scene,
        asset_id: &str,
    ) -> Vec<SceneObject> {
        let candidates = self.index.usages(asset_id);
        if candidates.is_empty() {
            return Vec::new();
        }

        let (removed, kept): (Vec<_>, Vec<_>) = mem::take(&mut scene.objects)
            .into_iter()
            .partition(|o| candidates.contains(&o.id()));
        scene.objects = kept;

        for object in &removed {
            self.index.unregister(object.id(), &object.asset_id);
        }
        removed
    }

    /// Reassign every object referencing `old` to reference `new`
    ///
    /// Returns the affected object ids for downstream notification. Guarded
    /// no-op when `old == new` - a self-remap would pointlessly unregister
    /// and re-register every affected object.
    pub fn remap_asset_id(&mut self, scene: &mut Scene, old: &str, new: &str) -> Vec<u64> {
        if old == new {
            return Vec::new();
        }

        let mut affected = Vec::new();
        for object in scene.objects.iter_mut().filter(|o| o.asset_id == old) {
            object.asset_id = new.to_string();
            affected.push(object.id());
        }

        for &id in &affected {
            self.index.unregister(id, old);
            self.index.register(id, new);
        }
        affected
    }
}
