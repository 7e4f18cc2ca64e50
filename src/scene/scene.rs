//! Scene value type
//!
//! A scene is the ordered collection of objects belonging to one editable
//! space. Insertion order is preserved across every non-reordering operation.
//! The object list is crate-private: all mutation goes through
//! [`ObjectStore`](super::ObjectStore), which keeps the usage index in sync.

use serde::{Deserialize, Serialize};

use super::object::SceneObject;

/// An editable spatial scene
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Human-readable scene name
    #[serde(default)]
    pub name: String,

    /// Placed objects in insertion order
    pub(crate) objects: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    /// Create a scene from an already-materialized object list
    ///
    /// Used when a scene has been loaded from persistence. Remember to call
    /// [`ObjectStore::sync_index`](super::ObjectStore::sync_index) before
    /// issuing any mutation against the scene.
    pub fn from_objects(name: impl Into<String>, objects: Vec<SceneObject>) -> Self {
        Self {
            name: name.into(),
            objects,
        }
    }

    /// Number of objects in the scene
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_from_objects_preserves_order() {
        let a = SceneObject::image("asset_a", Vec3::ZERO);
        let b = SceneObject::audio("asset_b", Vec3::ZERO);
        let ids = vec![a.id(), b.id()];

        let scene = Scene::from_objects("gallery", vec![a, b]);
        assert_eq!(scene.object_count(), 2);
        let stored: Vec<u64> = scene.objects.iter().map(|o| o.id()).collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn test_new_scene_is_empty() {
        let scene = Scene::new("empty");
        assert!(scene.is_empty());
        assert_eq!(scene.object_count(), 0);
    }
}
