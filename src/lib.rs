//! spatial-canvas: object storage for spatial scenes
//!
//! Holds the set of image and audio objects placed in a 3D scene and
//! guarantees that the reverse usage index (asset id -> referencing object
//! ids) stays exactly consistent with the scene across every mutation.
//!
//! Single-writer and fully synchronous: operations take the scene by `&mut`
//! and complete in one step, so observers never see the scene and the index
//! disagree. Unknown ids are silent no-ops by design - the editing UI treats
//! "already gone" the same as "just removed".
//!
//! ```
//! use glam::Vec3;
//! use spatial_canvas::{ObjectStore, Scene, SceneObject};
//!
//! let mut store = ObjectStore::new();
//! let mut scene = Scene::new("gallery");
//!
//! let photo = SceneObject::image("photo_042", Vec3::new(0.0, 1.5, -2.0));
//! let photo_id = photo.id();
//! store.add_object(&mut scene, photo);
//!
//! assert!(store.index().usages("photo_042").contains(&photo_id));
//!
//! let removed = store.remove_all_referencing(&mut scene, "photo_042");
//! assert_eq!(removed.len(), 1);
//! assert!(scene.is_empty());
//! ```

mod scene;

pub use scene::{
    generate_object_id, limits, validate_scene, CropRect, ObjectAttributes, ObjectKind,
    ObjectStore, Scene, SceneError, SceneObject, UsageIndex,
};
