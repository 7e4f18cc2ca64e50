//! Scene-object store with a maintained usage index
//!
//! The subsystem that owns the objects placed in a spatial scene and keeps a
//! reverse "asset id -> referencing object ids" index exactly in step with
//! them:
//!
//! ```text
//! Scene                        ObjectStore                 UsageIndex
//! ├── objects: Vec ──mutated──▶ add / update / delete ──▶ register /
//! │   (insertion order)         delete_objects             unregister
//! │                             remove_all_referencing ◀── usages(asset)
//! │                             remap_asset_id
//! └── (pub(crate): no mutation bypasses the store)
//! ```
//!
//! Invariants upheld after every store operation:
//! - every object in the scene is indexed under its asset id
//! - every indexed id belongs to a live object with that asset id
//! - no index entry is ever empty (absent key == no references)
//! - an object's kind always equals its attribute variant
//!
//! Rendering, asset resolution, and persistence live outside this module;
//! they interact with it only through the store's accessors and the value
//! types below.

mod object;
#[allow(clippy::module_inception)]
mod scene;
mod store;
mod usage_index;
mod validate;

pub use object::{generate_object_id, CropRect, ObjectAttributes, ObjectKind, SceneObject};
pub use scene::Scene;
pub use store::ObjectStore;
pub use usage_index::UsageIndex;
pub use validate::{limits, validate_scene, SceneError};
