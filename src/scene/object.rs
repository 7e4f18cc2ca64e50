//! Scene object definition
//!
//! A scene object is a placed item in a spatial scene: an image plane or an
//! audio emitter, positioned in 3D space, referencing an asset by id. The
//! asset itself (bytes, metadata) lives in an external catalog - objects only
//! carry the reference.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Counter for generating unique object IDs
static OBJECT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a stable unique ID for a scene object
///
/// Uses a combination of atomic counter, random value, and timestamp to ensure
/// uniqueness both within a session and across separate launches.
pub fn generate_object_id() -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let counter = OBJECT_ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    let random_bits: u64 = rand::random();

    let mut hasher = DefaultHasher::new();
    counter.hash(&mut hasher);
    random_bits.hash(&mut hasher);

    // Include timestamp for cross-session uniqueness (counter resets and the
    // rand seed may match across launches)
    if let Ok(time) = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
        time.as_nanos().hash(&mut hasher);
    }

    hasher.finish()
}

fn default_true() -> bool {
    true
}

fn default_scale() -> f32 {
    1.0
}

fn default_volume() -> f32 {
    1.0
}

/// The kind of content a scene object represents
///
/// Derived from the object's attributes - never stored separately, so it can
/// never disagree with the attribute variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Image,
    Audio,
}

/// Normalized crop rectangle for image objects
///
/// Components are fractions of the source image; the default covers the
/// full frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Crop covering the entire source image
    pub fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }
}

impl Default for CropRect {
    fn default() -> Self {
        Self::full()
    }
}

/// Kind-specific parameters of a scene object
///
/// The variant is fixed at construction and never switched - an image object
/// stays an image object for its whole lifetime. Adding a variant here forces
/// every exhaustive match in the crate to be updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectAttributes {
    /// Image plane placed in the scene
    Image {
        /// Uniform scale multiplier
        #[serde(default = "default_scale")]
        scale: f32,
        /// Rotation around the vertical axis, in radians
        #[serde(default)]
        rotation: f32,
        /// Normalized crop applied to the source image
        #[serde(default)]
        crop: CropRect,
        /// Whether the plane always faces the viewer
        #[serde(default)]
        billboard: bool,
    },

    /// Positional audio emitter
    Audio {
        /// Volume multiplier (0.0 - 1.0)
        #[serde(default = "default_volume")]
        volume: f32,
    },
}

impl ObjectAttributes {
    /// Default attributes for a new image object
    pub fn image() -> Self {
        ObjectAttributes::Image {
            scale: 1.0,
            rotation: 0.0,
            crop: CropRect::full(),
            billboard: false,
        }
    }

    /// Default attributes for a new audio object
    pub fn audio() -> Self {
        ObjectAttributes::Audio { volume: 1.0 }
    }

    /// The kind tag of this variant
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectAttributes::Image { .. } => ObjectKind::Image,
            ObjectAttributes::Audio { .. } => ObjectKind::Audio,
        }
    }

    /// Get a human-readable name for this variant
    pub fn type_name(&self) -> &'static str {
        match self {
            ObjectAttributes::Image { .. } => "Image",
            ObjectAttributes::Audio { .. } => "Audio",
        }
    }

    /// Check if this is an Image variant
    pub fn is_image(&self) -> bool {
        matches!(self, ObjectAttributes::Image { .. })
    }

    /// Check if this is an Audio variant
    pub fn is_audio(&self) -> bool {
        matches!(self, ObjectAttributes::Audio { .. })
    }
}

/// A placed object in a spatial scene
///
/// Objects reference their asset by a string id; resolving that id to actual
/// content is the asset catalog's job. The `id` is stable for the object's
/// lifetime and is what the usage index tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Stable unique identifier, immutable after creation
    #[serde(default = "generate_object_id")]
    id: u64,

    /// Identifier of the referenced asset (foreign reference, not owned)
    pub asset_id: String,

    /// World-space position
    pub position: Vec3,

    /// Whether the object can currently be manipulated by the user
    #[serde(default = "default_true")]
    pub is_editable: bool,

    /// Kind-specific parameters; the variant never changes after creation
    attributes: ObjectAttributes,
}

impl SceneObject {
    /// Create an image object with default attributes
    pub fn image(asset_id: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: generate_object_id(),
            asset_id: asset_id.into(),
            position,
            is_editable: true,
            attributes: ObjectAttributes::image(),
        }
    }

    /// Create an audio object with default attributes
    pub fn audio(asset_id: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: generate_object_id(),
            asset_id: asset_id.into(),
            position,
            is_editable: true,
            attributes: ObjectAttributes::audio(),
        }
    }

    /// Set editability
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.is_editable = editable;
        self
    }

    /// The object's stable identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The kind of this object, derived from its attributes
    pub fn kind(&self) -> ObjectKind {
        self.attributes.kind()
    }

    /// Kind-specific attributes (read-only; mutate through the setters)
    pub fn attributes(&self) -> &ObjectAttributes {
        &self.attributes
    }

    /// Set the uniform scale (image objects only; no-op otherwise)
    pub fn set_scale(&mut self, value: f32) {
        if let ObjectAttributes::Image { scale, .. } = &mut self.attributes {
            *scale = value;
        }
    }

    /// Set the rotation in radians (image objects only; no-op otherwise)
    pub fn set_rotation(&mut self, value: f32) {
        if let ObjectAttributes::Image { rotation, .. } = &mut self.attributes {
            *rotation = value;
        }
    }

    /// Set the crop rectangle (image objects only; no-op otherwise)
    pub fn set_crop(&mut self, value: CropRect) {
        if let ObjectAttributes::Image { crop, .. } = &mut self.attributes {
            *crop = value;
        }
    }

    /// Set the billboard flag (image objects only; no-op otherwise)
    pub fn set_billboard(&mut self, value: bool) {
        if let ObjectAttributes::Image { billboard, .. } = &mut self.attributes {
            *billboard = value;
        }
    }

    /// Set the volume (audio objects only; no-op otherwise)
    pub fn set_volume(&mut self, value: f32) {
        if let ObjectAttributes::Audio { volume } = &mut self.attributes {
            *volume = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids() {
        let a = SceneObject::image("asset_a", Vec3::ZERO);
        let b = SceneObject::image("asset_a", Vec3::ZERO);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_kind_matches_attributes() {
        let image = SceneObject::image("asset_a", Vec3::ZERO);
        assert_eq!(image.kind(), ObjectKind::Image);
        assert!(image.attributes().is_image());

        let audio = SceneObject::audio("asset_b", Vec3::ZERO);
        assert_eq!(audio.kind(), ObjectKind::Audio);
        assert!(audio.attributes().is_audio());
    }

    #[test]
    fn test_image_setters() {
        let mut obj = SceneObject::image("asset_a", Vec3::ZERO);
        obj.set_scale(2.5);
        obj.set_rotation(1.0);
        obj.set_crop(CropRect::new(0.1, 0.2, 0.5, 0.5));
        obj.set_billboard(true);

        match obj.attributes() {
            ObjectAttributes::Image {
                scale,
                rotation,
                crop,
                billboard,
            } => {
                assert_eq!(*scale, 2.5);
                assert_eq!(*rotation, 1.0);
                assert_eq!(*crop, CropRect::new(0.1, 0.2, 0.5, 0.5));
                assert!(*billboard);
            }
            _ => panic!("image object lost its variant"),
        }
    }

    #[test]
    fn test_cross_variant_setters_are_noops() {
        let mut image = SceneObject::image("asset_a", Vec3::ZERO);
        let before = image.attributes().clone();
        image.set_volume(0.25);
        assert_eq!(image.attributes(), &before);
        assert_eq!(image.kind(), ObjectKind::Image);

        let mut audio = SceneObject::audio("asset_b", Vec3::ZERO);
        let before = audio.attributes().clone();
        audio.set_scale(3.0);
        audio.set_crop(CropRect::new(0.0, 0.0, 0.5, 0.5));
        assert_eq!(audio.attributes(), &before);
    }

    #[test]
    fn test_default_crop_is_full_frame() {
        let crop = CropRect::default();
        assert_eq!(crop, CropRect::new(0.0, 0.0, 1.0, 1.0));
    }
}
