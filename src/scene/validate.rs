//! Scene validation
//!
//! A scene arriving from persistence has already been deserialized elsewhere;
//! before it is handed to the store it is checked here against structural
//! limits and value sanity, so a corrupt or hostile snapshot cannot poison
//! the editing session.

use std::collections::HashSet;

use super::object::{ObjectAttributes, SceneObject};
use super::scene::Scene;

/// Validation limits to prevent resource exhaustion from malicious snapshots
pub mod limits {
    /// Maximum number of objects in a scene
    pub const MAX_OBJECTS: usize = 4096;
    /// Maximum string length for asset identifiers and scene names
    pub const MAX_STRING_LEN: usize = 256;
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Error type for scene validation
#[derive(Debug)]
pub enum SceneError {
    ValidationError(String),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {}

/// Check if a float is valid (not NaN or Inf, within coordinate range)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

/// Validate a single object
fn validate_object(object: &SceneObject, index: usize) -> Result<(), String> {
    let context = format!("object[{}]", index);

    if object.asset_id.is_empty() {
        return Err(format!("{}: empty asset id", context));
    }
    if object.asset_id.len() > limits::MAX_STRING_LEN {
        return Err(format!(
            "{}: asset id too long ({} > {})",
            context,
            object.asset_id.len(),
            limits::MAX_STRING_LEN
        ));
    }

    let p = object.position;
    if !is_valid_float(p.x) || !is_valid_float(p.y) || !is_valid_float(p.z) {
        return Err(format!(
            "{}: invalid position ({}, {}, {})",
            context, p.x, p.y, p.z
        ));
    }

    match object.attributes() {
        ObjectAttributes::Image {
            scale,
            rotation,
            crop,
            ..
        } => {
            if !is_valid_float(*scale) || *scale <= 0.0 {
                return Err(format!("{}: invalid scale {}", context, scale));
            }
            if !is_valid_float(*rotation) {
                return Err(format!("{}: invalid rotation {}", context, rotation));
            }
            for (name, v) in [
                ("crop.x", crop.x),
                ("crop.y", crop.y),
                ("crop.width", crop.width),
                ("crop.height", crop.height),
            ] {
                if !is_valid_float(v) {
                    return Err(format!("{}: invalid {} = {}", context, name, v));
                }
            }
            if crop.width < 0.0 || crop.height < 0.0 {
                return Err(format!("{}: negative crop size", context));
            }
        }
        ObjectAttributes::Audio { volume } => {
            if !is_valid_float(*volume) || *volume < 0.0 {
                return Err(format!("{}: invalid volume {}", context, volume));
            }
        }
    }

    Ok(())
}

/// Validate an entire scene
///
/// Checks object count and string limits, float sanity on every object, and
/// that no two objects share an id (the store's lookups assume ids are
/// unique).
pub fn validate_scene(scene: &Scene) -> Result<(), SceneError> {
    if scene.name.len() > limits::MAX_STRING_LEN {
        return Err(SceneError::ValidationError(format!(
            "scene name too long ({} > {})",
            scene.name.len(),
            limits::MAX_STRING_LEN
        )));
    }

    if scene.objects.len() > limits::MAX_OBJECTS {
        return Err(SceneError::ValidationError(format!(
            "too many objects ({} > {})",
            scene.objects.len(),
            limits::MAX_OBJECTS
        )));
    }

    let mut seen = HashSet::with_capacity(scene.objects.len());
    for (i, object) in scene.objects.iter().enumerate() {
        validate_object(object, i).map_err(SceneError::ValidationError)?;
        if !seen.insert(object.id()) {
            return Err(SceneError::ValidationError(format!(
                "object[{}]: duplicate id {}",
                i,
                object.id()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_valid_scene_passes() {
        let scene = Scene::from_objects(
            "gallery",
            vec![
                SceneObject::image("asset_a", Vec3::new(1.0, 2.0, 3.0)),
                SceneObject::audio("asset_b", Vec3::ZERO),
            ],
        );
        assert!(validate_scene(&scene).is_ok());
    }

    #[test]
    fn test_nan_position_rejected() {
        let scene = Scene::from_objects(
            "bad",
            vec![SceneObject::image("asset_a", Vec3::new(f32::NAN, 0.0, 0.0))],
        );
        assert!(validate_scene(&scene).is_err());
    }

    #[test]
    fn test_out_of_range_position_rejected() {
        let scene = Scene::from_objects(
            "bad",
            vec![SceneObject::image(
                "asset_a",
                Vec3::new(limits::MAX_COORD * 2.0, 0.0, 0.0),
            )],
        );
        assert!(validate_scene(&scene).is_err());
    }

    #[test]
    fn test_empty_asset_id_rejected() {
        let scene = Scene::from_objects("bad", vec![SceneObject::image("", Vec3::ZERO)]);
        assert!(validate_scene(&scene).is_err());
    }

    #[test]
    fn test_oversized_asset_id_rejected() {
        let long_id = "x".repeat(limits::MAX_STRING_LEN + 1);
        let scene = Scene::from_objects("bad", vec![SceneObject::image(long_id, Vec3::ZERO)]);
        assert!(validate_scene(&scene).is_err());
    }

    #[test]
    fn test_invalid_volume_rejected() {
        let mut object = SceneObject::audio("asset_a", Vec3::ZERO);
        object.set_volume(-1.0);
        let scene = Scene::from_objects("bad", vec![object]);
        assert!(validate_scene(&scene).is_err());
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let mut object = SceneObject::image("asset_a", Vec3::ZERO);
        object.set_scale(f32::INFINITY);
        let scene = Scene::from_objects("bad", vec![object]);
        assert!(validate_scene(&scene).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let object = SceneObject::image("asset_a", Vec3::ZERO);
        let duplicate = object.clone();
        let scene = Scene::from_objects("bad", vec![object, duplicate]);
        assert!(validate_scene(&scene).is_err());
    }

    #[test]
    fn test_too_many_objects_rejected() {
        let objects = (0..=limits::MAX_OBJECTS)
            .map(|_| SceneObject::audio("asset_a", Vec3::ZERO))
            .collect();
        let scene = Scene::from_objects("bad", objects);
        assert!(validate_scene(&scene).is_err());
    }
}
