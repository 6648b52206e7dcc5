//! Camera ownership and the global "main camera" designation.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{Camera, CameraError};

/// Handle to a camera owned by a [`CameraRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(u32);

impl CameraId {
    /// Raw numeric value, stable for the registry's lifetime.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Owns every camera in a scene and remembers which one is the main camera.
#[derive(Debug, Default)]
pub struct CameraRegistry {
    cameras: BTreeMap<CameraId, Camera>,
    main: Option<CameraId>,
    next_id: u32,
}

impl CameraRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a camera. Ids are never reused.
    pub fn insert(&mut self, camera: Camera) -> Result<CameraId, CameraError> {
        camera.validate()?;
        let id = CameraId(self.next_id);
        self.next_id += 1;
        debug!(camera = id.0, depth = camera.depth, "camera registered");
        self.cameras.insert(id, camera);
        Ok(id)
    }

    /// Register a camera and make it the main camera.
    pub fn insert_main(&mut self, camera: Camera) -> Result<CameraId, CameraError> {
        let id = self.insert(camera)?;
        self.main = Some(id);
        Ok(id)
    }

    /// Remove a camera. Clears the main designation if it pointed at `id`.
    pub fn remove(&mut self, id: CameraId) -> Option<Camera> {
        let removed = self.cameras.remove(&id);
        if removed.is_some() {
            if self.main == Some(id) {
                self.main = None;
            }
            debug!(camera = id.0, "camera removed");
        }
        removed
    }

    /// Look up a camera.
    pub fn get(&self, id: CameraId) -> Option<&Camera> {
        self.cameras.get(&id)
    }

    /// Look up a camera for mutation.
    pub fn get_mut(&mut self, id: CameraId) -> Option<&mut Camera> {
        self.cameras.get_mut(&id)
    }

    /// Whether `id` names a live camera.
    pub fn contains(&self, id: CameraId) -> bool {
        self.cameras.contains_key(&id)
    }

    /// Designate `id` as the main camera.
    pub fn set_main(&mut self, id: CameraId) -> Result<(), CameraError> {
        if !self.contains(id) {
            return Err(CameraError::UnknownCamera(id));
        }
        self.main = Some(id);
        Ok(())
    }

    /// Drop the main camera designation without removing the camera.
    pub fn clear_main(&mut self) {
        self.main = None;
    }

    /// Id of the main camera, if any.
    pub fn main_id(&self) -> Option<CameraId> {
        self.main
    }

    /// The main camera, if any.
    pub fn main(&self) -> Option<&Camera> {
        self.main.and_then(|id| self.get(id))
    }

    /// Number of registered cameras.
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// True when no cameras are registered.
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Iterate cameras in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (CameraId, &Camera)> {
        self.cameras.iter().map(|(id, camera)| (*id, camera))
    }
}
