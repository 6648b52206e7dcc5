use anyhow::{bail, Context, Result};
use glam::{Vec2, Vec3};
use pointercast_camera::{Camera, CameraId, CameraRegistry};
use pointercast_core::{Layer, LayerMask, ObjectId};
use pointercast_events::{PhysicsRaycaster, PointerEventData, RaycasterId};
use pointercast_physics::{Aabb, Collider, PhysicsScene};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};
use tracing::{info, warn};

/// Scene description consumed by the probe.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneConfig {
    pub cameras: Vec<CameraConfig>,
    pub colliders: Vec<ColliderConfig>,
    pub raycasters: Vec<RaycasterConfig>,
    pub pointers: Vec<PointerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    pub name: String,
    pub position: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport size in pixels.
    pub viewport: [u32; 2],
    pub depth: f32,
    /// Layers rendered by the camera; absent means every layer.
    pub culling_layers: Option<Vec<Layer>>,
    pub main: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = Camera::default();
        Self {
            name: String::new(),
            position: [0.0, 0.0, 0.0],
            target: [0.0, 0.0, 1.0],
            fov_degrees: camera.fov.to_degrees(),
            near: camera.near,
            far: camera.far,
            viewport: [camera.viewport.0, camera.viewport.1],
            depth: camera.depth,
            culling_layers: None,
            main: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Sphere,
    Cuboid,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColliderConfig {
    pub object: u32,
    #[serde(default)]
    pub layer: Layer,
    pub shape: ShapeKind,
    pub center: [f32; 3],
    /// Sphere radius.
    pub radius: Option<f32>,
    /// Cuboid edge lengths.
    pub size: Option<[f32; 3]>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RaycasterConfig {
    /// Name of the attached camera; absent means the main camera.
    pub camera: Option<String>,
    /// Layers the raycaster may hit; absent means every layer.
    pub event_layers: Option<Vec<Layer>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PointerConfig {
    #[serde(default)]
    pub pointer_id: i32,
    /// Pixel position from the top-left corner.
    pub position: [f32; 2],
}

/// Live objects built from a [`SceneConfig`].
pub struct ProbeScene {
    pub cameras: CameraRegistry,
    pub physics: PhysicsScene,
    pub raycasters: Vec<PhysicsRaycaster>,
    pub pointers: Vec<PointerEventData>,
}

impl SceneConfig {
    /// Load a scene file, returning errors to the caller.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("failed to parse scene {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Instantiate cameras, colliders, raycasters and pointers.
    pub fn build(&self) -> Result<ProbeScene> {
        let mut cameras = CameraRegistry::new();
        let mut names: HashMap<&str, CameraId> = HashMap::new();
        for (i, config) in self.cameras.iter().enumerate() {
            let id = cameras
                .insert(config.to_camera())
                .with_context(|| format!("camera #{i} ({:?}) is invalid", config.name))?;
            if !config.name.is_empty() && names.insert(config.name.as_str(), id).is_some() {
                bail!("duplicate camera name {:?}", config.name);
            }
            if config.main {
                match cameras.main_id() {
                    Some(_) => warn!("camera {:?} is also marked main; ignoring", config.name),
                    None => cameras.set_main(id)?,
                }
            }
        }
        if cameras.main_id().is_none() && !cameras.is_empty() {
            warn!("no camera is marked main; raycasters without a camera will report nothing");
        }

        let mut physics = PhysicsScene::new();
        for (i, config) in self.colliders.iter().enumerate() {
            let collider = config
                .to_collider()
                .with_context(|| format!("collider #{i} (object {}) is invalid", config.object))?;
            physics
                .insert(collider)
                .with_context(|| format!("collider #{i} (object {}) is invalid", config.object))?;
        }

        let mut raycasters = Vec::with_capacity(self.raycasters.len().max(1));
        for (i, config) in self.raycasters.iter().enumerate() {
            let id = RaycasterId(i as u32);
            let mut raycaster = match &config.camera {
                Some(name) => {
                    let camera = names
                        .get(name.as_str())
                        .with_context(|| format!("raycaster #{i} names unknown camera {name:?}"))?;
                    PhysicsRaycaster::with_camera(id, *camera)
                }
                None => PhysicsRaycaster::new(id),
            };
            if let Some(layers) = &config.event_layers {
                raycaster.set_event_mask(LayerMask::from_layers(layers.iter().copied()));
            }
            raycasters.push(raycaster);
        }
        if raycasters.is_empty() {
            warn!("no raycasters configured; using one bound to the main camera");
            raycasters.push(PhysicsRaycaster::new(RaycasterId(0)));
        }

        let pointers = self
            .pointers
            .iter()
            .map(|p| PointerEventData::new(p.pointer_id, Vec2::from_array(p.position)))
            .collect();

        info!(
            cameras = cameras.len(),
            colliders = physics.len(),
            raycasters = raycasters.len(),
            "scene built"
        );

        Ok(ProbeScene {
            cameras,
            physics,
            raycasters,
            pointers,
        })
    }
}

impl CameraConfig {
    fn to_camera(&self) -> Camera {
        let mut camera = Camera::looking_at(
            Vec3::from_array(self.position),
            Vec3::from_array(self.target),
        );
        camera.fov = self.fov_degrees.to_radians();
        camera.near = self.near;
        camera.far = self.far;
        camera.viewport = (self.viewport[0], self.viewport[1]);
        camera.depth = self.depth;
        if let Some(layers) = &self.culling_layers {
            camera.culling_mask = LayerMask::from_layers(layers.iter().copied());
        }
        camera
    }
}

impl ColliderConfig {
    fn to_collider(&self) -> Result<Collider> {
        let object = ObjectId(self.object);
        let center = Vec3::from_array(self.center);
        let collider = match self.shape {
            ShapeKind::Sphere => {
                let radius = self.radius.context("sphere collider needs `radius`")?;
                Collider::sphere(object, center, radius)
            }
            ShapeKind::Cuboid => {
                let size = self.size.context("cuboid collider needs `size`")?;
                Collider::cuboid(
                    object,
                    Aabb::from_center_size(center, Vec3::from_array(size)),
                )
            }
        };
        Ok(Collider {
            enabled: self.enabled,
            ..collider.on_layer(self.layer)
        })
    }
}
