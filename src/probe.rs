use anyhow::Result;
use glam::Vec2;
use pointercast_events::{BaseRaycaster, RaycastContext, RaycastResult, RaycasterId};
use pointercast_testkit::JsonlSink;
use serde::Serialize;
use tracing::info;

use crate::config::ProbeScene;

/// One output line: every candidate under one pointer.
#[derive(Debug, Serialize)]
pub struct PointerRecord<'a> {
    pub pointer_id: i32,
    pub position: Vec2,
    /// Priority of each raycaster, in the order they ran.
    pub priorities: Vec<(RaycasterId, i32)>,
    pub results: &'a [RaycastResult],
}

/// Run every raycaster for every pointer and write one record per pointer.
///
/// Raycasters share a single result list per pointer, so result indices are
/// unique within a record.
pub fn run(scene: &ProbeScene, sink: &mut JsonlSink) -> Result<usize> {
    let ctx = RaycastContext::new(&scene.cameras, &scene.physics);
    let priorities: Vec<_> = scene
        .raycasters
        .iter()
        .map(|raycaster| (raycaster.id(), raycaster.priority(&scene.cameras)))
        .collect();

    let mut total = 0;
    let mut results = Vec::new();
    for pointer in &scene.pointers {
        results.clear();
        for raycaster in &scene.raycasters {
            raycaster.raycast(&ctx, pointer, &mut results);
        }
        info!(
            pointer = pointer.pointer_id,
            x = pointer.position.x,
            y = pointer.position.y,
            hits = results.len(),
            "pointer probed"
        );
        total += results.len();
        sink.write(&PointerRecord {
            pointer_id: pointer.pointer_id,
            position: pointer.position,
            priorities: priorities.clone(),
            results: &results,
        })?;
    }
    sink.flush()?;
    Ok(total)
}
