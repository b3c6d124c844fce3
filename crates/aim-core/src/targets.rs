//! Spherical targets, crosshair raycasts and deferred respawn.
//!
//! Raycasts here only report where a shot landed. Feeding the resulting
//! `HitOffset` into the sensitivity store is the caller's job.

use crate::constants::{
    DEFAULT_TARGET_POSITIONS, SPAWN_DEPTH, SPAWN_HALF_HEIGHT, SPAWN_HALF_WIDTH, SPAWN_NEAR_Z,
    TARGET_RADIUS, TARGET_RESPAWN_DELAY_MS,
};
use glam::Vec3;
use rand::prelude::*;

/// Distance along a unit ray to the first sphere surface in front of the
/// origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Where a shot landed relative to the target centre, in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitOffset {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub index: usize,
    pub distance: f32,
    pub point: Vec3,
}

#[derive(Clone, Debug)]
pub struct Target {
    pub center: Vec3,
    pub hovered: bool,
    hit_at_ms: Option<u64>,
}

impl Target {
    fn new(center: Vec3) -> Self {
        Self {
            center,
            hovered: false,
            hit_at_ms: None,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.hit_at_ms.is_none()
    }

    #[inline]
    pub fn hit_at_ms(&self) -> Option<u64> {
        self.hit_at_ms
    }
}

pub struct TargetField {
    targets: Vec<Target>,
    rng: StdRng,
}

impl TargetField {
    pub fn new(seed: u64) -> Self {
        let targets = DEFAULT_TARGET_POSITIONS
            .iter()
            .map(|p| Target::new(Vec3::from_array(*p)))
            .collect();
        Self {
            targets,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Nearest live target along the ray.
    pub fn raycast(&self, origin: Vec3, dir: Vec3) -> Option<RayHit> {
        let mut best = None::<RayHit>;
        for (i, target) in self.targets.iter().enumerate() {
            if !target.is_live() {
                continue;
            }
            if let Some(t) = ray_sphere(origin, dir, target.center, TARGET_RADIUS) {
                match best {
                    Some(b) if t >= b.distance => {}
                    _ => {
                        best = Some(RayHit {
                            index: i,
                            distance: t,
                            point: origin + dir * t,
                        })
                    }
                }
            }
        }
        best
    }

    /// Per-frame hover poll: clears every flag, then marks the target under
    /// the crosshair.
    pub fn update_hover(&mut self, origin: Vec3, dir: Vec3) -> Option<usize> {
        let hit = self.raycast(origin, dir);
        for target in &mut self.targets {
            target.hovered = false;
        }
        let index = hit.map(|h| h.index)?;
        self.targets[index].hovered = true;
        Some(index)
    }

    /// Resolve a shot. A hit target stops taking shots until it respawns.
    pub fn resolve_click(&mut self, origin: Vec3, dir: Vec3, now_ms: u64) -> Option<HitOffset> {
        let hit = self.raycast(origin, dir)?;
        let target = &mut self.targets[hit.index];
        target.hit_at_ms = Some(now_ms);
        target.hovered = false;
        let local = hit.point - target.center;
        log::debug!(
            "[targets] hit {} offset=({:.3},{:.3})",
            hit.index,
            local.x,
            local.y
        );
        Some(HitOffset {
            x: local.x,
            y: local.y,
        })
    }

    /// Respawn every target whose hit is at least the respawn delay old.
    /// Returns how many respawned.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let mut respawned = 0;
        for i in 0..self.targets.len() {
            let due = matches!(
                self.targets[i].hit_at_ms,
                Some(at) if now_ms >= at + TARGET_RESPAWN_DELAY_MS
            );
            if due {
                let center = self.random_position();
                let target = &mut self.targets[i];
                target.center = center;
                target.hit_at_ms = None;
                respawned += 1;
            }
        }
        respawned
    }

    fn random_position(&mut self) -> Vec3 {
        let x = (self.rng.gen::<f32>() - 0.5) * 2.0 * SPAWN_HALF_WIDTH;
        let y = (self.rng.gen::<f32>() - 0.5) * 2.0 * SPAWN_HALF_HEIGHT;
        let z = SPAWN_NEAR_Z - self.rng.gen::<f32>() * SPAWN_DEPTH;
        Vec3::new(x, y, z)
    }
}
