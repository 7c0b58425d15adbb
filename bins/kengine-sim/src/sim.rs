// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene setup and the tick loop.

use std::f32::consts::TAU;

use anyhow::{Context, Result};
use kengine_app_core::settings::EngineSettings;
use kengine_core::math::Vec2;
use kengine_core::Body;
use kengine_scene::{
    BorderPolicy, Entity, EntityId, EntityRegistry, InputFrame, Scene, SceneSettings, Sprite,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use tracing::debug;

/// Registered name of the only entity type the simulation spawns.
pub const BALL: &str = "ball";

const BALL_SIZE: i32 = 8;
// Nominal frame time fed to sprite animation.
const FRAME_MS: u32 = 16;

fn ball(id: EntityId, position: Vec2) -> Entity {
    let entity = Entity::new(id, BALL, Body::at(position).with_size(BALL_SIZE, BALL_SIZE))
        .with_border(BorderPolicy::Bounce);
    match Sprite::new(BALL_SIZE, BALL_SIZE, 4, 4, (0, 0), 100) {
        Ok(sprite) => entity.with_sprite(sprite),
        Err(_) => entity,
    }
}

/// Summary of a finished run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub ticks: u64,
    pub total_pairs: usize,
    pub peak_pairs: usize,
    pub peak_tick: u64,
    pub index_nodes: usize,
    pub index_depth: usize,
}

/// Builds a scene from `settings` and spawns `count` balls with seeded
/// positions and headings.
pub fn populate(settings: &EngineSettings, count: usize, seed: u64) -> Result<Scene> {
    let mut registry = EntityRegistry::new();
    registry.register(BALL, ball)?;

    let scene_settings = SceneSettings {
        step: settings.tick_step,
        quad_tree: settings.quad_tree,
    };
    let bounds = settings.scene_bounds();
    let mut scene = Scene::new(bounds, scene_settings)
        .context("invalid scene settings")?
        .with_registry(registry);

    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let max_x = (bounds.right() - BALL_SIZE).max(bounds.left());
    let max_y = (bounds.bottom() - BALL_SIZE).max(bounds.top());
    for _ in 0..count {
        let x = rng.gen_range(bounds.left()..=max_x);
        let y = rng.gen_range(bounds.top()..=max_y);
        #[allow(clippy::cast_precision_loss, reason = "scene coordinates fit in f32")]
        let position = Vec2::new(x as f32, y as f32);
        let id = scene.spawn(BALL, position)?;
        if let Some(entity) = scene.entity_mut(id) {
            let body = entity.body_mut();
            body.set_speed(rng.gen_range(1.0..4.0));
            body.set_direction(rng.gen_range(0.0..TAU));
        }
    }
    Ok(scene)
}

/// Runs `ticks` ticks, counting predictive candidate pairs before each one.
pub fn run(scene: &mut Scene, ticks: u64) -> Result<Report> {
    let frame = InputFrame {
        elapsed_ms: FRAME_MS,
        ..InputFrame::default()
    };
    let mut report = Report::default();
    for _ in 0..ticks {
        let pairs = scene.collision_pairs(true)?.len();
        let tick = scene.tick().index();
        debug!(tick, pairs, "broad phase");
        report.total_pairs += pairs;
        if pairs > report.peak_pairs {
            report.peak_pairs = pairs;
            report.peak_tick = tick;
        }
        scene.update(&frame);
        report.ticks += 1;
    }
    let index = scene.index()?;
    report.index_nodes = index.node_count();
    report.index_depth = index.depth();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kengine_core::Collidable;

    #[test]
    fn same_seed_same_run() {
        let settings = EngineSettings {
            scene_width: 200,
            scene_height: 150,
            ..EngineSettings::default()
        };
        let mut a = populate(&settings, 60, 7).unwrap();
        let mut b = populate(&settings, 60, 7).unwrap();
        assert_eq!(run(&mut a, 50).unwrap(), run(&mut b, 50).unwrap());
        let pos_a: Vec<_> = a.entities().map(|e| e.body().position()).collect();
        let pos_b: Vec<_> = b.entities().map(|e| e.body().position()).collect();
        assert_eq!(pos_a, pos_b);
    }

    #[test]
    fn balls_stay_in_the_scene() {
        let settings = EngineSettings {
            scene_width: 120,
            scene_height: 90,
            ..EngineSettings::default()
        };
        let mut scene = populate(&settings, 40, 3).unwrap();
        let report = run(&mut scene, 200).unwrap();
        assert_eq!(report.ticks, 200);
        let bounds = scene.bounds();
        for e in scene.entities() {
            assert!(bounds.contains(&e.bounding_box()), "{} left {bounds}", e.id());
        }
    }
}
