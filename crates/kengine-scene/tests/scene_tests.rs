// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Scene behavior: registry, tick order, containment and collision queries.

use kengine_core::math::Vec2;
use kengine_core::{Body, Rect, TickStep};
use kengine_scene::{
    BorderPolicy, Entity, EntityId, EntityRegistry, InputFrame, Key, Scene, SceneError,
    SceneSettings, Sprite, TickContext,
};

fn crate_box(id: EntityId, at: Vec2) -> Entity {
    Entity::new(id, "crate", Body::at(at).with_size(10, 10))
}

fn ball(id: EntityId, at: Vec2) -> Entity {
    let body = Body::at(at)
        .with_size(8, 8)
        .with_velocity(Vec2::new(3.0, 2.0));
    Entity::new(id, "ball", body).with_border(BorderPolicy::Bounce)
}

fn registry() -> EntityRegistry {
    let mut reg = EntityRegistry::new();
    reg.register("crate", crate_box).unwrap();
    reg.register("ball", ball).unwrap();
    reg
}

fn scene(width: i32, height: i32) -> Scene {
    Scene::new(Rect::new(0, 0, width, height), SceneSettings::default())
        .unwrap()
        .with_registry(registry())
}

#[test]
fn duplicate_registration_keeps_first_factory() {
    let mut reg = registry();
    let err = reg.register("crate", ball).unwrap_err();
    assert_eq!(err, SceneError::DuplicateEntityType("crate".into()));
    let e = reg.create("crate", EntityId(7), Vec2::ZERO).unwrap();
    assert_eq!(e.kind(), "crate");
    assert_eq!(e.id(), EntityId(7));
    assert_eq!(reg.names().collect::<Vec<_>>(), vec!["ball", "crate"]);
}

#[test]
fn unknown_type_does_not_consume_an_id() {
    let mut s = scene(100, 100);
    let err = s.spawn("ghost", Vec2::ZERO).unwrap_err();
    assert_eq!(err, SceneError::UnknownEntityType("ghost".into()));
    let id = s.spawn("crate", Vec2::ZERO).unwrap();
    assert_eq!(id, EntityId(0));
    assert_eq!(s.len(), 1);
}

#[test]
fn spawn_and_add_share_one_id_sequence() {
    let mut s = scene(100, 100);
    let a = s.spawn("crate", Vec2::ZERO).unwrap();
    assert!(s.spawn("ghost", Vec2::ZERO).is_err());
    let b = s.add(Entity::new(EntityId(500), "marker", Body::at(Vec2::ZERO)));
    assert!(s.spawn("ghost", Vec2::ZERO).is_err());
    let c = s.spawn("ball", Vec2::new(10.0, 10.0)).unwrap();
    assert_eq!((a, b, c), (EntityId(0), EntityId(1), EntityId(2)));
    assert_eq!(s.entity(c).unwrap().id(), c);
    assert_eq!(s.entity(b).unwrap().id(), b);
}

#[test]
fn empty_bounds_rejected() {
    let err = Scene::new(Rect::new(0, 0, 0, 50), SceneSettings::default()).unwrap_err();
    assert!(matches!(err, SceneError::Index(_)));
}

#[test]
fn find_filters_by_kind_in_id_order() {
    let mut s = scene(100, 100);
    let a = s.spawn("crate", Vec2::new(1.0, 1.0)).unwrap();
    let _ = s.spawn("ball", Vec2::new(50.0, 50.0)).unwrap();
    let c = s.spawn("crate", Vec2::new(80.0, 1.0)).unwrap();
    let crates: Vec<EntityId> = s.find("crate").map(Entity::id).collect();
    assert_eq!(crates, vec![a, c]);
    assert!(s.remove(a).is_some());
    assert_eq!(s.find("crate").count(), 1);
    assert!(s.entity(a).is_none());
}

#[test]
fn update_integrates_with_configured_step() {
    let settings = SceneSettings {
        step: TickStep::new(0.5),
        ..SceneSettings::default()
    };
    let mut s = Scene::new(Rect::new(0, 0, 200, 200), settings).unwrap();
    let id = s.add(Entity::new(
        EntityId(99),
        "marker",
        Body::at(Vec2::new(10.0, 10.0)).with_velocity(Vec2::new(4.0, 0.0)),
    ));
    s.update(&InputFrame::default());
    let body = s.entity(id).unwrap().body();
    assert_eq!(body.position(), Vec2::new(12.0, 10.0));
    assert_eq!(s.tick().index(), 1);
}

#[test]
fn bouncing_entities_stay_inside() {
    let mut s = scene(64, 48);
    for i in 0..6u8 {
        let f = f32::from(i);
        s.spawn("ball", Vec2::new(5.0 + f * 7.0, 3.0 + f * 5.0)).unwrap();
    }
    let bounds = s.bounds();
    for _ in 0..400 {
        s.update(&InputFrame::default());
        for e in s.entities() {
            let bb = kengine_core::Collidable::bounding_box(e);
            assert!(bounds.contains(&bb), "{} escaped to {bb}", e.id());
        }
    }
}

#[test]
fn behavior_sees_input_before_motion() {
    let mut s = scene(100, 100);
    let player = Entity::new(EntityId(0), "player", Body::at(Vec2::new(50.0, 50.0))).with_behavior(
        |body: &mut Body, ctx: &TickContext<'_>| {
            let vx = if ctx.input.keys().is_down(Key::Right) { 2.0 } else { 0.0 };
            body.set_velocity(Vec2::new(vx, 0.0));
        },
    );
    let id = s.add(player);

    s.update(&InputFrame {
        keys: vec![Key::Right],
        ..InputFrame::default()
    });
    assert_eq!(s.entity(id).unwrap().body().position(), Vec2::new(52.0, 50.0));
    assert!(s.input().keys().is_pressed(Key::Right));

    s.update(&InputFrame::default());
    assert_eq!(s.entity(id).unwrap().body().position(), Vec2::new(52.0, 50.0));
    assert!(s.input().keys().is_released(Key::Right));
}

#[test]
fn sprite_sizes_body_and_animates_on_elapsed_time() {
    let mut s = scene(100, 100);
    let sprite = Sprite::new(16, 12, 4, 2, (0, 0), 100).unwrap();
    let id = s.add(Entity::new(EntityId(0), "anim", Body::at(Vec2::ZERO)).with_sprite(sprite));
    assert_eq!(s.entity(id).unwrap().body().size(), (16, 12));

    s.update(&InputFrame {
        elapsed_ms: 250,
        ..InputFrame::default()
    });
    let sprite = s.entity(id).unwrap().sprite().unwrap();
    assert_eq!(sprite.image_index(), 2);
    assert_eq!(sprite.source_rect(), Rect::new(0, 12, 16, 12));
}

#[test]
fn find_collisions_current_and_predictive() {
    let mut s = scene(200, 200);
    let still = s.spawn("crate", Vec2::new(20.0, 20.0)).unwrap();
    let mover = s.add(Entity::new(
        EntityId(0),
        "dart",
        Body::at(Vec2::new(100.0, 20.0))
            .with_size(5, 5)
            .with_velocity(Vec2::new(-60.0, 0.0)),
    ));
    let lane = Rect::new(35, 15, 10, 10);
    assert!(s.find_collisions(&lane, false).unwrap().is_empty());
    assert_eq!(s.find_collisions(&lane, true).unwrap(), vec![mover]);

    let over_crate = Rect::new(25, 25, 2, 2);
    assert_eq!(s.find_collisions(&over_crate, false).unwrap(), vec![still]);
}

#[test]
fn collision_pairs_are_ordered_by_id() {
    let mut s = scene(200, 200);
    let a = s.spawn("crate", Vec2::new(10.0, 10.0)).unwrap();
    let b = s.spawn("crate", Vec2::new(15.0, 15.0)).unwrap();
    let _far = s.spawn("crate", Vec2::new(150.0, 150.0)).unwrap();
    let c = s.spawn("crate", Vec2::new(18.0, 6.0)).unwrap();
    assert_eq!(s.collision_pairs(false).unwrap(), vec![(a, b), (a, c), (b, c)]);
}

#[test]
fn overlay_reports_root_first() {
    let mut s = scene(256, 256);
    for i in 0..30u8 {
        let f = f32::from(i);
        s.spawn("crate", Vec2::new(f * 8.0, f * 8.0)).unwrap();
    }
    let overlay = s.index_overlay().unwrap();
    assert_eq!(overlay[0], (Rect::new(0, 0, 256, 256), 0));
    assert!(overlay.len() >= 5);
}
