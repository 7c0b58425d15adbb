// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::fmt;

use kengine_core::{Body, Collidable, Rect, Tick, TickStep};

use crate::input::Input;
use crate::sprite::Sprite;

/// Scene-unique entity handle. Ids are never reused within a scene.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happens when an entity's predicted box would leave the scene.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BorderPolicy {
    /// Nothing; the entity may wander off.
    #[default]
    Ignore,
    /// Reflect velocity off the crossed edges before moving.
    Bounce,
}

/// Read-only view of the world handed to a [`Behavior`] each tick.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    /// Tick being simulated.
    pub tick: Tick,
    /// Scene bounds.
    pub bounds: Rect,
    /// Input for this tick.
    pub input: &'a Input,
}

/// Per-entity logic run at the start of every tick, before motion.
pub trait Behavior: Send {
    /// Adjusts `body` (and optionally `sprite`) for this tick.
    fn update(&mut self, body: &mut Body, sprite: Option<&mut Sprite>, ctx: &TickContext<'_>);
}

impl<F> Behavior for F
where
    F: FnMut(&mut Body, &TickContext<'_>) + Send,
{
    fn update(&mut self, body: &mut Body, _sprite: Option<&mut Sprite>, ctx: &TickContext<'_>) {
        self(body, ctx);
    }
}

/// A thing living in a scene.
///
/// The collision box is the body's box; attaching a sprite sizes the body to
/// one sprite frame.
pub struct Entity {
    id: EntityId,
    kind: String,
    body: Body,
    sprite: Option<Sprite>,
    border: BorderPolicy,
    behavior: Option<Box<dyn Behavior>>,
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("body", &self.body)
            .field("sprite", &self.sprite)
            .field("border", &self.border)
            .field("behavior", &self.behavior.is_some())
            .finish()
    }
}

impl Entity {
    /// Creates an entity of type `kind` with the given body.
    pub fn new(id: EntityId, kind: impl Into<String>, body: Body) -> Self {
        Self {
            id,
            kind: kind.into(),
            body,
            sprite: None,
            border: BorderPolicy::Ignore,
            behavior: None,
        }
    }

    /// Attaches a sprite and resizes the body to its frame.
    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.set_sprite(Some(sprite));
        self
    }

    /// Sets the border policy.
    pub fn with_border(mut self, border: BorderPolicy) -> Self {
        self.border = border;
        self
    }

    /// Attaches per-tick logic.
    pub fn with_behavior(mut self, behavior: impl Behavior + 'static) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    /// Scene-unique handle.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Registered type name.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Kinematic state.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable kinematic state.
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Attached sprite, if any.
    pub fn sprite(&self) -> Option<&Sprite> {
        self.sprite.as_ref()
    }

    /// Mutable attached sprite, if any.
    pub fn sprite_mut(&mut self) -> Option<&mut Sprite> {
        self.sprite.as_mut()
    }

    /// Replaces the sprite. A new sprite resizes the body; removing it
    /// leaves the body's size unchanged.
    pub fn set_sprite(&mut self, sprite: Option<Sprite>) {
        if let Some(s) = &sprite {
            self.body.set_size(s.width(), s.height());
        }
        self.sprite = sprite;
    }

    /// Border policy.
    pub fn border(&self) -> BorderPolicy {
        self.border
    }

    /// Sets the border policy.
    pub fn set_border(&mut self, border: BorderPolicy) {
        self.border = border;
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    pub(crate) fn assign_kind(&mut self, kind: &str) {
        if self.kind != kind {
            kind.clone_into(&mut self.kind);
        }
    }

    /// One tick: behavior, border containment, integration, animation.
    pub(crate) fn tick(&mut self, ctx: &TickContext<'_>, step: TickStep, elapsed_ms: u32) {
        if let Some(behavior) = self.behavior.as_mut() {
            behavior.update(&mut self.body, self.sprite.as_mut(), ctx);
        }
        if self.border == BorderPolicy::Bounce {
            self.body.bounce_within(&ctx.bounds);
        }
        self.body.integrate(step);
        if let Some(sprite) = self.sprite.as_mut() {
            sprite.advance(elapsed_ms);
        }
    }
}

impl Collidable for Entity {
    fn bounding_box(&self) -> Rect {
        self.body.bounding_box()
    }

    fn next_bounding_box(&self) -> Rect {
        self.body.next_bounding_box()
    }

    fn is_moving(&self) -> bool {
        self.body.is_moving()
    }
}
