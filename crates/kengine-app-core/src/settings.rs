// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted engine settings.

use kengine_core::{Rect, TickStep};
use kengine_geom::QuadTreeConfig;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Host-tunable engine settings.
///
/// Missing fields fall back to their defaults when loading, so older files
/// keep working as fields are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Scene width in pixels.
    pub scene_width: i32,
    /// Scene height in pixels.
    pub scene_height: i32,
    /// Motion integration step per tick.
    pub tick_step: TickStep,
    /// Spatial index tuning.
    pub quad_tree: QuadTreeConfig,
}

impl EngineSettings {
    /// Config key the settings are stored under.
    pub const KEY: &'static str = "engine";

    /// Scene bounds anchored at the origin.
    pub fn scene_bounds(&self) -> Rect {
        Rect::new(0, 0, self.scene_width, self.scene_height)
    }

    /// Loads settings from `service`, defaulting when none are stored.
    pub fn load<S: ConfigStore>(service: &ConfigService<S>) -> Result<Self, ConfigError> {
        service.load_or_default(Self::KEY)
    }

    /// Stores settings through `service`.
    pub fn save<S: ConfigStore>(&self, service: &ConfigService<S>) -> Result<(), ConfigError> {
        service.save(Self::KEY, self)
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            scene_width: 800,
            scene_height: 600,
            tick_step: TickStep::UNIT,
            quad_tree: QuadTreeConfig::default(),
        }
    }
}
