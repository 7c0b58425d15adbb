// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! kengine-core: 2D primitives shared by every KEngine crate.
//!
//! This crate provides:
//! - Float32 vector math (`math`).
//! - Integer axis-aligned rectangles (`Rect`).
//! - The geometry contract for spatial queries (`Collidable`).
//! - Discrete ticks and the per-tick entity motion model (`Tick`, `Body`).
//!
//! Everything here is pure arithmetic; nothing allocates on the hot path and
//! nothing fails. NaN inputs propagate rather than panic.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate
)]

pub mod math;

mod collidable;
mod motion;
mod rect;
mod tick;

pub use collidable::Collidable;
pub use motion::Body;
pub use rect::Rect;
pub use tick::{Tick, TickStep};
