//! Combat system
//!
//! Phaser fire, torpedo launch, shield control and the Klingon counter-attack.

mod klingon_attack;
mod phasers;
mod shields;
mod torpedoes;

pub use klingon_attack::klingons_fire;
pub use phasers::{base_phaser_damage, fire_phasers};
pub use shields::shield_control;
pub use torpedoes::{fire_torpedo, trace_torpedo, TorpedoImpact};
