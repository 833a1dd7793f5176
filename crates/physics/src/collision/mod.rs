//! Collision geometry for ground probing.
//!
//! This module stores static brushes and answers ray queries through them.
//!
//! # Key Types
//!
//! - [`CollisionWorld`]: The collision environment containing all geometry
//! - [`TraceResult`]: Output from a ray trace
//! - [`ContentFlags`]: Brush contents used to filter traces
//!
//! [`CollisionWorld`] implements [`GroundProbe`](crate::movement::GroundProbe)
//! by casting straight down through brushes that match its ground mask.

mod flags;
mod trace;
mod world;

pub use flags::ContentFlags;
pub use trace::TraceResult;
pub use world::{CollisionBrush, CollisionWorld};
