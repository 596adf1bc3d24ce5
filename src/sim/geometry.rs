//! Proximity and eating predicates shared by every entity
//!
//! All interactions in the world reduce to two questions: are two bodies
//! close enough to interact, and which of them is bigger.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Anything with a center and a size (player, roamers, pickups)
pub trait Body {
    fn pos(&self) -> IVec2;
    fn size(&self) -> u32;
}

/// RGB color carried by organisms for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const ORANGE: Color = Color::rgb(255, 200, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A body that takes part in eat-or-be-eaten interactions
pub trait Organism: Body {
    fn color(&self) -> Color;

    /// Strictly bigger organisms eat smaller ones; equal sizes never interact
    fn can_eat(&self, other: &impl Organism) -> bool {
        can_eat(self, other)
    }
}

/// Euclidean distance between two body centers
#[inline]
pub fn distance(a: &(impl Body + ?Sized), b: &(impl Body + ?Sized)) -> f64 {
    a.pos().as_dvec2().distance(b.pos().as_dvec2())
}

/// Two bodies touch when their center distance is below half their summed size.
///
/// The threshold uses integer division of the sum, so `(15 + 20) / 2 == 17`.
#[inline]
pub fn touching(a: &(impl Body + ?Sized), b: &(impl Body + ?Sized)) -> bool {
    let threshold = (a.size() + b.size()) / 2;
    distance(a, b) < f64::from(threshold)
}

#[inline]
pub fn can_eat(a: &(impl Body + ?Sized), b: &(impl Body + ?Sized)) -> bool {
    a.size() > b.size()
}
