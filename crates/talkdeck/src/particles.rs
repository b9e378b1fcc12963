use derive_more::{AsRef, Deref, Display, From, Into};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

pub const SIZE_RANGE: RangeInclusive<f64> = 20.0..=80.0;
pub const POSITION_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const DELAY_RANGE: RangeInclusive<f64> = 0.0..=5.0;
pub const DURATION_RANGE: RangeInclusive<f64> = 10.0..=20.0;

pub const FIRST_SLIDE_PARTICLES: usize = 50;
pub const SLIDE_PARTICLES: usize = 30;

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct ContainerId(String);

crate::impl_string_newtype!(ContainerId);

impl std::borrow::Borrow<str> for ContainerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl ContainerId {
    pub fn for_slide(index: usize) -> Self {
        Self(format!("particles-{}", index + 1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: rng.random_range(SIZE_RANGE),
            x: rng.random_range(POSITION_RANGE),
            y: rng.random_range(POSITION_RANGE),
            delay: rng.random_range(DELAY_RANGE),
            duration: rng.random_range(DURATION_RANGE),
        }
    }

    pub fn phase_at(&self, elapsed: f64) -> Option<f64> {
        let running = elapsed - self.delay;
        if running < 0.0 || self.duration <= 0.0 {
            return None;
        }
        Some((running / self.duration).fract())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    containers: BTreeMap<ContainerId, Vec<Particle>>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: ContainerId) {
        self.containers.entry(id).or_default();
    }

    pub fn particles(&self, id: &str) -> &[Particle] {
        self.containers.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn create_particles(&mut self, id: &str, count: usize) -> usize {
        self.create_particles_with(id, count, &mut rand::rng())
    }

    pub fn create_particles_with<R: Rng + ?Sized>(
        &mut self,
        id: &str,
        count: usize,
        rng: &mut R,
    ) -> usize {
        let Some(particles) = self.containers.get_mut(id) else {
            log::debug!("No particle container '{}', skipping", id);
            return 0;
        };
        particles.extend((0..count).map(|_| Particle::random(rng)));
        count
    }
}

pub fn count_for_slide(index: usize, first: usize, rest: usize) -> usize {
    if index == 0 { first } else { rest }
}
