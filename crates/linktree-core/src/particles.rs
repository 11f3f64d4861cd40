//! Interactive particle field: drifting points that pulse, wrap around the
//! edges, shy away from the pointer and link up with nearby neighbors.

use crate::constants::*;
use crate::paint::{CircleFill, Color, LineStroke, Painter};
use crate::pointer::{pointer_displacement, Pointer};
use glam::Vec2;
use rand::prelude::*;
use std::f64::consts::TAU;

#[derive(Clone, Debug)]
pub struct ParticleConfig {
    pub min_radius: f32,
    pub max_radius: f32,
    pub speed: f32,
    pub connection_distance: f32,
    pub influence_radius: f32,
    pub push: f32,
    pub wrap_margin: f32,
    pub colors: Vec<Color>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            min_radius: PARTICLE_MIN_RADIUS,
            max_radius: PARTICLE_MAX_RADIUS,
            speed: PARTICLE_SPEED,
            connection_distance: CONNECTION_DISTANCE,
            influence_radius: POINTER_INFLUENCE_RADIUS,
            push: POINTER_PUSH,
            wrap_margin: WRAP_MARGIN,
            colors: PARTICLE_COLORS.to_vec(),
        }
    }
}

/// Number of particles for a viewport of the given CSS width.
#[inline]
pub fn particle_count_for_width(width: f32) -> usize {
    PARTICLE_BREAKPOINTS
        .iter()
        .find(|(limit, _)| width < *limit)
        .map(|(_, count)| *count)
        .unwrap_or(PARTICLE_COUNT_MAX)
}

/// Alpha of the line joining two particles `distance` apart; 0 means no line.
#[inline]
pub fn connection_alpha(distance: f32, threshold: f32) -> f32 {
    if distance.is_nan() || distance >= threshold {
        return 0.0;
    }
    (1.0 - distance / threshold) * CONNECTION_MAX_ALPHA
}

/// Wrap one coordinate to the opposite edge once it leaves `[-margin, extent + margin]`.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32, margin: f32) -> f32 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color,
    pub opacity: f32,
    /// Radians per millisecond.
    pub pulse_speed: f64,
    pub pulse_offset: f64,
    pub current_radius: f32,
}

impl Particle {
    pub fn random(config: &ParticleConfig, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let radius =
            rng.gen::<f32>() * (config.max_radius - config.min_radius) + config.min_radius;
        let color = config
            .colors
            .choose(rng)
            .copied()
            .unwrap_or(Color::WHITE);
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * config.speed,
                (rng.gen::<f32>() - 0.5) * config.speed,
            ),
            radius,
            color,
            opacity: rng.gen::<f32>() * PARTICLE_OPACITY_SPAN + PARTICLE_MIN_OPACITY,
            pulse_speed: rng.gen::<f64>() * PARTICLE_PULSE_SPEED_SPAN + PARTICLE_MIN_PULSE_SPEED,
            pulse_offset: rng.gen::<f64>() * TAU,
            current_radius: radius,
        }
    }

    /// Radius at wall-clock time `now_ms`.
    #[inline]
    pub fn pulse_radius(&self, now_ms: f64) -> f32 {
        let phase = now_ms * self.pulse_speed + self.pulse_offset;
        self.radius + phase.sin() as f32 * PULSE_AMPLITUDE
    }

    #[inline]
    pub fn drawn_radius(&self) -> f32 {
        self.current_radius.max(PARTICLE_MIN_DRAWN_RADIUS)
    }
}

/// A line between particles `a` and `b` (indices, `a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

pub struct ParticleField {
    config: ParticleConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    pointer: Pointer,
}

impl ParticleField {
    /// Populate a field sized for a `width` x `height` viewport.
    pub fn new(config: ParticleConfig, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            config,
            width,
            height,
            particles: Vec::new(),
            pointer: Pointer::default(),
        };
        field.reseed(width, height, rng);
        field
    }

    /// Discard every particle and start over for a new viewport size.
    pub fn reseed(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        self.width = width;
        self.height = height;
        let count = particle_count_for_width(width);
        let config = &self.config;
        self.particles = (0..count)
            .map(|_| Particle::random(config, width, height, rng))
            .collect();
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.move_to(x, y);
    }

    pub fn pointer_idle(&mut self) {
        self.pointer.go_idle();
    }

    /// Advance every particle by one frame at wall-clock time `now_ms`.
    pub fn update(&mut self, now_ms: f64) {
        let cfg = &self.config;
        for p in &mut self.particles {
            p.position += p.velocity;
            p.position += pointer_displacement(
                &self.pointer,
                p.position,
                cfg.influence_radius,
                cfg.push,
            );
            p.position.x = wrap_coordinate(p.position.x, self.width, cfg.wrap_margin);
            p.position.y = wrap_coordinate(p.position.y, self.height, cfg.wrap_margin);
            p.current_radius = p.pulse_radius(now_ms);
        }
    }

    /// Every unordered pair closer than the connection distance.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let threshold = self.config.connection_distance;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            ((a + 1)..ps.len()).filter_map(move |b| {
                let distance = ps[a].position.distance(ps[b].position);
                let alpha = connection_alpha(distance, threshold);
                (alpha > 0.0).then_some(Connection {
                    a,
                    b,
                    distance,
                    alpha,
                })
            })
        })
    }

    pub fn draw(&self, painter: &mut impl Painter) {
        painter.clear(self.width, self.height);
        for p in &self.particles {
            painter.fill_circle(p.position, p.drawn_radius(), CircleFill::solid(p.color));
        }
        for c in self.connections() {
            painter.stroke_line(
                self.particles[c.a].position,
                self.particles[c.b].position,
                LineStroke {
                    color: Color::WHITE.with_alpha(c.alpha),
                    width: CONNECTION_LINE_WIDTH,
                },
            );
        }
    }
}
