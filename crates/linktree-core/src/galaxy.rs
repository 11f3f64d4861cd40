//! Starfield and orbiting planets painted behind the page.
//!
//! Stars are fixed points; planets circle invisible centers at a constant
//! angular speed. Neither is re-randomized when the surface is resized.

use crate::constants::*;
use crate::paint::{CircleFill, Color, Painter, RadialGradient};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct GalaxyConfig {
    pub star_count: usize,
    pub planet_count: usize,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            planet_count: PLANET_COUNT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl Star {
    pub fn random(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            radius: rng.gen::<f32>() * STAR_RADIUS_SPAN + STAR_MIN_RADIUS,
            alpha: rng.gen::<f32>() * STAR_ALPHA_SPAN + STAR_MIN_ALPHA,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    pub position: Vec2,
    pub radius: f32,
    pub color: Color,
    pub orbit_center: Vec2,
    pub orbit_radius: f32,
    pub angle: f32,
    /// Radians added to `angle` every frame; may be negative.
    pub angular_speed: f32,
}

impl Planet {
    pub fn random(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let radius = rng.gen::<f32>() * PLANET_RADIUS_SPAN + PLANET_MIN_RADIUS;
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            radius,
            color: PLANET_COLORS[rng.gen_range(0..PLANET_COLORS.len())],
            angle: rng.gen::<f32>() * TAU,
            orbit_radius: rng.gen::<f32>() * ORBIT_RADIUS_SPAN + ORBIT_MIN_RADIUS,
            orbit_center: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            angular_speed: (rng.gen::<f32>() - 0.5) * ORBIT_SPEED_SPAN,
        }
    }

    /// Advance one frame along the orbit and recompute the position.
    #[inline]
    pub fn advance(&mut self) {
        self.angle += self.angular_speed;
        self.position = orbit_point(self.orbit_center, self.orbit_radius, self.angle);
    }
}

#[inline]
pub fn orbit_point(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + radius * Vec2::new(angle.cos(), angle.sin())
}

/// Full-surface background gradient centered on the canvas.
pub fn background_gradient(width: f32, height: f32) -> RadialGradient {
    let center = Vec2::new(width / 2.0, height / 2.0);
    RadialGradient {
        inner_center: center,
        inner_radius: width / BACKGROUND_INNER_DIVISOR,
        outer_center: center,
        outer_radius: width / BACKGROUND_OUTER_DIVISOR,
        stops: BACKGROUND_STOPS.to_vec(),
    }
}

pub struct Galaxy {
    width: f32,
    height: f32,
    stars: Vec<Star>,
    planets: Vec<Planet>,
}

impl Galaxy {
    pub fn new(config: &GalaxyConfig, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let stars = (0..config.star_count)
            .map(|_| Star::random(width, height, rng))
            .collect();
        let planets = (0..config.planet_count)
            .map(|_| Planet::random(width, height, rng))
            .collect();
        Self {
            width,
            height,
            stars,
            planets,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Track the new surface size. Bodies keep their positions, so some may
    /// now sit outside the visible area.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance every planet by one frame.
    pub fn step(&mut self) {
        for planet in &mut self.planets {
            planet.advance();
        }
    }

    pub fn draw(&self, painter: &mut impl Painter) {
        painter.fill_radial_gradient(
            &background_gradient(self.width, self.height),
            self.width,
            self.height,
        );
        for star in &self.stars {
            painter.fill_circle(
                star.position,
                star.radius,
                CircleFill {
                    color: Color::WHITE,
                    alpha: star.alpha,
                    glow: None,
                },
            );
        }
        for planet in &self.planets {
            painter.fill_circle(
                planet.position,
                planet.radius,
                CircleFill {
                    color: planet.color,
                    alpha: 1.0,
                    glow: Some(PLANET_GLOW_BLUR),
                },
            );
        }
    }

    /// One animation tick: move the planets, then repaint everything.
    pub fn frame(&mut self, painter: &mut impl Painter) {
        self.step();
        self.draw(painter);
    }
}
