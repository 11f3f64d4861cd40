// Host-side tests for the starfield and planets.

mod common;

use common::{Op, RecordingPainter};
use glam::Vec2;
use linktree_core::constants::*;
use linktree_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::FRAC_PI_2;

fn galaxy(width: f32, height: f32) -> Galaxy {
    let mut rng = StdRng::seed_from_u64(42);
    Galaxy::new(&GalaxyConfig::default(), width, height, &mut rng)
}

#[test]
fn bodies_are_created_with_configured_counts_and_ranges() {
    let g = galaxy(1280.0, 720.0);
    assert_eq!(g.stars().len(), STAR_COUNT);
    assert_eq!(g.planets().len(), PLANET_COUNT);
    for s in g.stars() {
        assert!(s.position.x >= 0.0 && s.position.x <= 1280.0);
        assert!(s.position.y >= 0.0 && s.position.y <= 720.0);
        assert!(s.radius >= STAR_MIN_RADIUS && s.radius < STAR_MIN_RADIUS + STAR_RADIUS_SPAN);
        assert!(s.alpha >= STAR_MIN_ALPHA && s.alpha < STAR_MIN_ALPHA + STAR_ALPHA_SPAN);
    }
    for p in g.planets() {
        assert!(p.radius >= PLANET_MIN_RADIUS && p.radius < PLANET_MIN_RADIUS + PLANET_RADIUS_SPAN);
        assert!(p.orbit_radius >= ORBIT_MIN_RADIUS);
        assert!(p.angular_speed.abs() <= ORBIT_SPEED_SPAN / 2.0);
        assert!(PLANET_COLORS.contains(&p.color));
    }
}

#[test]
fn planets_stay_on_their_orbit() {
    let mut g = galaxy(800.0, 600.0);
    for _ in 0..1000 {
        g.step();
        for p in g.planets() {
            let r = p.position.distance(p.orbit_center);
            assert!((r - p.orbit_radius).abs() < 1e-2);
        }
    }
}

#[test]
fn planet_advance_adds_angular_speed() {
    let mut planet = Planet {
        position: Vec2::ZERO,
        radius: 25.0,
        color: PLANET_COLORS[0],
        orbit_center: Vec2::new(100.0, 100.0),
        orbit_radius: 50.0,
        angle: 0.0,
        angular_speed: FRAC_PI_2,
    };
    planet.advance();
    assert!((planet.angle - FRAC_PI_2).abs() < 1e-6);
    assert!((planet.position.x - 100.0).abs() < 1e-3);
    assert!((planet.position.y - 150.0).abs() < 1e-3);
}

#[test]
fn stars_never_move() {
    let mut g = galaxy(800.0, 600.0);
    let before = g.stars().to_vec();
    for _ in 0..50 {
        g.step();
    }
    assert_eq!(g.stars(), &before[..]);
}

#[test]
fn resize_keeps_bodies_in_place() {
    let mut g = galaxy(1600.0, 900.0);
    let stars = g.stars().to_vec();
    let centers: Vec<Vec2> = g.planets().iter().map(|p| p.orbit_center).collect();
    g.resize(320.0, 480.0);
    assert_eq!(g.width(), 320.0);
    assert_eq!(g.height(), 480.0);
    assert_eq!(g.stars(), &stars[..]);
    let after: Vec<Vec2> = g.planets().iter().map(|p| p.orbit_center).collect();
    assert_eq!(after, centers);
}

#[test]
fn frame_paints_background_then_stars_then_glowing_planets() {
    let mut g = galaxy(1000.0, 500.0);
    let mut painter = RecordingPainter::default();
    g.frame(&mut painter);

    assert_eq!(painter.ops.len(), 1 + STAR_COUNT + PLANET_COUNT);
    match &painter.ops[0] {
        Op::Gradient(grad) => {
            assert_eq!(grad.inner_center, Vec2::new(500.0, 250.0));
            assert!((grad.inner_radius - 125.0).abs() < 1e-4);
            assert!((grad.outer_radius - 1000.0 / 1.2).abs() < 1e-3);
            assert_eq!(grad.stops.len(), 3);
            assert_eq!(grad.stops[0].color.to_css(), "#1a0033");
            assert_eq!(grad.stops[2].color.to_css(), "#090013");
        }
        other => panic!("expected gradient first, got {other:?}"),
    }
    let circles = painter.circles();
    for (_, _, fill) in &circles[..STAR_COUNT] {
        assert_eq!(fill.color, Color::WHITE);
        assert_eq!(fill.glow, None);
    }
    for ((center, radius, fill), planet) in circles[STAR_COUNT..].iter().zip(g.planets()) {
        assert_eq!(*center, planet.position);
        assert_eq!(*radius, planet.radius);
        assert_eq!(fill.glow, Some(PLANET_GLOW_BLUR));
        assert_eq!(fill.color, planet.color);
    }
}
