use glam::Vec2;

/// Last known pointer (mouse or first touch) position in canvas pixels.
///
/// `active` is raised by every move event and dropped by the frontend once
/// input has been idle for a short while; particles only react while it is set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub position: Vec2,
    pub active: bool,
}

impl Pointer {
    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.active = true;
    }

    #[inline]
    pub fn go_idle(&mut self) {
        self.active = false;
    }
}

/// Strength of the pointer's influence at `distance`: 1 at the pointer,
/// falling linearly to 0 at `radius` and staying 0 beyond it.
#[inline]
pub fn influence_strength(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 || distance.is_nan() || distance >= radius {
        return 0.0;
    }
    (radius - distance) / radius
}

/// Per-frame displacement a particle at `position` receives from `pointer`.
///
/// The particle is pushed away from the pointer along the line joining them,
/// by `push * strength` of their separation.
pub fn pointer_displacement(pointer: &Pointer, position: Vec2, radius: f32, push: f32) -> Vec2 {
    if !pointer.active {
        return Vec2::ZERO;
    }
    let offset = pointer.position - position;
    let strength = influence_strength(offset.length(), radius);
    if strength == 0.0 {
        return Vec2::ZERO;
    }
    -offset * strength * push
}
