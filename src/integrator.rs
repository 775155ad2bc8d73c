//! Fixed-step kinematics update.

use log::warn;

use crate::applied_acceleration;
use crate::body::Body;

/// Advances one body by `dt` seconds.
///
/// The position moves with the velocity the body had *before* this step's
/// forces are applied, then the velocity picks up `net_force / mass`.
/// Collision resolution has already run for the step, so any correction it
/// made to position or velocity is carried forward here. Static bodies are
/// left untouched.
pub fn integrate(body: &mut Body, dt: f32) {
    if body.is_static() {
        return;
    }
    body.position += body.velocity * dt;
    match applied_acceleration(body.net_force, body.mass()) {
        Some(acceleration) => body.velocity += acceleration * dt,
        None => warn!(
            "force {:?} on body with degenerate mass {} ignored",
            body.net_force,
            body.mass()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[test]
    fn position_uses_velocity_from_before_the_step() {
        let mut ball = Body::dynamic(Shape::circle(1.0).expect("valid radius"), 2.0)
            .expect("valid body")
            .with_velocity(Vec2::new(10.0, 0.0));
        ball.net_force = Vec2::new(0.0, 4.0);
        integrate(&mut ball, 0.5);
        assert_relative_eq!(ball.position.x, 5.0);
        assert_relative_eq!(ball.position.y, 0.0);
        assert_relative_eq!(ball.velocity.x, 10.0);
        assert_relative_eq!(ball.velocity.y, 1.0);
    }

    #[test]
    fn static_bodies_do_not_move() {
        let mut ground = Body::fixed(Shape::halfspace(0.0))
            .expect("valid halfspace")
            .with_velocity(Vec2::new(1.0, 1.0));
        ground.net_force = Vec2::new(5.0, 5.0);
        integrate(&mut ground, 1.0);
        assert_eq!(ground.position, Vec2::ZERO);
        assert_eq!(ground.velocity, Vec2::new(1.0, 1.0));
    }
}
