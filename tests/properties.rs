//! Behavioural properties of contact resolution that must hold for any
//! reasonable input.
use approx::assert_relative_eq;
use glam::Vec2;
use pebble::collision::{circle_circle, circle_halfspace, collide, ContactContext};
use pebble::{Body, Bounds, CleanupPolicy, Shape, World};
use rstest::rstest;
use test_utils::physics::{circle, dynamic_box, fixed_box, ground, with_material};

const CONTEXT: ContactContext = ContactContext {
    gravity: Vec2::new(0.0, 50.0),
    dt: 0.02,
};

fn weighted_circle(radius: f32, mass: f32, position: Vec2, velocity: Vec2) -> Body {
    Body::dynamic(Shape::Circle { radius }, mass)
        .expect("valid circle")
        .with_position(position)
        .with_velocity(velocity)
}

#[rstest]
#[case::head_on(Vec2::new(10.0, 0.0), Vec2::new(60.0, 0.0), Vec2::new(-60.0, 0.0), 1.0)]
#[case::glancing(Vec2::new(12.0, 9.0), Vec2::new(20.0, 5.0), Vec2::new(-3.0, -30.0), 3.0)]
#[case::deep(Vec2::new(1.0, 1.0), Vec2::new(5.0, 5.0), Vec2::ZERO, 0.5)]
fn circle_pairs_end_up_touching(
    #[case] offset: Vec2,
    #[case] velocity_a: Vec2,
    #[case] velocity_b: Vec2,
    #[case] mass_b: f32,
) {
    let mut a = weighted_circle(10.0, 1.0, Vec2::new(200.0, 200.0), velocity_a);
    let mut b = weighted_circle(8.0, mass_b, Vec2::new(200.0, 200.0) + offset, velocity_b);
    assert!(circle_circle(&mut a, 10.0, &mut b, 8.0));
    assert!(a.position.distance(b.position) >= 18.0 - 1e-3);
}

#[rstest]
#[case::level(0.0, Vec2::new(0.0, 80.0))]
#[case::slope(25.0, Vec2::new(40.0, 60.0))]
#[case::steep(-60.0, Vec2::new(-10.0, 5.0))]
fn circle_leaves_the_halfspace(#[case] degrees: f32, #[case] velocity: Vec2) {
    let plane = ground(Vec2::new(300.0, 300.0), degrees);
    let normal = plane.shape().normal().expect("halfspace");
    let mut ball = circle(15.0, Vec2::new(300.0, 300.0) + normal * 5.0, velocity);
    assert!(circle_halfspace(&mut ball, 15.0, &plane, normal, &CONTEXT));
    let distance = (ball.position - plane.position).dot(normal);
    assert!(distance >= 15.0 - 1e-3, "still {distance} from the plane");
}

#[rstest]
#[case(0.0, 1.0, 1.0)]
#[case(0.25, 1.0, 4.0)]
#[case(0.5, 2.0, 1.0)]
#[case(0.9, 0.5, 3.0)]
#[case(1.0, 1.0, 2.0)]
fn impulses_never_add_closing_speed(
    #[case] restitution: f32,
    #[case] mass_a: f32,
    #[case] mass_b: f32,
) {
    let mut a = with_material(
        weighted_circle(10.0, mass_a, Vec2::ZERO, Vec2::new(30.0, 10.0)),
        restitution,
        0.5,
    );
    let mut b = with_material(
        weighted_circle(10.0, mass_b, Vec2::new(15.0, 5.0), Vec2::new(-20.0, 0.0)),
        1.0,
        0.5,
    );
    let normal = (b.position - a.position).normalize();
    let before = (b.velocity - a.velocity).dot(normal);
    assert!(collide(&mut a, &mut b, &CONTEXT));
    let after = (b.velocity - a.velocity).dot(normal);
    assert!(before < 0.0);
    assert!(after.abs() <= before.abs() + 1e-4);
    assert_relative_eq!(after, -restitution * before, epsilon = 1e-3);
}

#[test]
fn elastic_equal_masses_preserve_closing_speed() {
    let mut a = with_material(circle(10.0, Vec2::ZERO, Vec2::new(25.0, 0.0)), 1.0, 0.0);
    let mut b = with_material(circle(10.0, Vec2::new(19.0, 0.0), Vec2::new(-5.0, 0.0)), 1.0, 0.0);
    let before = b.velocity.x - a.velocity.x;
    assert!(collide(&mut a, &mut b, &CONTEXT));
    let after = b.velocity.x - a.velocity.x;
    assert_relative_eq!(after.abs(), before.abs(), epsilon = 1e-4);
}

#[test]
fn static_bodies_never_move() {
    let mut world = World::new(Vec2::new(0.0, 200.0));
    let statics = [
        world.add(ground(Vec2::new(640.0, 700.0), 10.0)),
        world.add(fixed_box(Vec2::new(200.0, 40.0), Vec2::new(300.0, 400.0))),
        world.add(
            Body::fixed(Shape::Circle { radius: 40.0 })
                .expect("valid circle")
                .with_position(Vec2::new(700.0, 350.0)),
        ),
    ];
    for column in 0..12_u8 {
        let x = 260.0 + f32::from(column) * 40.0;
        world.add(circle(12.0, Vec2::new(x, 100.0), Vec2::new(5.0, 0.0)));
        world.add(dynamic_box(Vec2::splat(18.0), Vec2::new(x + 10.0, 40.0), Vec2::ZERO));
    }
    let initial: Vec<_> = statics
        .iter()
        .map(|id| world.body(*id).map(|body| (body.position, body.velocity)))
        .collect();

    for _ in 0..300 {
        world.step(0.02);
    }

    let after: Vec<_> = statics
        .iter()
        .map(|id| world.body(*id).map(|body| (body.position, body.velocity)))
        .collect();
    assert_eq!(initial, after);
}

#[rstest]
#[case::same_mass(1.0, 1.0)]
#[case::lopsided(1.0, 25.0)]
fn circle_correction_is_symmetric(#[case] mass_a: f32, #[case] mass_b: f32) {
    let a = weighted_circle(10.0, mass_a, Vec2::new(50.0, 50.0), Vec2::ZERO);
    let b = weighted_circle(10.0, mass_b, Vec2::new(62.0, 59.0), Vec2::ZERO);

    let (mut a1, mut b1) = (a.clone(), b.clone());
    let forward = circle_circle(&mut a1, 10.0, &mut b1, 10.0);
    let (mut a2, mut b2) = (a.clone(), b.clone());
    let backward = circle_circle(&mut b2, 10.0, &mut a2, 10.0);

    assert_eq!(forward, backward);
    let shift_a = a1.position - a.position;
    let shift_b = b1.position - b.position;
    assert_relative_eq!(shift_a.x, -shift_b.x, epsilon = 1e-5);
    assert_relative_eq!(shift_a.y, -shift_b.y, epsilon = 1e-5);
    assert_relative_eq!(shift_a.length(), 2.5, epsilon = 1e-4);
    assert_relative_eq!((a2.position - a.position).x, shift_a.x, epsilon = 1e-5);
    assert_relative_eq!((b2.position - b.position).y, shift_b.y, epsilon = 1e-5);
}

#[rstest]
#[case::inside(Vec2::new(640.0, 360.0), true)]
#[case::corner(Vec2::new(1280.0, 720.0), true)]
#[case::left(Vec2::new(-1.0, 360.0), false)]
#[case::below(Vec2::new(640.0, 721.0), false)]
#[case::far(Vec2::new(5000.0, -5000.0), false)]
fn cleanup_prunes_out_of_bounds(#[case] position: Vec2, #[case] survives: bool) {
    let mut world = World::default();
    let id = world.add(circle(5.0, position, Vec2::ZERO));
    let removed = world.cleanup(Bounds::default(), CleanupPolicy::default());
    assert_eq!(world.contains(id), survives);
    assert_eq!(removed, usize::from(!survives));
}
