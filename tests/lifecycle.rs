//! Tests for spawning, pruning and scene resets.
use glam::Vec2;
use mockall::mock;
use pebble::{
    Body, ConfigError, Sandbox, SandboxConfig, ScenePopulator, Shape, ShapeKind, SpawnRequest,
    Trigger, World,
};
use test_utils::physics::{circle, dynamic_box, fixed_box, ground};

mock! {
    Scene {}
    impl ScenePopulator for Scene {
        fn populate(&self, world: &mut World) -> Result<(), ConfigError>;
    }
}

fn kinds(world: &World) -> Vec<ShapeKind> {
    world.bodies().map(|(_, body)| body.kind()).collect()
}

#[test]
fn reset_keeps_halfspaces_and_repopulates_once() {
    let mut world = World::default();
    let floor = world.add(ground(Vec2::new(640.0, 670.0), 0.0));
    world.add(fixed_box(Vec2::splat(50.0), Vec2::new(200.0, 200.0)));
    world.add(circle(10.0, Vec2::new(300.0, 100.0), Vec2::ZERO));
    world.add(dynamic_box(Vec2::splat(10.0), Vec2::new(400.0, 100.0), Vec2::ZERO));

    let mut scene = MockScene::new();
    scene.expect_populate().times(1).returning(|world| {
        assert_eq!(world.len(), 1, "only the ground survives the reset");
        world.spawn(SpawnRequest::new(Shape::Circle { radius: 5.0 }).at(Vec2::new(50.0, 50.0)))?;
        Ok(())
    });

    world.reset_dynamic(&scene).expect("scene populates");
    assert_eq!(kinds(&world), vec![ShapeKind::Halfspace, ShapeKind::Circle]);
    assert!(world.contains(floor));
}

#[test]
fn reset_reports_scene_failures() {
    let mut world = World::default();
    world.add(circle(10.0, Vec2::new(300.0, 100.0), Vec2::ZERO));
    let mut scene = MockScene::new();
    scene
        .expect_populate()
        .times(1)
        .returning(|_| Err(ConfigError::InvalidMass { mass: 0.0 }));
    assert_eq!(
        world.reset_dynamic(&scene),
        Err(ConfigError::InvalidMass { mass: 0.0 })
    );
    assert!(world.is_empty());
}

#[test]
fn spawned_bodies_follow_insertion_order() {
    let mut world = World::default();
    let first = world
        .spawn(SpawnRequest::new(Shape::Circle { radius: 5.0 }))
        .expect("valid circle");
    let second = world
        .spawn(SpawnRequest::new(Shape::Aabb { size: Vec2::splat(4.0) }))
        .expect("valid box");
    let order: Vec<_> = world.bodies().map(|(id, _)| id).collect();
    assert_eq!(order, vec![first, second]);
    assert!(first < second);
}

#[test]
fn sandbox_populates_at_start_and_on_reset() {
    let mut scene = MockScene::new();
    scene.expect_populate().times(2).returning(|world| {
        world.add(
            Body::dynamic(Shape::Circle { radius: 10.0 }, 1.0)?
                .with_position(Vec2::new(640.0, 100.0)),
        );
        Ok(())
    });
    let mut sandbox = Sandbox::new(&SandboxConfig::default(), scene).expect("valid config");
    assert_eq!(sandbox.world().len(), 2);

    sandbox.trigger(Trigger::Launch);
    sandbox.tick();
    assert_eq!(sandbox.world().len(), 3);

    sandbox.trigger(Trigger::Reset);
    sandbox.tick();
    assert_eq!(
        kinds(sandbox.world()),
        vec![ShapeKind::Halfspace, ShapeKind::Circle]
    );
}

#[test]
fn triggers_are_consumed_once() {
    let mut config = SandboxConfig::default();
    config.ground.enabled = false;
    let mut scene = MockScene::new();
    scene.expect_populate().returning(|_| Ok(()));
    let mut sandbox = Sandbox::new(&config, scene).expect("valid config");

    sandbox.trigger(Trigger::Launch);
    sandbox.trigger(Trigger::Launch);
    sandbox.tick();
    sandbox.tick();
    assert_eq!(sandbox.world().len(), 2);
}
