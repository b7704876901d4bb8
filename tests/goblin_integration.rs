//! Goblin AI integration tests: patrol band, ledges, walls, detection and chase.

use bevy_ecs::prelude::*;
use glam::Vec2;

use goblinkeep::components::boxcollider::BoxCollider;
use goblinkeep::components::disabled::Disabled;
use goblinkeep::components::goblin::{Goblin, GoblinState};
use goblinkeep::components::mapposition::MapPosition;
use goblinkeep::components::rigidbody::RigidBody;
use goblinkeep::components::sprite::Sprite;
use goblinkeep::components::tag::{Layer, Tag};
use goblinkeep::resources::worldtime::WorldTime;
use goblinkeep::systems::goblin::{
    goblin_detection_system, goblin_facing_sync_system, goblin_init_system,
    goblin_motion_system, goblin_patrol_clamp_system,
};
use goblinkeep::systems::movement::movement;

const DT: f32 = 0.02;
const GRAVITY: f32 = 30.0;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta: DT,
        time_scale: 1.0,
        frame_count: 0,
    });
    world
}

/// Floor with its top at y = -0.5, spanning `[from_x, to_x]`.
fn spawn_floor(world: &mut World, from_x: f32, to_x: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(from_x, -1.5),
            BoxCollider::new(to_x - from_x, 1.0),
            Layer::Ground,
        ))
        .id()
}

fn spawn_wall(world: &mut World, x: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(x, 0.0),
            BoxCollider::centered(1.0, 1.0),
            Layer::Wall,
        ))
        .id()
}

fn spawn_goblin(world: &mut World, x: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(x, 0.0),
            BoxCollider::centered(0.8, 1.0),
            Tag::Enemy,
            RigidBody::with_gravity(GRAVITY),
            Sprite::new("goblin", 0.8, 1.0),
            Goblin::new(2.0, 5.0, 5.0),
        ))
        .id()
}

fn spawn_player(world: &mut World, x: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(x, 0.0),
            BoxCollider::centered(0.8, 1.0),
            Tag::Player,
            Layer::Player,
        ))
        .id()
}

fn tick_init(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(goblin_init_system);
    schedule.run(world);
}

fn tick_detection(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(goblin_detection_system);
    schedule.run(world);
}

fn make_physics() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            goblin_motion_system,
            movement,
            goblin_patrol_clamp_system,
            goblin_facing_sync_system,
        )
            .chain(),
    );
    schedule
}

fn goblin(world: &World, entity: Entity) -> &Goblin {
    world.get::<Goblin>(entity).unwrap()
}

fn x_of(world: &World, entity: Entity) -> f32 {
    world.get::<MapPosition>(entity).unwrap().pos.x
}

#[test]
fn init_captures_start_point_and_syncs_facing() {
    let mut world = make_world();
    spawn_floor(&mut world, -10.0, 10.0);
    let g = world
        .spawn((
            MapPosition::new(2.0, 0.0),
            RigidBody::new(),
            Sprite::new("goblin", 0.8, 1.0),
            Goblin::default().facing_left(),
        ))
        .id();
    spawn_player(&mut world, 8.0);

    tick_init(&mut world);

    let state = goblin(&world, g);
    assert!(state.initialized);
    assert_eq!(state.start_point, Vec2::new(2.0, 0.0));
    assert!(world.get::<Sprite>(g).unwrap().flip_h);
    assert!(world.get::<Disabled>(g).is_none());
}

#[test]
fn goblin_without_body_is_disabled_and_never_moves() {
    let mut world = make_world();
    spawn_floor(&mut world, -10.0, 10.0);
    let g = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Sprite::new("goblin", 0.8, 1.0),
            Goblin::default(),
        ))
        .id();

    tick_init(&mut world);
    assert!(world.get::<Disabled>(g).is_some());

    let mut physics = make_physics();
    for _ in 0..10 {
        physics.run(&mut world);
    }
    assert_eq!(x_of(&world, g), 0.0);
}

#[test]
fn goblin_without_sprite_is_disabled() {
    let mut world = make_world();
    let g = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            RigidBody::new(),
            Goblin::default(),
        ))
        .id();

    tick_init(&mut world);

    let disabled = world.get::<Disabled>(g).unwrap();
    assert!(disabled.reason.contains("Sprite"));
}

#[test]
fn flips_exactly_at_band_edge_before_ledge() {
    let mut world = make_world();
    // the floor runs out just past the right band edge
    spawn_floor(&mut world, -6.0, 5.45);
    let g = spawn_goblin(&mut world, 0.0);
    tick_init(&mut world);

    let mut physics = make_physics();
    let mut flipped_at = None;
    for _ in 0..200 {
        let before_x = x_of(&world, g);
        let was_right = goblin(&world, g).facing_right;
        physics.run(&mut world);
        assert!(x_of(&world, g) <= 5.0, "walked past the band edge");
        if was_right && !goblin(&world, g).facing_right {
            flipped_at = Some(before_x);
            break;
        }
    }

    assert_eq!(flipped_at, Some(5.0));
    assert!(world.get::<Sprite>(g).unwrap().flip_h);
}

#[test]
fn patrol_stays_within_band_and_turns_at_both_ends() {
    let mut world = make_world();
    spawn_floor(&mut world, -20.0, 20.0);
    let g = spawn_goblin(&mut world, 0.0);
    tick_init(&mut world);

    let mut physics = make_physics();
    let mut turns = 0;
    let mut facing = goblin(&world, g).facing_right;
    for _ in 0..1500 {
        physics.run(&mut world);
        let x = x_of(&world, g);
        assert!((-5.0..=5.0).contains(&x), "x = {} left the band", x);
        let now = goblin(&world, g).facing_right;
        if now != facing {
            turns += 1;
            facing = now;
        }
    }
    assert!(turns >= 4, "only {} turns", turns);
    // standing on the floor the whole time
    let y = world.get::<MapPosition>(g).unwrap().pos.y;
    assert!(y.abs() < 1e-3);
}

#[test]
fn turns_at_ledge_without_falling() {
    let mut world = make_world();
    spawn_floor(&mut world, -6.0, 1.0);
    let g = spawn_goblin(&mut world, 0.0);
    tick_init(&mut world);

    let mut physics = make_physics();
    for _ in 0..60 {
        physics.run(&mut world);
        assert!(x_of(&world, g) < 0.7);
    }
    assert!(!goblin(&world, g).facing_right);
    let y = world.get::<MapPosition>(g).unwrap().pos.y;
    assert!(y.abs() < 1e-3);
}

#[test]
fn turns_at_wall_ahead() {
    let mut world = make_world();
    spawn_floor(&mut world, -6.0, 6.0);
    spawn_wall(&mut world, 1.2);
    let g = spawn_goblin(&mut world, 0.3);
    tick_init(&mut world);

    let mut physics = make_physics();
    physics.run(&mut world);

    assert!(!goblin(&world, g).facing_right);
    let vx = world.get::<RigidBody>(g).unwrap().velocity.x;
    assert_eq!(vx, -2.0);
}

#[test]
fn wall_between_goblin_and_player_blocks_detection() {
    let mut world = make_world();
    spawn_floor(&mut world, -6.0, 6.0);
    let g = spawn_goblin(&mut world, 0.0);
    spawn_player(&mut world, 3.0);
    let wall = spawn_wall(&mut world, 1.5);
    tick_init(&mut world);

    tick_detection(&mut world);
    assert!(!goblin(&world, g).player_detected);
    assert_eq!(goblin(&world, g).state, GoblinState::Patrol);

    world.despawn(wall);
    tick_detection(&mut world);
    assert!(goblin(&world, g).player_detected);
    assert_eq!(goblin(&world, g).state, GoblinState::Chase);
}

#[test]
fn detection_follows_sprite_facing() {
    let mut world = make_world();
    spawn_floor(&mut world, -6.0, 6.0);
    let g = spawn_goblin(&mut world, 0.0);
    spawn_player(&mut world, -3.0);
    tick_init(&mut world);

    tick_detection(&mut world);
    assert!(!goblin(&world, g).player_detected);

    world.get_mut::<Sprite>(g).unwrap().flip_h = true;
    tick_detection(&mut world);
    assert!(goblin(&world, g).player_detected);
}

#[test]
fn player_beyond_range_is_not_detected() {
    let mut world = make_world();
    let g = spawn_goblin(&mut world, 0.0);
    spawn_player(&mut world, 6.0);
    tick_init(&mut world);

    tick_detection(&mut world);
    assert!(!goblin(&world, g).player_detected);
}

#[test]
fn chase_runs_towards_player_and_leaves_vertical_velocity() {
    let mut world = make_world();
    spawn_floor(&mut world, -10.0, 10.0);
    let g = spawn_goblin(&mut world, 0.0);
    spawn_player(&mut world, 3.0);
    tick_init(&mut world);
    tick_detection(&mut world);

    world.get_mut::<RigidBody>(g).unwrap().velocity.y = 4.0;
    let mut schedule = Schedule::default();
    schedule.add_systems(goblin_motion_system);
    schedule.run(&mut world);

    let body = world.get::<RigidBody>(g).unwrap();
    assert_eq!(body.velocity.x, 2.0);
    assert_eq!(body.velocity.y, 4.0);
    assert!(goblin(&world, g).facing_right);
}

#[test]
fn chase_may_leave_patrol_band() {
    let mut world = make_world();
    spawn_floor(&mut world, -20.0, 20.0);
    let g = spawn_goblin(&mut world, 0.0);
    let p = spawn_player(&mut world, 4.9);
    tick_init(&mut world);

    let mut physics = make_physics();
    for _ in 0..200 {
        // the player keeps running away
        world.get_mut::<MapPosition>(p).unwrap().pos.x = x_of(&world, g) + 3.0;
        tick_detection(&mut world);
        physics.run(&mut world);
    }
    assert!(x_of(&world, g) > 5.0);
    assert_eq!(goblin(&world, g).state, GoblinState::Chase);
}

#[test]
fn despawned_target_drops_back_to_patrol() {
    let mut world = make_world();
    spawn_floor(&mut world, -10.0, 10.0);
    let g = spawn_goblin(&mut world, 0.0);
    let p = spawn_player(&mut world, 3.0);
    tick_init(&mut world);
    tick_detection(&mut world);
    assert_eq!(goblin(&world, g).state, GoblinState::Chase);

    world.despawn(p);
    let mut physics = make_physics();
    physics.run(&mut world);

    let state = goblin(&world, g);
    assert_eq!(state.state, GoblinState::Patrol);
    assert!(!state.player_detected);
    assert_eq!(state.target, None);
}

fn start_chase(world: &mut World) -> (Entity, Entity) {
    spawn_floor(world, -10.0, 10.0);
    let g = spawn_goblin(world, 0.0);
    let p = spawn_player(world, 3.0);
    tick_init(world);
    tick_detection(world);
    assert_eq!(goblin(world, g).state, GoblinState::Chase);
    assert_eq!(goblin(world, g).target, Some(p));
    (g, p)
}

#[test]
fn wall_raised_mid_chase_drops_back_to_patrol() {
    let mut world = make_world();
    let (g, _) = start_chase(&mut world);

    spawn_wall(&mut world, 1.5);
    tick_detection(&mut world);
    make_physics().run(&mut world);

    let state = goblin(&world, g);
    assert_eq!(state.state, GoblinState::Patrol);
    assert!(!state.player_detected);
    assert_eq!(state.target, None);
}

#[test]
fn player_leaving_range_drops_back_to_patrol() {
    let mut world = make_world();
    let (g, p) = start_chase(&mut world);

    world.get_mut::<MapPosition>(p).unwrap().pos.x = 8.0;
    tick_detection(&mut world);
    make_physics().run(&mut world);

    let state = goblin(&world, g);
    assert_eq!(state.state, GoblinState::Patrol);
    assert!(!state.player_detected);
    assert_eq!(state.target, None);
    assert_eq!(world.get::<RigidBody>(g).unwrap().velocity.x.abs(), 2.0);
}

#[test]
fn goblin_without_player_only_patrols() {
    let mut world = make_world();
    spawn_floor(&mut world, -10.0, 10.0);
    let g = spawn_goblin(&mut world, 0.0);
    tick_init(&mut world);

    let mut physics = make_physics();
    for _ in 0..100 {
        tick_detection(&mut world);
        physics.run(&mut world);
    }
    assert_eq!(goblin(&world, g).state, GoblinState::Patrol);
    assert!(goblin(&world, g).initialized);
}
