use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raycast_arena::config::PlayerTuning;
use raycast_arena::core::maze::Maze;
use raycast_arena::core::normalize_angle;
use raycast_arena::core::player::{MoveRules, Player};
use raycast_arena::core::process_events::InputState;

const DT: f32 = 1.0 / 60.0;
const STRAFE: MoveRules = MoveRules { strafe_keys: true, allow_sprint: true };
const TANK: MoveRules = MoveRules { strafe_keys: false, allow_sprint: false };

fn random_input(rng: &mut StdRng) -> InputState {
    InputState {
        forward: rng.gen_bool(0.6),
        back: rng.gen_bool(0.2),
        strafe_left: rng.gen_bool(0.3),
        strafe_right: rng.gen_bool(0.3),
        turn_left: rng.gen_bool(0.2),
        turn_right: rng.gen_bool(0.2),
        sprint: rng.gen_bool(0.5),
        mouse_dx: rng.gen_range(-40.0..40.0),
        ..InputState::default()
    }
}

#[test]
fn player_never_ends_on_a_wall() {
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::generate_arena(&mut rng);
        let (sx, sy) = maze.safe_start();
        let mut player = Player::new(sx, sy, 0.0, &PlayerTuning::default());
        for _ in 0..3000 {
            let input = random_input(&mut rng);
            player.update(&input, &maze, DT, STRAFE);
            assert!(!maze.is_wall(player.pos.x, player.pos.y), "seed {seed} at {:?}", player.pos);
        }
    }
}

#[test]
fn move_into_wall_is_rejected() {
    let maze = Maze::classic();
    let mut player = Player::new(1.5, 1.5, 0.0, &PlayerTuning::default());
    // (0, 1) is the border wall
    assert!(!player.try_move(&maze, -1.0, 0.0));
    assert_eq!((player.pos.x, player.pos.y), (1.5, 1.5));
    assert!(player.try_move(&maze, 0.2, 0.0));
    assert!((player.pos.x - 1.7).abs() < 1e-6);
}

#[test]
fn forward_walk_stops_before_wall() {
    let maze = Maze::classic();
    let mut player = Player::new(3.5, 4.5, 0.0, &PlayerTuning::default());
    let input = InputState { forward: true, ..InputState::default() };
    for _ in 0..600 {
        player.update(&input, &maze, DT, STRAFE);
    }
    assert!(player.pos.x < 7.0);
    assert!(player.pos.x > 6.9);
    assert_eq!(player.pos.y, 4.5);
}

#[test]
fn strafe_moves_sideways() {
    let maze = Maze::bordered(10, 10);
    let mut player = Player::new(5.5, 5.5, 0.0, &PlayerTuning::default());
    let input = InputState { strafe_right: true, ..InputState::default() };
    player.update(&input, &maze, 0.1, STRAFE);
    // facing east, right is +y
    assert!((player.pos.x - 5.5).abs() < 1e-4);
    assert!((player.pos.y - 5.8).abs() < 1e-4);
    assert_eq!(player.dir, 0.0);
}

#[test]
fn tank_controls_turn_instead_of_strafe() {
    let maze = Maze::bordered(10, 10);
    let mut player = Player::new(5.5, 5.5, 0.0, &PlayerTuning::default());
    let input = InputState { strafe_right: true, sprint: true, ..InputState::default() };
    player.update(&input, &maze, 0.5, TANK);
    assert_eq!((player.pos.x, player.pos.y), (5.5, 5.5));
    assert!((player.dir - 0.9).abs() < 1e-6);
    assert!(!player.sprinting);
}

#[test]
fn sprint_doubles_speed() {
    let maze = Maze::bordered(20, 20);
    let mut walker = Player::new(2.5, 2.5, 0.0, &PlayerTuning::default());
    let mut runner = Player::new(2.5, 4.5, 0.0, &PlayerTuning::default());
    let walk = InputState { forward: true, ..InputState::default() };
    let run = InputState { forward: true, sprint: true, ..InputState::default() };
    walker.update(&walk, &maze, 0.5, STRAFE);
    runner.update(&run, &maze, 0.5, STRAFE);
    assert!((walker.pos.x - 4.0).abs() < 1e-4);
    assert!((runner.pos.x - 5.5).abs() < 1e-4);
}

#[test]
fn rotation_is_unbounded_but_normalized() {
    let maze = Maze::bordered(10, 10);
    let mut player = Player::new(5.5, 5.5, 0.0, &PlayerTuning::default());
    let input = InputState { turn_right: true, ..InputState::default() };
    for _ in 0..1000 {
        player.update(&input, &maze, DT, STRAFE);
        assert!(player.dir >= -std::f32::consts::PI && player.dir < std::f32::consts::PI);
    }
}

#[test]
fn mouse_turns_by_sensitivity() {
    let maze = Maze::bordered(10, 10);
    let mut player = Player::new(5.5, 5.5, 0.0, &PlayerTuning::default());
    let input = InputState { mouse_dx: 100.0, ..InputState::default() };
    player.update(&input, &maze, DT, STRAFE);
    assert!((player.dir - 0.2).abs() < 1e-6);
}

#[test]
fn normalize_wraps_into_range() {
    use std::f32::consts::PI;
    assert!((normalize_angle(PI / 2.0 + 6.0 * PI) - PI / 2.0).abs() < 1e-4);
    assert!((normalize_angle(-0.5) + 0.5).abs() < 1e-6);
    assert!((normalize_angle(2.0 * PI + 0.25) - 0.25).abs() < 1e-4);
    assert!((normalize_angle(-PI - 0.25) - (PI - 0.25)).abs() < 1e-4);
}

#[test]
fn dead_player_ignores_input() {
    let maze = Maze::bordered(10, 10);
    let mut player = Player::new(5.5, 5.5, 0.0, &PlayerTuning::default());
    player.take_damage(1000);
    let input = InputState { forward: true, turn_left: true, ..InputState::default() };
    player.update(&input, &maze, 0.5, STRAFE);
    assert_eq!((player.pos.x, player.pos.y, player.dir), (5.5, 5.5, 0.0));
}
