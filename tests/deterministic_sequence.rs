use crossterm::event::KeyCode;
use snek::chain::{EntityChain, GridPosition};
use snek::clock::ManualClock;
use snek::config::{Difficulty, GridSize};
use snek::game::{Collision, GameState, Phase, TickOutcome};
use snek::input::{Direction, ScriptedInput};

fn playing_state(seed: u64) -> GameState<ManualClock> {
    let mut state = GameState::new_with_seed(GridSize::DEFAULT, seed, ManualClock::new(0))
        .expect("initial food placement should succeed");
    state.phase = Phase::Playing;
    state
}

fn chain(nodes: &[(i32, i32)]) -> EntityChain {
    EntityChain::from_nodes(
        nodes
            .iter()
            .map(|&(row, column)| GridPosition::new(row, column))
            .collect(),
    )
    .expect("test chain should be non-empty")
}

#[test]
fn single_node_moves_right_without_scoring() {
    let mut state = playing_state(1);
    state.chain = chain(&[(15, 26)]);
    state.direction = Direction::Right;
    state.food = GridPosition::new(5, 5);

    let outcome = state.tick().expect("tick should run");

    assert_eq!(outcome, TickOutcome::Moved);
    assert_eq!(state.chain, chain(&[(15, 27)]));
    assert_eq!(state.score, 1);
}

#[test]
fn stepping_onto_food_grows_and_relocates_food() {
    let mut state = playing_state(2);
    state.chain = chain(&[(15, 26), (15, 25), (15, 24)]);
    state.direction = Direction::Right;
    state.food = GridPosition::new(15, 27);

    let outcome = state.tick().expect("tick should run");

    assert_eq!(outcome, TickOutcome::Grew);
    assert_eq!(state.chain, chain(&[(15, 27), (15, 26), (15, 25), (15, 24)]));
    assert_eq!(state.score, 2);
    assert!(!state.chain.occupies(state.food));
    assert!(state.bounds().is_interior(state.food));
}

#[test]
fn moving_up_from_row_two_hits_the_top_wall() {
    let mut state = playing_state(3);
    state.chain = chain(&[(2, 10)]);
    state.direction = Direction::Up;
    state.food = GridPosition::new(20, 20);
    state.score = 6;

    state.clock().advance(50);
    state.update();

    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.death_reason, Some(Collision::Boundary));
    assert_eq!(state.score, 6);
    assert_eq!(state.view().score, 6);
}

#[test]
fn turning_back_along_own_line_is_not_a_false_collision() {
    let mut state = playing_state(4);
    state.chain = chain(&[(10, 10), (10, 11), (10, 12)]);
    state.direction = Direction::Left;
    state.food = GridPosition::new(20, 20);

    for expected_column in [9, 8, 7] {
        assert_eq!(state.tick().expect("tick should run"), TickOutcome::Moved);
        assert_eq!(
            state.chain.head(),
            Some(GridPosition::new(10, expected_column))
        );
        assert_eq!(state.chain.len(), 3);
    }
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn restart_from_game_over_resets_to_center() {
    let mut state = playing_state(5);
    state.chain = chain(&[(2, 10), (3, 10)]);
    state.direction = Direction::Up;
    state.score = 4;

    state.clock().advance(50);
    state.update();
    assert_eq!(state.phase, Phase::GameOver);

    let mut input = ScriptedInput::new();
    input.push_key(KeyCode::Char('x'));
    state.step(&mut input).expect("frame should run");

    assert_eq!(state.phase, Phase::Menu);
    assert_eq!(state.score, 1);
    assert_eq!(state.chain, chain(&[(15, 26)]));
    assert!(!state.chain.occupies(state.food));
}

#[test]
fn scripted_session_from_menu_to_wall_and_back() {
    let mut state = GameState::new_with_seed(GridSize::DEFAULT, 42, ManualClock::new(0))
        .expect("initial food placement should succeed");
    state.food = GridPosition::new(3, 3);
    let mut input = ScriptedInput::new();

    input.push_key(KeyCode::Char('e'));
    state.step(&mut input).expect("frame should run");
    assert_eq!(state.phase, Phase::Menu);
    assert_eq!(state.difficulty, Difficulty::Easy);

    // Right reverses nothing yet: the menu accepts any starting direction.
    input.push_key(KeyCode::Char('d'));
    state.step(&mut input).expect("frame should run");
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.direction, Direction::Right);
    assert_eq!(state.chain.head(), Some(GridPosition::new(15, 26)));

    state.clock().advance(100);
    state.step(&mut input).expect("frame should run");
    assert_eq!(state.chain.head(), Some(GridPosition::new(15, 27)));

    input.push_key(KeyCode::Char('p'));
    state.step(&mut input).expect("frame should run");
    assert_eq!(state.phase, Phase::Paused);

    state.clock().advance(500);
    state.step(&mut input).expect("frame should run");
    assert_eq!(state.chain.head(), Some(GridPosition::new(15, 27)));

    input.push_key(KeyCode::Char('p'));
    state.step(&mut input).expect("frame should run");
    assert_eq!(state.phase, Phase::Playing);

    let mut frames = 0;
    while state.phase == Phase::Playing && frames < 40 {
        state.clock().advance(100);
        state.step(&mut input).expect("frame should run");
        frames += 1;
    }

    assert_eq!(frames, 25);
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.death_reason, Some(Collision::Boundary));
    assert_eq!(state.chain.head(), Some(GridPosition::new(15, 51)));
    assert_eq!(state.score, 1);

    input.push_key(KeyCode::Enter);
    state.step(&mut input).expect("frame should run");
    assert_eq!(state.phase, Phase::Menu);
    assert_eq!(state.chain.head(), Some(GridPosition::new(15, 26)));
    assert_eq!(state.difficulty, Difficulty::Easy);
    assert!(input.is_empty(), "every scripted key should have been consumed");
}
