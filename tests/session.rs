//! End-to-end session behaviour driven through the public API

use canvas_shooter::Tuning;
use canvas_shooter::sim::{
    Bounds, DrawList, FrameOutcome, GameEvent, GamePhase, GameState, InputState, Spawner, tick,
};
use glam::Vec2;

fn started() -> GameState {
    let mut state = GameState::new(42, Bounds::new(800.0, 600.0), Tuning::default());
    state.start();
    state
}

fn run(state: &mut GameState, input: &InputState, frames: usize) -> FrameOutcome {
    let mut draw = DrawList::new();
    let mut outcome = FrameOutcome::Continue;
    for _ in 0..frames {
        draw.clear();
        outcome = tick(state, input, &mut draw);
    }
    outcome
}

fn player_pos(state: &GameState) -> Vec2 {
    state.player.as_ref().unwrap().pos
}

#[test]
fn fire_right_moves_ten_per_frame() {
    let mut state = started();
    assert_eq!(player_pos(&state), Vec2::new(400.0, 300.0));
    state.fire(Vec2::new(700.0, 300.0)).unwrap();

    for k in 1..=30u32 {
        assert_eq!(
            run(&mut state, &InputState::default(), 1),
            FrameOutcome::Continue
        );
        let bullet = &state.bullets[0];
        assert_eq!(bullet.pos.x, 400.0 + 10.0 * k as f32);
        assert_eq!(bullet.pos.y, 300.0);
    }
}

#[test]
fn bullet_leaves_playfield() {
    let mut state = started();
    state.fire(Vec2::new(700.0, 300.0)).unwrap();

    // 400 -> 800 stays (edge is inside), 810 is culled
    run(&mut state, &InputState::default(), 40);
    assert_eq!(state.bullets.len(), 1);
    run(&mut state, &InputState::default(), 1);
    assert!(state.bullets.is_empty());
}

#[test]
fn player_clamped_on_every_edge() {
    let edges = [
        (
            InputState {
                left: true,
                ..Default::default()
            },
            Vec2::new(20.0, 300.0),
        ),
        (
            InputState {
                right: true,
                ..Default::default()
            },
            Vec2::new(780.0, 300.0),
        ),
        (
            InputState {
                up: true,
                ..Default::default()
            },
            Vec2::new(400.0, 20.0),
        ),
        (
            InputState {
                down: true,
                ..Default::default()
            },
            Vec2::new(400.0, 580.0),
        ),
    ];

    for (input, expected) in edges {
        let mut state = started();
        run(&mut state, &input, 100);
        assert_eq!(player_pos(&state), expected);
    }
}

#[test]
fn enemy_homes_on_moving_player() {
    let mut state = started();
    state.spawn_enemy_at(Vec2::new(100.0, 300.0));
    let input = InputState {
        down: true,
        ..Default::default()
    };

    for _ in 0..20 {
        let before = state.enemies[0].pos;
        run(&mut state, &input, 1);
        let step = state.enemies[0].pos - before;
        // Heads at where the player is now, not where it was
        let wanted = (player_pos(&state) - before).normalize();
        assert!((step.length() - 2.0).abs() < 1e-4);
        assert!((step.normalize() - wanted).length() < 1e-4);
    }
}

#[test]
fn pause_freezes_everything() {
    let mut state = started();
    state.spawn_enemy_at(Vec2::new(100.0, 100.0));
    state.fire(Vec2::new(700.0, 300.0)).unwrap();
    run(&mut state, &InputState::default(), 1);

    let held = InputState {
        right: true,
        ..Default::default()
    };
    let before = (
        player_pos(&state),
        state.bullets[0].pos,
        state.enemies[0].pos,
    );

    state.toggle_pause();
    assert_eq!(run(&mut state, &held, 10), FrameOutcome::Paused);
    assert_eq!(
        before,
        (
            player_pos(&state),
            state.bullets[0].pos,
            state.enemies[0].pos
        )
    );

    state.toggle_pause();
    assert_eq!(run(&mut state, &held, 1), FrameOutcome::Continue);
    assert_ne!(player_pos(&state), before.0);
    assert_ne!(state.bullets[0].pos, before.1);
    assert_ne!(state.enemies[0].pos, before.2);
}

#[test]
fn enemy_on_player_ends_session_once() {
    let mut state = started();
    let pos = player_pos(&state);
    state.spawn_enemy_at(pos);
    state.drain_events();

    assert_eq!(
        run(&mut state, &InputState::default(), 1),
        FrameOutcome::Ended
    );
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(!state.running());

    assert_eq!(
        run(&mut state, &InputState::default(), 1),
        FrameOutcome::Ended
    );
    assert!(!state.running());
    let game_overs = state
        .drain_events()
        .into_iter()
        .filter(|e| *e == GameEvent::GameOver)
        .count();
    assert_eq!(game_overs, 1);

    // Input is ignored until restart
    assert!(state.fire(Vec2::ZERO).is_none());
    assert!(state.spawn_tick().is_none());
    state.toggle_pause();
    assert_eq!(state.phase, GamePhase::GameOver);
}

#[test]
fn restart_after_game_over() {
    let mut state = started();
    let pos = player_pos(&state);
    state.spawn_enemy_at(pos);
    run(&mut state, &InputState::default(), 1);
    assert_eq!(state.phase, GamePhase::GameOver);

    state.start();
    assert_eq!(state.phase, GamePhase::Running);
    assert!(state.enemies.is_empty());
    assert_eq!(player_pos(&state), Vec2::new(400.0, 300.0));
    assert_eq!(
        run(&mut state, &InputState::default(), 5),
        FrameOutcome::Continue
    );
}

#[test]
fn spawner_runs_across_sessions() {
    let mut state = started();
    let mut spawner = Spawner::new(state.tuning.spawn_interval_ms);

    assert_eq!(spawner.advance(2000.0, &mut state), 1);
    let spawned = state.enemies[0].pos;
    assert!(state.bounds.contains(spawned));

    // End the session; ticks keep coming but produce nothing
    let pos = player_pos(&state);
    state.spawn_enemy_at(pos);
    run(&mut state, &InputState::default(), 1);
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(spawner.advance(3000.0, &mut state), 0);
    assert_eq!(spawner.ticks(), 2);

    // Cadence carries over into the next session
    state.start();
    assert_eq!(spawner.advance(1000.0, &mut state), 1);
    assert_eq!(state.enemies.len(), 1);
}

#[test]
fn bounds_change_between_sessions() {
    let mut state = started();
    state.set_bounds(Bounds::new(200.0, 100.0));
    state.start();
    assert_eq!(player_pos(&state), Vec2::new(100.0, 50.0));

    let input = InputState {
        right: true,
        down: true,
        ..Default::default()
    };
    run(&mut state, &input, 50);
    assert_eq!(player_pos(&state), Vec2::new(180.0, 80.0));
}
