use super::*;
use crate::app::config::GameConfig;
use crate::app::runtime::GameApp;

const FIXED_DT: f32 = 1.0 / 60.0;

fn test_context() -> AppContext {
    AppContext::from_config(&GameConfig::default())
}

fn activated_scene(ctx: &mut AppContext) -> GameScene {
    let mut scene = GameScene::new(7);
    scene.activate(ctx);
    scene
}

/// Ticks the scene the way the runtime does: one fixed step, then the
/// unconditional end-of-frame latch clear.
fn advance(scene: &mut GameScene, ctx: &mut AppContext, steps: usize) -> SceneCommand {
    let mut last = SceneCommand::None;
    for _ in 0..steps {
        last = scene.tick(FIXED_DT, ctx);
        ctx.input.end_frame();
    }
    last
}

fn player_body<'a>(scene: &'a GameScene) -> &'a engine::Body {
    let player = scene.player.expect("player id");
    scene.physics.body(player).expect("player body")
}

fn collectible_position(scene: &GameScene, index: usize) -> Vec2 {
    let body = scene.collectibles[index].body;
    scene.physics.body(body).expect("collectible body").position
}

fn teleport_player_to(scene: &mut GameScene, position: Vec2) {
    let player = scene.player.expect("player id");
    let body = scene.physics.body_mut(player).expect("player body");
    body.position = position;
    body.velocity = Vec2::default();
}

fn collect_one(scene: &mut GameScene, ctx: &mut AppContext, index: usize) {
    let position = collectible_position(scene, index);
    teleport_player_to(scene, position);
    advance(scene, ctx, 1);
}

fn collect_full_wave(scene: &mut GameScene, ctx: &mut AppContext, reverse: bool) {
    let indices: Vec<usize> = if reverse {
        (0..COLLECTIBLE_COUNT).rev().collect()
    } else {
        (0..COLLECTIBLE_COUNT).collect()
    };
    for index in indices {
        collect_one(scene, ctx, index);
    }
}

fn spawn_hazard_on_player(scene: &mut GameScene) -> BodyId {
    let position = player_body(scene).position;
    let hazard = scene
        .physics
        .create_dynamic_body(position, Vec2 { x: 14.0, y: 14.0 });
    let body = scene.physics.body_mut(hazard).expect("hazard body");
    body.allow_gravity = false;
    scene.hazards.push(hazard);
    hazard
}

fn settle_player(scene: &mut GameScene, ctx: &mut AppContext) {
    for _ in 0..600 {
        advance(scene, ctx, 1);
        let body = player_body(scene);
        if body.grounded() && body.velocity.y.abs() < 1.0 {
            return;
        }
    }
    panic!("player never settled on a platform");
}

#[test]
fn activation_builds_a_fresh_level() {
    let mut ctx = test_context();
    let scene = activated_scene(&mut ctx);

    assert_eq!(scene.phase, GamePhase::Active);
    assert_eq!(scene.score, 0);
    assert_eq!(scene.platforms.len(), 4);
    assert_eq!(scene.collectibles.len(), COLLECTIBLE_COUNT);
    assert_eq!(scene.active_collectible_count(), COLLECTIBLE_COUNT);
    assert!(scene.hazards.is_empty());
    assert!(!scene.physics.is_paused());
    assert!(player_body(&scene).tint.is_none());

    let label = ctx
        .labels
        .label(scene.score_label.expect("score label"))
        .expect("label");
    assert_eq!(label.text, "Score: 0");
}

#[test]
fn activation_registers_animations_idempotently() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    assert_eq!(ctx.anims.len(), 3);
    assert!(ctx.anims.contains("left"));
    assert!(ctx.anims.contains("turn"));
    assert!(ctx.anims.contains("right"));

    scene.deactivate(&mut ctx);
    scene.activate(&mut ctx);

    // second activation re-registers; the registry skips duplicates
    assert_eq!(ctx.anims.len(), 3);
}

#[test]
fn pickup_deactivates_the_collectible_and_scores_ten() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);

    collect_one(&mut scene, &mut ctx, 0);

    assert_eq!(scene.score, 10);
    assert_eq!(scene.active_collectible_count(), COLLECTIBLE_COUNT - 1);
    let collected = scene.collectibles[0].body;
    assert!(!scene.physics.body(collected).expect("body").active);
    let label = ctx
        .labels
        .label(scene.score_label.expect("score label"))
        .expect("label");
    assert_eq!(label.text, "Score: 10");
}

#[test]
fn score_stays_a_multiple_of_ten() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);

    for index in 0..5 {
        collect_one(&mut scene, &mut ctx, index);
        assert_eq!(scene.score % SCORE_PER_COLLECTIBLE, 0);
    }
    assert_eq!(scene.score, 50);
}

#[test]
fn twelfth_pickup_resets_the_wave_and_spawns_exactly_one_hazard() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);

    for index in 0..COLLECTIBLE_COUNT - 1 {
        collect_one(&mut scene, &mut ctx, index);
    }
    assert_eq!(scene.active_collectible_count(), 1);
    assert!(scene.hazards.is_empty());

    collect_one(&mut scene, &mut ctx, COLLECTIBLE_COUNT - 1);

    assert_eq!(scene.score, 120);
    assert_eq!(scene.hazards.len(), 1);
    assert_eq!(scene.active_collectible_count(), COLLECTIBLE_COUNT);
}

#[test]
fn wave_hazard_spawns_on_the_half_opposite_the_player() {
    // last pickup on the right half -> hazard on the left half
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    collect_full_wave(&mut scene, &mut ctx, false);
    let midpoint = ctx.viewport.width * 0.5;
    assert!(player_body(&scene).position.x > midpoint);
    let hazard = scene.physics.body(scene.hazards[0]).expect("hazard");
    assert!(hazard.position.x <= midpoint);
    assert!(hazard.position.x >= 0.0);

    // last pickup on the left half -> hazard on the right half
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    collect_full_wave(&mut scene, &mut ctx, true);
    assert!(player_body(&scene).position.x < midpoint);
    let hazard = scene.physics.body(scene.hazards[0]).expect("hazard");
    assert!(hazard.position.x >= midpoint);
    assert!(hazard.position.x <= ctx.viewport.width);
}

#[test]
fn wave_hazard_drifts_down_with_full_bounce_and_no_gravity() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    collect_full_wave(&mut scene, &mut ctx, false);

    let scale = uniform_scale(ctx.design, ctx.viewport);
    let hazard = scene.physics.body(scene.hazards[0]).expect("hazard");
    assert_eq!(hazard.velocity.y, HAZARD_DRIFT_SPEED * scale);
    assert!(hazard.velocity.x.abs() <= HAZARD_SPEED_RANGE * scale);
    assert_eq!(
        hazard.bounce,
        Vec2 {
            x: HAZARD_BOUNCE,
            y: HAZARD_BOUNCE
        }
    );
    assert!(!hazard.allow_gravity);
    assert!(hazard.collide_world_bounds);
}

#[test]
fn identical_seeds_produce_identical_hazards() {
    let run = |seed: u64| -> (Vec2, Vec2) {
        let mut ctx = test_context();
        let mut scene = GameScene::new(seed);
        scene.activate(&mut ctx);
        collect_full_wave(&mut scene, &mut ctx, false);
        let hazard = scene.physics.body(scene.hazards[0]).expect("hazard");
        (hazard.position, hazard.velocity)
    };

    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}

#[test]
fn hazard_contact_pauses_physics_and_sets_the_terminal_flag_once() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    teleport_player_to(&mut scene, Vec2 { x: 500.0, y: 200.0 });
    spawn_hazard_on_player(&mut scene);

    advance(&mut scene, &mut ctx, 1);

    assert_eq!(scene.phase, GamePhase::Terminal);
    assert!(scene.physics.is_paused());
    assert_eq!(player_body(&scene).tint, Some(HIT_TINT));
    assert_eq!(scene.player_animator.current(), Some("turn"));
}

#[test]
fn terminal_scene_requests_game_over_and_freezes_all_state() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    collect_one(&mut scene, &mut ctx, 0);
    teleport_player_to(&mut scene, Vec2 { x: 500.0, y: 200.0 });
    spawn_hazard_on_player(&mut scene);
    advance(&mut scene, &mut ctx, 1);
    assert_eq!(scene.phase, GamePhase::Terminal);

    let score_before = scene.score;
    let hazards_before = scene.hazards.len();
    let active_before = scene.active_collectible_count();
    let position_before = player_body(&scene).position;

    let last = advance(&mut scene, &mut ctx, 10);

    assert_eq!(last, SceneCommand::SwitchTo(SceneKey::GameOver));
    assert_eq!(scene.phase, GamePhase::Terminal);
    assert_eq!(scene.score, score_before);
    assert_eq!(scene.hazards.len(), hazards_before);
    assert_eq!(scene.active_collectible_count(), active_before);
    assert_eq!(player_body(&scene).position, position_before);
}

#[test]
fn redundant_terminal_entry_has_no_further_effect() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    teleport_player_to(&mut scene, Vec2 { x: 500.0, y: 200.0 });
    spawn_hazard_on_player(&mut scene);
    advance(&mut scene, &mut ctx, 1);

    let score = scene.score;
    scene.enter_terminal(&ctx);
    scene.enter_terminal(&ctx);

    assert_eq!(scene.phase, GamePhase::Terminal);
    assert_eq!(scene.score, score);
    assert!(scene.physics.is_paused());
}

#[test]
fn joystick_overrides_keyboard_for_horizontal_movement() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);

    ctx.input.set_action(InputAction::MoveRight, true);
    ctx.input.push_move_vector(-100.0, 0.0);
    advance(&mut scene, &mut ctx, 1);
    assert_eq!(player_body(&scene).velocity.x, -scene.constants.move_speed);
    assert_eq!(scene.player_animator.current(), Some("left"));

    ctx.input.push_move_stop();
    advance(&mut scene, &mut ctx, 1);
    assert_eq!(player_body(&scene).velocity.x, scene.constants.move_speed);
    assert_eq!(scene.player_animator.current(), Some("right"));

    ctx.input.set_action(InputAction::MoveRight, false);
    advance(&mut scene, &mut ctx, 1);
    assert_eq!(player_body(&scene).velocity.x, 0.0);
    assert_eq!(scene.player_animator.current(), Some("turn"));
}

#[test]
fn facing_tie_break_order_is_joystick_then_left_then_right() {
    assert_eq!(resolve_facing(-0.4, false, true), Facing::Left);
    assert_eq!(resolve_facing(0.4, true, false), Facing::Right);
    assert_eq!(resolve_facing(0.0, true, true), Facing::Left);
    assert_eq!(resolve_facing(0.0, false, true), Facing::Right);
    assert_eq!(resolve_facing(0.0, false, false), Facing::Idle);
}

#[test]
fn hazard_spawn_span_picks_the_opposite_half() {
    assert_eq!(hazard_spawn_span(100.0, 1024.0), (512.0, 1024.0));
    assert_eq!(hazard_spawn_span(900.0, 1024.0), (0.0, 512.0));
    // exactly on the midpoint counts as the right half
    assert_eq!(hazard_spawn_span(512.0, 1024.0), (0.0, 512.0));
}

#[test]
fn grounded_jump_applies_the_derived_jump_velocity() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    settle_player(&mut scene, &mut ctx);

    ctx.input.push_jump();
    advance(&mut scene, &mut ctx, 1);

    assert!(player_body(&scene).velocity.y < scene.constants.jump_velocity * 0.5);
}

#[test]
fn held_up_key_jumps_without_a_latch() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    settle_player(&mut scene, &mut ctx);

    ctx.input.set_action(InputAction::Jump, true);
    advance(&mut scene, &mut ctx, 1);

    assert!(player_body(&scene).velocity.y < scene.constants.jump_velocity * 0.5);
}

#[test]
fn airborne_jump_latch_does_not_fire_on_a_later_landing() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    settle_player(&mut scene, &mut ctx);

    // lift the player off the ground; contact flags refresh on the next step
    let lifted = {
        let position = player_body(&scene).position;
        Vec2 {
            x: position.x,
            y: position.y - 200.0,
        }
    };
    teleport_player_to(&mut scene, lifted);
    advance(&mut scene, &mut ctx, 1);
    assert!(!player_body(&scene).grounded());

    // request the jump while airborne
    ctx.input.push_jump();
    advance(&mut scene, &mut ctx, 1);
    assert!(!ctx.input.jump_requested(), "latch cleared after one frame");

    // fall back down; the stale request must never fire
    let mut min_velocity_y = f32::MAX;
    for _ in 0..600 {
        advance(&mut scene, &mut ctx, 1);
        let body = player_body(&scene);
        min_velocity_y = min_velocity_y.min(body.velocity.y);
        if body.grounded() && body.velocity.y.abs() < 1.0 {
            break;
        }
    }
    assert!(player_body(&scene).grounded());
    assert!(
        min_velocity_y > scene.constants.jump_velocity * 0.5,
        "jump fired from a stale latch (min velocity {min_velocity_y})"
    );
}

#[test]
fn resize_preserves_score_and_active_set() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    for index in 0..3 {
        collect_one(&mut scene, &mut ctx, index);
    }
    assert_eq!(scene.score, 30);

    ctx.viewport = ViewportSize::new(800.0, 600.0);
    scene.resize(&mut ctx);

    assert_eq!(scene.score, 30);
    assert_eq!(scene.active_collectible_count(), COLLECTIBLE_COUNT - 3);
    assert!(scene.hazards.is_empty());

    // geometry followed the viewport
    let platform = scene.physics.body(scene.platforms[0]).expect("platform");
    assert!((platform.position.x - 400.0).abs() < 0.001);
    assert!((platform.position.y - 709.0 / 768.0 * 600.0).abs() < 0.001);
    let label = ctx
        .labels
        .label(scene.score_label.expect("score label"))
        .expect("label");
    assert!((label.position.x - 12.5).abs() < 0.001);

    // derived constants followed too
    let expected = derive_physics_constants(ctx.feel, ctx.viewport);
    assert_eq!(scene.constants, expected);
    assert_eq!(scene.physics.gravity_y(), expected.gravity);
}

#[test]
fn resize_is_idempotent_for_the_same_viewport() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);

    ctx.viewport = ViewportSize::new(800.0, 600.0);
    scene.resize(&mut ctx);
    let platform_after_first = scene
        .physics
        .body(scene.platforms[0])
        .expect("platform")
        .position;
    let player_after_first = player_body(&scene).position;
    let count_after_first = scene.physics.body_count();

    scene.resize(&mut ctx);

    let platform_after_second = scene
        .physics
        .body(scene.platforms[0])
        .expect("platform")
        .position;
    assert_eq!(platform_after_first, platform_after_second);
    assert_eq!(player_body(&scene).position, player_after_first);
    assert_eq!(scene.physics.body_count(), count_after_first);
}

#[test]
fn deactivate_releases_every_entity_and_label() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    collect_full_wave(&mut scene, &mut ctx, false);

    scene.deactivate(&mut ctx);

    assert_eq!(scene.physics.body_count(), 0);
    assert!(scene.collectibles.is_empty());
    assert!(scene.hazards.is_empty());
    assert!(scene.player.is_none());
    assert!(scene.score_label.is_none());
    assert!(ctx.labels.is_empty());
}

#[test]
fn reactivation_after_deactivate_starts_from_scratch() {
    let mut ctx = test_context();
    let mut scene = activated_scene(&mut ctx);
    collect_full_wave(&mut scene, &mut ctx, false);
    teleport_player_to(&mut scene, Vec2 { x: 500.0, y: 200.0 });
    spawn_hazard_on_player(&mut scene);
    advance(&mut scene, &mut ctx, 1);
    assert_eq!(scene.phase, GamePhase::Terminal);

    scene.deactivate(&mut ctx);
    scene.activate(&mut ctx);

    assert_eq!(scene.phase, GamePhase::Active);
    assert_eq!(scene.score, 0);
    assert_eq!(scene.active_collectible_count(), COLLECTIBLE_COUNT);
    assert!(scene.hazards.is_empty());
    assert!(!scene.physics.is_paused());
    assert!(player_body(&scene).tint.is_none());
}

#[test]
fn full_session_cycles_with_fresh_game_state() {
    let mut app = GameApp::new(GameConfig::default()).expect("stock config");
    let events = app.subscribe();

    app.frame();
    assert_eq!(app.active_scene(), Some(SceneKey::Boot));

    app.push_load_progress(1.0);
    app.frame();
    assert_eq!(app.active_scene(), Some(SceneKey::MainMenu));

    app.advance_scene();
    app.frame();
    assert_eq!(app.active_scene(), Some(SceneKey::Game));
    {
        let scene = app.machine_mut().game_mut();
        assert_eq!(scene.score, 0);
        assert_eq!(scene.active_collectible_count(), COLLECTIBLE_COUNT);
        assert!(scene.hazards.is_empty());
    }

    for index in 0..COLLECTIBLE_COUNT {
        let position = collectible_position(app.machine_mut().game_mut(), index);
        teleport_player_to(app.machine_mut().game_mut(), position);
        app.frame();
    }
    {
        let scene = app.machine_mut().game_mut();
        assert_eq!(scene.score, 120);
        assert_eq!(scene.hazards.len(), 1);
        assert_eq!(scene.active_collectible_count(), COLLECTIBLE_COUNT);
        teleport_player_to(scene, Vec2 { x: 500.0, y: 200.0 });
        spawn_hazard_on_player(scene);
    }

    app.frame();
    app.frame();
    assert_eq!(app.active_scene(), Some(SceneKey::GameOver));

    app.advance_scene();
    app.frame();
    assert_eq!(app.active_scene(), Some(SceneKey::MainMenu));

    app.advance_scene();
    app.frame();
    assert_eq!(app.active_scene(), Some(SceneKey::Game));
    {
        let scene = app.machine_mut().game_mut();
        assert_eq!(scene.score, 0, "score does not carry over a restart");
        assert_eq!(scene.active_collectible_count(), COLLECTIBLE_COUNT);
        assert!(scene.hazards.is_empty());
    }

    let received: Vec<_> = std::iter::from_fn(|| events.try_recv().ok()).collect();
    let keys: Vec<SceneKey> = received.iter().map(|event| event.scene).collect();
    assert_eq!(
        keys,
        vec![
            SceneKey::Boot,
            SceneKey::MainMenu,
            SceneKey::Game,
            SceneKey::GameOver,
            SceneKey::MainMenu,
            SceneKey::Game,
        ]
    );
    assert_eq!(received[1].advance_label(), "Start");
    assert!(!received[2].shows_advance_control());
    assert_eq!(received[3].advance_label(), "Restart");
    assert_eq!(received[4].advance_label(), "Restart");
}
