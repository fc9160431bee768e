pub(crate) struct GameScene {
    physics: PhysicsWorld,
    rng: Pcg32,
    phase: GamePhase,
    score: u32,
    constants: PhysicsConstants,
    player: Option<BodyId>,
    player_animator: Animator,
    platforms: Vec<BodyId>,
    collectibles: Vec<Collectible>,
    hazards: Vec<BodyId>,
    score_label: Option<LabelId>,
    laid_out_viewport: Option<ViewportSize>,
}

impl GameScene {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            physics: PhysicsWorld::new(
                WorldBounds::new(1024.0, 768.0).expect("stock world bounds are valid"),
            ),
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Active,
            score: 0,
            constants: PhysicsConstants::default(),
            player: None,
            player_animator: Animator::default(),
            platforms: Vec::new(),
            collectibles: Vec::new(),
            hazards: Vec::new(),
            score_label: None,
            laid_out_viewport: None,
        }
    }

    fn build_level(&mut self, ctx: &mut AppContext) {
        let placements = layout(ctx.design, ctx.viewport);
        self.constants = derive_physics_constants(ctx.feel, ctx.viewport);

        let bounds = WorldBounds::new(ctx.viewport.width, ctx.viewport.height)
            .expect("viewport is validated before layout");
        self.physics = PhysicsWorld::new(bounds);
        self.physics.set_gravity_y(self.constants.gravity);

        self.platforms = placements
            .platforms
            .iter()
            .map(|platform| {
                self.physics
                    .create_static_body(platform.position, platform.size)
            })
            .collect();

        let player = self
            .physics
            .create_dynamic_body(placements.player_spawn, placements.player_size);
        if let Some(body) = self.physics.body_mut(player) {
            body.bounce = Vec2 {
                x: PLAYER_BOUNCE,
                y: PLAYER_BOUNCE,
            };
            body.collide_world_bounds = true;
        }
        self.player = Some(player);
        self.player_animator = Animator::default();

        self.collectibles = Vec::with_capacity(COLLECTIBLE_COUNT);
        for (anchor, position) in collectible_design_anchors()
            .into_iter()
            .zip(placements.collectible_row)
        {
            let bounce_y = self
                .rng
                .random_range(COLLECTIBLE_BOUNCE_MIN..=COLLECTIBLE_BOUNCE_MAX);
            let body = self
                .physics
                .create_dynamic_body(position, placements.collectible_size);
            if let Some(collectible) = self.physics.body_mut(body) {
                collectible.bounce = Vec2 { x: 0.0, y: bounce_y };
                collectible.collide_world_bounds = true;
            }
            self.collectibles.push(Collectible {
                body,
                design_anchor: anchor,
            });
        }

        self.hazards = Vec::new();
        self.score_label = Some(ctx.labels.create(
            placements.score_label_position,
            "Score: 0",
            placements.score_label_font_px,
        ));
        self.laid_out_viewport = Some(ctx.viewport);
    }

    fn refresh_score_label(&mut self, ctx: &mut AppContext) {
        if let Some(label) = self.score_label {
            ctx.labels.set_text(label, format!("Score: {}", self.score));
        }
    }

    fn active_collectible_count(&self) -> usize {
        self.collectibles
            .iter()
            .filter(|collectible| {
                self.physics
                    .body(collectible.body)
                    .is_some_and(|body| body.active)
            })
            .count()
    }

    fn collect(&mut self, ctx: &mut AppContext, body_id: BodyId) {
        let Some(collectible) = self
            .collectibles
            .iter()
            .find(|collectible| collectible.body == body_id)
            .copied()
        else {
            return;
        };
        let Some(body) = self.physics.body_mut(collectible.body) else {
            return;
        };
        if !body.active {
            return;
        }
        body.active = false;
        self.score = self.score.saturating_add(SCORE_PER_COLLECTIBLE);
        self.refresh_score_label(ctx);
        debug!(score = self.score, "collectible_picked_up");

        if self.active_collectible_count() == 0 {
            self.reactivate_collectibles(ctx);
            self.spawn_hazard(ctx);
        }
    }

    fn reactivate_collectibles(&mut self, ctx: &AppContext) {
        for collectible in &self.collectibles {
            let position = scale_position(ctx.design, ctx.viewport, collectible.design_anchor);
            if let Some(body) = self.physics.body_mut(collectible.body) {
                body.active = true;
                body.position = position;
                body.velocity = Vec2::default();
            }
        }
    }

    /// Spawns one hazard on the half of the playfield opposite the player,
    /// drifting down slowly with full bounce against the world bounds.
    fn spawn_hazard(&mut self, ctx: &AppContext) {
        let Some(player_x) = self
            .player
            .and_then(|id| self.physics.body(id))
            .map(|body| body.position.x)
        else {
            return;
        };
        let bounds = self.physics.bounds();
        let (min_x, max_x) = hazard_spawn_span(player_x, bounds.width);
        let placements = layout(ctx.design, ctx.viewport);
        let scale = uniform_scale(ctx.design, ctx.viewport);
        let spawn_x = self.rng.random_range(min_x..=max_x);
        let velocity_x = self
            .rng
            .random_range(-HAZARD_SPEED_RANGE..=HAZARD_SPEED_RANGE)
            * scale;

        let hazard = self.physics.create_dynamic_body(
            Vec2 {
                x: spawn_x,
                y: placements.hazard_spawn_y,
            },
            placements.hazard_size,
        );
        if let Some(body) = self.physics.body_mut(hazard) {
            body.velocity = Vec2 {
                x: velocity_x,
                y: HAZARD_DRIFT_SPEED * scale,
            };
            body.bounce = Vec2 {
                x: HAZARD_BOUNCE,
                y: HAZARD_BOUNCE,
            };
            body.collide_world_bounds = true;
            body.allow_gravity = false;
        }
        self.hazards.push(hazard);
        info!(hazard_count = self.hazards.len(), "hazard_spawned");
    }

    /// First hazard contact only: pause the world, flip the one-way
    /// terminal flag and freeze the player with the hit visual.
    fn enter_terminal(&mut self, ctx: &AppContext) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = GamePhase::Terminal;
        self.physics.pause();
        if let Some(body) = self.player.and_then(|id| self.physics.body_mut(id)) {
            body.tint = Some(HIT_TINT);
        }
        self.player_animator.play(ANIM_TURN, &ctx.anims);
        info!(score = self.score, "player_hit_hazard");
    }

    fn resolve_player_velocity(&mut self, ctx: &AppContext) {
        let joystick_x = ctx.input.joystick().x;
        let left_down = ctx.input.is_down(InputAction::MoveLeft);
        let right_down = ctx.input.is_down(InputAction::MoveRight);
        let jump_down = ctx.input.is_down(InputAction::Jump);
        let jump_latched = ctx.input.jump_requested();
        let move_speed = self.constants.move_speed;
        let jump_velocity = self.constants.jump_velocity;

        let facing = resolve_facing(joystick_x, left_down, right_down);
        let Some(body) = self.player.and_then(|id| self.physics.body_mut(id)) else {
            return;
        };
        body.velocity.x = match facing {
            Facing::Left => -move_speed,
            Facing::Right => move_speed,
            Facing::Idle => 0.0,
        };
        if body.grounded() && (jump_latched || jump_down) {
            body.velocity.y = jump_velocity;
        }
        self.player_animator.play(facing.animation_name(), &ctx.anims);
    }

    /// Re-derives placements and constants for the current viewport and
    /// repositions existing entities; never allocates new ones.
    fn apply_layout(&mut self, ctx: &mut AppContext) {
        let placements = layout(ctx.design, ctx.viewport);
        self.constants = derive_physics_constants(ctx.feel, ctx.viewport);
        match WorldBounds::new(ctx.viewport.width, ctx.viewport.height) {
            Ok(bounds) => self.physics.set_bounds(bounds),
            Err(error) => {
                warn!(error = %error, "layout_bounds_rejected");
                return;
            }
        }
        self.physics.set_gravity_y(self.constants.gravity);

        for (body_id, placement) in self.platforms.iter().zip(placements.platforms.iter()) {
            if let Some(body) = self.physics.body_mut(*body_id) {
                body.position = placement.position;
                body.size = placement.size;
            }
        }
        if let Some(label) = self.score_label {
            ctx.labels
                .set_position(label, placements.score_label_position);
            ctx.labels
                .set_font_px(label, placements.score_label_font_px);
        }

        // dynamic bodies keep their relative placement across the resize
        if let Some(previous) = self.laid_out_viewport {
            let ratio = rescale_ratio(previous, ctx.viewport);
            if let Some(body) = self.player.and_then(|id| self.physics.body_mut(id)) {
                body.position.x *= ratio.x;
                body.position.y *= ratio.y;
                body.size = placements.player_size;
            }
            for collectible in &self.collectibles {
                if let Some(body) = self.physics.body_mut(collectible.body) {
                    body.position.x *= ratio.x;
                    body.position.y *= ratio.y;
                    body.size = placements.collectible_size;
                }
            }
            for &hazard in &self.hazards {
                if let Some(body) = self.physics.body_mut(hazard) {
                    body.position.x *= ratio.x;
                    body.position.y *= ratio.y;
                    body.size = placements.hazard_size;
                }
            }
        }
        self.laid_out_viewport = Some(ctx.viewport);
    }

    fn release_level(&mut self, ctx: &mut AppContext) {
        if let Some(label) = self.score_label.take() {
            ctx.labels.remove(label);
        }
        self.physics.clear();
        self.platforms.clear();
        self.collectibles.clear();
        self.hazards.clear();
        self.player = None;
        self.laid_out_viewport = None;
    }
}

fn register_player_animations(anims: &mut AnimationRegistry) {
    let defs = [
        AnimationDef::new(ANIM_LEFT, vec![0, 1, 2, 3], 10, true),
        AnimationDef::new(ANIM_TURN, vec![4], 20, false),
        AnimationDef::new(ANIM_RIGHT, vec![5, 6, 7, 8], 10, true),
    ];
    for def in defs {
        anims.register(def.expect("player animation data is static and valid"));
    }
}
