impl Scene for GameScene {
    fn activate(&mut self, ctx: &mut AppContext) {
        register_player_animations(&mut ctx.anims);
        self.phase = GamePhase::Active;
        self.score = 0;
        ctx.input.clear_transient();
        self.build_level(ctx);
        info!(
            scene = SceneKey::Game.name(),
            platforms = self.platforms.len(),
            collectibles = self.collectibles.len(),
            "scene_activated"
        );
    }

    fn tick(&mut self, fixed_dt_seconds: f32, ctx: &mut AppContext) -> SceneCommand {
        // Once terminal, the scene only asks to leave; the request is
        // idempotent on the machine side so a redundant one is harmless.
        if self.phase.is_terminal() {
            return SceneCommand::SwitchTo(SceneKey::GameOver);
        }

        self.resolve_player_velocity(ctx);
        self.physics.step(fixed_dt_seconds);

        let Some(player) = self.player else {
            return SceneCommand::None;
        };
        let collectible_bodies: Vec<BodyId> = self
            .collectibles
            .iter()
            .map(|collectible| collectible.body)
            .collect();

        self.physics.collide(&[player], &self.platforms);
        self.physics.collide(&collectible_bodies, &self.platforms);
        self.physics.collide(&self.hazards, &self.platforms);

        for (_, collectible_body) in self.physics.overlap(&[player], &collectible_bodies) {
            self.collect(ctx, collectible_body);
        }

        let hazard_contacts = self.physics.collide(&[player], &self.hazards);
        if !hazard_contacts.is_empty() {
            self.enter_terminal(ctx);
        }

        SceneCommand::None
    }

    fn resize(&mut self, ctx: &mut AppContext) {
        self.apply_layout(ctx);
        debug!(
            width = ctx.viewport.width,
            height = ctx.viewport.height,
            "game_layout_recomputed"
        );
    }

    fn deactivate(&mut self, ctx: &mut AppContext) {
        info!(
            scene = SceneKey::Game.name(),
            score = self.score,
            "scene_deactivated"
        );
        self.release_level(ctx);
    }
}
