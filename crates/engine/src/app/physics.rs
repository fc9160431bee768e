use thiserror::Error;

/// Coordinate convention: origin top-left, y grows downward, positive
/// gravity pulls toward the bottom edge. Jump velocities are negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u64);

#[derive(Debug, Default)]
struct BodyIdAllocator {
    next: u64,
}

impl BodyIdAllocator {
    fn allocate(&mut self) -> BodyId {
        let id = BodyId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Static,
    Dynamic,
}

/// Contact flags from the most recent step + collide pass.
/// `down` means a surface below the body, so `down` == grounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touching {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    kind: BodyKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub bounce: Vec2,
    pub allow_gravity: bool,
    pub collide_world_bounds: bool,
    pub active: bool,
    /// Render hint for the host (0xRRGGBB); physics never reads it.
    pub tint: Option<u32>,
    touching: Touching,
}

impl Body {
    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn is_static(&self) -> bool {
        self.kind == BodyKind::Static
    }

    pub fn touching(&self) -> Touching {
        self.touching
    }

    pub fn grounded(&self) -> bool {
        self.touching.down
    }

    fn half_extents(&self) -> Vec2 {
        Vec2 {
            x: self.size.x * 0.5,
            y: self.size.y * 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WorldBoundsError {
    #[error("world bounds must be finite and positive, got {width}x{height}")]
    Invalid { width: f32, height: f32 },
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Result<Self, WorldBoundsError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(WorldBoundsError::Invalid { width, height });
        }
        Ok(Self { width, height })
    }
}

/// One solid touching pair reported by a `collide` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: BodyId,
    pub b: BodyId,
}

/// Flat-Vec arcade physics world. Sized for one small level, not a
/// general engine: no broad phase, AABB bodies only.
#[derive(Debug)]
pub struct PhysicsWorld {
    allocator: BodyIdAllocator,
    bodies: Vec<Body>,
    bounds: WorldBounds,
    gravity_y: f32,
    paused: bool,
}

impl PhysicsWorld {
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            allocator: BodyIdAllocator::default(),
            bodies: Vec::new(),
            bounds,
            gravity_y: 0.0,
            paused: false,
        }
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: WorldBounds) {
        self.bounds = bounds;
    }

    pub fn gravity_y(&self) -> f32 {
        self.gravity_y
    }

    pub fn set_gravity_y(&mut self, gravity_y: f32) {
        self.gravity_y = gravity_y;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn create_static_body(&mut self, position: Vec2, size: Vec2) -> BodyId {
        self.create_body(BodyKind::Static, position, size)
    }

    pub fn create_dynamic_body(&mut self, position: Vec2, size: Vec2) -> BodyId {
        self.create_body(BodyKind::Dynamic, position, size)
    }

    fn create_body(&mut self, kind: BodyKind, position: Vec2, size: Vec2) -> BodyId {
        let id = self.allocator.allocate();
        self.bodies.push(Body {
            id,
            kind,
            position,
            velocity: Vec2::default(),
            size,
            bounce: Vec2::default(),
            allow_gravity: kind == BodyKind::Dynamic,
            collide_world_bounds: false,
            active: true,
            tint: None,
            touching: Touching::default(),
        });
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|body| body.id == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Drops every body. Id allocation continues from where it left off so
    /// ids are never reused across clears.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Advances active dynamic bodies by one fixed step. A no-op while
    /// paused. Contact flags are cleared here and re-established by world
    /// bounds and subsequent `collide` calls, so `grounded` always reflects
    /// the most recent completed step.
    pub fn step(&mut self, dt: f32) {
        if self.paused || dt <= 0.0 {
            return;
        }
        let bounds = self.bounds;
        let gravity_y = self.gravity_y;
        for body in &mut self.bodies {
            if body.kind != BodyKind::Dynamic || !body.active {
                continue;
            }
            body.touching = Touching::default();
            if body.allow_gravity {
                body.velocity.y += gravity_y * dt;
            }
            body.position.x += body.velocity.x * dt;
            body.position.y += body.velocity.y * dt;
            if body.collide_world_bounds {
                clamp_to_bounds(body, bounds);
            }
        }
    }

    /// Solid collision between two body sets. Dynamic movers are separated
    /// out of static fixtures along the minimal penetration axis with
    /// bounce applied on that axis; dynamic-vs-dynamic pairs are reported
    /// without separation. One contact per touching pair per call.
    pub fn collide(&mut self, movers: &[BodyId], fixtures: &[BodyId]) -> Vec<Contact> {
        let mut contacts = Vec::new();
        for &mover_id in movers {
            for &fixture_id in fixtures {
                if mover_id == fixture_id {
                    continue;
                }
                let Some(fixture) = self.body(fixture_id) else {
                    continue;
                };
                if !fixture.active {
                    continue;
                }
                let fixture_kind = fixture.kind;
                let fixture_position = fixture.position;
                let fixture_half = fixture.half_extents();
                let Some(mover) = self.body_mut(mover_id) else {
                    continue;
                };
                if !mover.active || mover.kind != BodyKind::Dynamic {
                    continue;
                }
                let Some((px, py)) = aabb_penetration(
                    mover.position,
                    mover.half_extents(),
                    fixture_position,
                    fixture_half,
                ) else {
                    continue;
                };
                if fixture_kind == BodyKind::Static {
                    resolve_against_static(mover, fixture_position, px, py);
                }
                contacts.push(Contact {
                    a: mover_id,
                    b: fixture_id,
                });
            }
        }
        contacts
    }

    /// Non-solid overlap report between two body sets. No state change.
    pub fn overlap(&self, a: &[BodyId], b: &[BodyId]) -> Vec<(BodyId, BodyId)> {
        let mut pairs = Vec::new();
        for &a_id in a {
            for &b_id in b {
                if a_id == b_id {
                    continue;
                }
                let (Some(body_a), Some(body_b)) = (self.body(a_id), self.body(b_id)) else {
                    continue;
                };
                if !body_a.active || !body_b.active {
                    continue;
                }
                if aabb_penetration(
                    body_a.position,
                    body_a.half_extents(),
                    body_b.position,
                    body_b.half_extents(),
                )
                .is_some()
                {
                    pairs.push((a_id, b_id));
                }
            }
        }
        pairs
    }
}

fn aabb_penetration(pa: Vec2, ha: Vec2, pb: Vec2, hb: Vec2) -> Option<(f32, f32)> {
    let px = (ha.x + hb.x) - (pa.x - pb.x).abs();
    let py = (ha.y + hb.y) - (pa.y - pb.y).abs();
    if px <= 0.0 || py <= 0.0 {
        return None;
    }
    Some((px, py))
}

fn resolve_against_static(mover: &mut Body, fixture_position: Vec2, px: f32, py: f32) {
    if px < py {
        if mover.position.x >= fixture_position.x {
            mover.position.x += px;
            mover.touching.left = true;
            if mover.velocity.x < 0.0 {
                mover.velocity.x = -mover.velocity.x * mover.bounce.x;
            }
        } else {
            mover.position.x -= px;
            mover.touching.right = true;
            if mover.velocity.x > 0.0 {
                mover.velocity.x = -mover.velocity.x * mover.bounce.x;
            }
        }
    } else if mover.position.y >= fixture_position.y {
        mover.position.y += py;
        mover.touching.up = true;
        if mover.velocity.y < 0.0 {
            mover.velocity.y = -mover.velocity.y * mover.bounce.y;
        }
    } else {
        mover.position.y -= py;
        mover.touching.down = true;
        if mover.velocity.y > 0.0 {
            mover.velocity.y = -mover.velocity.y * mover.bounce.y;
        }
    }
}

fn clamp_to_bounds(body: &mut Body, bounds: WorldBounds) {
    let half = body.half_extents();
    if body.position.x - half.x < 0.0 {
        body.position.x = half.x;
        body.touching.left = true;
        if body.velocity.x < 0.0 {
            body.velocity.x = -body.velocity.x * body.bounce.x;
        }
    } else if body.position.x + half.x > bounds.width {
        body.position.x = bounds.width - half.x;
        body.touching.right = true;
        if body.velocity.x > 0.0 {
            body.velocity.x = -body.velocity.x * body.bounce.x;
        }
    }
    if body.position.y - half.y < 0.0 {
        body.position.y = half.y;
        body.touching.up = true;
        if body.velocity.y < 0.0 {
            body.velocity.y = -body.velocity.y * body.bounce.y;
        }
    } else if body.position.y + half.y > bounds.height {
        body.position.y = bounds.height - half.y;
        body.touching.down = true;
        if body.velocity.y > 0.0 {
            body.velocity.y = -body.velocity.y * body.bounce.y;
        }
    }
}
