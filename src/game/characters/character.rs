// Character entity: animation state machine, vitals and death

use log::{debug, info, warn};

use super::animation::{self, CharacterAnimations, ClipKind, Selection};
use super::state::{ActionFlags, MovementStatus};
use super::stats::CharacterStats;
use super::vitals::{HealthChange, Vitals};
#[cfg(test)]
use crate::engine::assets::FlipbookHandle;
use crate::engine::physics::MovementBody;
use crate::engine::sprite::SpriteComponent;
use crate::engine::timer::TimerSlot;
use crate::game::damage::{DamageRecord, DamageType, Damageable, InstigatorId};

/// Unique identifier for a character
pub type CharacterId = u32;

/// What the character's timer slot can be waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterTimer {
    /// A transient clip has had its time; go back to idle/walk/run
    RevertToSteadyState,
    /// The death clip has played; hold the stay-dead clip
    SettleDeath,
}

/// A player-controlled ninja
///
/// The character owns its movement body and sprite rather than inheriting
/// them. Each tick it reads the body, decides which clip the sprite should
/// show, and uses a single timer slot to return from one-shot clips.
#[derive(Debug)]
pub struct Character<B> {
    /// Unique identifier
    pub id: CharacterId,
    /// Character name (for display and logs)
    pub name: String,

    body: B,
    sprite: SpriteComponent,
    animations: CharacterAnimations,
    stats: CharacterStats,

    flags: ActionFlags,
    status: MovementStatus,
    vitals: Vitals,

    /// Single deferred event; arming replaces whatever was pending
    timer: TimerSlot<CharacterTimer>,

    /// Horizontal input held by the controller, in [-1, 1]
    move_axis: f32,

    last_hit: Option<DamageRecord>,
}

impl<B: MovementBody> Character<B> {
    pub fn new(
        id: CharacterId,
        name: &str,
        stats: CharacterStats,
        animations: CharacterAnimations,
        body: B,
    ) -> Self {
        debug!("Creating character {} ({})", id, name);
        Self {
            id,
            name: name.to_string(),
            body,
            sprite: SpriteComponent::new(),
            animations,
            vitals: Vitals::from_stats(&stats),
            stats,
            flags: ActionFlags::default(),
            status: MovementStatus::default(),
            timer: TimerSlot::new(),
            move_axis: 0.0,
            last_hit: None,
        }
    }

    // ------------------------------------------------------------------
    // Requests from input

    /// Queue an attack for the next update
    pub fn request_attack(&mut self) {
        if self.ignore_request("attack") {
            return;
        }
        self.flags.request_attack();
    }

    /// Queue a throw for the next update
    pub fn request_throw(&mut self) {
        if self.ignore_request("throw") {
            return;
        }
        self.flags.request_throw();
    }

    /// Jump: the body decides whether it can actually leave the ground, the
    /// jump clip is shown either way.
    pub fn request_jump(&mut self) {
        if self.ignore_request("jump") {
            return;
        }

        let jumped = self.body.jump();
        debug!("{} jump requested (body jumped: {})", self.name, jumped);

        self.flags.leave_steady_state();
        self.sprite.set_flipbook(self.animations.clip(ClipKind::Jump));
        self.arm_reversion();
    }

    /// Jump input released
    pub fn stop_jumping(&mut self) {
        if self.ignore_request("stop jumping") {
            return;
        }
        self.body.stop_jumping();
    }

    /// Set the held horizontal input
    pub fn set_move_axis(&mut self, axis: f32) {
        self.move_axis = if self.is_alive() {
            axis.clamp(-1.0, 1.0)
        } else {
            0.0
        };
    }

    fn ignore_request(&self, what: &str) -> bool {
        if self.status.is_dead() {
            warn!("{} is dead, ignoring {}", self.name, what);
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------
    // Per-tick update

    /// Run one simulation tick of character logic.
    ///
    /// Movement, animation and facing are frozen once dead; the timer slot
    /// keeps running so the death clip can settle.
    pub fn tick(&mut self, dt: f32) {
        if self.is_alive() {
            self.body.add_movement_input(self.move_axis);
            self.update_character();
        }
        self.advance_timers(dt);
    }

    /// Pick this tick's clip and face the direction of travel
    pub fn update_character(&mut self) {
        if self.status.is_dead() {
            return;
        }
        self.update_animation();
        self.update_facing();
    }

    /// At most one branch runs: attack, else throw, else idle/walk/run
    fn update_animation(&mut self) {
        let selection = animation::select(
            &self.flags,
            self.body.is_airborne(),
            self.body.planar_velocity(),
        );

        match selection {
            Selection::Attack(clip) => {
                // Consume first so a second update cannot fire it again
                self.flags.take_attack();
                self.switch_clip(clip);
                self.arm_reversion();
            }
            Selection::Throw(clip) => {
                self.flags.take_throw();
                self.decrease_stamina();
                self.switch_clip(clip);
                self.arm_reversion();
            }
            Selection::SteadyState(clip) => self.switch_clip(clip),
            Selection::Hold => {}
        }
    }

    /// Standing still keeps the last facing
    fn update_facing(&mut self) {
        let travel = self.body.planar_velocity().x;
        let face_left = if travel < 0.0 {
            true
        } else if travel > 0.0 {
            false
        } else {
            return;
        };

        if face_left != self.sprite.is_flipped_horizontal() {
            debug!(
                "{} turned {}",
                self.name,
                if face_left { "left" } else { "right" }
            );
            self.sprite.set_flip_horizontal(face_left);
        }
    }

    /// Switch the sprite only when the clip differs, so loops keep playing
    fn switch_clip(&mut self, clip: ClipKind) {
        let desired = self.animations.clip(clip);
        if self.sprite.flipbook() != desired {
            if desired.is_none() {
                warn!("{} has no flipbook for {:?}", self.name, clip);
            }
            debug!("{} clip -> {:?}", self.name, clip);
            self.sprite.set_flipbook(desired);
        }
    }

    // ------------------------------------------------------------------
    // Timer slot

    fn arm_reversion(&mut self) {
        debug!(
            "{} reverting in {}s",
            self.name, self.stats.action_reversion_delay
        );
        self.timer.arm(
            CharacterTimer::RevertToSteadyState,
            self.stats.action_reversion_delay,
        );
    }

    /// Advance the timer slot and run whatever fires
    pub fn advance_timers(&mut self, dt: f32) {
        let fired = self.timer.advance(dt);
        if let Some(event) = fired {
            debug!("{} timer fired: {:?}", self.name, event);
        }

        match fired {
            Some(CharacterTimer::RevertToSteadyState) => {
                if self.is_alive() {
                    self.run_steady_state_reversion();
                }
            }
            Some(CharacterTimer::SettleDeath) => self.switch_clip(ClipKind::Dead),
            None => {}
        }
    }

    /// Return to idle/walk/run and pick the clip right away
    pub fn run_steady_state_reversion(&mut self) {
        self.flags.resume_steady_state();
        let clip = animation::steady_state_clip(self.body.planar_velocity());
        self.switch_clip(clip);
    }

    // ------------------------------------------------------------------
    // Vitals

    /// Spend stamina for a throw (no-op at or below the floor)
    pub fn decrease_stamina(&mut self) {
        if !self.vitals.decrease_stamina() {
            debug!("{} is too tired to spend stamina", self.name);
        }
    }

    pub fn increment_coins(&mut self, amount: i32) {
        self.vitals.increment_coins(amount);
    }

    pub fn increment_health(&mut self, amount: f32) {
        self.vitals.increment_health(amount);
    }

    /// Take damage. Health may go negative; reaching `<= 0` kills.
    pub fn decrement_health(
        &mut self,
        amount: f32,
        instigator: Option<InstigatorId>,
        damage_type: DamageType,
    ) {
        self.last_hit = Some(DamageRecord {
            amount,
            instigator,
            damage_type,
        });
        debug!(
            "{} took {} {} damage from {:?}",
            self.name, amount, damage_type.0, instigator
        );

        if self.vitals.decrement_health(amount) == HealthChange::Depleted {
            self.die();
        }
    }

    // ------------------------------------------------------------------
    // Death

    /// Play the death clip, then hold the stay-dead clip. Only the first
    /// call does anything.
    pub fn die(&mut self) {
        if self.status.is_dead() {
            return;
        }

        match self.last_hit {
            Some(hit) => info!(
                "{} died from {} {} damage by {:?} (health {})",
                self.name,
                hit.amount,
                hit.damage_type.0,
                hit.instigator,
                self.vitals.health()
            ),
            None => info!("{} died (health {})", self.name, self.vitals.health()),
        }
        self.switch_clip(ClipKind::Die);
        if let Some(dropped) = self.timer.pending_event() {
            debug!("{} dropping pending {:?}", self.name, dropped);
        }
        self.timer
            .arm(CharacterTimer::SettleDeath, self.stats.death_settle_delay);
        self.status = MovementStatus::Dead;
        self.move_axis = 0.0;
    }

    pub fn is_alive(&self) -> bool {
        !self.status.is_dead()
    }

    // ------------------------------------------------------------------
    // Accessors

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn sprite_mut(&mut self) -> &mut SpriteComponent {
        &mut self.sprite
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }
}

// State inspection for tests
#[cfg(test)]
impl<B: MovementBody> Character<B> {
    pub fn status(&self) -> MovementStatus {
        self.status
    }

    pub fn flags(&self) -> &ActionFlags {
        &self.flags
    }

    pub fn animations(&self) -> &CharacterAnimations {
        &self.animations
    }

    /// The flipbook the sprite is showing
    pub fn current_clip(&self) -> Option<FlipbookHandle> {
        self.sprite.flipbook()
    }

    pub fn sprite(&self) -> &SpriteComponent {
        &self.sprite
    }

    pub fn move_axis(&self) -> f32 {
        self.move_axis
    }

    pub fn last_hit(&self) -> Option<DamageRecord> {
        self.last_hit
    }

    /// The event currently waiting in the timer slot
    pub fn pending_timer(&self) -> Option<CharacterTimer> {
        self.timer.pending_event().copied()
    }
}

impl<B: MovementBody> Damageable for Character<B> {
    fn apply_damage(
        &mut self,
        amount: f32,
        instigator: Option<InstigatorId>,
        damage_type: DamageType,
    ) -> f32 {
        self.decrement_health(amount, instigator, damage_type);
        self.vitals.health()
    }
}
