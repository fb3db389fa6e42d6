// Character animation clips and clip selection

use glam::Vec2;

use super::state::ActionFlags;
use crate::engine::assets::{AssetError, FlipbookHandle};
use crate::engine::sprite::{Flipbook, FlipbookLibrary};

/// Every clip a character can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipKind {
    Idle,
    Running,
    Attack,
    JumpAttack,
    Jump,
    ThrowObject,
    ThrowObjectJump,
    Die,
    Dead,
}

impl ClipKind {
    /// Asset path of the standard ninja flipbook for this clip
    pub fn asset_path(&self) -> &'static str {
        match self {
            Self::Idle => "ninja/idle",
            Self::Running => "ninja/run",
            Self::Attack => "ninja/attack",
            Self::JumpAttack => "ninja/jump_attack",
            Self::Jump => "ninja/jump",
            Self::ThrowObject => "ninja/throw",
            Self::ThrowObjectJump => "ninja/jump_throw",
            Self::Die => "ninja/die",
            Self::Dead => "ninja/dead",
        }
    }
}

/// The flipbooks assigned to one character
///
/// Any slot may be unassigned; switching to an unassigned clip clears the
/// sprite instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterAnimations {
    pub idle: Option<FlipbookHandle>,
    pub running: Option<FlipbookHandle>,
    pub attack: Option<FlipbookHandle>,
    pub jump_attack: Option<FlipbookHandle>,
    pub jump: Option<FlipbookHandle>,
    pub throw_object: Option<FlipbookHandle>,
    pub throw_object_jump: Option<FlipbookHandle>,
    pub die: Option<FlipbookHandle>,
    pub dead: Option<FlipbookHandle>,
}

impl CharacterAnimations {
    /// Register the standard ninja flipbooks and assign them
    pub fn standard(library: &mut FlipbookLibrary) -> Result<Self, AssetError> {
        let mut load = |flipbook: Flipbook| library.register(flipbook).map(Some);
        let looping = |kind: ClipKind, frames, fps| Flipbook::looping(kind.asset_path(), frames, fps);
        let one_shot = |kind: ClipKind, frames, fps| Flipbook::one_shot(kind.asset_path(), frames, fps);

        Ok(Self {
            idle: load(looping(ClipKind::Idle, 10, 10.0))?,
            running: load(looping(ClipKind::Running, 10, 15.0))?,
            attack: load(one_shot(ClipKind::Attack, 10, 15.0))?,
            jump_attack: load(one_shot(ClipKind::JumpAttack, 10, 15.0))?,
            jump: load(one_shot(ClipKind::Jump, 10, 15.0))?,
            throw_object: load(one_shot(ClipKind::ThrowObject, 10, 15.0))?,
            throw_object_jump: load(one_shot(ClipKind::ThrowObjectJump, 10, 15.0))?,
            die: load(one_shot(ClipKind::Die, 10, 20.0))?,
            dead: load(looping(ClipKind::Dead, 1, 1.0))?,
        })
    }

    /// Look up the flipbook for a clip
    pub fn clip(&self, kind: ClipKind) -> Option<FlipbookHandle> {
        match kind {
            ClipKind::Idle => self.idle,
            ClipKind::Running => self.running,
            ClipKind::Attack => self.attack,
            ClipKind::JumpAttack => self.jump_attack,
            ClipKind::Jump => self.jump,
            ClipKind::ThrowObject => self.throw_object,
            ClipKind::ThrowObjectJump => self.throw_object_jump,
            ClipKind::Die => self.die,
            ClipKind::Dead => self.dead,
        }
    }
}

/// What one animation update should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Consume the attack request and show this clip
    Attack(ClipKind),
    /// Consume the throw request and show this clip
    Throw(ClipKind),
    /// Show idle or running
    SteadyState(ClipKind),
    /// A transient clip owns the sprite; leave it alone
    Hold,
}

/// Pick at most one branch: attack, then throw, then idle/walk/run
pub fn select(flags: &ActionFlags, airborne: bool, velocity: Vec2) -> Selection {
    if flags.attacking {
        Selection::Attack(if airborne {
            ClipKind::JumpAttack
        } else {
            ClipKind::Attack
        })
    } else if flags.throwing {
        Selection::Throw(if airborne {
            ClipKind::ThrowObjectJump
        } else {
            ClipKind::ThrowObject
        })
    } else if flags.idle_walk_run {
        Selection::SteadyState(steady_state_clip(velocity))
    } else {
        Selection::Hold
    }
}

/// Running whenever there is any planar motion, idle otherwise
pub fn steady_state_clip(velocity: Vec2) -> ClipKind {
    if velocity.length_squared() > 0.0 {
        ClipKind::Running
    } else {
        ClipKind::Idle
    }
}
