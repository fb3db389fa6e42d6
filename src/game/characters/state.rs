// Character lifecycle status and one-shot action flags

/// Coarse lifecycle status of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(dead_code)] // Running/Sprinting are reserved; movement speed lives on the body
pub enum MovementStatus {
    #[default]
    Normal,
    Running,
    Sprinting,
    /// Terminal: nothing leaves this status
    Dead,
}

impl MovementStatus {
    pub fn is_dead(&self) -> bool {
        matches!(self, Self::Dead)
    }
}

/// Pending action requests and the steady-state gate
///
/// Attack and throw are edge-triggered: a request sets the flag and the
/// next animation update consumes it. `idle_walk_run` is level-triggered and
/// stays on until a one-shot action takes over the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionFlags {
    pub attacking: bool,
    pub throwing: bool,
    pub idle_walk_run: bool,
}

impl Default for ActionFlags {
    fn default() -> Self {
        Self {
            attacking: false,
            throwing: false,
            idle_walk_run: true,
        }
    }
}

impl ActionFlags {
    /// Request an attack on the next update
    pub fn request_attack(&mut self) {
        self.attacking = true;
        self.idle_walk_run = false;
    }

    /// Request a throw on the next update
    pub fn request_throw(&mut self) {
        self.throwing = true;
        self.idle_walk_run = false;
    }

    /// A transient animation now owns the sprite
    pub fn leave_steady_state(&mut self) {
        self.idle_walk_run = false;
    }

    /// Hand the sprite back to idle/walk/run selection
    pub fn resume_steady_state(&mut self) {
        self.idle_walk_run = true;
    }

    /// Consume a pending attack, returning whether one was pending
    pub fn take_attack(&mut self) -> bool {
        std::mem::take(&mut self.attacking)
    }

    /// Consume a pending throw, returning whether one was pending
    pub fn take_throw(&mut self) -> bool {
        std::mem::take(&mut self.throwing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_flags() {
        let flags = ActionFlags::default();
        assert!(!flags.attacking);
        assert!(!flags.throwing);
        assert!(flags.idle_walk_run);
    }

    #[test]
    fn test_requests_leave_steady_state() {
        let mut flags = ActionFlags::default();
        flags.request_attack();
        assert!(flags.attacking);
        assert!(!flags.idle_walk_run);

        let mut flags = ActionFlags::default();
        flags.request_throw();
        assert!(flags.throwing);
        assert!(!flags.idle_walk_run);
    }

    #[test]
    fn test_repeated_request_is_idempotent() {
        let mut flags = ActionFlags::default();
        flags.request_attack();
        flags.request_attack();
        assert!(flags.take_attack());
        assert!(!flags.take_attack());
    }

    #[test]
    fn test_take_clears_only_its_flag() {
        let mut flags = ActionFlags::default();
        flags.request_attack();
        flags.request_throw();

        assert!(flags.take_attack());
        assert!(!flags.attacking);
        assert!(flags.throwing);
    }

    #[test]
    fn test_status_default_and_dead() {
        assert_eq!(MovementStatus::default(), MovementStatus::Normal);
        assert!(MovementStatus::Dead.is_dead());
        assert!(!MovementStatus::Running.is_dead());
    }
}
