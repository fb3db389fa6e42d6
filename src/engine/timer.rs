// Single-slot deferred events
//
// A `TimerSlot` holds at most one pending event. Arming it again replaces
// whatever was pending, so a slot can never queue up more than one callback.
// Time is simulation time: the slot only moves forward when `advance` is
// called from the fixed-timestep update.

/// An event waiting for its deadline
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scheduled<E> {
    event: E,
    remaining: f32,
}

/// One pending event with replace-on-arm semantics
#[derive(Debug, Clone)]
pub struct TimerSlot<E> {
    pending: Option<Scheduled<E>>,
}

impl<E> Default for TimerSlot<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerSlot<E> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `event` to fire after `duration` seconds, replacing any
    /// event that was already pending in this slot.
    pub fn arm(&mut self, event: E, duration: f32) {
        self.pending = Some(Scheduled {
            event,
            remaining: duration.max(0.0),
        });
    }

    /// Advance simulation time and return the event if its deadline passed.
    ///
    /// An event fires at most once; the slot is empty afterwards.
    pub fn advance(&mut self, dt: f32) -> Option<E> {
        let scheduled = self.pending.as_mut()?;
        scheduled.remaining -= dt;

        if scheduled.remaining <= 0.0 {
            self.pending.take().map(|s| s.event)
        } else {
            None
        }
    }

    /// The event currently waiting, if any
    pub fn pending_event(&self) -> Option<&E> {
        self.pending.as_ref().map(|s| &s.event)
    }
}
