//! Bounded wait for a drawing surface to get a non-zero size.
//!
//! Layout may not have run yet when audio finishes decoding. Instead of
//! observing the element indefinitely the caller polls its size: each
//! `observe` either hands back the extent, asks for another poll after a
//! delay, or gives up once `max_wait_ms` has been spent.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadinessPolicy {
    pub poll_interval_ms: u32,
    pub max_wait_ms: u32,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            poll_interval_ms: 50,
            max_wait_ms: 1000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Ready { width: u32, height: u32 },
    Retry { after_ms: u32 },
    TimedOut,
}

#[derive(Clone, Debug)]
pub struct ReadinessPoll {
    policy: ReadinessPolicy,
    waited_ms: u32,
}

impl ReadinessPoll {
    pub fn new(policy: ReadinessPolicy) -> Self {
        Self { policy, waited_ms: 0 }
    }

    /// Time spent waiting so far.
    pub fn waited_ms(&self) -> u32 {
        self.waited_ms
    }

    /// Feed the latest measured size.
    pub fn observe(&mut self, width: u32, height: u32) -> Readiness {
        if width > 0 && height > 0 {
            return Readiness::Ready { width, height };
        }
        if self.waited_ms >= self.policy.max_wait_ms {
            return Readiness::TimedOut;
        }
        let remaining = self.policy.max_wait_ms - self.waited_ms;
        let after_ms = self.policy.poll_interval_ms.max(1).min(remaining);
        self.waited_ms += after_ms;
        Readiness::Retry { after_ms }
    }
}
