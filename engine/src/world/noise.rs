//! Shared noise accumulator module
//!
//! Sound the player makes is pooled here and read by whatever perception
//! system cares (the owner's hearing, in this game). The registry is a
//! plain additive accumulator: emitters add magnitudes, the consumer drains
//! the pool on its own schedule. Handles are shared by `Arc`, never through
//! a global.

use std::sync::{Arc, Mutex, PoisonError};

/// Accumulator of emitted noise magnitude.
///
/// Additions from concurrent emitters are never lost; the level grows
/// monotonically between drains. Reset policy belongs to the consumer,
/// via [`NoiseRegistry::drain`].
#[derive(Debug, Default)]
pub struct NoiseRegistry {
    level: Mutex<f32>,
}

impl NoiseRegistry {
    /// Creates a silent registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a silent registry already wrapped for sharing.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Adds `magnitude` to the pooled noise level.
    pub fn add(&self, magnitude: f32) {
        // A poisoned lock only means another emitter panicked mid-add;
        // the f32 inside is still a valid level, so keep accumulating.
        let mut level = self.level.lock().unwrap_or_else(PoisonError::into_inner);
        *level += magnitude;
    }

    /// Current pooled level, without consuming it.
    pub fn level(&self) -> f32 {
        *self.level.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes the pooled level, resetting it to silence.
    pub fn drain(&self) -> f32 {
        let mut level = self.level.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_starts_silent() {
        let registry = NoiseRegistry::new();
        assert_eq!(registry.level(), 0.0);
    }

    #[test]
    fn test_add_accumulates() {
        let registry = NoiseRegistry::new();
        // Three ticks of footstep noise at 0.1 magnitude, dt = 0.02
        for _ in 0..3 {
            registry.add(0.1 * 0.02);
        }
        assert!((registry.level() - 0.006).abs() < 1e-6);
    }

    #[test]
    fn test_drain_resets() {
        let registry = NoiseRegistry::new();
        registry.add(0.5);
        assert_eq!(registry.drain(), 0.5);
        assert_eq!(registry.level(), 0.0);
        assert_eq!(registry.drain(), 0.0);
    }

    #[test]
    fn test_concurrent_adds_never_lost() {
        let registry = NoiseRegistry::shared();
        let mut handles = Vec::new();

        // 0.25 is exact in binary, so the expected total is exact too
        for _ in 0..4 {
            let emitter = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    emitter.add(0.25);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.level(), 1000.0);
    }
}
