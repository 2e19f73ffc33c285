//! Audio Boundary Module
//!
//! Playback traits the controller drives. The actual audio device and
//! mixing live in the host; the controller only needs two channel shapes:
//! a restartable loop for footsteps and an overlap-safe one-shot for the
//! jump grunt. Which clip a source plays is bound when the host constructs
//! it, never chosen here.

/// A looping playback channel.
///
/// `play` on an already-playing loop is a restart; callers that want
/// gapless audio check `is_playing` first.
pub trait LoopSource {
    fn play(&mut self);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// A fire-and-forget playback channel.
///
/// Each trigger plays to completion independently; triggers may overlap
/// each other and any looping channel.
pub trait OneShotSource {
    fn play_one_shot(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeLoop {
        playing: bool,
        starts: u32,
    }

    impl LoopSource for FakeLoop {
        fn play(&mut self) {
            self.playing = true;
            self.starts += 1;
        }

        fn stop(&mut self) {
            self.playing = false;
        }

        fn is_playing(&self) -> bool {
            self.playing
        }
    }

    #[test]
    fn test_loop_source_state_round_trip() {
        let mut source: Box<dyn LoopSource> = Box::<FakeLoop>::default();
        assert!(!source.is_playing());
        source.play();
        assert!(source.is_playing());
        source.stop();
        assert!(!source.is_playing());
    }
}
