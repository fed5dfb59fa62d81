//! Test utilities & fixtures.
//! Scripted randomness and console helpers shared by the integration tests.

use std::collections::VecDeque;

use rand::RngCore;
use treasure_hunter::console::{Console, Recorder, ScriptedInput};

/// RNG that replays a fixed list of `f64` rolls in `[0, 1)`.
///
/// Each roll is encoded so that `rng.gen::<f64>()` yields it back. Running out
/// of rolls is a test bug and panics.
pub struct ScriptedRng {
    rolls: VecDeque<u64>,
}

impl ScriptedRng {
    pub fn new(rolls: &[f64]) -> Self {
        ScriptedRng {
            rolls: rolls.iter().map(|&r| encode(r)).collect(),
        }
    }

    #[allow(dead_code)]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

fn encode(roll: f64) -> u64 {
    assert!((0.0..1.0).contains(&roll), "roll {} out of range", roll);
    ((roll * (1u64 << 53) as f64) as u64) << 11
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.rolls.pop_front().expect("scripted rolls exhausted")
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[allow(dead_code)]
/// Console fed from `lines` that records everything written to it.
pub fn scripted_console(lines: &[&str]) -> Console<ScriptedInput, Recorder> {
    Console::new(ScriptedInput::new(lines.iter().copied()), Recorder::new())
}
