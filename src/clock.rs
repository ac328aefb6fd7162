use std::time::Duration;

/// Most game ticks run for one frame; anything left over is dropped.
pub const MAX_CATCH_UP: u32 = 5;

/// Turns wall-clock time into whole game ticks. The tick length is passed in
/// on every call, so a game that speeds itself up mid-frame gets the new
/// cadence from the very next tick.
///
/// At most `MAX_CATCH_UP` ticks run per frame, so a game stops getting faster
/// once its delay drops below `frame / MAX_CATCH_UP` (about 3 ms at 16 ms
/// frames).
#[derive(Clone, Debug, Default)]
pub struct FixedStep {
    accumulated: Duration,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, elapsed: Duration) {
        self.accumulated = self.accumulated.saturating_add(elapsed);
    }

    /// Consumes one tick of `delay` if enough time has built up.
    pub fn try_step(&mut self, delay: Duration) -> bool {
        if delay.is_zero() || self.accumulated < delay {
            return false;
        }
        self.accumulated -= delay;
        true
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> Duration {
        self.accumulated
    }
}

/// Runs `step` for every whole tick in the accumulator, reading the delay
/// before each tick. Returns the number of ticks run.
pub fn run_steps<G>(
    clock: &mut FixedStep,
    game: &mut G,
    delay: impl Fn(&G) -> Duration,
    step: impl Fn(&mut G),
) -> u32 {
    let mut steps = 0;
    while steps < MAX_CATCH_UP && clock.try_step(delay(&*game)) {
        step(&mut *game);
        steps += 1;
    }
    if steps == MAX_CATCH_UP {
        clock.reset();
    }
    steps
}
