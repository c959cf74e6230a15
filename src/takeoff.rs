/// Motion phases of the scripted takeoff. The transition is one-way: once
/// airborne, the run never drops back to the ground roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    GroundRoll,
    Airborne,
}

/// World-space position in double precision. The animation accumulates
/// hundreds of 0.1 steps, and which tick crosses the liftoff line depends on
/// double rounding. Positions are narrowed to `f32` only at the render
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Ground speed along the runway, per tick.
pub const GROUND_SPEED: f64 = 0.1;
/// Climb rate once airborne, per tick.
pub const CLIMB_RATE: f64 = 0.02;
/// Runway z past which the airplane lifts off.
pub const LIFTOFF_Z: f64 = 10.0;

/// State of the takeoff run: the airplane, the observer chasing it, and the
/// current phase. `tick()` is the only mutator; rendering happens elsewhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Takeoff {
    pub airplane: Position,
    pub observer: Position,
    pub phase: Phase,
}

impl Takeoff {
    pub fn new(airplane: Position, observer: Position) -> Self {
        Self {
            airplane,
            observer,
            phase: Phase::GroundRoll,
        }
    }

    /// Advances the run by one display frame.
    ///
    /// The airplane always moves down the runway. The liftoff check runs on
    /// the updated z and before the observer moves, so on the liftoff tick
    /// the observer's z is already frozen and the climb starts the same
    /// tick.
    pub fn tick(&mut self) {
        self.airplane.z += GROUND_SPEED;

        if self.phase == Phase::GroundRoll && self.airplane.z > LIFTOFF_Z {
            self.phase = Phase::Airborne;
        }

        match self.phase {
            Phase::GroundRoll => self.observer.z += GROUND_SPEED,
            Phase::Airborne => {
                self.airplane.y += CLIMB_RATE;
                self.observer.y += CLIMB_RATE;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_brake_release() -> Takeoff {
        Takeoff::new(Position::new(0.0, 0.0, 0.0), Position::new(0.0, 0.0, 0.0))
    }

    fn ticks(t: &mut Takeoff, n: usize) {
        for _ in 0..n {
            t.tick();
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn z_advances_every_tick_in_both_phases() {
        let mut t = from_brake_release();
        ticks(&mut t, 50);
        assert!(close(t.airplane.z, 5.0));

        ticks(&mut t, 100);
        assert_eq!(t.phase, Phase::Airborne);
        assert!(close(t.airplane.z, 15.0));
    }

    #[test]
    fn lifts_off_exactly_at_tick_101() {
        let mut t = from_brake_release();
        ticks(&mut t, 100);
        assert_eq!(t.phase, Phase::GroundRoll);
        assert!(t.airplane.z < LIFTOFF_Z);

        t.tick();
        assert_eq!(t.phase, Phase::Airborne);
    }

    #[test]
    fn observer_tracks_airplane_during_ground_roll() {
        let mut t = from_brake_release();
        for _ in 0..100 {
            t.tick();
            assert_eq!(t.observer.z, t.airplane.z);
            assert_eq!(t.airplane.y, 0.0);
            assert_eq!(t.observer.y, 0.0);
        }
    }

    #[test]
    fn observer_z_freezes_on_liftoff() {
        let mut t = from_brake_release();
        ticks(&mut t, 100);
        let parked_z = t.observer.z;

        ticks(&mut t, 200);
        assert_eq!(t.observer.z, parked_z);
    }

    #[test]
    fn climb_raises_airplane_and_observer_together() {
        let mut t = from_brake_release();
        ticks(&mut t, 150);
        assert!(close(t.airplane.y, 0.02 * 50.0));
        assert_eq!(t.airplane.y, t.observer.y);
    }

    #[test]
    fn never_drops_back_to_ground_roll() {
        let mut t = from_brake_release();
        ticks(&mut t, 101);
        assert_eq!(t.phase, Phase::Airborne);

        ticks(&mut t, 1000);
        assert_eq!(t.phase, Phase::Airborne);
    }

    #[test]
    fn replay_is_bit_for_bit_reproducible() {
        let mut a = Takeoff::new(
            Position::new(0.0, 2.0, -150.0),
            Position::new(-50.0, 15.0, -145.0),
        );
        let mut b = a;
        ticks(&mut a, 500);
        ticks(&mut b, 500);
        assert_eq!(a, b);
    }

    #[test]
    fn starts_anywhere_on_the_field() {
        let mut t = Takeoff::new(
            Position::new(0.0, 2.0, -150.0),
            Position::new(-50.0, 15.0, -145.0),
        );
        ticks(&mut t, 50);
        assert!(close(t.airplane.z, -145.0));
        assert!(close(t.observer.z, -140.0));
        assert_eq!(t.phase, Phase::GroundRoll);

        // The liftoff line is a world position, not a distance traveled:
        // starting far down the field, 150 ticks is nowhere near it.
        ticks(&mut t, 100);
        assert_eq!(t.phase, Phase::GroundRoll);
    }
}
