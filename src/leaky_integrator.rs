use num_traits::Float;

pub const DEFAULT_GAIN: f64 = 0.5;

/// One step of the leaky integrator recurrence: `(1 - p) * state + p * x`.
pub fn blend<T: Float>(state: T, p: T, x: T) -> T {
    (T::one() - p) * state + p * x
}

/// Single-pole exponential integrator.
///
/// Each [`write`](Self::write) blends the new sample into the accumulated
/// state, weighting it by the gain `p` and the previous state by `q = 1 - p`.
/// The gain is not validated: values outside `[0, 1]` give a non-convex
/// blend that may amplify instead of smooth.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LeakyIntegrator {
    state: f64,
    p: f64,
    q: f64,
}

impl Default for LeakyIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl LeakyIntegrator {
    pub fn new() -> Self {
        LeakyIntegrator {
            state: 0.0,
            p: DEFAULT_GAIN,
            q: 1.0 - DEFAULT_GAIN,
        }
    }

    pub fn with_gain(p: f64) -> Self {
        let mut integrator = Self::new();
        integrator.set_gain(p);
        integrator
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
    }

    pub fn set_gain(&mut self, p: f64) {
        self.p = p;
        self.q = 1.0 - p;
    }

    pub fn gain(&self) -> f64 {
        self.p
    }

    /// Weight kept from the previous state, always `1 - gain()`.
    pub fn complement(&self) -> f64 {
        self.q
    }

    pub fn read(&self) -> f64 {
        self.state
    }

    pub fn write(&mut self, value: f64) {
        self.state = self.q * self.state + self.p * value;
    }
}
