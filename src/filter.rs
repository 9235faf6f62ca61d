//! # Second-Order IIR Filter
//!
//! A two-pole, two-zero direct-form recurrence used twice by the pipeline:
//! once per axis to pull the gravity component out of total acceleration,
//! and once more to smooth the gravity-projected scalar series.
//!
//! ## Recurrence
//! ```text
//! y[i] = a0 * ( b0*x[i] + b1*x[i-1] + b2*x[i-2] - a1*y[i-1] - a2*y[i-2] )
//! ```
//!
//! ## Startup
//! The filter is not primed from input history: `y[0]` and `y[1]` are always
//! zero, so the first outputs carry a startup transient that downstream step
//! detection already expects.
//!
//! The recurrence is sequential by nature (each output depends on the two
//! previous outputs) and runs in a single pass over the input.

/// Feedback (`alpha`) and feedforward (`beta`) coefficients of a biquad.
///
/// `alpha[0]` is normally 1 but is still applied as a gain on every output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterCoefficients {
    /// Feedback coefficients `[a0, a1, a2]`
    pub alpha: [f64; 3],
    /// Feedforward coefficients `[b0, b1, b2]`
    pub beta: [f64; 3],
}

/// Low-pass coefficients that isolate gravity from total acceleration.
pub const GRAVITY_COEFFICIENTS: FilterCoefficients = FilterCoefficients {
    alpha: [1.0, -1.979133761292768, 0.979521463540373],
    beta: [
        0.000086384997973502,
        0.000172769995947004,
        0.000086384997973502,
    ],
};

/// Chebyshev II smoothing coefficients (Astop = 2, Fstop = 5, Fs = 100).
pub const SMOOTHING_COEFFICIENTS: FilterCoefficients = FilterCoefficients {
    alpha: [1.0, -1.80898117793047, 0.827224480562408],
    beta: [0.095465967120306, -0.172688631608676, 0.095465967120306],
};

/// Run `input` through the biquad described by `coefficients`.
///
/// The output always has the same length as the input. The first two outputs
/// are zero; inputs shorter than three samples yield all zeros.
///
/// # Example
/// ```
/// use pedometer_lib::filter::{filter, SMOOTHING_COEFFICIENTS};
///
/// let out = filter(&SMOOTHING_COEFFICIENTS, &[1.0, 1.0, 1.0, 1.0]);
/// assert_eq!(out.len(), 4);
/// assert_eq!(out[0], 0.0);
/// assert_eq!(out[1], 0.0);
/// ```
pub fn filter(coefficients: &FilterCoefficients, input: &[f64]) -> Vec<f64> {
    let [a0, a1, a2] = coefficients.alpha;
    let [b0, b1, b2] = coefficients.beta;

    let mut output = vec![0.0; input.len()];
    for i in 2..input.len() {
        output[i] = a0
            * (b0 * input[i] + b1 * input[i - 1] + b2 * input[i - 2]
                - a1 * output[i - 1]
                - a2 * output[i - 2]);
    }
    output
}
