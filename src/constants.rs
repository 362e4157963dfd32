// Reference mission: five subsystems
pub const DEFAULT_FAILURE_PROBS: [f64; 5] = [0.01, 0.02, 0.015, 0.01, 0.025];

// Sampling constants
pub const DEFAULT_SAMPLES: u64 = 100_000;
pub const DEFAULT_RUNS: u32 = 1;

// Verification constants
pub const VERIFICATION_TOLERANCE: f64 = 0.001;
pub const CONFIDENCE_Z_95: f64 = 1.959_963_984_540_054;
