//! Curve-kind profiles and the weighted curve factory.

use sortie_core::constants::*;
use sortie_core::enums::CurveKind;
use sortie_core::random::RandomSource;

use crate::curves::CurveSpec;

/// Per-kind defaults for a curve family.
pub struct CurveProfile {
    /// Time to traverse the whole curve (ms).
    pub duration_ms: f32,
    /// Relative selection weight in the weighted factory.
    pub weight: f32,
}

/// Get the profile for a given curve kind.
pub fn get_profile(kind: CurveKind) -> CurveProfile {
    match kind {
        CurveKind::Dive => CurveProfile {
            duration_ms: DIVE_DURATION_MS,
            weight: DIVE_WEIGHT,
        },
        CurveKind::Loop => CurveProfile {
            duration_ms: LOOP_DURATION_MS,
            weight: LOOP_WEIGHT,
        },
        CurveKind::Weave => CurveProfile {
            duration_ms: WEAVE_DURATION_MS,
            weight: WEAVE_WEIGHT,
        },
        CurveKind::Swoop => CurveProfile {
            duration_ms: SWOOP_DURATION_MS,
            weight: SWOOP_WEIGHT,
        },
        CurveKind::Strafe => CurveProfile {
            duration_ms: STRAFE_DURATION_MS,
            weight: STRAFE_WEIGHT,
        },
    }
}

/// Map a uniform roll in `[0, 1)` onto a curve kind by cumulative weight.
/// Falls back to `Dive` if rounding leaves the roll past the last bucket.
pub fn kind_for_roll(roll: f32) -> CurveKind {
    let mut cumulative = 0.0;
    for kind in CurveKind::ALL {
        cumulative += get_profile(kind).weight;
        if roll < cumulative {
            return kind;
        }
    }
    CurveKind::Dive
}

/// Draw a curve kind from the fixed weighted distribution.
pub fn pick_weighted<R: RandomSource + ?Sized>(rng: &mut R) -> CurveKind {
    kind_for_roll(rng.random())
}

/// Draw a weighted curve kind with its default duration, ready to start.
pub fn random_curve<R: RandomSource + ?Sized>(rng: &mut R) -> CurveSpec {
    CurveSpec::new(pick_weighted(rng))
}
