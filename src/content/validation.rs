//! Sanity checks for loaded tuning. Findings are reported, never enforced.

use crate::movement::MovementTuning;

#[derive(Debug)]
pub struct TuningWarning {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for TuningWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

macro_rules! check_non_negative {
    ($warnings:expr, $tuning:expr, $($field:ident),+ $(,)?) => {
        $(
            if $tuning.$field < 0.0 {
                $warnings.push(TuningWarning {
                    field: stringify!($field),
                    message: format!("is negative ({})", $tuning.$field),
                });
            }
        )+
    };
}

/// Return every suspicious value in `tuning`; empty when all look sane.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<TuningWarning> {
    let mut warnings = Vec::new();

    check_non_negative!(
        warnings,
        tuning,
        jump_force,
        jump_cooldown,
        air_multiplier,
        air_drag,
        slide_multiplier,
        slide_drag,
        ground_drag,
    );

    if tuning.movement_speed <= 0.0 {
        warnings.push(TuningWarning {
            field: "movement_speed",
            message: format!("must be positive to move at all ({})", tuning.movement_speed),
        });
    }

    if tuning.player_height < 2.0 * tuning.player_radius {
        warnings.push(TuningWarning {
            field: "player_height",
            message: format!(
                "is shorter than the capsule diameter ({} < {})",
                tuning.player_height,
                2.0 * tuning.player_radius
            ),
        });
    }

    warnings
}
