//! Health and life-cycle state shared by the player and enemies.
//!
//! The life-cycle is a single tagged state instead of independent
//! `is_hit`/`is_attacking`/`is_dead` booleans, so contradictory
//! combinations (dead *and* attacking) cannot be represented.

/// What the entity is currently doing with its life.
///
/// Exactly one condition drives the animation at a time, with priority
/// `Dead > Hit > Attacking > locomotion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    /// Free to move, attack, and take damage.
    #[default]
    Normal,
    /// In hit-stun; doubles as the invulnerability window.
    Hit,
    /// Mid-swing; movement suppressed.
    Attacking,
    /// Terminal. No further transitions.
    Dead,
}

impl Condition {
    pub fn is_dead(self) -> bool {
        self == Condition::Dead
    }

    /// True while an action state suppresses movement and new actions.
    pub fn is_busy(self) -> bool {
        self != Condition::Normal
    }
}

/// Result of a damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    /// False when the target was dead or in its hit-stun window.
    pub applied: bool,
    /// True when this hit reduced health to zero.
    pub killed: bool,
}

impl DamageOutcome {
    pub fn ignored() -> DamageOutcome {
        DamageOutcome {
            applied: false,
            killed: false,
        }
    }
}

/// Applies `amount` damage to a health pool and advances the life-cycle.
///
/// Ignored while `Dead` (death is permanent) or `Hit` (the hit animation
/// is a brief invulnerability window). Health floors at 0; reaching 0
/// transitions to `Dead`, anything else to `Hit`.
pub fn apply_damage(health: &mut i32, condition: &mut Condition, amount: i32) -> DamageOutcome {
    if matches!(condition, Condition::Dead | Condition::Hit) {
        return DamageOutcome::ignored();
    }

    *health = (*health - amount).max(0);

    if *health == 0 {
        *condition = Condition::Dead;
        DamageOutcome {
            applied: true,
            killed: true,
        }
    } else {
        *condition = Condition::Hit;
        DamageOutcome {
            applied: true,
            killed: false,
        }
    }
}
