//! d20 arithmetic shared by crew and vehicle rolls.

/// Ability modifier from a score: floor((score - 10) / 2).
pub fn ability_modifier(score: i32) -> i32 {
    // Rust's / rounds toward zero
    let diff = score - 10;
    if diff >= 0 {
        diff / 2
    } else {
        (diff - 1) / 2
    }
}

/// Proficiency bonus from level: ((level - 1) / 4) + 2.
pub fn proficiency_bonus(level: u8) -> i32 {
    ((level.max(1) as i32 - 1) / 4) + 2
}

/// Half-level bonus added to every save.
pub fn half_level_bonus(level: u8) -> i32 {
    level as i32 / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_modifier_calculation() {
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(12), 1);
        assert_eq!(ability_modifier(16), 3);
        assert_eq!(ability_modifier(20), 5);
    }

    #[test]
    fn proficiency_bonus_by_level() {
        assert_eq!(proficiency_bonus(1), 2);
        assert_eq!(proficiency_bonus(4), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(9), 4);
        assert_eq!(proficiency_bonus(17), 6);
        assert_eq!(proficiency_bonus(0), 2);
    }

    #[test]
    fn half_level_rounds_down() {
        assert_eq!(half_level_bonus(1), 0);
        assert_eq!(half_level_bonus(5), 2);
        assert_eq!(half_level_bonus(10), 5);
    }
}
