//! Gap computation and canned suggestion text
//!
//! Both are pure functions of the row values, so the report table is fully
//! determined by the record and the target table.

use crate::core::types::Rating;

const NEEDS_IMPROVEMENT: &str = "A lot of improvement is needed but nothing is impossible.";
const ALMOST_THERE: &str = "You are almost there... Just need a little more practice.";
const NEAR_LEGEND: &str = "Woohoo! You're almost a legend here. Keep refining and practicing!";

/// Remaining distance to the target, floored at zero
pub fn gap(target: Rating, rating: Rating) -> Rating {
    target.saturating_sub(rating)
}

/// Suggestion tier for a self rating: <=3, 4..=7, >=8
pub fn suggestion_for(rating: Rating) -> &'static str {
    if rating <= 3 {
        NEEDS_IMPROVEMENT
    } else if rating <= 7 {
        ALMOST_THERE
    } else {
        NEAR_LEGEND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_is_floored_at_zero() {
        assert_eq!(gap(10, 4), 6);
        assert_eq!(gap(10, 10), 0);
        assert_eq!(gap(5, 9), 0);
    }

    #[test]
    fn suggestion_tiers() {
        assert_eq!(suggestion_for(1), NEEDS_IMPROVEMENT);
        assert_eq!(suggestion_for(2), NEEDS_IMPROVEMENT);
        assert_eq!(suggestion_for(3), NEEDS_IMPROVEMENT);
        assert_eq!(suggestion_for(4), ALMOST_THERE);
        assert_eq!(suggestion_for(5), ALMOST_THERE);
        assert_eq!(suggestion_for(7), ALMOST_THERE);
        assert_eq!(suggestion_for(8), NEAR_LEGEND);
        assert_eq!(suggestion_for(9), NEAR_LEGEND);
        assert_eq!(suggestion_for(10), NEAR_LEGEND);
    }
}
