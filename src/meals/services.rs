use crate::meals::repo::Meal;

/// Adherence statistics over one user's meal history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DietSummary {
    pub total: usize,
    pub on_diet: usize,
    pub off_diet: usize,
    pub best_streak: usize,
}

/// Longest run of consecutive on-diet meals in `meal_time` order. The end of
/// the sequence closes a trailing run, and an empty history scores 0.
pub fn best_on_diet_streak(meals: &[Meal]) -> usize {
    let mut best = 0;
    let mut run = 0;
    for meal in meals {
        if meal.is_diet {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// Compute the summary over meals already ordered by `meal_time`.
pub fn summarize(meals: &[Meal]) -> DietSummary {
    DietSummary {
        total: meals.len(),
        on_diet: meals.iter().filter(|m| m.is_diet).count(),
        off_diet: meals.iter().filter(|m| !m.is_diet).count(),
        best_streak: best_on_diet_streak(meals),
    }
}

#[cfg(test)]
mod streak_tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn meals(flags: &[bool]) -> Vec<Meal> {
        let user_id = Uuid::new_v4();
        flags
            .iter()
            .enumerate()
            .map(|(i, &is_diet)| Meal {
                id: Uuid::new_v4(),
                user_id,
                name: format!("meal {i}"),
                description: String::new(),
                meal_time: OffsetDateTime::UNIX_EPOCH + time::Duration::hours(i as i64),
                is_diet,
                created_at: OffsetDateTime::UNIX_EPOCH,
                updated_at: OffsetDateTime::UNIX_EPOCH,
            })
            .collect()
    }

    #[test]
    fn finds_longest_run_between_breaks() {
        let history = meals(&[true, true, false, true, true, true, false, true]);
        assert_eq!(best_on_diet_streak(&history), 3);
    }

    #[test]
    fn trailing_run_counts() {
        assert_eq!(best_on_diet_streak(&meals(&[true, true, true])), 3);
        assert_eq!(best_on_diet_streak(&meals(&[false, true, true])), 2);
    }

    #[test]
    fn empty_history_scores_zero() {
        assert_eq!(best_on_diet_streak(&meals(&[])), 0);
    }

    #[test]
    fn all_off_diet_scores_zero() {
        assert_eq!(best_on_diet_streak(&meals(&[false, false])), 0);
    }

    #[test]
    fn summary_counts_add_up() {
        let history = meals(&[true, false, true, true, false]);
        let summary = summarize(&history);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.on_diet, 3);
        assert_eq!(summary.off_diet, 2);
        assert_eq!(summary.on_diet + summary.off_diet, summary.total);
        assert_eq!(summary.best_streak, 2);
    }

    #[test]
    fn summary_of_empty_history() {
        let summary = summarize(&[]);
        assert_eq!(
            summary,
            DietSummary {
                total: 0,
                on_diet: 0,
                off_diet: 0,
                best_streak: 0,
            }
        );
    }
}
