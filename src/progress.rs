use chrono::NaiveDate;

use crate::models::{Level, UserProgress};

// Score rewards per transition.
const QUESTION_REWARD: u32 = 10;
const STEP_REWARD: u32 = 20;
const LEVEL_REWARD_NEW: u32 = 50;
const LEVEL_REWARD_REPEAT: u32 = 5;

/// Outcome of a level completion: whether the id was newly added and whether
/// the streak milestone overlay should fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCompletion {
    pub new_completion: bool,
    pub streak_milestone: bool,
}

/// Advanced to the next question within a step.
pub fn award_question(progress: &mut UserProgress) {
    progress.score += QUESTION_REWARD;
}

/// Advanced to the next step within a level.
pub fn award_step(progress: &mut UserProgress) {
    progress.score += STEP_REWARD;
}

/// Finish a level: idempotent completed-set insert, score reward, streak
/// recompute against `today`, and last-completion stamp. The caller persists
/// the record afterwards.
pub fn complete_level(
    progress: &mut UserProgress,
    level_id: &str,
    today: NaiveDate,
) -> LevelCompletion {
    let new_completion = !progress.is_completed(level_id);

    progress.score += if new_completion {
        LEVEL_REWARD_NEW
    } else {
        LEVEL_REWARD_REPEAT
    };

    if new_completion {
        progress.completed_levels.insert(level_id.to_string());
    }

    let (streak, streak_milestone) =
        next_streak(progress.streak, progress.last_completion_date, today);
    progress.streak = streak;
    progress.last_completion_date = Some(today);

    LevelCompletion {
        new_completion,
        streak_milestone,
    }
}

/// Streak state machine over calendar days. Only day completion moves it;
/// intermediate step rewards never do. A clock set backwards is treated like
/// a same-day completion.
fn next_streak(current: u32, last: Option<NaiveDate>, today: NaiveDate) -> (u32, bool) {
    match last {
        None => (1, true),
        Some(last) => match (today - last).num_days() {
            d if d <= 0 => (current, false),
            1 => (current + 1, true),
            _ => (1, true),
        },
    }
}

/// Strict linear gating: the one unlocked-but-incomplete level is the first
/// incomplete one in the flattened path order.
pub fn active_level_id<'a>(levels: &[&'a Level], progress: &UserProgress) -> Option<&'a str> {
    levels
        .iter()
        .find(|l| !progress.is_completed(l.id))
        .map(|l| l.id)
}

/// A level may be entered iff it is completed or is the active one.
pub fn is_unlocked(level_id: &str, levels: &[&Level], progress: &UserProgress) -> bool {
    progress.is_completed(level_id) || active_level_id(levels, progress) == Some(level_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Step, StepKind};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod reward_tests {
        use super::*;

        #[test]
        fn question_and_step_rewards_accumulate() {
            let mut p = UserProgress::default();
            award_question(&mut p);
            award_question(&mut p);
            award_step(&mut p);
            assert_eq!(p.score, 40);
        }

        #[test]
        fn partial_rewards_leave_streak_and_completions_alone() {
            let mut p = UserProgress::default();
            award_question(&mut p);
            award_step(&mut p);
            assert_eq!(p.streak, 0);
            assert!(p.completed_levels.is_empty());
            assert!(p.last_completion_date.is_none());
        }
    }

    mod streak_tests {
        use super::*;

        #[test]
        fn first_completion_starts_streak() {
            let mut p = UserProgress::default();
            let result = complete_level(&mut p, "l1", day(2026, 8, 29));
            assert_eq!(p.streak, 1);
            assert!(result.streak_milestone);
        }

        #[test]
        fn same_day_keeps_streak_without_milestone() {
            let mut p = UserProgress {
                streak: 4,
                last_completion_date: Some(day(2026, 8, 29)),
                ..Default::default()
            };
            let result = complete_level(&mut p, "l1", day(2026, 8, 29));
            assert_eq!(p.streak, 4);
            assert!(!result.streak_milestone);
        }

        #[test]
        fn consecutive_day_extends_streak() {
            let mut p = UserProgress {
                streak: 4,
                last_completion_date: Some(day(2026, 8, 28)),
                ..Default::default()
            };
            let result = complete_level(&mut p, "l1", day(2026, 8, 29));
            assert_eq!(p.streak, 5);
            assert!(result.streak_milestone);
        }

        #[test]
        fn gap_resets_streak() {
            let mut p = UserProgress {
                streak: 9,
                last_completion_date: Some(day(2026, 8, 26)),
                ..Default::default()
            };
            let result = complete_level(&mut p, "l1", day(2026, 8, 29));
            assert_eq!(p.streak, 1);
            assert!(result.streak_milestone);
        }

        #[test]
        fn month_boundary_counts_as_consecutive() {
            let mut p = UserProgress {
                streak: 2,
                last_completion_date: Some(day(2026, 8, 31)),
                ..Default::default()
            };
            complete_level(&mut p, "l1", day(2026, 9, 1));
            assert_eq!(p.streak, 3);
        }

        #[test]
        fn clock_moved_backwards_is_treated_as_same_day() {
            let mut p = UserProgress {
                streak: 6,
                last_completion_date: Some(day(2026, 8, 29)),
                ..Default::default()
            };
            let result = complete_level(&mut p, "l1", day(2026, 8, 27));
            assert_eq!(p.streak, 6);
            assert!(!result.streak_milestone);
            assert_eq!(p.last_completion_date, Some(day(2026, 8, 27)));
        }
    }

    mod completion_tests {
        use super::*;

        #[test]
        fn new_completion_awards_50_and_records_id() {
            let mut p = UserProgress::default();
            let result = complete_level(&mut p, "geo-l1", day(2026, 8, 29));
            assert!(result.new_completion);
            assert_eq!(p.score, 50);
            assert!(p.is_completed("geo-l1"));
        }

        #[test]
        fn repeat_completion_same_day_is_idempotent() {
            let mut p = UserProgress::default();
            let today = day(2026, 8, 29);
            complete_level(&mut p, "geo-l1", today);
            let streak_before = p.streak;

            let result = complete_level(&mut p, "geo-l1", today);
            assert!(!result.new_completion);
            assert!(!result.streak_milestone);
            assert_eq!(p.score, 55);
            assert_eq!(p.completed_levels.len(), 1);
            assert_eq!(p.streak, streak_before);
            assert_eq!(p.last_completion_date, Some(today));
        }

        #[test]
        fn score_never_decreases_across_transitions() {
            let mut p = UserProgress::default();
            let mut last = 0;
            complete_level(&mut p, "l1", day(2026, 8, 27));
            for op in 0..6 {
                match op % 3 {
                    0 => award_question(&mut p),
                    1 => award_step(&mut p),
                    _ => {
                        complete_level(&mut p, "l1", day(2026, 8, 28 + op as u32 / 3));
                    }
                }
                assert!(p.score > last);
                last = p.score;
            }
        }
    }

    mod lock_tests {
        use super::*;

        fn level(id: &'static str) -> Level {
            Level {
                id,
                title: "L",
                steps: vec![Step {
                    id: "s1",
                    kind: StepKind::Explore,
                    questions: vec![],
                }],
            }
        }

        #[test]
        fn first_incomplete_level_is_active() {
            let levels = [level("l1"), level("l2"), level("l3")];
            let refs: Vec<&Level> = levels.iter().collect();
            let mut p = UserProgress::default();
            assert_eq!(active_level_id(&refs, &p), Some("l1"));

            p.completed_levels.insert("l1".into());
            assert_eq!(active_level_id(&refs, &p), Some("l2"));
        }

        #[test]
        fn all_completed_means_no_active_level() {
            let levels = [level("l1"), level("l2")];
            let refs: Vec<&Level> = levels.iter().collect();
            let mut p = UserProgress::default();
            p.completed_levels.insert("l1".into());
            p.completed_levels.insert("l2".into());
            assert_eq!(active_level_id(&refs, &p), None);
        }

        #[test]
        fn exactly_one_level_is_unlocked_and_incomplete() {
            let levels = [level("l1"), level("l2"), level("l3"), level("l4")];
            let refs: Vec<&Level> = levels.iter().collect();
            let mut p = UserProgress::default();
            p.completed_levels.insert("l1".into());
            p.completed_levels.insert("l2".into());

            let unlocked_incomplete: Vec<&str> = refs
                .iter()
                .filter(|l| is_unlocked(l.id, &refs, &p) && !p.is_completed(l.id))
                .map(|l| l.id)
                .collect();
            assert_eq!(unlocked_incomplete, vec!["l3"]);
            assert!(!is_unlocked("l4", &refs, &p));
        }

        #[test]
        fn completed_levels_stay_unlocked() {
            let levels = [level("l1"), level("l2")];
            let refs: Vec<&Level> = levels.iter().collect();
            let mut p = UserProgress::default();
            p.completed_levels.insert("l1".into());
            assert!(is_unlocked("l1", &refs, &p));
            assert!(is_unlocked("l2", &refs, &p));
        }
    }
}
