use crate::types::scoring::{BenchmarkRow, Direction, Grade, ScoreResult};

const EXCELLENT_FLOOR: f64 = 90.0;
const GOOD_FLOOR: f64 = 75.0;
const AVERAGE_FLOOR: f64 = 50.0;
const SCORE_FLOOR: f64 = 20.0;

/// Piecewise-linear mapping of a raw result onto the 0-100 scale.
///
/// Each band interpolates from its worse bound to its better bound, so the
/// curve is continuous at `good` (75) and `average` (50) and monotonic in the
/// test's better direction. `row` must already satisfy
/// [`BenchmarkRow::is_ordered`].
pub fn apply(direction: Direction, row: &BenchmarkRow, raw: f64) -> ScoreResult {
    let (score, grade) = match direction {
        Direction::HigherIsBetter => higher_is_better(row, raw),
        Direction::LowerIsBetter => lower_is_better(row, raw),
    };
    ScoreResult::from_raw(score, grade.tier_percentile(), grade)
}

fn higher_is_better(row: &BenchmarkRow, raw: f64) -> (f64, Grade) {
    if raw >= row.excellent {
        let bonus = ((raw - row.excellent) / row.excellent * 10.0).min(10.0);
        (EXCELLENT_FLOOR + bonus, Grade::Excellent)
    } else if raw >= row.good {
        let span = (raw - row.good) / (row.excellent - row.good);
        (GOOD_FLOOR + span * 15.0, Grade::Good)
    } else if raw >= row.average {
        let span = (raw - row.average) / (row.good - row.average);
        (AVERAGE_FLOOR + span * 25.0, Grade::Average)
    } else {
        let scaled = raw / row.average * 50.0;
        (scaled.max(SCORE_FLOOR), Grade::NeedsImprovement)
    }
}

fn lower_is_better(row: &BenchmarkRow, raw: f64) -> (f64, Grade) {
    if raw <= row.excellent {
        (EXCELLENT_FLOOR + (row.excellent - raw) * 2.0, Grade::Excellent)
    } else if raw <= row.good {
        let span = (row.good - raw) / (row.good - row.excellent);
        (GOOD_FLOOR + span * 15.0, Grade::Good)
    } else if raw <= row.average {
        let span = (row.average - raw) / (row.average - row.good);
        (AVERAGE_FLOOR + span * 25.0, Grade::Average)
    } else {
        let penalty = (raw - row.average) / row.average * 30.0;
        ((AVERAGE_FLOOR - penalty).max(SCORE_FLOOR), Grade::NeedsImprovement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUSH_UPS_MALE_18: BenchmarkRow = BenchmarkRow {
        excellent: 45.0,
        good: 35.0,
        average: 25.0,
        poor: 15.0,
    };

    const SPRINT_MALE_18: BenchmarkRow = BenchmarkRow {
        excellent: 11.5,
        good: 12.5,
        average: 13.5,
        poor: 15.0,
    };

    const GRIP_FEMALE_36: BenchmarkRow = BenchmarkRow {
        excellent: 30.0,
        good: 25.0,
        average: 20.0,
        poor: 14.0,
    };

    fn higher(row: &BenchmarkRow, raw: f64) -> ScoreResult {
        apply(Direction::HigherIsBetter, row, raw)
    }

    fn lower(row: &BenchmarkRow, raw: f64) -> ScoreResult {
        apply(Direction::LowerIsBetter, row, raw)
    }

    #[test]
    fn result_at_excellent_threshold_scores_ninety() {
        let result = higher(&PUSH_UPS_MALE_18, 45.0);
        assert_eq!(result.score, 90);
        assert_eq!(result.percentile, 95);
        assert_eq!(result.grade, Grade::Excellent);

        let result = lower(&SPRINT_MALE_18, 11.5);
        assert_eq!(result.score, 90);
        assert_eq!(result.grade, Grade::Excellent);
    }

    #[test]
    fn sprint_at_good_threshold_scores_seventy_five() {
        let result = lower(&SPRINT_MALE_18, 12.5);
        assert_eq!(result.score, 75);
        assert_eq!(result.percentile, 80);
        assert_eq!(result.grade, Grade::Good);
    }

    #[test]
    fn grip_at_average_threshold_scores_fifty() {
        let result = higher(&GRIP_FEMALE_36, 20.0);
        assert_eq!(result.score, 50);
        assert_eq!(result.percentile, 60);
        assert_eq!(result.grade, Grade::Average);
    }

    #[test]
    fn weak_result_is_floored_at_twenty() {
        let result = higher(&GRIP_FEMALE_36, 5.0);
        assert_eq!(result.score, 20);
        assert_eq!(result.percentile, 30);
        assert_eq!(result.grade, Grade::NeedsImprovement);

        let result = lower(&SPRINT_MALE_18, 60.0);
        assert_eq!(result.score, 20);
        assert_eq!(result.grade, Grade::NeedsImprovement);
    }

    #[test]
    fn excellent_bonus_is_capped() {
        assert_eq!(higher(&PUSH_UPS_MALE_18, 49.5).score, 91);
        assert_eq!(higher(&PUSH_UPS_MALE_18, 500.0).score, 100);
        assert_eq!(lower(&SPRINT_MALE_18, 9.0).score, 95);
        assert_eq!(lower(&SPRINT_MALE_18, 0.0).score, 100);
    }

    #[test]
    fn interpolates_inside_bands() {
        assert_eq!(higher(&PUSH_UPS_MALE_18, 40.0).score, 83);
        assert_eq!(higher(&PUSH_UPS_MALE_18, 30.0).score, 63);
        assert_eq!(higher(&PUSH_UPS_MALE_18, 20.0).score, 40);
        assert_eq!(lower(&SPRINT_MALE_18, 12.0).score, 83);
        assert_eq!(lower(&SPRINT_MALE_18, 13.0).score, 63);
        assert_eq!(lower(&SPRINT_MALE_18, 14.85).score, 47);
    }

    fn sweep(start: f64, end: f64, steps: usize) -> Vec<f64> {
        (0..=steps)
            .map(|step| start + (end - start) * step as f64 / steps as f64)
            .collect()
    }

    #[test]
    fn higher_is_better_score_never_decreases() {
        let scores = sweep(0.0, 80.0, 800)
            .into_iter()
            .map(|raw| higher(&PUSH_UPS_MALE_18, raw).score)
            .collect::<Vec<_>>();
        assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn lower_is_better_score_never_increases() {
        let scores = sweep(0.0, 40.0, 800)
            .into_iter()
            .map(|raw| lower(&SPRINT_MALE_18, raw).score)
            .collect::<Vec<_>>();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn output_stays_in_unit_interval() {
        for raw in sweep(0.0, 1000.0, 500) {
            for result in [higher(&GRIP_FEMALE_36, raw), lower(&SPRINT_MALE_18, raw)] {
                assert!(result.score <= 100);
                assert!(result.percentile <= 100);
            }
        }
    }
}
