//! End-to-end scoring of drawings against the built-in exercise catalog.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use tracewise_scoring::{
    DotSequence, DotState, ExerciseId, FeedbackTier, Gate, Guide, ManualClock, Point,
    ScoringConfig, ShapeKind, Stroke, TapOutcome, TracingAttempt, analyze, expand_guide,
    score_drawing,
};

/// Trace `guide` exactly: the dense guide as one stroke.
fn perfect_trace(guide: &Guide, config: &ScoringConfig) -> Vec<Stroke> {
    let dense = expand_guide(guide, config.guide_step);
    vec![Stroke::new(dense.points().to_vec())]
}

fn shifted(strokes: &[Stroke], dx: f64, dy: f64) -> Vec<Stroke> {
    strokes
        .iter()
        .map(|s| {
            Stroke::new(
                s.points()
                    .iter()
                    .map(|p| Point::new(p.x + dx, p.y + dy))
                    .collect(),
            )
        })
        .collect()
}

#[test]
fn every_tracing_exercise_scores_full_marks_when_traced_exactly() {
    let config = ScoringConfig::default();
    for id in ExerciseId::all().into_iter().filter(|id| id.is_tracing()) {
        let guide = id.guide().unwrap();
        let strokes = perfect_trace(&guide, &config);
        let score = score_drawing(&strokes, &guide, &config);
        assert_eq!(score, 100, "{id}");
        assert_eq!(FeedbackTier::for_score(score), FeedbackTier::Excellent);
    }
}

#[test]
fn scoring_is_repeatable() {
    let config = ScoringConfig::default();
    let guide = ExerciseId::Shape(ShapeKind::Star).guide().unwrap();
    let strokes = shifted(&perfect_trace(&guide, &config), 7.0, -5.0);
    let first = analyze(&strokes, &expand_guide(&guide, config.guide_step), &config);
    let second = analyze(&strokes, &expand_guide(&guide, config.guide_step), &config);
    assert_eq!(first, second);
}

#[test]
fn wrong_letter_is_capped() {
    let config = ScoringConfig::default();
    let guide_o = ExerciseId::Letter('O').guide().unwrap();
    let guide_i = ExerciseId::Letter('I').guide().unwrap();
    let strokes = perfect_trace(&guide_i, &config);

    let breakdown = analyze(&strokes, &expand_guide(&guide_o, config.guide_step), &config);
    assert!(breakdown.failed_gates.contains(&Gate::Coverage));
    assert!(breakdown.score <= 40, "score {}", breakdown.score);
}

#[test]
fn drawing_beside_the_guide_is_capped() {
    let config = ScoringConfig::default();
    let guide = ExerciseId::Shape(ShapeKind::Square).guide().unwrap();
    let strokes = shifted(&perfect_trace(&guide, &config), 150.0, 0.0);
    let score = score_drawing(&strokes, &guide, &config);
    assert!(score <= 40, "score {score}");
}

#[test]
fn slightly_shaky_trace_still_excellent() {
    let config = ScoringConfig::default();
    let guide = ExerciseId::Digit('2').guide().unwrap();
    let strokes = shifted(&perfect_trace(&guide, &config), 6.0, 6.0);
    let score = score_drawing(&strokes, &guide, &config);
    assert!(score >= 85, "score {score}");
}

#[test]
fn attempt_splits_letter_across_strokes() {
    let clock = ManualClock::default();
    let config = ScoringConfig::default();
    let guide = ExerciseId::Letter('L').guide().unwrap();
    let dense = expand_guide(&guide, config.guide_step);
    let mut attempt = TracingAttempt::new(&guide, config, &clock).unwrap();

    let (first, second) = dense.points().split_at(dense.len() / 2);
    for half in [first, second] {
        let (start, rest) = half.split_first().unwrap();
        attempt.pen_down(*start);
        for p in rest {
            attempt.pen_move(*p);
        }
        attempt.pen_up();
    }
    clock.advance(Duration::from_millis(7_300));

    let result = attempt.finish().unwrap();
    assert_eq!(attempt.strokes().len(), 2);
    assert_eq!(result.score, 100);
    assert_eq!(result.duration_secs, 7);
}

#[test]
fn letter_dotted_with_taps_is_scored_like_the_drawing() {
    let clock = ManualClock::default();
    let config = ScoringConfig::default();
    let exercise = ExerciseId::Letter('L');
    let guide = exercise.guide().unwrap();
    let taps: Vec<Stroke> = expand_guide(&guide, config.guide_step)
        .points()
        .iter()
        .step_by(2)
        .map(|p| Stroke::new(vec![*p]))
        .collect();

    let mut attempt = TracingAttempt::for_exercise(exercise, config.clone(), &clock).unwrap();
    for tap in &taps {
        attempt.pen_down(tap.points()[0]);
        attempt.pen_up();
    }

    let result = attempt.finish().unwrap();
    assert!(result.score > 0);
    assert_eq!(result.score, score_drawing(&taps, &guide, &config));
}

#[test]
fn skipped_dot_costs_one_penalty() {
    let clock = ManualClock::default();
    let dots = ExerciseId::DotPattern(tracewise_scoring::DotPatternKind::House)
        .dots()
        .unwrap();
    let mut sequence = DotSequence::new(dots.clone(), &clock).unwrap();

    assert!(matches!(sequence.tap(dots[0]), TapOutcome::Connected { dot: 0 }));
    clock.advance(Duration::from_millis(500));
    assert_eq!(sequence.tap(dots[2]), TapOutcome::Wrong { dot: 2 });
    assert_eq!(sequence.next_expected(), 1);
    assert_eq!(sequence.wrong_taps(), 1);

    let mut last = TapOutcome::Missed;
    for dot in &dots[1..] {
        clock.advance(Duration::from_millis(500));
        last = sequence.tap(*dot);
    }

    assert_eq!(sequence.state(), DotState::Complete);
    let TapOutcome::Completed { result, .. } = last else {
        unreachable!("last tap should complete the pattern");
    };
    assert_eq!(result.score, 92);
    assert_eq!(sequence.result(), Some(result));
}

#[test]
fn config_round_trips_through_json() {
    let config = ScoringConfig::default().scaled(1.5);
    let json = serde_json::to_string(&config).unwrap();
    let back: ScoringConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
