use dioxus::prelude::Key;
use services::{SessionFactory, SessionSnapshot};
use speedmath_core::model::{InputEvent, SESSION_LENGTH};

use super::test_harness::setup_drill_harness;

const SEED: u64 = 2021;

/// The drill the harness will show, drawn from an identically seeded factory.
fn expected_drill() -> SessionSnapshot {
    SessionFactory::from_seed(Some(SEED)).start().snapshot()
}

/// The drill shown after one restart.
fn expected_second_drill() -> SessionSnapshot {
    let factory = SessionFactory::from_seed(Some(SEED));
    let _first = factory.start();
    factory.start().snapshot()
}

fn expected_answer(snapshot: &SessionSnapshot, index: usize) -> String {
    let row = &snapshot.rows[index];
    let (left, right) = row
        .text
        .trim_end_matches(" = ")
        .split_once(" + ")
        .expect("prompt shape");
    let sum: u16 = left.parse::<u16>().unwrap() + right.parse::<u16>().unwrap();
    sum.to_string()
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_renders_fresh_session() {
    let mut harness = setup_drill_harness(SEED);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert_eq!(html.matches("drill-row--current").count(), 1);
    assert_eq!(
        html.matches("drill-row--upcoming").count(),
        SESSION_LENGTH - 1
    );
    let first = expected_drill().rows[0].padded_text();
    assert!(html.contains(&first), "missing {first:?} in {html}");
    assert!(!html.contains("Drill complete"));
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_scores_queued_answers() {
    let mut harness = setup_drill_harness(SEED);
    harness.rebuild();
    let expected = expected_drill();

    harness.answer(&expected_answer(&expected, 0));
    // A wrong answer: the true sum is at least 2, so "1" never matches.
    harness.answer("1");
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(harness.current_index(), 2);
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert_eq!(html.matches("drill-row--correct").count(), 1);
    assert_eq!(html.matches("drill-row--incorrect").count(), 1);
    assert!(html.contains("translateY(-200px)"), "rows not scrolled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_ignores_blank_submit() {
    let mut harness = setup_drill_harness(SEED);
    harness.rebuild();

    let input = harness.input();
    input.send(InputEvent::RemoveLast).unwrap();
    input.send(InputEvent::Submit).unwrap();
    harness.drive_async().await;

    assert_eq!(harness.current_index(), 0);
    assert!(harness.render().contains("Score: 0"));
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_shows_summary_when_complete() {
    let mut harness = setup_drill_harness(SEED);
    harness.rebuild();
    let expected = expected_drill();

    for index in 0..SESSION_LENGTH {
        harness.answer(&expected_answer(&expected, index));
    }
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(harness.current_index(), SESSION_LENGTH);
    assert!(html.contains("Drill complete"), "missing summary in {html}");
    assert!(html.contains("50 / 50 correct"), "missing counts in {html}");
    assert!(html.contains("Score: 50"), "missing score in {html}");
    assert!(html.contains("New drill"));
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_new_drill_starts_fresh_session() {
    let mut harness = setup_drill_harness(SEED);
    harness.rebuild();
    let first = expected_drill();

    for index in 0..SESSION_LENGTH {
        harness.answer(&expected_answer(&first, index));
    }
    harness.drive_async().await;
    harness.drive_async().await;
    assert_eq!(harness.current_index(), SESSION_LENGTH);

    harness.restart();
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(harness.current_index(), 0);
    assert!(html.contains("Score: 0"), "missing reset score in {html}");
    assert!(!html.contains("Drill complete"));

    let second = expected_second_drill();
    let first_prompts: Vec<String> = first.rows.iter().map(|row| row.padded_text()).collect();
    let second_prompts: Vec<String> = second.rows.iter().map(|row| row.padded_text()).collect();
    assert_eq!(harness.row_prompts(), second_prompts);
    assert_ne!(harness.row_prompts(), first_prompts);

    // The same sender keeps feeding the replacement session.
    harness.answer(&expected_answer(&second, 0));
    harness.drive_async().await;
    harness.drive_async().await;

    assert_eq!(harness.current_index(), 1);
    assert!(harness.render().contains("Score: 1"));
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_key_presses_reach_session() {
    let mut harness = setup_drill_harness(SEED);
    harness.rebuild();
    let expected = expected_drill();

    assert!(!harness.press(Key::Character("a".to_string())));
    assert!(!harness.press(Key::Escape));
    assert!(harness.press(Key::Character("9".to_string())));
    assert!(harness.press(Key::Backspace));
    for ch in expected_answer(&expected, 0).chars() {
        assert!(harness.press(Key::Character(ch.to_string())));
    }
    assert!(harness.press(Key::Enter));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(harness.current_index(), 1);
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert_eq!(html.matches("drill-row--correct").count(), 1);
}
