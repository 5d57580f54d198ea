//! Tests for the interactive terminal session.

use ar_tictactoe::{Cell, GameStatus, Mode, Symbol};
use ar_tictactoe_cli::{Overrides, Session, Settings};

fn settings(cross: Mode, circle: Mode) -> Settings {
    Settings::default().with_overrides(Overrides {
        cross: Some(cross),
        circle: Some(circle),
        seed: Some(4),
        delay_ms: Some(0),
    })
}

async fn run(settings: &Settings, input: &str) -> (Session<Vec<u8>>, String) {
    let mut session = Session::new(settings, Vec::new());
    session
        .run(tokio::io::BufReader::new(input.as_bytes()))
        .await
        .expect("Session runs");
    let output = String::from_utf8(session.output().clone()).expect("UTF-8 output");
    (session, output)
}

#[tokio::test]
async fn test_two_humans_play_to_a_win() {
    let (session, output) = run(&settings(Mode::Human, Mode::Human), "1\n5\n2\n9\n3\nq\n").await;

    assert_eq!(session.engine().status(), GameStatus::Won(Symbol::Cross));
    assert!(output.contains("Waiting for X to play"));
    assert!(output.contains("O played Center (5)"));
    assert!(output.contains("X wins!"));
    assert!(output.contains("X|X|X"));
    assert!(output.ends_with("Bye!\n"));
}

#[tokio::test]
async fn test_occupied_cell_reports_error() {
    let (session, output) = run(&settings(Mode::Human, Mode::Human), "5\n5\nq\n").await;

    assert!(output.contains("Cell Center (5) is already occupied"));
    assert_eq!(session.engine().state().move_count(), 1);
    assert_eq!(session.engine().current_turn(), Symbol::Circle);
}

#[tokio::test]
async fn test_automated_circle_answers() {
    let (session, output) = run(&settings(Mode::Human, Mode::Automated), "5\nq\n").await;

    assert!(output.contains("O is thinking..."));
    assert_eq!(session.engine().state().occupied_by(Symbol::Circle).len(), 1);
    assert_eq!(session.engine().current_turn(), Symbol::Cross);
}

#[tokio::test]
async fn test_automated_cross_opens_before_prompt() {
    let (session, output) = run(&settings(Mode::Automated, Mode::Human), "q\n").await;

    // X opened automatically before the first prompt.
    assert_eq!(session.engine().state().occupied_by(Symbol::Cross).len(), 1);
    assert!(output.contains("X is thinking..."));
}

#[tokio::test]
async fn test_toggle_requires_confirmation() {
    let (session, output) = run(&settings(Mode::Human, Mode::Human), "5\no\nn\nq\n").await;

    assert!(output.contains("Mode unchanged"));
    assert_eq!(session.engine().player_mode(Symbol::Circle), Mode::Human);
    assert_eq!(session.engine().state().move_count(), 1);
}

#[tokio::test]
async fn test_confirmed_toggle_restarts() {
    let (session, output) = run(&settings(Mode::Human, Mode::Human), "5\nx\ny\nq\n").await;

    assert!(output.contains("X is now automated"));
    assert_eq!(session.engine().player_mode(Symbol::Cross), Mode::Automated);
    // Fresh game: automated X has made exactly the opening move.
    assert_eq!(session.engine().state().move_count(), 1);
    assert_eq!(session.engine().current_turn(), Symbol::Circle);
}

#[tokio::test]
async fn test_all_automated_finishes_without_input() {
    let (session, output) = run(&settings(Mode::Automated, Mode::Automated), "").await;

    assert!(session.engine().is_game_over());
    assert!(output.contains("wins!") || output.contains("It's a tie!"));
}

#[tokio::test]
async fn test_input_after_game_over_restarts() {
    let (session, output) =
        run(&settings(Mode::Human, Mode::Human), "1\n5\n2\n9\n3\n\n7\nq\n").await;

    assert!(output.contains("X wins!"));
    assert_eq!(session.engine().status(), GameStatus::InProgress);
    assert_eq!(session.engine().state().occupied_by(Symbol::Cross), &[Cell::BottomLeft]);
}

#[tokio::test]
async fn test_hint_suggests_block() {
    let (_, output) = run(&settings(Mode::Human, Mode::Human), "1\n5\n2\nh\nq\n").await;

    assert!(output.contains("Try Top-right (3)"));
}

#[tokio::test]
async fn test_unknown_command() {
    let (_, output) = run(&settings(Mode::Human, Mode::Human), "dance\nq\n").await;

    assert!(output.contains("Unknown command: dance"));
}

#[tokio::test]
async fn test_hint_keeps_seeded_replies() {
    let settings = settings(Mode::Human, Mode::Automated);
    let (hinted, _) = run(&settings, "h\n5\nh\nq\n").await;
    let (plain, _) = run(&settings, "5\nq\n").await;

    assert_eq!(hinted.engine().state().move_count(), 2);
    assert_eq!(hinted.engine().state(), plain.engine().state());
}
