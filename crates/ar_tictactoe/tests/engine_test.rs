//! Tests for the game engine lifecycle.

use ar_tictactoe::{
    Cell, EventLog, GameEngine, GameEvent, GameRng, GameStatus, InvalidMove, Mode, PlayerConfig,
    Symbol,
};

fn human_game() -> GameEngine<EventLog, GameRng> {
    let mut engine =
        GameEngine::with_parts(PlayerConfig::human(), EventLog::new(), GameRng::new(11));
    engine.reset();
    engine
}

fn play(engine: &mut GameEngine<EventLog, GameRng>, cells: &[Cell]) {
    for &cell in cells {
        engine.apply_move(cell).expect("Valid move");
    }
}

#[test]
fn test_reset_starts_empty_with_cross() {
    let mut engine = human_game();
    play(&mut engine, &[Cell::Center, Cell::TopLeft, Cell::BottomRight]);

    engine.reset();

    assert!(!engine.is_game_over());
    assert_eq!(engine.current_turn(), Symbol::Cross);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.board().occupied_count(), 0);
    assert!(engine.state().occupied_by(Symbol::Cross).is_empty());
    assert!(engine.state().occupied_by(Symbol::Circle).is_empty());
}

#[test]
fn test_reset_after_win_clears_outcome() {
    let mut engine = human_game();
    play(
        &mut engine,
        &[Cell::TopLeft, Cell::Center, Cell::TopCenter, Cell::BottomLeft, Cell::TopRight],
    );
    assert_eq!(engine.winner(), Some(Symbol::Cross));

    engine.reset();

    assert_eq!(engine.winner(), None);
    assert!(!engine.is_tie());
    assert!(!engine.is_game_over());
}

#[test]
fn test_turns_alternate() {
    let mut engine = human_game();
    assert_eq!(engine.current_turn(), Symbol::Cross);
    engine.apply_move(Cell::Center).unwrap();
    assert_eq!(engine.current_turn(), Symbol::Circle);
    engine.apply_move(Cell::TopLeft).unwrap();
    assert_eq!(engine.current_turn(), Symbol::Cross);
    assert_eq!(engine.state().occupied_by(Symbol::Cross), &[Cell::Center]);
    assert_eq!(engine.state().occupied_by(Symbol::Circle), &[Cell::TopLeft]);
}

#[test]
fn test_circle_win_regardless_of_cross_cells() {
    let mut engine = human_game();
    // Circle takes the top row while Cross scatters.
    play(
        &mut engine,
        &[
            Cell::Center,
            Cell::TopLeft,
            Cell::BottomRight,
            Cell::TopCenter,
            Cell::MiddleLeft,
        ],
    );
    assert!(!engine.is_game_over());

    let status = engine.apply_move(Cell::TopRight).unwrap();

    assert_eq!(status, GameStatus::Won(Symbol::Circle));
    assert_eq!(engine.winner(), Some(Symbol::Circle));
    assert!(engine.is_game_over());
    assert!(!engine.is_tie());
}

#[test]
fn test_tie_detection() {
    let mut engine = human_game();
    // X O X / X O O / O X X
    play(
        &mut engine,
        &[
            Cell::TopLeft,
            Cell::TopCenter,
            Cell::TopRight,
            Cell::Center,
            Cell::MiddleLeft,
            Cell::MiddleRight,
            Cell::BottomCenter,
            Cell::BottomLeft,
        ],
    );
    engine.observer_mut().drain();

    let status = engine.apply_move(Cell::BottomRight).unwrap();

    assert_eq!(status, GameStatus::Tied);
    assert!(engine.is_tie());
    assert_eq!(engine.winner(), None);
    assert!(engine.is_game_over());
    assert_eq!(
        engine.observer().events(),
        &[
            GameEvent::CellFilled {
                cell: Cell::BottomRight,
                symbol: Symbol::Cross,
            },
            GameEvent::GameTied,
        ]
    );
}

#[test]
fn test_win_on_last_cell_is_not_a_tie() {
    let mut engine = human_game();
    play(
        &mut engine,
        &[
            Cell::TopLeft,
            Cell::TopCenter,
            Cell::MiddleLeft,
            Cell::Center,
            Cell::BottomCenter,
            Cell::TopRight,
            Cell::MiddleRight,
            Cell::BottomRight,
        ],
    );

    let status = engine.apply_move(Cell::BottomLeft).unwrap();

    assert_eq!(status, GameStatus::Won(Symbol::Cross));
    assert!(!engine.is_tie());
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut engine = human_game();
    play(&mut engine, &[Cell::Center, Cell::TopLeft]);
    let before = engine.state().clone();
    let events_before = engine.observer().events().len();

    let result = engine.apply_move(Cell::Center);

    assert_eq!(result, Err(InvalidMove::CellOccupied(Cell::Center)));
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.observer().events().len(), events_before);
}

#[test]
fn test_move_after_game_over_rejected_without_change() {
    let mut engine = human_game();
    play(
        &mut engine,
        &[Cell::TopLeft, Cell::Center, Cell::TopCenter, Cell::BottomLeft, Cell::TopRight],
    );
    let before = engine.state().clone();

    assert_eq!(engine.apply_move(Cell::BottomRight), Err(InvalidMove::GameOver));
    assert_eq!(engine.apply_automated_move(), Err(InvalidMove::GameOver));
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_invalid_move_messages() {
    assert_eq!(
        InvalidMove::CellOccupied(Cell::Center).to_string(),
        "Cell Center (5) is already occupied"
    );
    assert_eq!(InvalidMove::GameOver.to_string(), "Game is already over");
}

#[test]
fn test_queries_are_idempotent() {
    let mut engine = human_game();
    play(&mut engine, &[Cell::Center, Cell::TopLeft, Cell::BottomRight]);

    let over = engine.is_game_over();
    let mode = engine.current_player_mode();
    for _ in 0..5 {
        assert_eq!(engine.is_game_over(), over);
        assert_eq!(engine.current_player_mode(), mode);
    }
}

#[test]
fn test_current_player_mode_follows_turn() {
    let mut engine = GameEngine::with_parts(
        PlayerConfig::new(Mode::Human, Mode::Automated),
        EventLog::new(),
        GameRng::new(5),
    );
    engine.reset();
    assert_eq!(engine.current_player_mode(), Mode::Human);

    engine.apply_move(Cell::Center).unwrap();
    assert_eq!(engine.current_player_mode(), Mode::Automated);
}

#[test]
fn test_mode_switch_then_reset_schedules_automated_cross() {
    let mut engine = human_game();
    play(&mut engine, &[Cell::Center]);

    engine.set_player_mode(Symbol::Cross, Mode::Automated);
    engine.observer_mut().drain();
    engine.reset();

    assert_eq!(engine.player_mode(Symbol::Cross), Mode::Automated);
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(
        engine.observer_mut().drain(),
        vec![
            GameEvent::TurnChanged(Symbol::Cross),
            GameEvent::AutomatedTurnStarted(Symbol::Cross),
        ]
    );
}

#[test]
fn test_default_engine_players() {
    let engine = GameEngine::new();
    assert_eq!(engine.players(), PlayerConfig::default());
    assert_eq!(engine.status(), GameStatus::NotStarted);
    assert!(!engine.is_game_over());
}
