use baghchal::{
    board::{BoardDimensions, Cell, Event, EventLog, Move, Piece, Position},
    game::{CannotMoveReason, Game, GameConfig, Status, TurnOutcome},
    strategy::{PredatorStrategy, PreyStrategy},
};

#[test]
fn new_game_is_set_up() {
    let game = Game::new(GameConfig::default());
    assert_eq!(game.current(), Piece::Prey);
    assert_eq!(game.status(), Status::InProgress);
    assert_eq!(game.board().count(Piece::Predator), 4);
    assert_eq!(game.board().count(Piece::Prey), 20);
    assert_eq!(game.captured(), 0);
    assert_eq!(game.legal_moves(Piece::Predator).len(), 12);
}

#[test]
fn moves_are_checked() {
    let mut game = Game::new(GameConfig::default());

    let err = game
        .apply(Piece::Predator, Move::new((1, 1), (2, 2)))
        .unwrap_err();
    assert_eq!(err.reason(), CannotMoveReason::OutOfTurn);
    assert_eq!(err.side(), Piece::Predator);

    // Destination occupied.
    let err = game.apply(Piece::Prey, Move::new((0, 1), (0, 2))).unwrap_err();
    assert_eq!(err.reason(), CannotMoveReason::IllegalMove);
    assert_eq!(err.into_move(), Some(Move::new((0, 1), (0, 2))));

    // Nothing to move at the start.
    let err = game.apply(Piece::Prey, Move::new((0, 0), (3, 3))).unwrap_err();
    assert_eq!(err.reason(), CannotMoveReason::IllegalMove);

    assert_eq!(game.apply(Piece::Prey, Move::new((0, 1), (3, 3))), Ok(None));
    assert_eq!(game.current(), Piece::Predator);
    assert_eq!(game.turns(), 1);
    assert_eq!(game.board().get(Position::new(3, 3)), Cell::Occupied(Piece::Prey));
}

#[test]
fn captures_are_counted_and_reported() {
    let log = EventLog::new();
    let mut game = Game::with_listener(GameConfig::default(), log.clone());

    game.apply(Piece::Prey, Move::new((3, 0), (2, 2))).unwrap();
    assert_eq!(
        game.apply(Piece::Predator, Move::new((1, 1), (3, 3))),
        Ok(Some(Piece::Prey))
    );
    assert_eq!(game.captured(), 1);
    assert_eq!(game.board().get(Position::new(2, 2)), Cell::Empty);
    assert_eq!(
        log.events(),
        vec![Event::Step(Piece::Prey), Event::Jump(Piece::Predator)]
    );
    assert_eq!(game.status(), Status::InProgress);
}

#[test]
fn predator_wins_at_capture_limit() {
    let mut game = Game::new(GameConfig {
        capture_limit: 1,
        ..GameConfig::default()
    });
    game.apply(Piece::Prey, Move::new((3, 0), (2, 2))).unwrap();
    game.apply(Piece::Predator, Move::new((1, 1), (3, 3))).unwrap();
    assert_eq!(game.winner(), Some(Piece::Predator));
    assert!(game.is_over());

    let err = game.apply(Piece::Prey, Move::new((0, 1), (4, 4))).unwrap_err();
    assert_eq!(err.reason(), CannotMoveReason::AlreadyOver);
    assert_eq!(game.pass(Piece::Prey).unwrap_err().reason(), CannotMoveReason::AlreadyOver);
}

#[test]
fn prey_wins_when_predator_is_stuck() {
    // On a single cell board the predator has nowhere to go and the prey nowhere to enter.
    let mut game = Game::new(GameConfig {
        dimensions: BoardDimensions::new(1, 1),
        ..GameConfig::default()
    });
    assert_eq!(game.board().count(Piece::Prey), 4);
    assert!(game.legal_moves(Piece::Prey).is_empty());

    let mut prey = PreyStrategy::from_seed(0);
    assert_eq!(game.play_turn(&mut prey), Ok(TurnOutcome::Passed));
    assert_eq!(game.winner(), Some(Piece::Prey));
}

#[test]
fn turn_limit_draws() {
    let mut game = Game::new(GameConfig {
        turn_limit: 2,
        ..GameConfig::default()
    });
    game.pass(Piece::Prey).unwrap();
    assert_eq!(game.status(), Status::InProgress);
    game.pass(Piece::Predator).unwrap();
    assert_eq!(game.status(), Status::Drawn);
    assert_eq!(game.winner(), None);
}

#[test]
fn computer_game_runs_to_the_end() {
    for seed in 0..4 {
        let mut game = Game::new(GameConfig::default());
        let mut prey = PreyStrategy::from_seed(seed);
        let mut predator = PredatorStrategy::from_seed(seed + 100);
        while !game.is_over() {
            let outcome = match game.current() {
                Piece::Prey => game.play_turn(&mut prey),
                Piece::Predator => game.play_turn(&mut predator),
            };
            assert!(outcome.is_ok(), "{:?}", outcome);
        }
        assert!(game.turns() <= game.config().turn_limit);
        assert!(game.board().count(Piece::Prey) + game.captured() <= 20);
    }
}
