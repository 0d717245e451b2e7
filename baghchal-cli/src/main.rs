use std::{
    fmt,
    io::{self, BufRead, BufReader, Stdin, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use baghchal::{
    board::{Board, BoardDimensions, Cell, Event, EventLog, Move, Piece, Position},
    game::{Game, GameConfig, Status, TurnOutcome},
    strategy::{Player, PredatorStrategy, PreyStrategy},
};

fn main() -> io::Result<()> {
    env_logger::init();

    let matches = App::new("Bagh-Chal")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line hunt game: predators jump prey, prey try to trap the predators.")
        .arg(
            Arg::with_name("side")
                .short("s")
                .long("side")
                .value_name("SIDE")
                .help("pre-specify which side you play, or watch the computer play itself")
                .takes_value(true)
                .possible_values(&["predator", "tiger", "prey", "goat", "watch", "none"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("size")
                .long("size")
                .value_name("N")
                .help("size of the square playable area")
                .takes_value(true)
                .default_value("5")
                .validator(is_board_size),
        )
        .arg(
            Arg::with_name("capture_limit")
                .short("c")
                .long("capture-limit")
                .value_name("COUNT")
                .help("number of captures the predators need to win")
                .takes_value(true)
                .default_value("5")
                .validator(is_number),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for the computer players, to replay a game")
                .takes_value(true)
                .validator(is_number),
        )
        .get_matches();

    let config = match build_config(&matches) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(2);
        }
    };
    let seed = match matches.value_of("seed") {
        Some(seed) => seed.parse().unwrap(),
        None => rand::random(),
    };
    println!("Using seed {}.", seed);

    let mut input = InputReader::new(BufReader::new(io::stdin()));
    let human = choose_side(&matches, &mut input)?;

    let computer_prey = || Box::new(PreyStrategy::from_seed(seed)) as Box<dyn Player>;
    let computer_predator =
        || Box::new(PredatorStrategy::from_seed(seed.wrapping_add(1))) as Box<dyn Player>;
    let (mut prey, mut predator) = match human {
        Some(Piece::Prey) => (
            Box::new(HumanPlayer::new(Piece::Prey, input)) as Box<dyn Player>,
            computer_predator(),
        ),
        Some(Piece::Predator) => (
            computer_prey(),
            Box::new(HumanPlayer::new(Piece::Predator, input)) as Box<dyn Player>,
        ),
        None => (computer_prey(), computer_predator()),
    };

    let events = EventLog::new();
    let mut game = Game::with_listener(config, events.clone());
    println!();
    println!("Prey move first. Type help or ? on your turn for commands.");
    while !game.is_over() {
        println!();
        show_board(game.board());
        let side = game.current();
        let player = match side {
            Piece::Prey => &mut prey,
            Piece::Predator => &mut predator,
        };
        let computer = player.is_computer();
        match game.play_turn(player) {
            Ok(TurnOutcome::Moved { mv, .. }) if computer => {
                println!("Computer {} plays {}", SideName(side), mv)
            }
            Ok(TurnOutcome::Moved { .. }) => {}
            Ok(TurnOutcome::Passed) => println!("{} has no move and passes.", SideName(side)),
            Err(err) => println!("Move rejected: {}", err),
        }
        for event in events.drain() {
            match event {
                Event::Jump(_) => println!(
                    "A prey was captured! ({} of {})",
                    game.captured(),
                    game.config().capture_limit
                ),
                other => debug!("board event: {:?}", other),
            }
        }
    }

    println!();
    show_board(game.board());
    match game.status() {
        Status::Won(side) if Some(side) == human => println!("You win!"),
        Status::Won(side) => println!("The {} win.", SideName(side)),
        Status::Drawn => println!("Draw: turn limit reached."),
        Status::InProgress => unreachable!(),
    }
    Ok(())
}

/// Validator for numeric arguments.
fn is_number(v: String) -> Result<(), String> {
    v.parse::<u64>()
        .map(|_| ())
        .map_err(|_| format!("expected a number, got {}", v))
}

/// Largest playable area offered on the command line. Keeps the grid, border ring
/// included, within two digit coordinates.
const MAX_SIZE: usize = 97;

/// Validator for the board size.
fn is_board_size(v: String) -> Result<(), String> {
    match v.parse::<usize>() {
        Ok(size) if (1..=MAX_SIZE).contains(&size) => Ok(()),
        _ => Err(format!("expected a size from 1 to {}, got {}", MAX_SIZE, v)),
    }
}

/// Build the [`GameConfig`] from command line arguments.
fn build_config(matches: &ArgMatches) -> Result<GameConfig, String> {
    // Validators already checked that these parse.
    let size: usize = matches.value_of("size").unwrap().parse().unwrap();
    let capture_limit = matches.value_of("capture_limit").unwrap().parse().unwrap();
    let dimensions = BoardDimensions::try_new(size, size).map_err(|err| err.to_string())?;
    Ok(GameConfig {
        dimensions,
        capture_limit,
        ..GameConfig::default()
    })
}

/// Choose which side the human plays, based on either args or cli input. `None` means the
/// computer plays both sides.
fn choose_side<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<Option<Piece>> {
    Ok(if let Some(clichoice) = matches.value_of("side") {
        match clichoice.to_ascii_lowercase().as_str() {
            "predator" | "tiger" => Some(Piece::Predator),
            "prey" | "goat" => Some(Piece::Prey),
            "watch" | "none" => None,
            _ => unreachable!(),
        }
    } else {
        input.read_input_lower("Play as predator or prey? (predator/PREY/watch)", |input| {
            match input {
                "predator" | "tiger" | "t" => Some(Some(Piece::Predator)),
                "prey" | "goat" | "g" | "" => Some(Some(Piece::Prey)),
                "watch" | "w" | "none" => Some(None),
                _ => {
                    println!("Invalid selection.");
                    None
                }
            }
        })?
    })
}

/// Player driven by commands typed on the terminal.
struct HumanPlayer {
    side: Piece,
    input: InputReader<BufReader<Stdin>>,
}

impl HumanPlayer {
    fn new(side: Piece, input: InputReader<BufReader<Stdin>>) -> Self {
        Self { side, input }
    }
}

impl Player for HumanPlayer {
    fn play(&mut self, board: &Board) -> Option<Move> {
        enum Command {
            Move(Move),
            Place(Position),
            Pass,
            Moves,
            Help,
            Quit,
        }
        /// Matcher for `x,y x,y` moves.
        static MOVE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)(?:move\s+)?
        (?P<x1>[0-9]+)(?:\s*,\s*|\s+)(?P<y1>[0-9]+)\s*
        (?:(?:to|->)\s*|\s)\s*
        (?P<x2>[0-9]+)(?:\s*,\s*|\s+)(?P<y2>[0-9]+)$",
            )
            .unwrap()
        });
        /// Matcher for placing a prey from the border.
        static PLACE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)(?:place|put|enter)\s+
        (?:(?:at|on|to|->)\s+)?
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$",
            )
            .unwrap()
        });

        let side = self.side;
        loop {
            let prompt = format!("{} >", SideName(side));
            let cmd = self.input.read_input_lower(&prompt, |input| match input {
                "?" | "help" | "h" => Some(Command::Help),
                "moves" | "m" => Some(Command::Moves),
                "pass" => Some(Command::Pass),
                "quit" | "exit" | "q" => Some(Command::Quit),
                other => {
                    let coord = |captures: &regex::Captures, name: &str| {
                        captures.name(name).unwrap().as_str().parse::<i32>().ok()
                    };
                    if let Some(captures) = MOVE.captures(other) {
                        match (
                            coord(&captures, "x1"),
                            coord(&captures, "y1"),
                            coord(&captures, "x2"),
                            coord(&captures, "y2"),
                        ) {
                            (Some(x1), Some(y1), Some(x2), Some(y2)) => {
                                Some(Command::Move(Move::new((x1, y1), (x2, y2))))
                            }
                            _ => {
                                println!("Coordinates out of range.");
                                None
                            }
                        }
                    } else if let Some(captures) = PLACE.captures(other) {
                        match (coord(&captures, "x"), coord(&captures, "y")) {
                            (Some(x), Some(y)) => Some(Command::Place(Position::new(x, y))),
                            _ => {
                                println!("Coordinates out of range.");
                                None
                            }
                        }
                    } else {
                        println!("Invalid command \"{}\". Use '?' for help", other);
                        None
                    }
                }
            });
            let cmd = match cmd {
                Ok(cmd) => cmd,
                Err(err) => {
                    eprintln!("failed to read input: {}", err);
                    process::exit(1);
                }
            };

            match cmd {
                Command::Move(mv) if !board.get(mv.p1()).holds(side) => {
                    println!("There is no {} at {}.", side, mv.p1());
                }
                Command::Move(mv) if board.is_valid(&mv, side) => return Some(mv),
                Command::Move(_) => println!("Illegal move."),
                Command::Place(_) if side != Piece::Prey => {
                    println!("Only prey are placed from the border.");
                }
                Command::Place(to) => match board.border_positions(Piece::Prey).next() {
                    None => println!("All prey are already on the board."),
                    Some(from) => {
                        let mv = Move::new(from, to);
                        if board.is_valid(&mv, side) {
                            return Some(mv);
                        }
                        println!("Cannot place a prey at {}.", to);
                    }
                },
                Command::Pass if board.legal_moves(side).is_empty() => return None,
                Command::Pass => println!("You still have legal moves; type moves to list them."),
                Command::Moves => {
                    let moves = board.legal_moves(side);
                    if moves.is_empty() {
                        println!("No legal moves. Type pass.");
                    }
                    for mv in moves {
                        println!("    {}", mv);
                    }
                }
                Command::Quit => process::exit(0),
                Command::Help => {
                    println!(
                        "Available Commands:
    <x>,<y> <x>,<y>     move the piece at the first position to the second.
    place <x>,<y>       bring a prey from the border onto the board.
    moves               list your legal moves.
    pass                skip your turn if you have no legal moves.
    quit                leave the game.

Predators (T) step along the lines or jump over a prey to capture it.
Prey (g) enter from the border anywhere on the board, and only move along
the lines once every prey has entered. Diagonal lines only leave the
intersections marked +."
                    );
                }
            }
        }
    }

    fn is_computer(&self) -> bool {
        false
    }
}

/// Print out the board, border ring included.
fn show_board(board: &Board) {
    print!("   ");
    for x in 0..board.dimensions().grid_width() {
        print!("{:^3}", x);
    }
    println!();
    for (y, row) in board.iter_rows().enumerate() {
        print!("{:>2} ", y);
        for (pos, cell) in row {
            print!("{:^3}", CellSymbol(board, pos, cell));
        }
        println!();
    }
}

/// Display helper that prints a single cell of the board.
struct CellSymbol<'a>(&'a Board, Position, Cell);

impl fmt::Display for CellSymbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let CellSymbol(board, pos, cell) = *self;
        f.pad(match cell {
            Cell::Occupied(Piece::Predator) => "T",
            Cell::Occupied(Piece::Prey) => "g",
            Cell::Empty if !board.positions().is_board(&pos) => "",
            Cell::Empty if pos.has_even_coord_sum() => "+",
            Cell::Empty => ".",
            Cell::Invalid => "?",
        })
    }
}

/// Display helper that prints the plural name of a side.
struct SideName(Piece);

impl fmt::Display for SideName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            Piece::Predator => "predators",
            Piece::Prey => "prey",
        })
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            process::exit(0);
        }
        Ok(())
    }
}
