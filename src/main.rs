//! Gomoku self-play
//!
//! Plays the agent against itself and prints the final position.
//! Opening moves may be given as arguments (`d4 c3 ...`).
//!
//! Environment:
//! - `GOMOKU_SIZE`: board size (default 7)
//! - `GOMOKU_SEED`: seed for the agents' random picks
//! - `RUST_LOG`: log filter, e.g. `info` for one line per move

use std::env;
use std::error::Error;

use gomoku::board::{format_move, parse_move, MAX_SIZE};
use gomoku::rules::WIN_LENGTH;
use gomoku::{Agent, AgentConfig, Board, GomokuRules, Move, Outcome, RuleSet, GOMOKU_SIZE};

fn env_number<T: std::str::FromStr>(name: &str) -> Result<Option<T>, Box<dyn Error>> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| format!("{name}: cannot parse '{value}'").into()),
        Err(_) => Ok(None),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let size = env_number::<usize>("GOMOKU_SIZE")?.unwrap_or(GOMOKU_SIZE);
    if !(WIN_LENGTH..=MAX_SIZE).contains(&size) {
        return Err(
            format!("GOMOKU_SIZE must be in {WIN_LENGTH}..={MAX_SIZE}, got {size}").into(),
        );
    }
    let seed = env_number::<u64>("GOMOKU_SEED")?;

    let rules = GomokuRules;
    let mut board = Board::new(size);
    let mut agent = Agent::with_config(AgentConfig {
        seed,
        ..AgentConfig::default()
    });
    let properties = agent.get_properties();
    println!("{} {}", properties.name, properties.version);

    for text in env::args().skip(1) {
        let mv = parse_move(&text, size)?;
        let color = board.current_player();
        if mv == Move::Pass || !rules.play(&mut board, mv, color) {
            return Err(format!("illegal opening move '{text}'").into());
        }
        agent.update(mv);
    }

    let outcome = play_out(&rules, &mut board, &mut agent)?;
    println!("{board}");
    match outcome {
        Outcome::Win(color) => println!("{color:?} wins after {} moves", board.stone_count()),
        Outcome::Draw => println!("Draw after {} moves", board.stone_count()),
        Outcome::Ongoing => println!("{:?} passes", board.current_player()),
    }
    Ok(())
}

/// Let the agent play both sides until the game is over or it passes.
fn play_out<R: RuleSet>(
    rules: &R,
    board: &mut Board,
    agent: &mut Agent,
) -> Result<Outcome, Box<dyn Error>> {
    loop {
        let outcome = rules.outcome(board);
        if outcome.is_over() {
            return Ok(outcome);
        }

        let color = board.current_player();
        let result = agent.get_move_with_stats(board, color);
        let Some(point) = result.best_move else {
            return Ok(outcome);
        };
        let mv = Move::Play(point);
        println!(
            "{:>3}. {:?} {} ({:?})",
            board.stone_count() + 1,
            color,
            format_move(mv, board.size()),
            result.source
        );
        if !rules.play(board, mv, color) {
            let text = format_move(mv, board.size());
            return Err(format!("agent chose illegal move {text}").into());
        }
    }
}
