use holdem_rs::betting::ActionKind;
use holdem_rs::config::GameConfig;
use holdem_rs::error::PokerError;
use holdem_rs::events::LogPublisher;
use holdem_rs::game::Phase;
use holdem_rs::repository::{InMemoryGameRepository, InMemoryPlayerRepository};
use holdem_rs::service::{GameService, PlayerActionCommand};

/// Plays hands at a three-handed table until one player is left (or a hand
/// limit is hit), everyone checking or calling. Set `RUST_LOG=info` to see
/// the event stream.
fn main() -> Result<(), PokerError> {
    env_logger::init();

    let mut config = GameConfig::from_env();
    config.deck_seed.get_or_insert(42);
    config.validate()?;
    let stack = config.min_stack();

    let service = GameService::new(
        config,
        InMemoryGameRepository::new(),
        InMemoryPlayerRepository::new(),
        LogPublisher,
    )?;

    let ids = ["alice", "bob", "carol"]
        .into_iter()
        .map(|name| service.register_player(name, stack).map(|p| p.id()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut view = service.start_game(&ids)?;
    let game_id = view.id;
    println!("holdem-rs {} | game {game_id}", holdem_rs::VERSION);

    for _ in 0..20 {
        while let Some(actor) = view.current_player {
            let seat = view
                .seats
                .iter()
                .find(|s| s.id == actor)
                .ok_or_else(|| PokerError::not_found("player", actor))?;
            let to_call = view.current_bet.saturating_sub(seat.committed);
            let action = match to_call {
                0 => ActionKind::Check,
                n if n <= seat.chips => ActionKind::Call,
                _ => ActionKind::AllIn,
            };
            let command = PlayerActionCommand { game_id, player_id: actor, action, amount: 0 };
            service.player_action(command)?;
            view = service.game_state(game_id)?;
        }

        view = service.start_new_hand(game_id)?;
        println!(
            "hand #{}: stacks {}",
            view.hand_number,
            view.seats
                .iter()
                .map(|s| format!("{}={}", s.name, s.chips))
                .collect::<Vec<_>>()
                .join(" ")
        );
        if view.phase == Phase::Finished {
            break;
        }
    }

    for (place, p) in service.leaderboard(3)?.iter().enumerate() {
        println!("{}. {} {}", place + 1, p.name(), p.chips());
    }
    Ok(())
}
