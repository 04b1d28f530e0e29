//! Move application: sowing, capture, extra turn, finish detection

use crate::board::{Board, Player, Turn};

/// A rejected move. The board is left untouched in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The requesting player is not the board's next player
    #[error("it is not {player}'s turn")]
    TurnMismatch { player: Player },
    /// The selected house holds no stones
    #[error("house {house} is empty")]
    EmptyHouse { house: usize },
    /// The selected house is outside the playable range
    #[error("house {house} is not on the board")]
    InvalidHouse { house: usize },
}

/// Apply one move: `player` sows the stones of their `house` (1-based).
///
/// Returns the successor board; the input is never modified. On a
/// finished board this is a no-op returning a copy, whatever the
/// arguments.
pub fn apply_move(board: &Board, player: Player, house: usize) -> Result<Board, GameError> {
    let mover = match board.turn {
        Turn::Finished => return Ok(board.clone()),
        Turn::Player(p) => p,
    };
    if mover != player {
        return Err(GameError::TurnMismatch { player });
    }

    let houses = board.houses();
    if house < 1 || house > houses {
        return Err(GameError::InvalidHouse { house });
    }

    let mut own = board.half(player).to_vec();
    let mut opp = board.half(player.opponent()).to_vec();

    let stones = own[house - 1];
    if stones == 0 {
        return Err(GameError::EmptyHouse { house });
    }
    own[house - 1] = 0;

    // Sowing ring of 2H+1 positions, 0-based: 0..H-1 the mover's houses,
    // H the mover's store, H+1..2H the opponent's houses. The opponent's
    // store is not on the ring.
    let ring = 2 * houses + 1;
    let mut pos = house - 1;
    for _ in 0..stones {
        pos = (pos + 1) % ring;
        if pos <= houses {
            own[pos] += 1;
        } else {
            opp[pos - houses - 1] += 1;
        }
    }

    // The turn passes unless the last stone landed in the mover's store
    let next = if pos == houses {
        Turn::Player(player)
    } else {
        Turn::Player(player.opponent())
    };

    // Landing in an own house that was empty before this pass captures
    // the mirrored opponent house into the mover's store
    if pos < houses && own[pos] == 1 {
        let mirror = houses - 1 - pos;
        own[houses] += opp[mirror];
        opp[mirror] = 0;
    }

    let (top, bottom) = match player {
        Player::Top => (own, opp),
        Player::Bottom => (opp, own),
    };
    let mut board = Board {
        id: board.id,
        turn: next,
        top,
        bottom,
    };

    // If the side about to move has nothing left to sow, the other side
    // sweeps its remaining stones into its own store and the game ends
    if let Turn::Player(to_move) = board.turn {
        if board.half(to_move)[..houses].iter().all(|&s| s == 0) {
            let other = to_move.opponent();
            let total: u32 = board.half(other).iter().sum();
            let mut swept = vec![0; houses + 1];
            swept[houses] = total;
            match other {
                Player::Top => board.top = swept,
                Player::Bottom => board.bottom = swept,
            }
            board.turn = Turn::Finished;
        }
    }

    Ok(board)
}
