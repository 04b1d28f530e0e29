//! Server-side HTML rendering
//!
//! Plain string rendering, no template engine: each page is a handful of
//! cells and links. Houses the viewer may sow become `/apply` links, so
//! the whole game is playable with nothing but anchors.

use mancala_core::{Board, Player, Turn};

/// Landing page
pub fn index_page() -> String {
    "<!DOCTYPE html>\
     <html><head><title>Mancala</title></head><body>\
     <h1>Mancala</h1>\
     <p><a href=\"/board?player=top\">Start a new game</a></p>\
     </body></html>"
        .to_string()
}

/// Render a board tailored for the requesting player
pub fn board_page(board: &Board, viewer: Player) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html><html><head><title>Mancala</title></head><body>");
    page.push_str(&format!("<h1>Mancala, board {}</h1>", board.id));

    match board.turn {
        Turn::Finished => {
            page.push_str(&format!(
                "<p>Game over. TOP {} / BOTTOM {}</p>",
                board.store(Player::Top),
                board.store(Player::Bottom)
            ));
        }
        Turn::Player(next) => {
            page.push_str(&format!(
                "<p>Viewing as {}. Next to move: {}</p>",
                viewer, next
            ));
        }
    }

    page.push_str("<table border=\"1\" cellpadding=\"8\">");
    page.push_str(&top_row(board, viewer));
    page.push_str(&bottom_row(board, viewer));
    page.push_str("</table>");

    page.push_str(&format!(
        "<p><a href=\"/board?board_id={}&player={}\">Refresh</a></p>",
        board.id, viewer
    ));
    page.push_str("</body></html>");
    page
}

/// TOP's half, houses right to left so sowing runs counterclockwise
fn top_row(board: &Board, viewer: Player) -> String {
    let mut row = String::from("<tr><td>TOP</td>");
    row.push_str(&format!("<td>[{}]</td>", board.store(Player::Top)));
    for house in (1..=board.houses()).rev() {
        row.push_str(&house_cell(board, Player::Top, house, viewer));
    }
    row.push_str("<td></td></tr>");
    row
}

/// BOTTOM's half, houses left to right with the store on the far flank
fn bottom_row(board: &Board, viewer: Player) -> String {
    let mut row = String::from("<tr><td>BOTTOM</td><td></td>");
    for house in 1..=board.houses() {
        row.push_str(&house_cell(board, Player::Bottom, house, viewer));
    }
    row.push_str(&format!(
        "<td>[{}]</td></tr>",
        board.store(Player::Bottom)
    ));
    row
}

/// A single house: a plain count, or a sow link when the viewer may move it
fn house_cell(board: &Board, side: Player, house: usize, viewer: Player) -> String {
    let stones = board.half(side)[house - 1];
    let movable = side == viewer && board.turn == Turn::Player(viewer) && stones > 0;
    if movable {
        format!(
            "<td><a href=\"/apply?board_id={}&player={}&house={}\">{}</a></td>",
            board.id, viewer, house, stones
        )
    } else {
        format!("<td>{}</td>", stones)
    }
}
