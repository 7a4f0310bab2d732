use std::sync::mpsc::Sender;
use std::thread;

use crate::players::load_players;
use crate::source::Source;
use crate::state::Delta;

/// Loads the data set off the UI thread. Exactly one `Delta::Players` is
/// sent; a closed receiver is ignored.
pub fn spawn_loader(tx: Sender<Delta>, source: Source) {
    thread::spawn(move || {
        let _ = tx.send(Delta::Log(format!("[INFO] Loading players from {source}")));
        let outcome = load_players(&source);
        let _ = tx.send(Delta::Players(outcome));
    });
}
