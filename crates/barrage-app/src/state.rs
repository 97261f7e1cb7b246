//! Handle shared between the runner's caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use barrage_core::commands::PlayerCommand;
use barrage_core::state::MatchSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the loop, `None` before the first frame.
pub type SharedSnapshot = Arc<Mutex<Option<MatchSnapshot>>>;

/// Owner's side of a running game loop.
pub struct LoopHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: JoinHandle<Option<u32>>,
}

impl LoopHandle {
    pub fn new(
        command_tx: mpsc::Sender<GameLoopCommand>,
        latest_snapshot: SharedSnapshot,
        thread: JoinHandle<Option<u32>>,
    ) -> Self {
        Self {
            command_tx,
            latest_snapshot,
            thread,
        }
    }

    /// Forward a player command. Returns false once the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .is_ok()
    }

    /// Clone of the most recent snapshot.
    pub fn latest(&self) -> Option<MatchSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Stop the loop and wait for it. Returns the final score if a match ended.
    pub fn shutdown(self) -> Option<u32> {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.thread.join().ok().flatten()
    }
}
