//! Session - the single owner of a running game and its gravity timer.
//!
//! Every event reaches the game through `&mut Session`, one at a time: an
//! input action or a slice of elapsed time runs to completion (move, or
//! merge + clear + respawn) before the next one is looked at. The timer lives
//! and dies with the session. It is cancelled on top-out, on
//! [`Session::shutdown`] and on drop. A restart arms a fresh one, but only
//! while the session is live; shutdown is final.

use log::{debug, info};

use crate::controller::TickOutcome;
use crate::game_state::GameState;
use crate::rng::{PieceSource, UniformPieces};
use crate::snapshot::GameSnapshot;
use crate::timer::GravityTimer;
use crate::types::GameAction;

pub struct Session<S: PieceSource = UniformPieces> {
    game: GameState<S>,
    timer: GravityTimer,
    interval_ms: u32,
    shut_down: bool,
}

impl<S: PieceSource> Session<S> {
    /// Start `game` (if not already started) with gravity every `interval_ms`.
    pub fn new(mut game: GameState<S>, interval_ms: u32) -> Self {
        game.start();
        let timer = GravityTimer::new(interval_ms);
        let mut session = Self {
            interval_ms: timer.interval_ms(),
            game,
            timer,
            shut_down: false,
        };
        session.cancel_if_over();
        session
    }

    pub fn game(&self) -> &GameState<S> {
        &self.game
    }

    pub fn timer(&self) -> &GravityTimer {
        &self.timer
    }

    /// Whether gravity can still fire.
    pub fn is_running(&self) -> bool {
        !self.timer.is_cancelled()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    /// Apply one input action; returns whether the game changed.
    /// Ignored after [`Session::shutdown`].
    pub fn handle(&mut self, action: GameAction) -> bool {
        if self.shut_down {
            return false;
        }
        if action == GameAction::Restart {
            self.game.restart();
            self.timer = GravityTimer::new(self.interval_ms);
            self.cancel_if_over();
            return true;
        }

        let changed = self.game.apply_action(action);
        if action == GameAction::SoftDrop {
            self.cancel_if_over();
        }
        changed
    }

    /// Feed elapsed wall time; runs every gravity tick now due and returns how
    /// many ran. Paused games do not accumulate time.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.shut_down || self.game.paused() {
            return 0;
        }

        let due = self.timer.advance(elapsed_ms);
        let mut ran = 0;
        for _ in 0..due {
            ran += 1;
            if let TickOutcome::ToppedOut { .. } = self.game.tick() {
                break;
            }
        }
        if ran > 1 {
            debug!("caught up {} gravity ticks", ran);
        }
        self.cancel_if_over();
        ran
    }

    /// Milliseconds the host may wait before the next gravity tick is due.
    pub fn until_next_tick_ms(&self) -> Option<u32> {
        if self.game.paused() {
            return None;
        }
        self.timer.until_next_ms()
    }

    /// End the session: gravity never fires again and further input is
    /// ignored, restart included.
    pub fn shutdown(&mut self) {
        if !self.shut_down {
            info!("session shutdown; gravity timer cancelled");
        }
        self.shut_down = true;
        self.timer.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    fn cancel_if_over(&mut self) {
        if self.game.game_over() && !self.timer.is_cancelled() {
            info!("top-out; gravity timer cancelled");
            self.timer.cancel();
        }
    }
}

impl<S: PieceSource> Drop for Session<S> {
    fn drop(&mut self) {
        self.shut_down = true;
        self.timer.cancel();
    }
}
