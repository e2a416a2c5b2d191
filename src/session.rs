//! One interactive game, from the name prompts to the winner banner.
//!
//! `Session` owns the input stream and the display. It reads one line per
//! prompt, feeds coordinates through `CoordinateSelector`, hands complete
//! positions to `MemoramaRules`, and redraws after every step.

use std::io::BufRead;
use std::thread;
use std::time::Duration;

use crate::core::{Board, GameConfig, GameState, GameStats, PlayerId, Position, Stopwatch, TurnPhase};
use crate::display::{render, Display, Frame, PaletteColor};
use crate::input::{decode_name, CardSlot, CoordinateSelector, Feed};
use crate::rules::{GameResult, MemoramaRules, TurnOutcome};
use crate::{MemoramaError, Result};

/// Summary of a finished session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionReport {
    pub names: [String; 2],
    pub points: [u8; 2],
    pub result: GameResult,
    pub stats: GameStats,
}

impl SessionReport {
    /// Name of the winner, `None` on a tie.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.result {
            GameResult::Winner(player) => Some(&self.names[player.index()]),
            GameResult::Draw => None,
        }
    }
}

/// Interactive game session over any line source and display.
pub struct Session<R: BufRead, D: Display> {
    input: R,
    display: D,
    config: GameConfig,
    rules: MemoramaRules,
    board: Option<Board>,
}

impl<R: BufRead, D: Display> Session<R, D> {
    pub fn new(input: R, display: D, config: GameConfig) -> Self {
        Self {
            input,
            display,
            config,
            rules: MemoramaRules::new(),
            board: None,
        }
    }

    /// Play on `board` instead of dealing a fresh one.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Play a full game.
    pub fn run(&mut self) -> Result<SessionReport> {
        self.display.clear()?;
        self.display.set_color(PaletteColor::Red)?;

        let names = self.read_names()?;
        self.loading()?;

        let board = match self.board.take() {
            Some(board) => board,
            None => {
                let mut rng = self.config.rng();
                log::info!("dealing board with seed {}", rng.seed());
                Board::generate(&self.config.alphabet, &mut rng)
            }
        };

        let mut state = GameState::new(board, names);
        log::info!(
            "game started: {} vs {}",
            state.players[PlayerId::FIRST].name,
            state.players[PlayerId::SECOND].name
        );

        let stopwatch = Stopwatch::start();
        while state.phase != TurnPhase::GameOver {
            self.play_turn(&mut state)?;
        }
        let stats = GameStats {
            elapsed: stopwatch.elapsed(),
            moves: state.moves,
            errors: state.errors,
        };

        let report = SessionReport {
            names: [
                state.players[PlayerId::FIRST].name.clone(),
                state.players[PlayerId::SECOND].name.clone(),
            ],
            points: [
                state.players[PlayerId::FIRST].points,
                state.players[PlayerId::SECOND].points,
            ],
            result: GameResult::from_points(
                state.players[PlayerId::FIRST].points,
                state.players[PlayerId::SECOND].points,
            ),
            stats,
        };
        log::info!(
            "game over after {} moves and {} errors: {:?}",
            stats.moves,
            stats.errors,
            report.result
        );

        self.show_results(&report)?;
        Ok(report)
    }

    fn read_names(&mut self) -> Result<[String; 2]> {
        let mut names: Vec<String> = Vec::with_capacity(2);
        let mut accepted = String::new();

        for player in PlayerId::all() {
            loop {
                let prompt = render::name_prompt(player);
                self.display.write_text(&prompt)?;
                let line = self.read_line()?;

                match decode_name(&line, player) {
                    Ok(name) => {
                        accepted.push_str(&prompt);
                        accepted.push_str(&name);
                        accepted.push('\n');
                        accepted.push_str(&render::rule());
                        self.display.write_text(&render::rule())?;
                        names.push(name);
                        break;
                    }
                    Err(err) => {
                        log::debug!("rejected name: {}", err);
                        self.pause(self.config.pacing.message);
                        self.flash(&render::error_banner(&err.to_string()))?;
                        self.display.write_text(&accepted)?;
                    }
                }
            }
        }

        self.pause(self.config.pacing.message);
        self.display.clear()?;

        let second = names.pop().unwrap_or_default();
        let first = names.pop().unwrap_or_default();
        Ok([first, second])
    }

    fn loading(&mut self) -> Result<()> {
        for _ in 0..3 {
            self.display.write_text("Loading")?;
            for _ in 0..5 {
                self.display.write_text(".")?;
                self.pause(self.config.pacing.loading_tick);
            }
            self.display.clear()?;
        }
        Ok(())
    }

    fn play_turn(&mut self, state: &mut GameState) -> Result<()> {
        self.pick_card(state, CardSlot::First)?;
        self.pick_card(state, CardSlot::Second)?;

        self.display.clear()?;
        self.display.render(&Frame::from_state(state))?;

        let outcome = self.rules.resolve(state)?;
        self.display.write_text(&render::pair_banner(outcome.is_match()))?;
        match outcome {
            TurnOutcome::Match { .. } => {
                self.display.beep()?;
                self.pause(self.config.pacing.message);
            }
            TurnOutcome::NoMatch { .. } => {
                self.pause(self.config.pacing.message);
                self.pause(self.config.pacing.reveal);
            }
        }
        Ok(())
    }

    /// Read coordinates until the rules accept a card for `slot`.
    fn pick_card(&mut self, state: &mut GameState, slot: CardSlot) -> Result<Position> {
        let mut selector = CoordinateSelector::new(slot);
        self.redraw(state, &selector)?;

        loop {
            let bytes = self.read_line()?;
            let line = String::from_utf8_lossy(&bytes);
            let position = match selector.feed(&line) {
                Feed::Row(_) => {
                    self.redraw(state, &selector)?;
                    continue;
                }
                Feed::Rejected(err) => {
                    log::debug!("rejected {} card input {:?}: {}", slot, line.trim(), err);
                    self.flash(&render::error_banner(&err.to_string()))?;
                    self.redraw(state, &selector)?;
                    continue;
                }
                Feed::Complete(position) => position,
            };

            let picked = match slot {
                CardSlot::First => self.rules.select_first(state, position),
                CardSlot::Second => self.rules.select_second(state, position),
            };
            match picked {
                Ok(_) => return Ok(position),
                Err(err) if err.counts_as_error() => {
                    self.display.clear()?;
                    self.display.write_text(&render::error_banner(&err.to_string()))?;
                    self.pause(self.config.pacing.message);
                    selector.restart();
                    self.redraw(state, &selector)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn show_results(&mut self, report: &SessionReport) -> Result<()> {
        let names = [report.names[0].as_str(), report.names[1].as_str()];

        self.display.clear()?;
        self.display
            .write_text(&render::final_results(names, report.points, &report.stats))?;
        self.display.write_text(&render::press_enter())?;
        self.wait_for_enter()?;

        self.display.clear()?;
        self.display.write_text(&render::winner(report.result, names))?;
        self.display.write_text("\n")?;
        Ok(())
    }

    fn redraw(&mut self, state: &GameState, selector: &CoordinateSelector) -> Result<()> {
        self.display.clear()?;
        self.display.render(&Frame::from_state(state))?;
        self.display
            .write_text(&render::coordinate_prompt(selector.slot(), selector.state()))?;
        Ok(())
    }

    /// Show a message on a clean screen for the message pause.
    fn flash(&mut self, text: &str) -> Result<()> {
        self.display.clear()?;
        self.display.write_text(text)?;
        self.pause(self.config.pacing.message);
        self.display.clear()?;
        Ok(())
    }

    /// Next raw input line, terminator included.
    ///
    /// Bytes are left undecoded so a line that is not UTF-8 can be refused
    /// like any other bad entry.
    fn read_line(&mut self) -> Result<Vec<u8>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(MemoramaError::InputClosed);
        }
        Ok(line)
    }

    /// Final pause. Running out of input here just ends the session.
    fn wait_for_enter(&mut self) -> Result<()> {
        let mut line = Vec::new();
        self.input.read_until(b'\n', &mut line)?;
        Ok(())
    }

    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
