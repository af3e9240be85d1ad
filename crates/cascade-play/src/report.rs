//! Move and result output, as text or JSON lines.

use cascade_core::{Color, Move};
use cascade_engine::{GameOutcome, GameState, Tier};
use serde::Serialize;
use std::io::Write;

/// One played move.
#[derive(Serialize)]
struct MoveLine {
    ply: u32,
    side: Color,
    #[serde(rename = "move")]
    uci: String,
    #[serde(flatten)]
    mv: Move,
    /// Only present for the selector's moves.
    #[serde(skip_serializing_if = "Option::is_none")]
    tier: Option<Tier>,
}

/// The final line of a game.
#[derive(Serialize)]
struct ResultLine {
    result: String,
    fen: String,
}

pub struct Reporter<W> {
    out: W,
    json: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, json: bool) -> Self {
        Reporter { out, json }
    }

    pub fn record(
        &mut self,
        ply: u32,
        side: Color,
        mv: Move,
        tier: Option<Tier>,
    ) -> anyhow::Result<()> {
        if self.json {
            let line = MoveLine {
                ply,
                side,
                uci: mv.to_uci(),
                mv,
                tier,
            };
            writeln!(self.out, "{}", serde_json::to_string(&line)?)?;
        } else {
            match tier {
                Some(tier) => writeln!(
                    self.out,
                    "{:>3}. {}: {} {} [{}]",
                    ply, side, mv.piece, mv, tier
                )?,
                None => writeln!(self.out, "{:>3}. {}: {} {}", ply, side, mv.piece, mv)?,
            }
        }
        Ok(())
    }

    /// Writes the final position and result. `None` means the game was cut short.
    pub fn finish(&mut self, state: &GameState, outcome: Option<GameOutcome>) -> anyhow::Result<()> {
        let result = match outcome {
            Some(outcome) => outcome.to_string(),
            None => "unfinished".to_string(),
        };
        if self.json {
            let line = ResultLine {
                result,
                fen: state.to_fen(),
            };
            writeln!(self.out, "{}", serde_json::to_string(&line)?)?;
        } else {
            writeln!(self.out)?;
            writeln!(self.out, "{}", state.board())?;
            writeln!(self.out)?;
            writeln!(self.out, "Result: {}", result)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
