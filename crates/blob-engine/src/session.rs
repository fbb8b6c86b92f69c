//! Saving and restoring a whole simulation.
//!
//! A session named `name` is three files in one directory:
//! `name.board` (board text), `name.blob.json` (knowledge) and
//! `name.player.json` (experimenter state).

use std::fs;
use std::path::{Path, PathBuf};

use blob_board::Board;
use blob_core::Knowledge;
use blob_snapshot::{decode_board, decode_knowledge, encode_board, encode_knowledge, LoadWarning};

use crate::error::SessionError;
use crate::manager::BlobManager;
use crate::player::Player;

/// Paths of the files making up one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionFiles {
    /// Board text.
    pub board: PathBuf,
    /// Knowledge JSON.
    pub knowledge: PathBuf,
    /// Player JSON.
    pub player: PathBuf,
}

impl SessionFiles {
    /// The files of session `name` inside `dir`.
    pub fn new(dir: impl AsRef<Path>, name: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            board: dir.join(format!("{name}.board")),
            knowledge: dir.join(format!("{name}.blob.json")),
            player: dir.join(format!("{name}.player.json")),
        }
    }
}

/// A restored simulation.
pub struct LoadedSession {
    /// Colony, re-populated up to its target.
    pub manager: BlobManager,
    /// Experimenter state.
    pub player: Player,
    /// Repairs applied while loading.
    pub warnings: Vec<LoadWarning>,
}

fn write(path: &Path, contents: String) -> Result<(), SessionError> {
    fs::write(path, contents).map_err(|source| SessionError::Io {
        path: path.to_owned(),
        source,
    })
}

fn read(path: &Path) -> Result<String, SessionError> {
    fs::read_to_string(path).map_err(|source| SessionError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Write `manager` and `player` to `files`.
///
/// Agents are not saved; a loaded colony respawns from its knowledge.
pub fn save_session(
    files: &SessionFiles,
    manager: &BlobManager,
    player: &Player,
) -> Result<(), SessionError> {
    write(&files.board, encode_board(manager.board()))?;
    write(&files.knowledge, encode_knowledge(manager.knowledge())?)?;
    write(&files.player, serde_json::to_string_pretty(player)?)?;
    tracing::info!(board = %files.board.display(), tick = %manager.current_tick(), "session saved");
    Ok(())
}

/// Restore a session written by [`save_session`], seeding the new colony
/// with `seed`.
///
/// Known food no longer present on the board is dropped with a
/// [`LoadWarning::StaleFood`].
pub fn load_session(files: &SessionFiles, seed: u64) -> Result<LoadedSession, SessionError> {
    let decoded = decode_board(&read(&files.board)?)?;
    let mut warnings = decoded.warnings;
    let board: Board = decoded.value;

    let saved = decode_knowledge(&read(&files.knowledge)?)?;
    let mut knowledge = Knowledge::new(saved.config.clone());
    for &cell in saved.known_food() {
        if board.has_food(cell.x, cell.y) {
            knowledge.discover_food(cell);
        } else {
            let warning = LoadWarning::StaleFood {
                x: cell.x,
                y: cell.y,
            };
            tracing::warn!(%warning, "session repaired");
            warnings.push(warning);
        }
    }

    let player: Player = serde_json::from_str(&read(&files.player)?)?;
    let manager = BlobManager::with_knowledge(board, knowledge, seed)?;
    tracing::info!(
        board = %files.board.display(),
        agents = manager.agent_count(),
        warnings = warnings.len(),
        "session loaded"
    );
    Ok(LoadedSession {
        manager,
        player,
        warnings,
    })
}
