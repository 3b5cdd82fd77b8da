use thiserror::Error;

use crate::GameSession;

/// Errors from the persistence seam.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not encode session snapshot")]
    Encode(#[source] serde_json::Error),
    #[error("Could not decode session snapshot")]
    Decode(#[source] serde_json::Error),
    #[error("Session snapshot does not match its board")]
    Corrupt,
}

/// Persistence seam for whole-session snapshots. Implementations own the
/// keying (user identity, backend, slot); the engine only sees one document.
pub trait SessionStore {
    fn load_session(&self) -> Result<Option<GameSession>, StoreError>;
    fn save_session(&mut self, session: &GameSession) -> Result<(), StoreError>;
}

/// Checks a deserialized snapshot against its own grid before it is resumed:
/// the dimensions, mine totals, and revealed/flagged counters all have to
/// agree.
pub fn verify_session(session: &GameSession) -> Result<(), StoreError> {
    let config = session.config();
    if config.validate().is_err() {
        return Err(StoreError::Corrupt);
    }
    if session.board().dim() != (config.height as usize, config.width as usize) {
        return Err(StoreError::Corrupt);
    }

    let expected_mines = if session.mines_placed() {
        config.mines
    } else {
        0
    };
    if session.board().mine_count() != expected_mines {
        return Err(StoreError::Corrupt);
    }

    let tally = session.board().recount();
    let (revealed, flagged) = session.counters();
    if tally.mines != session.board().mine_count()
        || tally.revealed_safe != revealed
        || tally.flagged != flagged
    {
        return Err(StoreError::Corrupt);
    }

    Ok(())
}

/// In-memory store holding a single JSON snapshot, the same document shape a
/// browser-storage or backend implementation would persist.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    snapshot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw persisted document, for export or inspection.
    pub fn raw_snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    /// Replaces the persisted document, e.g. with one imported from elsewhere.
    pub fn set_raw_snapshot(&mut self, snapshot: String) {
        self.snapshot = Some(snapshot);
    }
}

impl SessionStore for MemoryStore {
    fn load_session(&self) -> Result<Option<GameSession>, StoreError> {
        let Some(raw) = self.snapshot.as_deref() else {
            return Ok(None);
        };
        let session: GameSession = serde_json::from_str(raw).map_err(|err| {
            let err = StoreError::Decode(err);
            log::warn!("rejecting persisted session snapshot: {}", err);
            err
        })?;
        if let Err(err) = verify_session(&session) {
            log::warn!("rejecting persisted session snapshot: {}", err);
            return Err(err);
        }
        Ok(Some(session))
    }

    fn save_session(&mut self, session: &GameSession) -> Result<(), StoreError> {
        let raw = serde_json::to_string(session).map_err(StoreError::Encode)?;
        self.snapshot = Some(raw);
        Ok(())
    }
}
