use crate::board::PieceKind;
use crate::error::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Material value per piece kind, in centipawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self { pawn: 100, knight: 320, bishop: 330, rook: 500, queen: 900, king: 20_000 }
    }
}

impl PieceValues {
    #[inline]
    pub fn of(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

/// Engine-wide settings. Built once at startup and handed out by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub piece_values: PieceValues,
    /// Worker threads for candidate scoring; 1 keeps selection on the caller's thread.
    pub threads: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { piece_values: PieceValues::default(), threads: 1 }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("loading engine config from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }
}
