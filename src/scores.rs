use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

const MAGIC: &[u8; 4] = b"TAB1";
const NUM_RECORDS: usize = 2;
// 4 magic + one little-endian u32 per record
const FILE_SIZE: usize = 4 + NUM_RECORDS * 4;

#[derive(Debug, Error)]
pub enum ScoresError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not a personal-best file", .path.display())]
    BadMagic { path: PathBuf },
    #[error("{} is truncated ({len} of {} bytes)", .path.display(), FILE_SIZE)]
    Truncated { path: PathBuf, len: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record {
    /// Most points one Pong side has reached in a session.
    PongPoints,
    /// Highest level reached in Turtle Crossing.
    CrossingLevel,
}

impl Record {
    fn slot(self) -> usize {
        match self {
            Record::PongPoints => 0,
            Record::CrossingLevel => 1,
        }
    }
}

/// Personal bests kept across runs. Every failure to read or write the file is
/// logged and otherwise ignored; the in-memory values stay authoritative.
#[derive(Clone, Debug)]
pub struct PersonalBests {
    best: [u32; NUM_RECORDS],
    path: PathBuf,
}

impl PersonalBests {
    pub fn load(path: Option<PathBuf>) -> Self {
        let path = path.unwrap_or_else(Self::default_path);
        let best = match read_file(&path) {
            Ok(best) => best,
            Err(ScoresError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!("no personal bests at {} yet", path.display());
                [0; NUM_RECORDS]
            }
            Err(err) => {
                warn!("ignoring personal bests: {err}");
                [0; NUM_RECORDS]
            }
        };
        Self { best, path }
    }

    fn default_path() -> PathBuf {
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join("turtle-arcade.scores");
            }
        }
        PathBuf::from("turtle-arcade.scores")
    }

    pub fn best(&self, record: Record) -> u32 {
        self.best[record.slot()]
    }

    /// Records `value` if it beats the stored best. Returns true when it did.
    pub fn submit(&mut self, record: Record, value: u32) -> bool {
        let slot = record.slot();
        if value <= self.best[slot] {
            return false;
        }
        self.best[slot] = value;
        info!("new personal best for {record:?}: {value}");
        if let Err(err) = self.save() {
            warn!("personal best not saved: {err}");
        }
        true
    }

    fn save(&self) -> Result<(), ScoresError> {
        fs::write(&self.path, encode(&self.best)).map_err(|source| ScoresError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn encode(best: &[u32; NUM_RECORDS]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(FILE_SIZE);
    buf.extend_from_slice(MAGIC);
    for value in best {
        buf.extend_from_slice(&value.to_le_bytes());
    }
    buf
}

fn read_file(path: &Path) -> Result<[u32; NUM_RECORDS], ScoresError> {
    let data = fs::read(path).map_err(|source| ScoresError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(path, &data)
}

fn decode(path: &Path, data: &[u8]) -> Result<[u32; NUM_RECORDS], ScoresError> {
    if data.len() < MAGIC.len() || &data[..MAGIC.len()] != MAGIC {
        return Err(ScoresError::BadMagic { path: path.to_path_buf() });
    }
    if data.len() < FILE_SIZE {
        return Err(ScoresError::Truncated {
            path: path.to_path_buf(),
            len: data.len(),
        });
    }
    let mut best = [0; NUM_RECORDS];
    for (slot, chunk) in data[MAGIC.len()..FILE_SIZE].chunks_exact(4).enumerate() {
        best[slot] = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(best)
}
