//! Hangman illustration, one frame per mistake count
//!
//! Frames are embedded by default. A custom frames file holds the frames separated by
//! lines consisting of `---`; if it cannot be used the embedded frames are kept.

use crate::core::MAX_MISTAKES;
use crate::error::AssetLoadError;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Number of frames: one for each mistake count from 0 to `MAX_MISTAKES`
pub const FRAME_COUNT: usize = MAX_MISTAKES as usize + 1;

const FRAME_SEPARATOR: &str = "---";

const EMBEDDED_FRAMES: [&str; FRAME_COUNT] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallows {
    frames: Vec<String>,
}

impl Default for Gallows {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Gallows {
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            frames: EMBEDDED_FRAMES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Load frames from a file
    ///
    /// # Errors
    /// Returns `AssetLoadError` if the file is unreadable or does not hold exactly
    /// `FRAME_COUNT` frames.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AssetLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AssetLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let frames = split_frames(&content);
        if frames.len() != FRAME_COUNT {
            return Err(AssetLoadError::FrameCount {
                path: path.to_path_buf(),
                expected: FRAME_COUNT,
                found: frames.len(),
            });
        }
        Ok(Self { frames })
    }

    /// Load frames from `path` if given, falling back to the embedded frames on error
    #[must_use]
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::embedded();
        };
        match Self::load(path) {
            Ok(gallows) => gallows,
            Err(err) => {
                warn!(error = %err, "using embedded gallows frames");
                Self::embedded()
            }
        }
    }

    /// Frame for a mistake count, clamped to the last frame
    #[must_use]
    pub fn frame(&self, mistakes: u8) -> &str {
        let index = usize::from(mistakes).min(self.frames.len() - 1);
        &self.frames[index]
    }
}

fn split_frames(content: &str) -> Vec<String> {
    let mut frames = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim_end() == FRAME_SEPARATOR {
            frames.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        frames.push(current.join("\n"));
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn frames_file(count: usize) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body: Vec<String> = (0..count).map(|i| format!("frame {i}")).collect();
        write!(file, "{}", body.join("\n---\n")).unwrap();
        file
    }

    #[test]
    fn embedded_has_frame_per_mistake() {
        let gallows = Gallows::embedded();
        for mistakes in 0..=MAX_MISTAKES {
            assert!(!gallows.frame(mistakes).is_empty());
        }
        assert_ne!(gallows.frame(0), gallows.frame(MAX_MISTAKES));
    }

    #[test]
    fn frame_is_clamped() {
        let gallows = Gallows::embedded();
        assert_eq!(gallows.frame(200), gallows.frame(MAX_MISTAKES));
    }

    #[test]
    fn load_custom_frames() {
        let file = frames_file(FRAME_COUNT);
        let gallows = Gallows::load(file.path()).unwrap();
        assert_eq!(gallows.frame(0), "frame 0");
        assert_eq!(gallows.frame(6), "frame 6");
    }

    #[test]
    fn wrong_frame_count_is_rejected() {
        let file = frames_file(3);
        let err = Gallows::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            AssetLoadError::FrameCount {
                expected: FRAME_COUNT,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn missing_file_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallows.txt");

        assert!(matches!(
            Gallows::load(&path),
            Err(AssetLoadError::Io { .. })
        ));
        assert_eq!(Gallows::load_or_default(Some(path.as_path())), Gallows::embedded());
        assert_eq!(Gallows::load_or_default(None), Gallows::embedded());
    }
}
