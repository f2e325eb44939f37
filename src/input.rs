//! Where the MML to play comes from.

use std::io;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
pub enum InputError {
    #[snafu(display("Failed to read MML file {}: {}", path.display(), source))]
    Read { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// MML given directly as text.
    Text(String),
    /// MML read from a `.mml` file.
    File { path: PathBuf, mml: String },
}

impl Input {
    /// Arguments ending in `.mml` (in any case) are read as files, anything else is taken as MML text.
    pub fn detect(arg: &str) -> Result<Input, InputError> {
        let path = Path::new(arg);
        let is_mml_file = path
            .extension()
            .map_or(false, |ext| ext.to_string_lossy().eq_ignore_ascii_case("mml"));
        if !is_mml_file {
            return Ok(Input::Text(arg.to_string()));
        }
        let mml = std::fs::read_to_string(path).context(Read { path })?;
        Ok(Input::File {
            path: path.to_path_buf(),
            mml,
        })
    }

    pub fn mml(&self) -> &str {
        match self {
            Input::Text(mml) => mml,
            Input::File { mml, .. } => mml,
        }
    }
}
