use crate::parsing::parse;
use crate::tree::Document;
use log::debug;
use relative_path::{Component, RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognised as notes.
pub const NOTE_EXTENSIONS: [&str; 2] = ["mark", "md"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
    #[error("Path escapes the notes directory: {0}")]
    OutsideNotesDir(String),
}

/// Whether `path` has one of the [`NOTE_EXTENSIONS`].
pub fn is_note(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| NOTE_EXTENSIONS.contains(&ext))
}

/// Read a note and return its content
pub fn read_note(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    ensure_inside(relative_path)?;
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.is_file() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Read and parse a note
pub fn load_note(relative_path: &RelativePath, notes_root: &Path) -> Result<Document, IoError> {
    let text = read_note(relative_path, notes_root)?;
    Ok(parse(&text))
}

/// Find the file a user means by `input`.
///
/// An existing path is taken as is. Otherwise `input` is looked up relative
/// to the notes directory, if there is one.
pub fn resolve_note(input: &Path, notes_root: Option<&Path>) -> Result<PathBuf, IoError> {
    if input.is_file() {
        return Ok(input.to_path_buf());
    }

    if let Some(root) = notes_root
        && let Ok(relative) = RelativePathBuf::from_path(input)
    {
        ensure_inside(&relative)?;
        let candidate = relative.to_path(root);
        debug!("looking for {} in notes directory", relative);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(IoError::NotFound(input.to_path_buf()))
}

/// Scan for notes in the notes directory, sorted by path
pub fn scan_notes(notes_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_notes_dir(notes_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, notes_root, &mut files)?;
    files.sort();
    debug!("found {} notes under {}", files.len(), notes_root.display());
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else if is_note(&path) {
            let relative = path
                .strip_prefix(root)
                .ok()
                .and_then(|p| RelativePathBuf::from_path(p).ok())
                .ok_or_else(|| IoError::OutsideNotesDir(path.display().to_string()))?;
            files.push(relative);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

fn ensure_inside(relative_path: &RelativePath) -> Result<(), IoError> {
    if relative_path
        .components()
        .any(|c| c == Component::ParentDir)
    {
        return Err(IoError::OutsideNotesDir(relative_path.to_string()));
    }
    Ok(())
}
