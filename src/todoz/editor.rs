use crate::error::{Result, TodozError};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const HINT: &str = "# Edit the todo text on the first line. Lines starting with '#' are ignored.\n# Leave it empty to keep the todo unchanged.";

/// Formats the editor buffer for a todo's current text.
pub fn to_buffer(text: &str) -> String {
    format!("{}\n\n{}\n", text, HINT)
}

/// Extracts the todo text from an editor buffer: the first line that is
/// neither blank nor a `#` comment, trimmed. Empty if there is none.
pub fn from_buffer(buffer: &str) -> String {
    buffer
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .unwrap_or_default()
        .to_string()
}

fn open_in_editor(path: &Path) -> Result<String> {
    let editor = env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string());

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| TodozError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(TodozError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(TodozError::Io)
}

/// Opens an editor on `initial` and returns the edited todo text.
pub fn edit_text(initial: &str) -> Result<String> {
    let temp_file = env::temp_dir().join(format!("todoz_edit_{}.txt", std::process::id()));

    fs::write(&temp_file, to_buffer(initial)).map_err(TodozError::Io)?;
    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(from_buffer(&result?))
}
