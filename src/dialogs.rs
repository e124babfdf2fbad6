//! Native dialogs and the pre-save writability check.
//!
//! Everything here blocks the UI thread; at this tool's scale that is fine.

use std::fs::File;
use std::path::{Path, PathBuf};

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::canvas::EXPORT_EXTENSIONS;
use crate::error::DrawerError;

/// Ask the user where to save the image. `None` means the dialog was
/// cancelled.
pub fn pick_save_target() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save image")
        .add_filter("Image", EXPORT_EXTENSIONS)
        .set_file_name("drawing.png")
        .save_file()
}

/// Check that `path` can be written, creating it when absent.
///
/// An existing file needs the user's explicit go-ahead from `confirm` before
/// it is overwritten; declining returns `Ok(false)` and the file keeps its
/// prior contents. The confirmation is a parameter so the flow is testable
/// without a display server.
pub fn ensure_writable(
    path: &Path,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<bool, DrawerError> {
    if path.is_file() {
        let readonly = path.metadata()?.permissions().readonly();
        if readonly {
            return Err(DrawerError::NotWritable(path.to_path_buf()));
        }
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("file");
        return Ok(confirm(name));
    }
    File::create(path)?;
    Ok(true)
}

/// Modal "overwrite?" confirmation. True means overwrite.
pub fn confirm_overwrite(filename: &str) -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Confirm overwrite")
        .set_description(format!("{filename} exists. Overwrite it?"))
        .set_buttons(MessageButtons::OkCancel)
        .show();
    matches!(answer, MessageDialogResult::Ok)
}

pub fn show_message(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Message")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn show_error(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
