//! Drag-and-drop replacement of the source bitmap

use crate::io::configuration::NO_FILE_MESSAGE;
use crate::io::console::Notifier;
use crate::io::loader::LoadRequester;
use std::path::PathBuf;

/// A drag-and-drop interaction with the mural
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropEvent {
    /// Files are being held over the mural
    ///
    /// The terminal transport has no drag-over phase, so [`Console`] never
    /// produces this; it exists for front ends that report hovering.
    ///
    /// [`Console`]: crate::io::console::Console
    DragOver,
    /// Files were released onto the mural
    Drop {
        /// Every dropped file, in the order given
        files: Vec<PathBuf>,
    },
}

/// What handling a drag-and-drop event did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// A drag-over was accepted with no visible change
    Accepted,
    /// The first dropped file was queued for loading
    Loading(PathBuf),
    /// The drop carried no file; the user was notified
    NoFile,
}

/// Handle a drag-and-drop event
///
/// Only the first dropped file is loaded. A drop without files raises the
/// "no file" notification and leaves the current bitmap alone.
pub fn handle_drop_event(
    event: DropEvent,
    loader: &impl LoadRequester,
    notifier: &mut impl Notifier,
) -> DropOutcome {
    match event {
        DropEvent::DragOver => DropOutcome::Accepted,
        DropEvent::Drop { files } => {
            let extra = files.len().saturating_sub(1);
            match files.into_iter().next() {
                Some(path) => {
                    tracing::info!(path = %path.display(), ignored = extra, "file dropped");
                    loader.request_load(path.clone());
                    DropOutcome::Loading(path)
                }
                None => {
                    tracing::warn!("drop without a file");
                    notifier.alert(NO_FILE_MESSAGE);
                    DropOutcome::NoFile
                }
            }
        }
    }
}

/// Split a dropped-paths line into paths
///
/// Terminals paste dropped files as one line of whitespace-separated paths,
/// quoting or backslash-escaping paths that contain spaces.
pub fn parse_drop_payload(line: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.trim_end_matches(['\r', '\n']).chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (Some(open), _) if ch == open => quote = None,
            // Backslash escapes apply outside quotes and inside double quotes
            (None | Some('"'), '\\') => {
                in_token = true;
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            (Some(_), _) => current.push(ch),
            (None, '\'' | '"') => {
                in_token = true;
                quote = Some(ch);
            }
            (None, _) if ch.is_whitespace() => {
                if in_token {
                    paths.push(PathBuf::from(std::mem::take(&mut current)));
                    in_token = false;
                }
            }
            (None, _) => {
                in_token = true;
                current.push(ch);
            }
        }
    }

    if in_token {
        paths.push(PathBuf::from(current));
    }
    paths
}
