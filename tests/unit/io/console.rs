//! Tests for console prompts, notifications and dropped path lines

#[cfg(test)]
mod tests {
    use mosaic_mural::io::console::{CANCEL_REPLY, Console, Notifier, Prompter};
    use mosaic_mural::io::dragdrop::DropEvent;
    use std::path::PathBuf;
    use std::sync::mpsc;

    fn console_with(lines: &[&str]) -> (Console, mpsc::Sender<String>) {
        let (sender, receiver) = mpsc::channel();
        for line in lines {
            sender.send((*line).to_string()).unwrap();
        }
        (Console::from_receiver(receiver), sender)
    }

    // Tests an empty reply accepts the suggested filename
    // Verified by returning the empty string
    #[test]
    fn test_prompt_empty_reply_uses_default() {
        let (mut console, _sender) = console_with(&[""]);
        assert_eq!(console.prompt("Save?", "mural.png"), Some("mural.png".to_string()));
    }

    // Tests a typed reply is returned trimmed
    // Verified by returning the raw line
    #[test]
    fn test_prompt_typed_reply() {
        let (mut console, _sender) = console_with(&["  shot.png  "]);
        assert_eq!(console.prompt("Save?", "mural.png"), Some("shot.png".to_string()));
    }

    // Tests the cancel reply and end of input both cancel
    // Verified by treating the cancel reply as a filename
    #[test]
    fn test_prompt_cancel() {
        let (mut console, sender) = console_with(&[CANCEL_REPLY]);
        assert_eq!(console.prompt("Save?", "mural.png"), None);

        drop(sender);
        assert_eq!(console.prompt("Save?", "mural.png"), None);
    }

    // Tests an alert waits for and consumes one dismissal line
    // Verified by leaving the dismissal line queued
    #[test]
    fn test_alert_consumes_dismissal() {
        let (mut console, _sender) = console_with(&["", "/tmp/next.png"]);

        console.alert("no file");

        assert_eq!(
            console.next_drop(),
            Some(DropEvent::Drop {
                files: vec![PathBuf::from("/tmp/next.png")]
            })
        );
    }

    // Tests an alert returns once input has ended
    // Verified by looping until a line arrives
    #[test]
    fn test_alert_after_end_of_input() {
        let (mut console, sender) = console_with(&[]);
        drop(sender);
        console.alert("no file");
        assert_eq!(console.next_drop(), None);
    }

    // Tests queued lines become drop events and an empty line has no files
    // Verified by skipping empty lines
    #[test]
    fn test_next_drop() {
        let (console, _sender) = console_with(&["'/tmp/a b.png' /tmp/c.png", ""]);

        assert_eq!(
            console.next_drop(),
            Some(DropEvent::Drop {
                files: vec![PathBuf::from("/tmp/a b.png"), PathBuf::from("/tmp/c.png")]
            })
        );
        assert_eq!(console.next_drop(), Some(DropEvent::Drop { files: vec![] }));
        assert_eq!(console.next_drop(), None);
    }
}
