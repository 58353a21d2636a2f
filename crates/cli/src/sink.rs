//! Delivery of the encoded text

use std::fs;
use std::path::PathBuf;

use arboard::Clipboard;

/// Where the Base64 text ends up
#[derive(Debug, PartialEq, Eq)]
pub enum OutputSink {
    /// Print the bare text to stdout (pipeable, no decoration)
    Stdout,
    /// Place the text on the system clipboard
    Clipboard,
    /// Write the text to a file
    File(PathBuf),
}

impl OutputSink {
    pub fn from_flags(clipboard: bool, output: Option<PathBuf>) -> Self {
        if clipboard {
            Self::Clipboard
        } else if let Some(path) = output {
            Self::File(path)
        } else {
            Self::Stdout
        }
    }

    /// Hands the encoded text to the sink
    pub fn deliver(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Self::Stdout => println!("{text}"),
            Self::Clipboard => {
                let mut clipboard = Clipboard::new()?;
                clipboard.set_text(text)?;
            }
            Self::File(path) => fs::write(path, text)?,
        }
        Ok(())
    }

    /// Whether a success notice should be printed after delivery
    ///
    /// The stdout sink stays bare so its output can be piped.
    pub fn confirms(&self) -> bool {
        !matches!(self, Self::Stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(OutputSink::from_flags(false, None), OutputSink::Stdout);
        assert_eq!(OutputSink::from_flags(true, None), OutputSink::Clipboard);
        assert_eq!(
            OutputSink::from_flags(false, Some(PathBuf::from("out.txt"))),
            OutputSink::File(PathBuf::from("out.txt"))
        );
    }

    #[test]
    fn test_file_delivery() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("encoded.txt");

        let sink = OutputSink::File(path.clone());
        sink.deliver("TWFu").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "TWFu");
        assert!(sink.confirms());
    }

    #[test]
    fn test_stdout_does_not_confirm() {
        assert!(!OutputSink::Stdout.confirms());
    }
}
