//! Sources of raw input lines.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Read;

/// Prompt written before each interactive read.
const PROMPT: &str = "$ ";

/// Yields one raw input line per call.
///
/// Interactive sessions read through a rustyline editor with a prompt and
/// history; scripts and pipes are slurped whole up front and then yielded
/// line by line.
pub enum LineSource {
    Interactive(DefaultEditor),
    Stream(std::vec::IntoIter<String>),
}

impl LineSource {
    /// A prompting, history-keeping source backed by the terminal.
    pub fn interactive() -> rustyline::Result<Self> {
        Ok(Self::Interactive(DefaultEditor::new()?))
    }

    /// A source that consumes `reader` in full and replays its lines.
    pub fn from_reader(mut reader: impl Read) -> std::io::Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        let lines: Vec<String> = buf.lines().map(str::to_owned).collect();
        Ok(Self::Stream(lines.into_iter()))
    }

    /// The next line, without its trailing newline. `None` means end of
    /// input (including Ctrl-C/Ctrl-D in interactive mode).
    pub fn next_line(&mut self) -> Option<String> {
        match self {
            Self::Interactive(editor) => match editor.readline(PROMPT) {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    Some(line)
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
                Err(err) => {
                    eprintln!("minish: {err}");
                    None
                }
            },
            Self::Stream(lines) => lines.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_source_replays_lines_in_order() {
        let mut source = LineSource::from_reader("echo a\necho b\n".as_bytes()).unwrap();
        assert_eq!(source.next_line().as_deref(), Some("echo a"));
        assert_eq!(source.next_line().as_deref(), Some("echo b"));
        assert_eq!(source.next_line(), None);
    }

    #[test]
    fn stream_source_handles_missing_final_newline() {
        let mut source = LineSource::from_reader("true".as_bytes()).unwrap();
        assert_eq!(source.next_line().as_deref(), Some("true"));
        assert_eq!(source.next_line(), None);
    }

    #[test]
    fn empty_stream_yields_nothing() {
        let mut source = LineSource::from_reader("".as_bytes()).unwrap();
        assert_eq!(source.next_line(), None);
    }
}
