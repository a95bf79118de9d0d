use std::collections::VecDeque;
use std::io::{self, Cursor};

use vet::core::command::default_table;
use vet::core::line::{Line, LineBuffer, LineSource, ReaderSource};
use vet::core::output;
use vet::core::state::Session;
use vet::tui::{KeyPress, KeySource, run_session};
use vet::{Options, Outcome};

// ============================================================================
// Helper Functions
// ============================================================================

/// Plays back a fixed list of keys.
struct Keys(VecDeque<KeyPress>);

impl Keys {
    fn chars(script: &str) -> Self {
        Keys(script.chars().map(KeyPress::Char).collect())
    }
}

impl KeySource for Keys {
    fn next_key(&mut self) -> io::Result<KeyPress> {
        self.0
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "out of keys"))
    }
}

/// Line source that records how many lines were pulled.
struct Tracked {
    lines: VecDeque<Line>,
    pulled: usize,
}

impl Tracked {
    fn new(lines: &[&str]) -> Self {
        Tracked {
            lines: lines.iter().map(|l| Line::new(*l)).collect(),
            pulled: 0,
        }
    }
}

impl LineSource for Tracked {
    fn next_line(&mut self) -> io::Result<Option<Line>> {
        let line = self.lines.pop_front();
        if line.is_some() {
            self.pulled += 1;
        }
        Ok(line)
    }
}

/// Runs a whole filtering session over in-memory input and returns
/// (outcome, stdout bytes, control terminal text).
fn filter(input: &[u8], script: &str, options: &Options) -> (Outcome, Vec<u8>, String) {
    let mut buffer = LineBuffer::new(ReaderSource::new(Cursor::new(input.to_vec())));
    let mut session = Session::new();
    let mut term = Vec::new();
    let outcome = run_session(
        &mut buffer,
        &mut session,
        &default_table(),
        options,
        &mut Keys::chars(script),
        &mut term,
    )
    .expect("session should run");

    let mut stdout = Vec::new();
    if outcome == Outcome::Finished {
        output::emit(&buffer, &session.selection, &mut stdout).expect("emit");
    }
    (outcome, stdout, String::from_utf8_lossy(&term).into_owned())
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_passes_accepted_lines_in_order() {
    let (outcome, out, _) = filter(b"apple\nbanana\ncherry\n", "yny", &Options::default());
    assert_eq!(outcome, Outcome::Finished);
    assert_eq!(out, b"apple\ncherry\n");
}

#[test]
fn test_single_line_quit() {
    let (outcome, out, _) = filter(b"only\n", "q", &Options::default());
    assert_eq!(outcome, Outcome::Aborted);
    assert!(out.is_empty());
}

#[test]
fn test_done_after_first_line() {
    let (_, out, _) = filter(b"a\nb\nc\n", "yd", &Options::default());
    assert_eq!(out, b"a\n");
}

#[test]
fn test_prompts_never_reach_stdout() {
    let (_, out, term) = filter(b"x\ny\n", "?yn", &Options::default());
    assert_eq!(out, b"x\n");
    assert!(term.contains("Pass this line?"));
    assert!(!String::from_utf8_lossy(&out).contains("Pass this line?"));
}

#[test]
fn test_custom_question() {
    let options = Options {
        question: "Deploy this host?".to_string(),
    };
    let (_, _, term) = filter(b"web-1\n", "n", &options);
    assert!(term.starts_with("web-1\r\nDeploy this host? (1/?) "));
}

#[test]
fn test_raw_bytes_round_trip() {
    let input: &[u8] = b"\xff\xfe binary\r\nplain\nno terminator";
    let (_, out, _) = filter(input, "yny", &Options::default());
    assert_eq!(out, b"\xff\xfe binary\r\nno terminator");
}

#[test]
fn test_input_read_only_as_far_as_cursor() {
    let mut source = Tracked::new(&["1\n", "2\n", "3\n", "4\n"]);
    let mut buffer = LineBuffer::new(&mut source);
    let mut session = Session::new();
    let outcome = run_session(
        &mut buffer,
        &mut session,
        &default_table(),
        &Options::default(),
        &mut Keys::chars("yd"),
        &mut Vec::<u8>::new(),
    )
    .unwrap();
    assert_eq!(outcome, Outcome::Finished);
    assert_eq!(buffer.len(), 2);
    drop(buffer);
    assert_eq!(source.pulled, 2);
}

#[test]
fn test_count_reads_everything_once() {
    let mut source = Tracked::new(&["1\n", "2\n", "3\n", "4\n"]);
    let mut buffer = LineBuffer::new(&mut source);
    let mut session = Session::new();
    let mut term = Vec::new();
    run_session(
        &mut buffer,
        &mut session,
        &default_table(),
        &Options::default(),
        &mut Keys::chars("cyd"),
        &mut term,
    )
    .unwrap();
    assert_eq!(buffer.len(), 4);
    assert!(session.counted);
    assert!(String::from_utf8(term).unwrap().contains("(2/4)"));
    drop(buffer);
    assert_eq!(source.pulled, 4);
}
