//! Drives the walker the way a hand-written scanner would.

use string_walker::prelude::*;

#[derive(Debug, PartialEq, Eq)]
enum Piece {
    Word(String),
    Quoted(String),
    Number(String),
}

/// Split `input` into words, numbers and double-quoted strings.
fn scan(input: &str) -> Result<Vec<Piece>, WalkerError> {
    let mut s = StringWalker::new(input);
    let mut out = Vec::new();
    loop {
        s.consume([' ', '\t', '\n']);
        let Some(ch) = s.current_char() else {
            break;
        };
        let start = s.position();
        if ch == '"' {
            let Some(close) = s.find_next('"')? else {
                break;
            };
            out.push(Piece::Quoted(s.substring(start as isize + 1, Some(close as isize))?));
            s.move_to(close as isize + 1)?;
        } else if ch.is_ascii_digit() {
            s.consume_while(|c| c.is_ascii_digit());
            out.push(Piece::Number(s.substring(start as isize, Some(s.position() as isize))?));
        } else {
            let end = s.find_next_of(&[' ', '\t', '\n', '"'])?.unwrap_or(s.len());
            out.push(Piece::Word(s.substring(start as isize, Some(end as isize))?));
            s.move_to(end as isize)?;
        }
    }
    Ok(out)
}

#[test]
fn test_scanner_splits_mixed_input() {
    let pieces = scan("set name \"lorem ipsum\" 42\n  done").unwrap();
    assert_eq!(
        pieces,
        vec![
            Piece::Word("set".into()),
            Piece::Word("name".into()),
            Piece::Quoted("lorem ipsum".into()),
            Piece::Number("42".into()),
            Piece::Word("done".into()),
        ]
    );
}

#[test]
fn test_scanner_stops_on_unterminated_quote() {
    let pieces = scan("a \"open").unwrap();
    assert_eq!(pieces, vec![Piece::Word("a".into())]);
}

#[test]
fn test_normalized_bytes_scan_like_text() {
    let options = WalkerOptions::new().with_normalize_whitespace(true);
    let mut s = StringWalker::from_bytes(b"key\r\nvalue\r\n", &options);
    let newline = s.find_next('\n').unwrap().unwrap();
    assert_eq!(newline, 3);
    assert_eq!(s.substring(0, Some(newline as isize)).unwrap(), "key");
    s.move_to(newline as isize + 1).unwrap();
    assert_eq!(s.remaining(), "value\n");
}

#[test]
fn test_speculative_probing_never_fails() {
    let s = StringWalker::new("");
    assert_eq!(s.current(), None);
    assert_eq!(s.peek(1), None);
    assert_eq!(s.behind(1), None);
    assert_eq!(s.at(0), None);
    assert_eq!(s.find_next('a'), Ok(None));
    assert_eq!(s.find_next_of(&['a', 'b']), Ok(None));
}

#[test]
fn test_walker_can_move_between_threads() {
    let mut s = StringWalker::new("abc def");
    s.move_to(4).unwrap();
    let handle = std::thread::spawn(move || s.remaining());
    assert_eq!(handle.join().unwrap(), "def");
}

#[test]
fn test_errors_render_for_callers() {
    // Rejected commands log at debug level; RUST_LOG=string_walker=debug shows them
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let mut s = StringWalker::new("abc");
    let err = s.move_to(-1).unwrap_err();
    assert_eq!(err.to_string(), "position -1 is outside the text bounds 0..=3");
    assert_eq!(s.position(), 0);
}
