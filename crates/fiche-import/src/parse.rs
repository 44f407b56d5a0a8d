//! Parser for fiche capture files.
//!
//! A capture file is plain UTF-8 text split into blocks by an expression
//! marker, with optional translation and note sections:
//!
//! ```text
//! [Expression]:
//! avoir le cafard
//! [Translation]:
//! to feel down
//! [Note]:
//! literally "to have the cockroach"
//! ```
//!
//! Parsing is deliberately lenient: unknown `[...]` lines are skipped,
//! blocks without an expression are dropped, and malformed input never
//! fails — the worst case is an empty result.

use fiche::NoteRecord;

/// Block and section delimiters. Both the Latin and the localized spelling
/// of each marker are accepted; markers match by prefix on the trimmed line.
const EXPRESSION_MARKERS: [&str; 2] = ["[Expression]:", "[法语表达]:"];
const TRANSLATION_MARKERS: [&str; 2] = ["[Translation]:", "[翻译]:"];
const NOTE_MARKERS: [&str; 2] = ["[Note]:", "[NOTE]:"];

#[derive(Debug, Clone, Copy)]
enum Section {
    Expression,
    Translation,
    Note,
}

/// Parse a capture file into note records, in input order.
pub fn parse_notes(input: &str) -> Vec<NoteRecord> {
    blocks(input).filter_map(parse_block).collect()
}

/// Split the input on the expression markers. The leading segment (anything
/// before the first marker) and whitespace-only segments are discarded.
fn blocks(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(EXPRESSION_MARKERS[0])
        .flat_map(|segment| segment.split(EXPRESSION_MARKERS[1]))
        .skip(1)
        .filter(|block| !block.trim().is_empty())
}

fn is_marker(markers: &[&str], line: &str) -> bool {
    markers.iter().any(|marker| line.starts_with(marker))
}

fn parse_block(block: &str) -> Option<NoteRecord> {
    let mut section = Section::Expression;
    let mut expression = "";
    let mut translation = String::new();
    let mut note = String::new();

    for line in block.lines() {
        let line = line.trim();
        if is_marker(&TRANSLATION_MARKERS, line) {
            section = Section::Translation;
            continue;
        }
        if is_marker(&NOTE_MARKERS, line) {
            section = Section::Note;
            continue;
        }
        if line.is_empty() || line.starts_with('[') {
            // blank lines and unrecognized markers are neither content nor
            // a section switch
            continue;
        }
        match section {
            // a later bare line replaces the earlier one; expression lines
            // are never joined
            Section::Expression => expression = line,
            Section::Translation => {
                translation.push_str(line);
                translation.push('\n');
            }
            Section::Note => {
                note.push_str(line);
                note.push('\n');
            }
        }
    }

    if expression.is_empty() {
        return None;
    }
    Some(NoteRecord {
        expression: expression.to_string(),
        translation: translation.trim().to_string(),
        note: note.trim().to_string(),
        alternative: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_sample() {
        let input = "[Expression]:\nchat\n[Translation]:\ncat\n[Expression]:\nchien\n[Translation]:\ndog\n";
        let records = parse_notes(input);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].expression, "chat");
        assert_eq!(records[0].translation, "cat");
        assert_eq!(records[1].expression, "chien");
        assert_eq!(records[1].translation, "dog");
    }

    #[test]
    fn drops_block_without_expression() {
        let input = "[Expression]:\n[Translation]:\nonly a translation\n";
        assert!(parse_notes(input).is_empty());
    }

    #[test]
    fn expression_last_bare_line_wins() {
        let input = "[Expression]:\nA\nB\n[Translation]:\nx\n";
        let records = parse_notes(input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].expression, "B");
    }

    #[test]
    fn translation_joins_lines_with_newline() {
        let input = "[Expression]:\nmot\n[Translation]:\nL1\nL2\n";
        assert_eq!(parse_notes(input)[0].translation, "L1\nL2");
    }

    #[test]
    fn blank_lines_are_skipped_inside_sections() {
        let input = "[Expression]:\nmot\n[Translation]:\nL1\n\n\nL2\n";
        assert_eq!(parse_notes(input)[0].translation, "L1\nL2");
    }

    #[test]
    fn leading_text_before_first_marker_is_discarded() {
        let input = "scratch lines\nnot a card\n[Expression]:\nmot\n";
        let records = parse_notes(input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].expression, "mot");
    }

    #[test]
    fn unknown_bracket_lines_are_ignored() {
        let input = "[Expression]:\nmot\n[Audio]: clip.mp3\n[Translation]:\nword\n";
        let records = parse_notes(input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].expression, "mot");
        assert_eq!(records[0].translation, "word");
    }

    #[test]
    fn localized_markers_are_accepted() {
        let input = "[法语表达]:\nbonjour\n[翻译]:\nhello\n[NOTE]:\ngreeting\n";
        let records = parse_notes(input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].expression, "bonjour");
        assert_eq!(records[0].translation, "hello");
        assert_eq!(records[0].note, "greeting");
    }

    #[test]
    fn note_section_is_collected() {
        let input = "[Expression]:\nmot\n[Note]:\nremark one\nremark two\n";
        assert_eq!(parse_notes(input)[0].note, "remark one\nremark two");
    }

    #[test]
    fn content_after_marker_on_the_same_line() {
        // text after an expression marker stays in the block; text after a
        // section marker is swallowed with the marker line
        let input = "[Expression]: chat\n[Translation]: cat\n";
        let records = parse_notes(input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].expression, "chat");
        assert_eq!(records[0].translation, "");
    }

    #[test]
    fn expression_lines_are_trimmed() {
        let input = "[Expression]:\n   une pomme  \n";
        assert_eq!(parse_notes(input)[0].expression, "une pomme");
    }

    #[test]
    fn parsing_is_idempotent() {
        let input = "[Expression]:\nchat\n[Translation]:\ncat\n[Note]:\nanimal\n";
        assert_eq!(parse_notes(input), parse_notes(input));
    }

    #[test]
    fn empty_or_markerless_input_yields_no_records() {
        assert!(parse_notes("").is_empty());
        assert!(parse_notes("no markers here\njust text\n").is_empty());
    }

    #[test]
    fn alternative_field_stays_empty() {
        let input = "[Expression]:\nmot\n";
        assert_eq!(parse_notes(input)[0].alternative, "");
    }
}
