//! End-to-end assembly scenarios over the public core API.

use stitcher_core::{language::get_rules, tokenize, SentenceAssembler, AUTO_EMIT_THRESHOLD};

fn assembler(min_words: usize) -> SentenceAssembler {
    SentenceAssembler::new(get_rules("en").unwrap(), min_words, 150)
}

#[test]
fn question_emits_immediately() {
    let a = assembler(2);
    let (completed, remaining) = a.assemble(&tokenize("Hello world?"));
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].text, "Hello world?");
    assert!(completed[0].confidence >= AUTO_EMIT_THRESHOLD);
    assert!(remaining.is_empty());
}

#[test]
fn unterminated_fragment_stays_buffered() {
    let a = assembler(8);
    let tokens = tokenize("This is the");
    let (completed, remaining) = a.assemble(&tokens);
    assert!(completed.is_empty());
    assert_eq!(remaining.len(), 3);

    let snapshot = a.buffer_snapshot(&remaining);
    assert_eq!(snapshot.confidence, 0.1);
    assert_eq!(snapshot.token_count, 3);
    assert_eq!(snapshot.word_count, 3);
}

#[test]
fn long_declarative_sentence_emits() {
    let a = assembler(6);
    let text = "I went to the store and bought milk and eggs for breakfast.";
    let (completed, remaining) = a.assemble(&tokenize(text));
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].text, text);
    assert!(remaining.is_empty());
}

#[test]
fn trailing_ellipsis_never_emits() {
    let a = assembler(2);
    let tokens = tokenize("Wait...");
    let (completed, remaining) = a.assemble(&tokens);
    assert!(completed.is_empty());
    assert_eq!(remaining.len(), 4);
    assert_eq!(a.buffer_snapshot(&remaining).confidence, 0.2);
}

#[test]
fn ellipsis_mid_buffer_never_splits() {
    let a = assembler(2);
    let tokens = tokenize("Something happened there... Nobody believed the story!");
    let (completed, _) = a.assemble(&tokens);
    for sentence in &completed {
        assert!(
            !sentence.text.trim_end().ends_with("..."),
            "emitted an ellipsis-terminated span: {:?}",
            sentence.text
        );
    }
}

#[test]
fn abbreviation_does_not_split() {
    let a = assembler(4);
    let tokens = tokenize("I met Dr. Smith yesterday and it was great.");
    let (completed, remaining) = a.assemble(&tokens);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].text, "I met Dr. Smith yesterday and it was great.");
    assert!(remaining.is_empty());
}

#[test]
fn connector_after_period_suppresses_split() {
    let a = assembler(2);
    let tokens = tokenize("Finally everything was done. and then");
    let (completed, remaining) = a.assemble(&tokens);
    // "and" after the period marks a continuation; nothing may be emitted
    // at that boundary.
    assert!(completed.is_empty());
    assert_eq!(remaining.len(), tokens.len());
}

#[test]
fn incremental_fragments_accumulate_then_emit() {
    let a = assembler(4);
    let mut buffer = Vec::new();

    for fragment in ["I met Dr.", "Smith yesterday and", "it was great."] {
        buffer.extend(tokenize(fragment));
        let (completed, remaining) = a.assemble(&buffer);
        buffer = remaining;
        if fragment.ends_with("great.") {
            assert_eq!(completed.len(), 1);
            assert_eq!(completed[0].text, "I met Dr. Smith yesterday and it was great.");
        } else {
            assert!(completed.is_empty(), "emitted too early after {fragment:?}");
        }
    }
    assert!(buffer.is_empty());
}

#[test]
fn no_tokens_are_lost_or_invented() {
    let a = assembler(3);
    let fragments = [
        "So we talked about it, and",
        "everyone agreed quickly. What could",
        "possibly go wrong? Nothing did",
        "go wrong at all.",
    ];

    let mut buffer = Vec::new();
    let mut emitted_tokens = Vec::new();
    for fragment in fragments {
        buffer.extend(tokenize(fragment));
        let (completed, remaining) = a.assemble(&buffer);
        for sentence in completed {
            emitted_tokens.extend(tokenize(&sentence.text));
        }
        buffer = remaining;
    }

    let mut all_tokens = Vec::new();
    for fragment in fragments {
        all_tokens.extend(tokenize(fragment));
    }

    emitted_tokens.extend(buffer);
    assert_eq!(emitted_tokens, all_tokens);
}
