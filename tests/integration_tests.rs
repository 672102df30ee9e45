//! End-to-end tests for the tokenizer pipeline and both engines.

use std::sync::Arc;

use mmdt_tokenizer::export::{write_conll, write_rows};
use mmdt_tokenizer::{
    backward_mm, forward_mm, syllabify, viterbi, Dag, DagSegmenter, Dictionary, Engine,
    OutputMode, Protector, Segment, Tag, TextInput, TokenOutput, Tokenizer, TokenizerConfig,
    TokenizerError,
};
use proptest::prelude::*;
use serde_json::json;

fn rule() -> Tokenizer {
    Tokenizer::with_defaults().unwrap()
}

fn dictionary_engine(dict: Dictionary) -> Tokenizer {
    let config = TokenizerConfig {
        engine: Engine::Dictionary,
        ..Default::default()
    };
    Tokenizer::new(config, dict).unwrap()
}

// =============================================================================
// Rule engine scenarios
// =============================================================================

#[test]
fn test_conjunction_splitting() {
    assert_eq!(
        rule().word_tokenize("သူသွားမယ်သို့မဟုတ်သူလာမယ်။"),
        vec!["သူ", "သွားမယ်", "သို့မဟုတ်", "သူ", "လာမယ်။"]
    );
}

#[test]
fn test_month_date_fusion() {
    assert_eq!(
        rule().word_tokenize("မေလ ၁ ရက်နေ့မှာ စတင်မည်။"),
        vec!["မေလ", "၁ရက်နေ့မှာ", "စတင်", "မည်။"]
    );
}

#[test]
fn test_punctuation_only() {
    assert!(rule().word_tokenize("။၊?").is_empty());
}

#[test]
fn test_mixed_english() {
    let tokens = rule().word_tokenize("Yangon 2025");
    assert!(tokens.iter().any(|t| t == "Yangon"));
    assert!(tokens.iter().any(|t| t.contains("2025")));
}

#[test]
fn test_negative_predicate_stays_whole() {
    let chunks = rule().rule_chunks("မနေပါဘူး");
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].tag, Tag::Pred);
    assert_eq!(chunks[0].text, "မနေပါဘူး");
}

#[test]
fn test_numbers_survive_whole() {
    let tokens = rule().word_tokenize("၂၀၂၅ခုနှစ် ငွေ ၁၅,၀၀၀ ကျပ် အင်အား ၇.၇၅");
    for number in ["၁၅,၀၀၀", "၇.၇၅", "၂၀၂၅"] {
        assert!(
            tokens.iter().any(|t| t == number),
            "{} missing from {:?}",
            number,
            tokens
        );
    }
}

#[test]
fn test_entities_survive_whole() {
    let tokens = rule().word_tokenize("user@example.com ကို ၁၀:၃၀ မှာ ပို့မယ်");
    assert!(tokens.iter().any(|t| t == "user@example.com"));
    assert!(tokens.iter().any(|t| t.contains("၁၀:၃၀")));
}

#[test]
fn test_protected_entity_does_not_split_clause() {
    let t = rule();
    let head = |text: &str| -> Vec<(String, Tag)> {
        t.rule_chunks(text)
            .into_iter()
            .take(3)
            .map(|c| (c.text, c.tag))
            .collect()
    };
    let expected: Vec<(String, Tag)> = vec![
        ("သူ".into(), Tag::Prn),
        ("သွား".into(), Tag::Aux),
        ("ပြီး".into(), Tag::Conj),
    ];
    assert_eq!(head("သူသွားပြီး ၂၀၂၅ မှာ ပြန်လာမယ်။"), expected);
    assert_eq!(head("သူသွားပြီး ရန်ကုန်မှာ ပြန်လာမယ်။"), expected);
}

#[test]
fn test_postposition_after_space_attaches() {
    let tokens = rule().word_tokenize("Yangon မှာ ၅၀ ယောက် ရှိတယ်။");
    assert_eq!(tokens[0], "Yangonမှာ");
}

#[test]
fn test_placeholder_lookalike_in_input() {
    let tokens = rule().word_tokenize("a\u{2}PROTA\u{3}b 12");
    assert_eq!(tokens.iter().filter(|t| t.contains("12")).count(), 1);
    assert!(tokens.iter().all(|t| !t.contains('\u{2}') && !t.contains('\u{3}')));
}

#[test]
fn test_empty_and_blank_input() {
    let t = rule();
    assert!(t.word_tokenize("").is_empty());
    assert!(t.word_tokenize(" \t\n ").is_empty());
    assert!(t.syllable_tokenize("").is_empty());
    assert!(t.sentence_tokenize("။").is_empty());
}

#[test]
fn test_sentence_split() {
    let sentences = rule().sentence_tokenize("သူလာမယ်။ငါသွားမယ်။");
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].last().map(String::as_str), Some("လာမယ်။"));
    assert_eq!(sentences[1].last().map(String::as_str), Some("သွားမယ်။"));
}

// =============================================================================
// Dictionary engine
// =============================================================================

#[test]
fn test_dictionary_engine_bundled() {
    let t = dictionary_engine(Dictionary::bundled());
    assert_eq!(
        t.word_tokenize("ကျောင်းသားစာအုပ်ဖတ်တယ်"),
        vec!["ကျောင်းသား", "စာအုပ်", "ဖတ်", "တယ်"]
    );
}

#[test]
fn test_dictionary_engine_custom_words() {
    let dict = Dictionary::from_lines("ကျောင်းသား\nစာအုပ်ဖတ်\n");
    let t = dictionary_engine(dict);
    assert_eq!(
        t.word_tokenize("ကျောင်းသားစာအုပ်ဖတ်"),
        vec!["ကျောင်းသား", "စာအုပ်ဖတ်"]
    );
}

#[test]
fn test_dictionary_engine_sentences() {
    let t = dictionary_engine(Dictionary::bundled());
    let sentences = t.sentence_tokenize("စာအုပ်ဖတ်တယ်။ ကျောင်းသား");
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[1], vec!["ကျောင်းသား"]);
}

#[test]
fn test_dictionary_engine_keeps_entities() {
    let t = dictionary_engine(Dictionary::bundled());
    let tokens = t.word_tokenize("စာအုပ် ၁၅,၀၀၀");
    assert_eq!(tokens.last().map(String::as_str), Some("၁၅,၀၀၀"));
}

#[test]
fn test_shared_dictionary_across_threads() {
    let t = Tokenizer::with_arc(TokenizerConfig::default(), Arc::new(Dictionary::bundled())).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let t = t.clone();
            std::thread::spawn(move || t.word_tokenize("သူလာမယ်"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["သူ", "လာမယ်"]);
    }
}

// =============================================================================
// Input shapes
// =============================================================================

#[test]
fn test_batch_preserves_order() {
    let t = rule();
    let batch = t.word_tokenize_batch(&["သူလာမယ်", "", "Yangon"]);
    assert_eq!(batch.len(), 3);
    assert_eq!(batch[0], vec!["သူ", "လာမယ်"]);
    assert!(batch[1].is_empty());
    assert_eq!(batch[2], vec!["Yangon"]);
}

#[test]
fn test_batch_rejects_bad_element() {
    let err = TextInput::try_from(json!(["သူ", {"a": 1}, "လာ"])).unwrap_err();
    assert!(matches!(err, TokenizerError::InvalidInput(_)));
}

#[test]
fn test_joined_batch_output() {
    let t = rule();
    let input = TextInput::try_from(json!(["သူလာမယ်", 42])).unwrap();
    let output = t.tokenize_input(
        input,
        &OutputMode::Joined {
            separator: " ".into(),
        },
    );
    assert_eq!(
        output,
        TokenOutput::JoinedBatch(vec!["သူ လာမယ်".into(), "42".into()])
    );
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!(["သူ လာမယ်", "42"])
    );
}

#[test]
fn test_config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("mmdt-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"engine": "dictionary", "max_word_len": 40}"#).unwrap();
    let config = TokenizerConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.engine, Engine::Dictionary);
    let t = Tokenizer::new(config, Dictionary::bundled()).unwrap();
    assert_eq!(t.config().max_word_len, 40);
}

#[test]
fn test_missing_config_is_resource_error() {
    let err = TokenizerConfig::load(std::path::Path::new("/nonexistent/mmdt.json")).unwrap_err();
    assert!(matches!(err, TokenizerError::Resource { .. }));
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_tokenized_documents() {
    let t = rule();
    let docs = t.word_tokenize_batch(&["သူလာမယ်", "ငါ"]);

    let mut conll = Vec::new();
    write_conll(&mut conll, &docs).unwrap();
    assert_eq!(String::from_utf8(conll).unwrap(), "token\nသူ\nလာမယ်\n\nငါ\n");

    let mut rows = Vec::new();
    write_rows(&mut rows, &docs).unwrap();
    assert_eq!(
        String::from_utf8(rows).unwrap(),
        "Token_1,Token_2\nသူ,လာမယ်\nငါ,\n"
    );
}

// =============================================================================
// Properties
// =============================================================================

const LETTERS: &[&str] = &["က", "ခ", "ဂ", "ဃ"];

const SYLLABLES: &[&str] = &[
    "သူ", "သွား", "မယ်", "လာ", "ကျောင်း", "သား", "စာ", "အုပ်", "ဖတ်", "တယ်", "ဘူး", "နေ",
];

fn letters(max: usize) -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(LETTERS), 0..=max)
}

fn letter_dict() -> impl Strategy<Value = Dictionary> {
    prop::collection::vec(letters(4), 0..8).prop_map(|words| {
        words
            .into_iter()
            .filter(|w| !w.is_empty())
            .map(|w| w.concat())
            .collect::<Dictionary>()
    })
}

fn covers(segments: &[Segment], syllables: &[&str], max_len: usize) -> bool {
    let mut pos = 0;
    for s in segments {
        if s.start != pos
            || s.end <= s.start
            || s.end - s.start > max_len
            || s.word != syllables[s.start..s.end].concat()
        {
            return false;
        }
        pos = s.end;
    }
    pos == syllables.len()
}

/// Best score over every segmentation into dictionary words and single syllables
fn best_score(syllables: &[&str], dict: &Dictionary, max_len: usize, weight: f64) -> f64 {
    let n = syllables.len();
    let mut best = vec![f64::NEG_INFINITY; n + 1];
    best[n] = 0.0;
    for i in (0..n).rev() {
        for j in i + 1..=n.min(i + max_len) {
            let word = syllables[i..j].concat();
            let in_dict = dict.contains(&word);
            if !in_dict && j > i + 1 {
                continue;
            }
            let score = best[j] + if in_dict { weight } else { 0.0 };
            if score > best[i] {
                best[i] = score;
            }
        }
    }
    best[0]
}

proptest! {
    #[test]
    fn prop_max_matching_partitions(syls in letters(10), dict in letter_dict()) {
        prop_assert!(covers(&forward_mm(&syls, &dict, 6), &syls, 6));
        prop_assert!(covers(&backward_mm(&syls, &dict, 6), &syls, 6));
        prop_assert!(covers(&forward_mm(&syls, &dict, 2), &syls, 2));
        prop_assert!(covers(&backward_mm(&syls, &dict, 2), &syls, 2));
    }

    #[test]
    fn prop_viterbi_is_optimal(syls in letters(6), dict in letter_dict()) {
        let dag = Dag::build(&syls, &dict, 6, None);
        let words = viterbi(&dag, 10.0, 0.0);

        prop_assert_eq!(words.concat(), syls.concat());
        let score: f64 = words.iter().filter(|w| dict.contains(w)).count() as f64 * 10.0;
        prop_assert_eq!(score, best_score(&syls, &dict, 6, 10.0));
    }

    #[test]
    fn prop_segmenter_preserves_text(syls in letters(12), dict in letter_dict()) {
        let segmenter = DagSegmenter::new(Arc::new(dict), 6, true, 10.0, 150.0);
        prop_assert_eq!(segmenter.segment(&syls).concat(), syls.concat());
    }

    #[test]
    fn prop_protection_restores(text in "[a-z0-9@.:/ ၀-၉]{0,40}") {
        let protector = Protector::new().unwrap();
        let restored = protector.protect(&text).restore();
        prop_assert_eq!(restored.replace(' ', ""), text.replace(' ', ""));
    }

    #[test]
    fn prop_rule_tokens_cover_text(parts in prop::collection::vec(prop::sample::select(SYLLABLES), 0..12)) {
        let text = parts.concat();
        let tokens = rule().word_tokenize(&text);
        prop_assert_eq!(tokens.concat(), text.clone());
        prop_assert_eq!(syllabify(&text).concat(), text);
    }
}
