//! Fixed Myanmar word lists, one per grammatical category.
//!
//! The lists are data: they are turned into tries once, when a
//! [`Lexicon`](crate::scanner::Lexicon) is built. Entries are written as plain
//! words and syllabified with the same rules as the input text.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::chunk::Tag;

/// Personal and demonstrative pronouns
pub const PRONOUNS: &[&str] = &[
    "ကျွန်တော်",
    "ကျွန်မ",
    "ကျွန်ုပ်",
    "ကျနော်",
    "ငါ",
    "နင်",
    "မင်း",
    "ခင်ဗျား",
    "ရှင်",
    "သူ",
    "သူမ",
    "သူတို့",
    "ကျွန်တော်တို့",
    "ငါတို့",
    "သင်",
    "၎င်း",
    "ဒီ",
    "ဒါ",
    "ထို",
    "ဤ",
    "အဲဒီ",
    "အဲဒါ",
];

/// States, regions and major cities
pub const REGIONS: &[&str] = &[
    "ရန်ကုန်",
    "မန္တလေး",
    "နေပြည်တော်",
    "ပဲခူး",
    "မကွေး",
    "စစ်ကိုင်း",
    "တနင်္သာရီ",
    "ဧရာဝတီ",
    "ကချင်",
    "ကယား",
    "ကရင်",
    "ချင်း",
    "မွန်",
    "ရခိုင်",
    "ရှမ်း",
    "မြန်မာ",
    "မြန်မာနိုင်ငံ",
    "တောင်ကြီး",
    "မော်လမြိုင်",
    "ပုသိမ်",
    "မြစ်ကြီးနား",
];

/// Honorific titles
pub const TITLES: &[&str] = &[
    "ဦး",
    "ဒေါ်",
    "မောင်",
    "ဆရာ",
    "ဆရာမ",
    "ဆရာတော်",
    "ဒေါက်တာ",
    "ဗိုလ်ချုပ်",
    "ဝန်ကြီး",
];

/// Common nouns that close a noun phrase
pub const NOUNS: &[&str] = &[
    "လူ",
    "အိမ်",
    "ငွေ",
    "အစိုးရ",
    "ကျောင်း",
    "ဆေးရုံ",
    "မြို့",
    "ရွာ",
    "နိုင်ငံ",
    "အလုပ်",
    "အစီအစဥ်",
    "အင်အား",
    "ပြည်သူ",
    "ကလေး",
    "စာ",
    "ရေ",
    "ထမင်း",
];

/// Month names, with and without the trailing လ
pub const MONTHS: &[&str] = &[
    "ဇန်နဝါရီ",
    "ဖေဖော်ဝါရီ",
    "မတ်",
    "ဧပြီ",
    "မေ",
    "ဇွန်",
    "ဇူလိုင်",
    "ဩဂုတ်",
    "အော်ဂုတ်",
    "စက်တင်ဘာ",
    "အောက်တိုဘာ",
    "နိုဝင်ဘာ",
    "ဒီဇင်ဘာ",
    "ဇန်နဝါရီလ",
    "ဖေဖော်ဝါရီလ",
    "မတ်လ",
    "ဧပြီလ",
    "မေလ",
    "ဇွန်လ",
    "ဇူလိုင်လ",
    "ဩဂုတ်လ",
    "အော်ဂုတ်လ",
    "စက်တင်ဘာလ",
    "အောက်တိုဘာလ",
    "နိုဝင်ဘာလ",
    "ဒီဇင်ဘာလ",
];

/// Days of the week
pub const DAYS: &[&str] = &[
    "တနင်္ဂနွေ",
    "တနင်္လာ",
    "အင်္ဂါ",
    "ဗုဒ္ဓဟူး",
    "ကြာသပတေး",
    "သောကြာ",
    "စနေ",
    "တနင်္ဂနွေနေ့",
    "တနင်္လာနေ့",
    "အင်္ဂါနေ့",
    "ဗုဒ္ဓဟူးနေ့",
    "ကြာသပတေးနေ့",
    "သောကြာနေ့",
    "စနေနေ့",
];

/// Classifiers and measure words
pub const CLASSIFIERS: &[&str] = &[
    "ခု",
    "ခုနှစ်",
    "ယောက်",
    "ဦး",
    "ကောင်",
    "လုံး",
    "စင်း",
    "ချပ်",
    "အုပ်",
    "ပုဒ်",
    "ကြိမ်",
    "ခါ",
    "ရက်",
    "ရက်နေ့",
    "နေ့",
    "လ",
    "နှစ်",
    "ပတ်",
    "နာရီ",
    "မိနစ်",
    "စက္ကန့်",
    "ကျပ်",
    "ဒေါ်လာ",
    "သိန်း",
    "သန်း",
    "မိုင်",
    "ကီလို",
    "ပေ",
    "ရာခိုင်နှုန်း",
];

/// Clause and sentence conjunctions
pub const CONJUNCTIONS: &[&str] = &[
    "သို့မဟုတ်",
    "ဒါမှမဟုတ်",
    "နှင့်",
    "ပြီး",
    "ပြီးတော့",
    "ဖြစ်ပြီး",
    "ပြီးနောက်",
    "နောက်ပြီး",
    "ဒါပေမဲ့",
    "သို့သော်",
    "သော်လည်း",
    "ပေမဲ့",
    "ပေမယ့်",
    "ကြောင့်",
    "ဒါကြောင့်",
    "ထို့ကြောင့်",
    "ဆိုတော့",
    "ဖြစ်လို့",
    "တဲ့အတွက်",
    "လျှင်",
    "ရင်",
    "ပါက",
    "လို့",
    "သဖြင့်",
    "ဖို့",
    "ရန်",
];

/// Postpositions
pub const POSTPOSITIONS: &[&str] = &[
    "က",
    "ကို",
    "မှာ",
    "မှ",
    "တွင်",
    "၌",
    "သို့",
    "ထံ",
    "ဆီ",
    "နဲ့",
    "ရဲ့",
    "၏",
    "အား",
    "အတွက်",
    "ထဲမှာ",
    "ထဲက",
    "ထဲ",
    "ပေါ်မှာ",
    "တို့",
    "များ",
    "တွေ",
    "လောက်",
    "ထိ",
    "အထိ",
    "ကနေ",
];

/// Sentence-final particles
pub const SENTENCE_FINALS: &[&str] = &[
    "တယ်",
    "မယ်",
    "သည်",
    "မည်",
    "ပါ",
    "ဘူး",
    "နဲ့",
    "ပြီ",
    "ခဲ့",
    "နေ",
    "လား",
    "လဲ",
    "နည်း",
    "တုံး",
    "နော်",
    "ဗျာ",
    "ရှင့်",
    "ခင်ဗျာ",
];

/// Question words
pub const QUESTION_WORDS: &[&str] = &[
    "ဘာ",
    "ဘယ်",
    "ဘယ်သူ",
    "ဘယ်မှာ",
    "ဘယ်လို",
    "ဘယ်တော့",
    "ဘယ်နှစ်",
    "ဘာကြောင့်",
    "ဘာလို့",
    "အဘယ်",
];

/// Verb-ending and nominalizing particles
pub const VERB_ENDINGS: &[&str] = &["တဲ့", "သည့်", "သော", "မည့်", "မယ့်", "တာ", "ခြင်း"];

/// Auxiliary and directional verbs
pub const AUXILIARIES: &[&str] = &[
    "သွား",
    "လာ",
    "နိုင်",
    "ချင်",
    "ရ",
    "ထား",
    "ပေး",
    "ကြ",
    "ဖူး",
    "တတ်",
    "သင့်",
    "လိုက်",
];

/// Negation prefix
pub const NEG_PREFIXES: &[&str] = &["မ"];

/// Negation clitics
pub const NEG_CLITICS: &[&str] = &["မဟုတ်", "မရှိ"];

/// Spelled-out numbers
pub const WORD_NUMBERS: &[&str] = &[
    "တစ်",
    "နှစ်",
    "သုံး",
    "လေး",
    "ငါး",
    "ခြောက်",
    "ခုနစ်",
    "ရှစ်",
    "ကိုး",
    "ဆယ်",
    "ရာ",
    "ထောင်",
    "သောင်း",
    "သိန်း",
    "သန်း",
];

/// Trie categories in priority order; earlier entries win ties
pub const CATEGORIES: &[(&str, Tag, &[&str])] = &[
    ("PRN", Tag::Prn, PRONOUNS),
    ("REGION", Tag::Region, REGIONS),
    ("TITLE", Tag::Title, TITLES),
    ("NOUN", Tag::Noun, NOUNS),
    ("MONTH", Tag::Month, MONTHS),
    ("DAY", Tag::Day, DAYS),
    ("CL", Tag::Cl, CLASSIFIERS),
    ("CONJ", Tag::Conj, CONJUNCTIONS),
    ("POSTP", Tag::Postp, POSTPOSITIONS),
    ("SFP", Tag::Sfp, SENTENCE_FINALS),
    ("QW", Tag::Qw, QUESTION_WORDS),
    ("VEP", Tag::Vep, VERB_ENDINGS),
    ("AUX", Tag::Aux, AUXILIARIES),
    ("NEG", Tag::Neg, NEG_PREFIXES),
    ("NEG_CLITIC", Tag::NegClitic, NEG_CLITICS),
    ("WORDNUM", Tag::WordNum, WORD_NUMBERS),
];

/// Negation marker syllable
pub const NEG_MARKER: &str = "မ";

/// The "percent" phrase, fused into one classifier unit
pub const PERCENT: &str = "ရာခိုင်နှုန်း";

/// Sentence-final particles that close a negated predicate
pub const NEG_CLOSERS: &[&str] = &["ပါ", "ဘူး", "နဲ့"];

/// Sentence-final particles that close a question
pub const QUESTION_CLOSERS: &[&str] = &["နည်း", "လား", "လဲ", "တုံး"];

/// Debris dropped before chunks are collapsed into tokens
pub static STRAY_PUNCT: Lazy<HashSet<&'static str>> =
    Lazy::new(|| [" ", "", ",", "?", "!"].into_iter().collect());
