// src/text/tokenize.rs
//! Penn Treebank style word tokenization.
//!
//! Text is first cut into sentences, then each sentence goes through the
//! Treebank rewrite rules and is split on whitespace. Quotes become ``` `` ```
//! and `''`, punctuation is separated, and clitics (`n't`, `'ll`, ...) become
//! their own tokens.

use regex::Regex;
use std::sync::LazyLock;

type Rule = (Regex, &'static str);

fn rules(specs: &[(&str, &'static str)]) -> Vec<Rule> {
    specs
        .iter()
        .map(|(pattern, replacement)| {
            let re = Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid Regex: {pattern}"));
            (re, *replacement)
        })
        .collect()
}

static STARTING_QUOTES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r#"^""#, "``"),
        (r"(``)", " ${1} "),
        (r#"([ (\[{<])("|'')"#, "${1} `` "),
    ])
});

static PUNCTUATION: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.\.\.", " ... "),
        (r"[;@#$%&]", " ${0} "),
        (r#"([^.])(\.)([\]\)}>"']*)\s*$"#, "${1} ${2}${3} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
        (r"[\]\[(){}<>]", " ${0} "),
        (r"--", " -- "),
    ])
});

static ENDING_QUOTES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r#"""#, " '' "),
        (r"(\S)('')", "${1} ${2} "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ])
});

static CONTRACTIONS: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ])
});

/// Dotted initialisms such as `U.S`, `Ph.D` or `e.g`, without the final period.
static INITIALISM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z]{1,2}\.)+[A-Za-z]{1,2}$").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Words that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "jr", "sr", "prof", "vs", "etc", "e.g", "i.e", "no", "fig", "inc", "ltd", "co",
];

/// Splits `text` into word tokens.
#[must_use]
pub fn word_tokenize(text: &str) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .flat_map(treebank_tokenize)
        .collect()
}

/// Tokenizes one sentence with the Treebank rules.
#[must_use]
pub fn treebank_tokenize(sentence: &str) -> Vec<String> {
    let mut text = sentence.to_string();
    for set in [&*STARTING_QUOTES, &*PUNCTUATION] {
        text = apply(set, text);
    }
    text = format!(" {text} ");
    for set in [&*ENDING_QUOTES, &*CONTRACTIONS] {
        text = apply(set, text);
    }
    text.split_whitespace().map(str::to_string).collect()
}

fn apply(set: &[Rule], mut text: String) -> String {
    for (re, replacement) in set {
        text = re.replace_all(&text, *replacement).into_owned();
    }
    text
}

/// Cuts text after `.`, `!` or `?` when the next word starts a sentence.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let Some(&(_, after)) = chars.get(i + 1) else {
            continue;
        };
        if !after.is_whitespace() {
            continue;
        }
        let next = chars[i + 1..].iter().map(|&(_, ch)| ch).find(|ch| !ch.is_whitespace());
        let starts_sentence =
            next.is_some_and(|ch| ch.is_uppercase() || ch.is_ascii_digit() || matches!(ch, '"' | '\'' | '(' | '['));
        if !starts_sentence || (c == '.' && is_abbreviation(&text[start..pos])) {
            continue;
        }
        let end = pos + c.len_utf8();
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = end;
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest);
    }
    sentences
}

/// True when the word right before a period is an abbreviation, an initial or
/// a dotted initialism.
fn is_abbreviation(before: &str) -> bool {
    let word = before
        .rsplit(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or("");
    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }
    if INITIALISM.is_match(word) {
        return true;
    }
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}
