//! Porter suffix-stripping stemmer over lowercase ASCII words, with the
//! NLTK extensions: an irregular-form table, four-letter `-ies`/`-ied`
//! handling, consonant-guarded `y -> i`, early `alli`, and the `fulli` and
//! `logi` step-2 rules.

/// `(suffix, replacement, condition on the remaining stem)`.
type Rule = (&'static str, &'static str, Option<fn(&str) -> bool>);

const STEP1A: &[Rule] = &[
    ("sses", "ss", None),
    ("ies", "i", None),
    ("ss", "ss", None),
    ("s", "", None),
];

const STEP1C: &[Rule] = &[("y", "i", Some(consonant_before_y))];

const STEP2: &[Rule] = &[
    ("ational", "ate", Some(has_positive_measure)),
    ("tional", "tion", Some(has_positive_measure)),
    ("enci", "ence", Some(has_positive_measure)),
    ("anci", "ance", Some(has_positive_measure)),
    ("izer", "ize", Some(has_positive_measure)),
    ("bli", "ble", Some(has_positive_measure)),
    ("alli", "al", Some(has_positive_measure)),
    ("entli", "ent", Some(has_positive_measure)),
    ("eli", "e", Some(has_positive_measure)),
    ("ousli", "ous", Some(has_positive_measure)),
    ("ization", "ize", Some(has_positive_measure)),
    ("ation", "ate", Some(has_positive_measure)),
    ("ator", "ate", Some(has_positive_measure)),
    ("alism", "al", Some(has_positive_measure)),
    ("iveness", "ive", Some(has_positive_measure)),
    ("fulness", "ful", Some(has_positive_measure)),
    ("ousness", "ous", Some(has_positive_measure)),
    ("aliti", "al", Some(has_positive_measure)),
    ("iviti", "ive", Some(has_positive_measure)),
    ("biliti", "ble", Some(has_positive_measure)),
    ("fulli", "ful", Some(has_positive_measure)),
    ("logi", "log", Some(logi_stem)),
];

const STEP3: &[Rule] = &[
    ("icate", "ic", Some(has_positive_measure)),
    ("ative", "", Some(has_positive_measure)),
    ("alize", "al", Some(has_positive_measure)),
    ("iciti", "ic", Some(has_positive_measure)),
    ("ical", "ic", Some(has_positive_measure)),
    ("ful", "", Some(has_positive_measure)),
    ("ness", "", Some(has_positive_measure)),
];

const STEP4: &[Rule] = &[
    ("al", "", Some(measure_gt_1)),
    ("ance", "", Some(measure_gt_1)),
    ("ence", "", Some(measure_gt_1)),
    ("er", "", Some(measure_gt_1)),
    ("ic", "", Some(measure_gt_1)),
    ("able", "", Some(measure_gt_1)),
    ("ible", "", Some(measure_gt_1)),
    ("ant", "", Some(measure_gt_1)),
    ("ement", "", Some(measure_gt_1)),
    ("ment", "", Some(measure_gt_1)),
    ("ent", "", Some(measure_gt_1)),
    ("ion", "", Some(ion_stem)),
    ("ou", "", Some(measure_gt_1)),
    ("ism", "", Some(measure_gt_1)),
    ("ate", "", Some(measure_gt_1)),
    ("iti", "", Some(measure_gt_1)),
    ("ous", "", Some(measure_gt_1)),
    ("ive", "", Some(measure_gt_1)),
    ("ize", "", Some(measure_gt_1)),
];

const STEP5B: &[Rule] = &[("ll", "l", Some(ll_stem))];

/// Stems `word`. Input is expected to be lowercase `[a-z0-9]`; words of two
/// characters or fewer come back unchanged.
pub fn stem(word: &str) -> String {
    if let Some(base) = irregular(word) {
        return base.to_string();
    }
    if word.len() <= 2 || !word.is_ascii() {
        return word.to_string();
    }
    let w = step1a(word);
    let w = step1b(&w);
    let w = apply_rules(&w, STEP1C);
    let w = step2(&w);
    let w = apply_rules(&w, STEP3);
    let w = apply_rules(&w, STEP4);
    let w = step5a(&w);
    apply_rules(&w, STEP5B)
}

fn irregular(word: &str) -> Option<&'static str> {
    let base = match word {
        "sky" | "skies" => "sky",
        "dying" => "die",
        "lying" => "lie",
        "tying" => "tie",
        "news" => "news",
        "inning" | "innings" => "inning",
        "outing" | "outings" => "outing",
        "canning" | "cannings" => "canning",
        "howe" => "howe",
        "proceed" => "proceed",
        "exceed" => "exceed",
        "succeed" => "succeed",
        _ => return None,
    };
    Some(base)
}

/// First rule whose suffix matches decides: its replacement applies when the
/// condition holds, otherwise the word is returned untouched.
fn apply_rules(word: &str, rules: &[Rule]) -> String {
    for &(suffix, replacement, condition) in rules {
        if let Some(stem) = word.strip_suffix(suffix) {
            if condition.is_none_or(|holds| holds(stem)) {
                return format!("{stem}{replacement}");
            }
            return word.to_string();
        }
    }
    word.to_string()
}

fn is_consonant(b: &[u8], i: usize) -> bool {
    match b[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(b, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant transitions.
fn measure(stem: &str) -> usize {
    let b = stem.as_bytes();
    (1..b.len())
        .filter(|&i| !is_consonant(b, i - 1) && is_consonant(b, i))
        .count()
}

fn has_positive_measure(stem: &str) -> bool {
    measure(stem) > 0
}

fn measure_gt_1(stem: &str) -> bool {
    measure(stem) > 1
}

fn contains_vowel(stem: &str) -> bool {
    let b = stem.as_bytes();
    (0..b.len()).any(|i| !is_consonant(b, i))
}

fn ends_double_consonant(word: &str) -> bool {
    let b = word.as_bytes();
    let n = b.len();
    n >= 2 && b[n - 1] == b[n - 2] && is_consonant(b, n - 1)
}

/// consonant-vowel-consonant ending, last consonant not w, x or y. A bare
/// vowel-consonant pair also counts.
fn ends_cvc(word: &str) -> bool {
    let b = word.as_bytes();
    let n = b.len();
    let cvc = n >= 3
        && is_consonant(b, n - 3)
        && !is_consonant(b, n - 2)
        && is_consonant(b, n - 1)
        && !matches!(b[n - 1], b'w' | b'x' | b'y');
    cvc || (n == 2 && !is_consonant(b, 0) && is_consonant(b, 1))
}

fn consonant_before_y(stem: &str) -> bool {
    stem.len() > 1 && is_consonant(stem.as_bytes(), stem.len() - 1)
}

/// The `l` of `logi` stays with the stem when measuring.
fn logi_stem(stem: &str) -> bool {
    has_positive_measure(&format!("{stem}l"))
}

fn ion_stem(stem: &str) -> bool {
    measure(stem) > 1 && matches!(stem.as_bytes().last(), Some(b's' | b't'))
}

fn ll_stem(stem: &str) -> bool {
    measure(&format!("{stem}l")) > 1
}

fn step1a(word: &str) -> String {
    if word.len() == 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}ie");
        }
    }
    apply_rules(word, STEP1A)
}

/// -eed, -ed and -ing, with the four-letter -ied case kept as `ie`.
fn step1b(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ied") {
        return if word.len() == 4 {
            format!("{stem}ie")
        } else {
            format!("{stem}i")
        };
    }
    if let Some(stem) = word.strip_suffix("eed") {
        return if measure(stem) > 0 {
            format!("{stem}ee")
        } else {
            word.to_string()
        };
    }

    let Some(stem) = ["ed", "ing"]
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix).filter(|s| contains_vowel(s)))
    else {
        return word.to_string();
    };

    for (suffix, replacement) in [("at", "ate"), ("bl", "ble"), ("iz", "ize")] {
        if let Some(base) = stem.strip_suffix(suffix) {
            return format!("{base}{replacement}");
        }
    }
    if ends_double_consonant(stem) {
        return match stem.as_bytes()[stem.len() - 1] {
            b'l' | b's' | b'z' => stem.to_string(),
            _ => stem[..stem.len() - 1].to_string(),
        };
    }
    if measure(stem) == 1 && ends_cvc(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn step2(word: &str) -> String {
    // alli is reduced ahead of the table and the result goes through again.
    if let Some(stem) = word.strip_suffix("alli") {
        if has_positive_measure(stem) {
            return step2(&format!("{stem}al"));
        }
    }
    apply_rules(word, STEP2)
}

/// Drops a final -e when the stem is long enough.
fn step5a(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('e') {
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            return stem.to_string();
        }
    }
    word.to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/rouge/porter.rs"]
mod tests;
