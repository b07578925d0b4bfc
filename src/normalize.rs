/// Canonicalizes Arabic text for pronunciation comparison: strips
/// tashkeel, folds letter-shape variants, collapses whitespace, trims.
/// Idempotent and total over any input string.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if is_stripped(c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(fold_letter(c));
    }
    out
}

/// The tashkeel block: tanween, short vowels, shadda, sukoon.
pub fn is_tashkeel(c: char) -> bool {
    ('\u{064B}'..='\u{0652}').contains(&c)
}

// Stray tildes show up in some lesson texts, treated like tashkeel.
pub(crate) fn is_stripped(c: char) -> bool {
    is_tashkeel(c) || c == '~'
}

/// Folds hamza-bearing letter variants and taa marbouta to the base
/// letters they are pronounced as for scoring purposes. Alif maqsura is
/// deliberately left alone.
pub fn fold_letter(c: char) -> char {
    match c {
        'أ' | 'إ' | 'آ' => 'ا',
        'ؤ' => 'و',
        'ئ' => 'ي',
        'ة' => 'ه',
        _ => c,
    }
}
