use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Text that never carries address information: parenthesized asides,
// locality markers (which void everything after them), orientation notes,
// separating commas and semicolons, stray characters, dangling hyphens and
// the filler word "al" before a number. Order matters: the alternation is
// tried left to right at each position.
static NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\((ex|antes|frente|mano|(al\s)?lado).+?\)",
        r"|([vb][°ºª]|barrio\s|bo\.\s).*",
        r"|\([sneo]\)",
        r"|[,;](\s|$)|\s[,;]",
        r#"|[()"|]"#,
        r"|-+$|\s-+|-+\s",
    ))
    .expect("noise pattern compiles")
});

static AL_BEFORE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\sal\s+(\d)").expect("al pattern compiles"));

// "hola123" -> "hola 123", "ruta nac.3" -> "ruta nac. 3". A single glued
// letter is left alone here so number labels and floor shorthands survive.
static LETTERS_THEN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\W\d]{2,}\.?)(\d)").expect("letters pattern compiles"));

// "N1331" -> "N 1331", "N°1100" -> "N° 1100", "#120" -> "# 120".
static LABEL_THEN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(^|\s)(n[°ºª*]?|#)(\d)").expect("label pattern compiles"));

static DIGITS_THEN_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)([^\W\d]+)").expect("digits pattern compiles"));

static GLUED_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(e/|esq/)(\S+)").expect("separator pattern compiles"));

// Longest first, so "2ndoB" keeps "ndo" rather than "no".
const ORDINAL_SUFFIXES: [&str; 16] = [
    "era", "er", "ndo", "nda", "no", "na", "mo", "ma", "to", "ta", "vo", "va", "ro", "ra", "do",
    "da",
];

/// Cleans one raw address line. Never fails; at worst returns the trimmed
/// input. No lower-casing happens here and accents are kept, so every
/// surviving character can be reproduced verbatim by the projector.
pub(crate) fn normalize(address: &str) -> String {
    let cleaned = NOISE.replace_all(address, " ");
    let cleaned = AL_BEFORE_NUMBER.replace_all(&cleaned, " ${1}");
    let cleaned = LETTERS_THEN_DIGITS.replace_all(&cleaned, "${1} ${2}");
    let cleaned = LABEL_THEN_DIGITS.replace_all(&cleaned, "${1}${2} ${3}");
    let cleaned = split_digit_runs(&cleaned);
    let cleaned = split_glued_separators(&cleaned);
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Splits a digit run from the letters glued to it, with two exceptions:
// one-or-two digits plus a single letter stay together ("2B", "11A") and an
// ordinal suffix stays attached to its digits ("2ndo" intact, "2ndoB" ->
// "2ndo B").
fn split_digit_runs(input: &str) -> String {
    DIGITS_THEN_LETTERS
        .replace_all(input, |caps: &Captures| {
            let digits = &caps[1];
            let letters = &caps[2];
            if letters.chars().count() == 1 && digits.len() <= 2 {
                return caps[0].to_string();
            }
            if letters.is_ascii() {
                let lower = letters.to_ascii_lowercase();
                for suffix in ORDINAL_SUFFIXES {
                    if lower == suffix {
                        return caps[0].to_string();
                    }
                    if lower.starts_with(suffix) {
                        return format!(
                            "{}{} {}",
                            digits,
                            &letters[..suffix.len()],
                            &letters[suffix.len()..]
                        );
                    }
                }
            }
            format!("{} {}", digits, letters)
        })
        .into_owned()
}

// "e/25 de Mayo" -> "e/ 25 de Mayo" so the separator becomes its own
// fragment. "e/calles" is a separator spelling of its own and stays glued.
fn split_glued_separators(input: &str) -> String {
    GLUED_SEPARATOR
        .replace_all(input, |caps: &Captures| {
            if caps[2].eq_ignore_ascii_case("calles") {
                caps[0].to_string()
            } else {
                format!("{} {}", &caps[1], &caps[2])
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_collapses() {
        k9::snapshot!(normalize("  Sarmiento   N° 1100  "), "Sarmiento N° 1100");
        k9::snapshot!(normalize(""), "");
        k9::snapshot!(normalize("   \t  "), "");
    }

    #[test]
    fn noise_is_removed() {
        k9::snapshot!(
            normalize("Corrientes al 1200, San Miguel (ex ruta 8)"),
            "Corrientes 1200 San Miguel"
        );
        k9::snapshot!(normalize("Alsina 140 (N)"), "Alsina 140");
        k9::snapshot!(normalize("Brown 240 -"), "Brown 240");
        k9::snapshot!(normalize("Urquiza s/n B° Centro"), "Urquiza s/n");
    }

    #[test]
    fn glued_letters_and_digits_separate() {
        k9::snapshot!(normalize("hola123"), "hola 123");
        k9::snapshot!(normalize("Av.1200"), "Av. 1200");
        k9::snapshot!(normalize("ruta nac.3"), "ruta nac. 3");
        k9::snapshot!(normalize("N1331"), "N 1331");
        k9::snapshot!(normalize("N°1100"), "N° 1100");
        k9::snapshot!(normalize("1331bis"), "1331 bis");
    }

    #[test]
    fn short_floor_forms_stay_glued() {
        k9::snapshot!(normalize("Lote 14 M2"), "Lote 14 M2");
        k9::snapshot!(normalize("12C"), "12C");
        k9::snapshot!(normalize("123C"), "123 C");
    }

    #[test]
    fn ordinals_keep_their_digits() {
        k9::snapshot!(normalize("1ro de Mayo"), "1ro de Mayo");
        k9::snapshot!(normalize("2ndoB"), "2ndo B");
        k9::snapshot!(
            normalize("Av. Libertador N1331 2ndoB e/25 de Mayo"),
            "Av. Libertador N 1331 2ndo B e/ 25 de Mayo"
        );
    }

    #[test]
    fn glued_separators_split() {
        k9::snapshot!(normalize("Francia e/Vieytes y Peatonal"), "Francia e/ Vieytes y Peatonal");
        k9::snapshot!(normalize("Mitre esq/Misiones"), "Mitre esq/ Misiones");
        k9::snapshot!(normalize("9 de Julio e/calles 3 y 4"), "9 de Julio e/calles 3 y 4");
    }
}
