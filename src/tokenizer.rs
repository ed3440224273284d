use crate::token::{Token, TokenType};
use crate::token::TokenType::*;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, one_of, satisfy},
    combinator::{eof, opt, recognize, value, verify},
    multi::many1,
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

type Matcher = fn(&str) -> IResult<&str, TokenType>;

// One matcher per lexical category, tried in order on a lower-cased copy of
// each fragment; the first full match wins. WORD is the catch-all, so in
// practice classification only fails on an empty fragment.
const MATCHERS: [Matcher; 26] = [
    and_word,
    and_num,
    of_word,
    floor_word,
    door_type,
    ground_level,
    isct_separator,
    btwn_separator,
    between_word,
    kilometre,
    missing_name,
    missing_num,
    s_n,
    street_type_short,
    street_type_long,
    route,
    num_label_short,
    num_label_long,
    decimal,
    num_range,
    ordinal,
    num,
    lone_n,
    nums_letter,
    letter,
    word,
];

/// Splits normalized text on whitespace and classifies every fragment.
/// Returns `None` when any fragment has no category, which the pipeline
/// reports as an unknown address.
pub(crate) fn tokenize(normalized: &str) -> Option<Vec<Token>> {
    normalized
        .split_whitespace()
        .map(|fragment| {
            classify(fragment).map(|category| Token {
                surface: fragment.to_string(),
                category,
            })
        })
        .collect()
}

pub(crate) fn classify(fragment: &str) -> Option<TokenType> {
    let lowered = fragment.to_lowercase();
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(&lowered).ok().map(|(_, category)| category))
}

fn and_word(i: &str) -> IResult<&str, TokenType> {
    value(AndWord, terminated(alt((char('y'), char('e'))), eof))(i)
}

fn and_num(i: &str) -> IResult<&str, TokenType> {
    value(AndNum, terminated(char('&'), eof))(i)
}

fn of_word(i: &str) -> IResult<&str, TokenType> {
    value(Of, terminated(tag("de"), eof))(i)
}

fn floor_word(i: &str) -> IResult<&str, TokenType> {
    value(Floor, terminated(tag("piso"), eof))(i)
}

fn door_type(i: &str) -> IResult<&str, TokenType> {
    value(
        DoorType,
        terminated(
            alt((
                tag("departamento"),
                recognize(pair(
                    alt((tag("depto"), tag("dpto"), tag("dto"))),
                    opt(char('.')),
                )),
                tag("oficina"),
                tag("of."),
            )),
            eof,
        ),
    )(i)
}

fn ground_level(i: &str) -> IResult<&str, TokenType> {
    value(
        Groundl,
        terminated(
            tuple((char('p'), opt(char('.')), char('b'), opt(char('.')))),
            eof,
        ),
    )(i)
}

fn isct_separator(i: &str) -> IResult<&str, TokenType> {
    value(
        IsctSep,
        terminated(
            alt((
                tag("esquina"),
                recognize(pair(tag("esq"), opt(one_of("./")))),
                tag("/"),
            )),
            eof,
        ),
    )(i)
}

fn btwn_separator(i: &str) -> IResult<&str, TokenType> {
    value(
        BtwnSep,
        terminated(recognize(pair(tag("e/"), opt(tag("calles")))), eof),
    )(i)
}

fn between_word(i: &str) -> IResult<&str, TokenType> {
    value(Between, terminated(tag("entre"), eof))(i)
}

fn kilometre(i: &str) -> IResult<&str, TokenType> {
    value(
        Km,
        terminated(
            alt((
                tag("kilometro"),
                tag("kilómetro"),
                recognize(pair(tag("km"), opt(char('.')))),
            )),
            eof,
        ),
    )(i)
}

fn missing_name(i: &str) -> IResult<&str, TokenType> {
    value(MissingName, terminated(tag("s/nombre"), eof))(i)
}

fn missing_num(i: &str) -> IResult<&str, TokenType> {
    value(
        MissingNum,
        terminated(
            preceded(
                tag("s/"),
                alt((
                    tag("numero"),
                    tag("número"),
                    recognize(pair(tag("nro"), opt(char('.')))),
                    recognize(pair(char('n'), one_of("°º"))),
                )),
            ),
            eof,
        ),
    )(i)
}

fn s_n(i: &str) -> IResult<&str, TokenType> {
    value(SN, terminated(alt((tag("s/n"), tag("s-n"), tag("sn"))), eof))(i)
}

fn street_type_short(i: &str) -> IResult<&str, TokenType> {
    value(
        StreetTypeS,
        terminated(
            recognize(pair(
                alt((tag("avda"), tag("av"), tag("bv"), tag("diag"))),
                opt(char('.')),
            )),
            eof,
        ),
    )(i)
}

fn street_type_long(i: &str) -> IResult<&str, TokenType> {
    value(
        StreetTypeL,
        terminated(
            alt((
                tag("calle"),
                tag("avenida"),
                tag("boulevard"),
                tag("boulevar"),
                tag("bulevard"),
                tag("bulevar"),
                tag("diagonal"),
                tag("pasaje"),
            )),
            eof,
        ),
    )(i)
}

fn route(i: &str) -> IResult<&str, TokenType> {
    value(
        Route,
        terminated(
            recognize(pair(
                alt((tag("ruta"), tag("rta"), tag("rn"), tag("rp"))),
                opt(char('.')),
            )),
            eof,
        ),
    )(i)
}

fn num_label_short(i: &str) -> IResult<&str, TokenType> {
    value(
        NumLabelS,
        terminated(
            alt((recognize(pair(char('n'), one_of("°ºª*"))), tag("#"))),
            eof,
        ),
    )(i)
}

fn num_label_long(i: &str) -> IResult<&str, TokenType> {
    value(
        NumLabelL,
        terminated(
            alt((
                recognize(pair(tag("nro"), opt(char('.')))),
                tag("numero"),
                tag("número"),
            )),
            eof,
        ),
    )(i)
}

fn decimal(i: &str) -> IResult<&str, TokenType> {
    value(
        Decimal,
        terminated(recognize(tuple((digit1, one_of(".,"), digit1))), eof),
    )(i)
}

fn num_range(i: &str) -> IResult<&str, TokenType> {
    value(
        NumRange,
        terminated(
            recognize(pair(digit1, many1(pair(one_of("/-"), digit1)))),
            eof,
        ),
    )(i)
}

// Longest suffixes first, so "2ndo" is not read as "2n" + "do".
fn ordinal_suffix(i: &str) -> IResult<&str, &str> {
    alt((
        tag("era"),
        tag("er"),
        tag("ndo"),
        tag("nda"),
        tag("no"),
        tag("na"),
        tag("mo"),
        tag("ma"),
        tag("to"),
        tag("ta"),
        tag("vo"),
        tag("va"),
        tag("ro"),
        tag("ra"),
        tag("do"),
        tag("da"),
    ))(i)
}

fn ordinal(i: &str) -> IResult<&str, TokenType> {
    value(
        Ordinal,
        terminated(
            alt((
                recognize(tuple((digit1, ordinal_suffix, opt(char('.'))))),
                recognize(pair(digit1, one_of("°º"))),
            )),
            eof,
        ),
    )(i)
}

fn num(i: &str) -> IResult<&str, TokenType> {
    value(Num, terminated(digit1, eof))(i)
}

fn lone_n(i: &str) -> IResult<&str, TokenType> {
    value(N, terminated(char('n'), eof))(i)
}

fn nums_letter(i: &str) -> IResult<&str, TokenType> {
    value(
        NumsLetter,
        terminated(
            pair(
                verify(digit1, |digits: &&str| digits.len() <= 2),
                satisfy(char::is_alphabetic),
            ),
            eof,
        ),
    )(i)
}

fn letter(i: &str) -> IResult<&str, TokenType> {
    value(
        Letter,
        terminated(pair(satisfy(char::is_alphabetic), opt(char('.'))), eof),
    )(i)
}

fn word(i: &str) -> IResult<&str, TokenType> {
    value(
        Word,
        terminated(take_while1(|c: char| !c.is_whitespace()), eof),
    )(i)
}
