use std::fmt;

/// Lexical categories assigned by the tokenizer. These are also the
/// terminals of the address grammar, so a sequence of them doubles as a
/// cache key for parse-tree skeletons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Word,
    Num,
    Decimal,
    NumRange,
    Letter,
    NumsLetter,
    Ordinal,
    Floor,
    Groundl,
    DoorType,
    Km,
    N,
    NumLabelS,
    NumLabelL,
    StreetTypeS,
    StreetTypeL,
    Route,
    MissingName,
    MissingNum,
    SN,
    AndWord,
    AndNum,
    IsctSep,
    BtwnSep,
    Between,
    Of,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenType::*;
        f.write_str(match self {
            Word => "WORD",
            Num => "NUM",
            Decimal => "DECIMAL",
            NumRange => "NUM_RANGE",
            Letter => "LETTER",
            NumsLetter => "NUMS_LETTER",
            Ordinal => "ORDINAL",
            Floor => "FLOOR",
            Groundl => "GROUNDL",
            DoorType => "DOOR_TYPE",
            Km => "KM",
            N => "N",
            NumLabelS => "NUM_LABEL_S",
            NumLabelL => "NUM_LABEL_L",
            StreetTypeS => "STREET_TYPE_S",
            StreetTypeL => "STREET_TYPE_L",
            Route => "ROUTE",
            MissingName => "MISSING_NAME",
            MissingNum => "MISSING_NUM",
            SN => "S_N",
            AndWord => "AND_WORD",
            AndNum => "AND_NUM",
            IsctSep => "ISCT_SEP",
            BtwnSep => "BTWN_SEP",
            Between => "BETWEEN",
            Of => "OF",
        })
    }
}

/// A whitespace-delimited fragment of the normalized input together with
/// its category. The token's position is its index in the token vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub category: TokenType,
}
