use crate::token::TokenType as Tok;

/// Grammar rule labels. The projector keys on `Street`, `DoorNumberUnit`,
/// `DoorNumberValue` and `Floor`; the disambiguator on `UnnamedStreet` and
/// `DoorNumber`; everything else is structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nonterminal {
    Address,
    Simple,
    Intersection,
    Between,
    StreetWithNum,
    StreetNoNum,
    Street,
    NamedStreet,
    UnnamedStreet,
    StreetType,
    StreetName,
    NameSegment,
    NamePart,
    NameJoint,
    DoorNumber,
    DoorNumberUnit,
    DoorNumberValue,
    Floor,
    FloorParts,
    FloorPart,
    Location,
    LocationParts,
    LocationPart,
    IsctSeparator,
    BtwnSeparator,
    AndConnector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(Tok),
    Rule(Nonterminal),
}

#[derive(Debug, Clone)]
pub struct Production {
    pub lhs: Nonterminal,
    pub rhs: Vec<Symbol>,
}

#[derive(Debug, Clone)]
pub struct Grammar {
    pub start: Nonterminal,
    pub productions: Vec<Production>,
}

fn t(category: Tok) -> Symbol {
    Symbol::Terminal(category)
}

fn r(rule: Nonterminal) -> Symbol {
    Symbol::Rule(rule)
}

fn production(lhs: Nonterminal, rhs: &[Symbol]) -> Production {
    Production {
        lhs,
        rhs: rhs.to_vec(),
    }
}

/// The admissible shapes of an Argentine address, written over token
/// categories only, never surfaces. The grammar is deliberately permissive:
/// `y`/`e`, `entre` and lone `n` all keep both their connector and their
/// street-name readings, and preference between complete parses is the
/// disambiguator's job. Two restrictions keep ambiguity bounded: a simple
/// address must carry a door number, and name joints (`de`, `y`, `n`,
/// `entre`) can never end a street name.
pub fn address_grammar() -> Grammar {
    use Nonterminal::*;
    let productions = vec![
        production(Address, &[r(Simple)]),
        production(Address, &[r(Intersection)]),
        production(Address, &[r(Between)]),
        // simple
        production(Simple, &[r(StreetWithNum)]),
        production(Simple, &[r(StreetWithNum), r(Location)]),
        // intersection: at most one side carries a door number
        production(Intersection, &[r(StreetWithNum), r(IsctSeparator), r(StreetNoNum)]),
        production(Intersection, &[r(StreetNoNum), r(IsctSeparator), r(StreetWithNum)]),
        production(Intersection, &[r(StreetNoNum), r(IsctSeparator), r(StreetNoNum)]),
        // between: at most one of the three streets carries a door number
        production(
            Between,
            &[r(StreetWithNum), r(BtwnSeparator), r(StreetNoNum), r(AndConnector), r(StreetNoNum)],
        ),
        production(
            Between,
            &[r(StreetNoNum), r(BtwnSeparator), r(StreetWithNum), r(AndConnector), r(StreetNoNum)],
        ),
        production(
            Between,
            &[r(StreetNoNum), r(BtwnSeparator), r(StreetNoNum), r(AndConnector), r(StreetWithNum)],
        ),
        production(
            Between,
            &[r(StreetNoNum), r(BtwnSeparator), r(StreetNoNum), r(AndConnector), r(StreetNoNum)],
        ),
        // streets
        production(StreetWithNum, &[r(Street), r(DoorNumber)]),
        production(StreetWithNum, &[r(Street), r(DoorNumber), r(Floor)]),
        production(StreetNoNum, &[r(Street)]),
        production(Street, &[r(NamedStreet)]),
        production(Street, &[r(UnnamedStreet)]),
        production(NamedStreet, &[r(StreetName)]),
        production(NamedStreet, &[r(StreetType), r(StreetName)]),
        production(NamedStreet, &[r(StreetName), r(StreetType)]),
        production(NamedStreet, &[t(Tok::Route), r(StreetName)]),
        production(UnnamedStreet, &[t(Tok::Route), t(Tok::Num)]),
        production(UnnamedStreet, &[t(Tok::Route), r(NameSegment), t(Tok::Num)]),
        production(UnnamedStreet, &[r(StreetName), t(Tok::Route), t(Tok::Num)]),
        production(UnnamedStreet, &[r(StreetType), t(Tok::Num)]),
        production(UnnamedStreet, &[t(Tok::MissingName)]),
        production(StreetType, &[t(Tok::StreetTypeS)]),
        production(StreetType, &[t(Tok::StreetTypeL)]),
        // street names: segments of name words connected by joints; a joint
        // is always followed by another segment, and only BETWEEN may lead
        // (streets like "Entre Ríos")
        production(StreetName, &[r(NameSegment)]),
        production(StreetName, &[r(StreetName), r(NameJoint), r(NameSegment)]),
        production(StreetName, &[t(Tok::Between), r(NameSegment)]),
        production(NameSegment, &[r(NameSegment), r(NamePart)]),
        production(NameSegment, &[r(NamePart)]),
        production(NamePart, &[t(Tok::Word)]),
        production(NamePart, &[t(Tok::Num)]),
        production(NamePart, &[t(Tok::Ordinal)]),
        production(NamePart, &[t(Tok::NumsLetter)]),
        production(NamePart, &[t(Tok::Letter)]),
        production(NameJoint, &[t(Tok::Of)]),
        production(NameJoint, &[t(Tok::AndWord)]),
        production(NameJoint, &[t(Tok::N)]),
        production(NameJoint, &[t(Tok::Between)]),
        // door numbers
        production(DoorNumber, &[r(DoorNumberValue)]),
        production(DoorNumber, &[r(DoorNumberUnit), r(DoorNumberValue)]),
        production(DoorNumberUnit, &[t(Tok::N)]),
        production(DoorNumberUnit, &[t(Tok::NumLabelS)]),
        production(DoorNumberUnit, &[t(Tok::NumLabelL)]),
        production(DoorNumberUnit, &[t(Tok::Km)]),
        production(DoorNumberValue, &[t(Tok::Num)]),
        production(DoorNumberValue, &[t(Tok::Decimal)]),
        production(DoorNumberValue, &[t(Tok::NumRange)]),
        production(DoorNumberValue, &[t(Tok::Num), t(Tok::NumRange)]),
        production(DoorNumberValue, &[t(Tok::MissingNum)]),
        production(DoorNumberValue, &[t(Tok::SN)]),
        // floors
        production(Floor, &[r(FloorParts)]),
        production(FloorParts, &[r(FloorParts), r(FloorPart)]),
        production(FloorParts, &[r(FloorPart)]),
        production(FloorPart, &[t(Tok::Floor)]),
        production(FloorPart, &[t(Tok::Num)]),
        production(FloorPart, &[t(Tok::Ordinal)]),
        production(FloorPart, &[t(Tok::Groundl)]),
        production(FloorPart, &[t(Tok::DoorType)]),
        production(FloorPart, &[t(Tok::Letter)]),
        production(FloorPart, &[t(Tok::NumsLetter)]),
        // trailing locality on simple addresses, accepted then discarded
        production(Location, &[r(LocationParts)]),
        production(LocationParts, &[r(LocationParts), r(LocationPart)]),
        production(LocationParts, &[r(LocationPart)]),
        production(LocationPart, &[t(Tok::Word)]),
        production(LocationPart, &[t(Tok::Of)]),
        production(LocationPart, &[t(Tok::Between)]),
        // separators and connectors
        production(IsctSeparator, &[t(Tok::IsctSep)]),
        production(IsctSeparator, &[t(Tok::AndWord)]),
        production(IsctSeparator, &[t(Tok::AndNum)]),
        production(BtwnSeparator, &[t(Tok::BtwnSep)]),
        production(BtwnSeparator, &[t(Tok::Between)]),
        production(AndConnector, &[t(Tok::AndWord)]),
        production(AndConnector, &[t(Tok::AndNum)]),
    ];

    Grammar {
        start: Nonterminal::Address,
        productions,
    }
}
