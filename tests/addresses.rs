use esquina::{
    AddressData, AddressKind, AddressParser, DoorNumber, ParseCache, ParseTree, TokenType,
    TreeCache,
};
use std::cell::RefCell;
use std::rc::Rc;

fn parse(address: &str) -> AddressData {
    AddressParser::new().parse(address)
}

fn data(
    kind: AddressKind,
    streets: &[&str],
    door: Option<(Option<&str>, &str)>,
    floor: Option<&str>,
) -> AddressData {
    AddressData {
        kind: Some(kind),
        street_names: streets.iter().map(|street| street.to_string()).collect(),
        door_number: door.map(|(unit, value)| DoorNumber {
            unit: unit.map(str::to_string),
            value: value.to_string(),
        }),
        floor: floor.map(str::to_string),
    }
}

#[test]
fn none_cases() {
    for address in [
        "",
        "   ",
        "qwerty",
        "1234",
        "piso 2",
        "PB",
        // both sides carry a number, so the door fits either equally well
        // and the ambiguity is irresolvable
        "Mitre 100 esq. Misiones 200",
    ] {
        let parsed = parse(address);
        assert!(parsed.is_unknown(), "expected unknown for {:?}", address);
        assert_eq!(parsed.street_names, Vec::<String>::new());
        assert_eq!(parsed.door_number, None);
        assert_eq!(parsed.floor, None);
    }
}

#[test]
fn simple_cases() {
    use AddressKind::Simple;

    assert_eq!(
        parse("Sarmiento N° 1100"),
        data(Simple, &["Sarmiento"], Some((Some("N°"), "1100")), None)
    );
    assert_eq!(
        parse("Vicente Lopez y Planes 120"),
        data(Simple, &["Vicente Lopez y Planes"], Some((None, "120")), None)
    );
    assert_eq!(
        parse("sÃnta fe 1000"),
        data(Simple, &["sÃnta fe"], Some((None, "1000")), None)
    );
    assert_eq!(
        parse("Tucumán 1300 1° A"),
        data(Simple, &["Tucumán"], Some((None, "1300")), Some("1° A"))
    );
    assert_eq!(
        parse("Corrientes 348 piso 2 dpto A"),
        data(
            Simple,
            &["Corrientes"],
            Some((None, "348")),
            Some("piso 2 dpto A")
        )
    );
    assert_eq!(
        parse("Entre Ríos 1435"),
        data(Simple, &["Entre Ríos"], Some((None, "1435")), None)
    );
    assert_eq!(
        parse("Calle 11 1234"),
        data(Simple, &["Calle 11"], Some((None, "1234")), None)
    );
    assert_eq!(
        parse("Ruta 3 Km 4,5"),
        data(Simple, &["Ruta 3"], Some((Some("Km"), "4,5")), None)
    );
}

#[test]
fn explicit_missing_number_with_trailing_locality() {
    assert_eq!(
        parse("Ruta 33 s/n Villa Chacón"),
        data(AddressKind::Simple, &["Ruta 33"], Some((None, "s/n")), None)
    );
}

#[test]
fn trailing_locality_is_discarded() {
    assert_eq!(
        parse("San Martín 1500 Villa Urquiza"),
        data(AddressKind::Simple, &["San Martín"], Some((None, "1500")), None)
    );
}

#[test]
fn isct_cases() {
    use AddressKind::Intersection;

    assert_eq!(
        parse("Tucumán y 9 de Julio"),
        data(Intersection, &["Tucumán", "9 de Julio"], None, None)
    );
    assert_eq!(
        parse("Córdoba e Hipólito Yrigoyen"),
        data(Intersection, &["Córdoba", "Hipólito Yrigoyen"], None, None)
    );
    assert_eq!(
        parse("Mitre esq. Misiones"),
        data(Intersection, &["Mitre", "Misiones"], None, None)
    );
    assert_eq!(
        parse("San Juan y Entre Ríos"),
        data(Intersection, &["San Juan", "Entre Ríos"], None, None)
    );
    // one side may carry the door number
    assert_eq!(
        parse("Mitre 100 y Misiones"),
        data(Intersection, &["Mitre", "Misiones"], Some((None, "100")), None)
    );
}

#[test]
fn btwn_cases() {
    use AddressKind::Between;

    assert_eq!(
        parse("Av. Libertador N1331 2ndo A e/25 de Mayo y Bartolomé Mitre"),
        data(
            Between,
            &["Av. Libertador", "25 de Mayo", "Bartolomé Mitre"],
            Some((Some("N"), "1331")),
            Some("2ndo A")
        )
    );
    assert_eq!(
        parse("Rivadavia 1500 entre San Martín y Belgrano"),
        data(
            Between,
            &["Rivadavia", "San Martín", "Belgrano"],
            Some((None, "1500")),
            None
        )
    );
    assert_eq!(
        parse("Francia e/ Vieytes y Peatonal B"),
        data(Between, &["Francia", "Vieytes", "Peatonal B"], None, None)
    );
}

#[test]
fn boundary_cases() {
    // two numbers joined by a connector read as an intersection of two
    // numbered street names
    assert_eq!(
        parse("120 y 33"),
        data(AddressKind::Intersection, &["120", "33"], None, None)
    );

    let long = "Coronel José Félix Bogado de los Santos Mártires del Sur 2200";
    assert_eq!(
        parse(long),
        data(
            AddressKind::Simple,
            &["Coronel José Félix Bogado de los Santos Mártires del Sur"],
            Some((None, "2200")),
            None
        )
    );
}

#[test]
fn street_count_matches_kind() {
    for address in [
        "Sarmiento N° 1100",
        "Tucumán y 9 de Julio",
        "Av. Libertador N1331 2ndo A e/25 de Mayo y Bartolomé Mitre",
        "qwerty",
        "Ruta 33 s/n Villa Chacón",
    ] {
        let parsed = parse(address);
        let expected = match parsed.kind {
            None => 0,
            Some(AddressKind::Simple) => 1,
            Some(AddressKind::Intersection) => 2,
            Some(AddressKind::Between) => 3,
        };
        assert_eq!(parsed.street_names.len(), expected, "for {:?}", address);
        if let Some(door) = &parsed.door_number {
            assert!(!door.value.is_empty(), "empty door value for {:?}", address);
        }
    }
}

#[test]
fn parsing_twice_is_equal() {
    let mut parser = AddressParser::new();
    for address in ["Sarmiento N° 1100", "qwerty", "Mitre y Misiones"] {
        assert_eq!(parser.parse(address), parser.parse(address));
    }
}

#[derive(Default)]
struct CacheStats {
    store: TreeCache,
    hits: usize,
    misses: usize,
}

// A cache handle the test can keep inspecting after the parser takes
// ownership of its clone.
#[derive(Clone, Default)]
struct SharedCache(Rc<RefCell<CacheStats>>);

impl ParseCache for SharedCache {
    fn get(&mut self, key: &[TokenType]) -> Option<Option<ParseTree>> {
        let mut stats = self.0.borrow_mut();
        let outcome = ParseCache::get(&mut stats.store, key);
        match outcome {
            Some(_) => stats.hits += 1,
            None => stats.misses += 1,
        }
        outcome
    }

    fn put(&mut self, key: Vec<TokenType>, outcome: Option<ParseTree>) {
        self.0.borrow_mut().store.put(key, outcome);
    }
}

#[test]
fn equal_category_sequences_share_one_skeleton() {
    let handle = SharedCache::default();
    let mut parser = AddressParser::with_cache(Box::new(handle.clone()));

    let first = parser.parse("Tucumán 1000");
    let second = parser.parse("Córdoba 2000");

    assert_eq!(first.street_names, vec!["Tucumán"]);
    assert_eq!(second.street_names, vec!["Córdoba"]);

    let stats = handle.0.borrow();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.store.len(), 1);
}

#[test]
fn unknown_outcomes_are_cached_too() {
    let handle = SharedCache::default();
    let mut parser = AddressParser::with_cache(Box::new(handle.clone()));

    assert!(parser.parse("qwerty").is_unknown());
    assert!(parser.parse("asdfgh").is_unknown());

    let stats = handle.0.borrow();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.store.values().filter(|tree| tree.is_none()).count(), 1);
}

#[test]
fn cache_does_not_change_results() {
    let mut plain = AddressParser::new();
    let mut cached = AddressParser::with_cache(Box::new(TreeCache::new()));
    for address in [
        "Sarmiento N° 1100",
        "Tucumán y 9 de Julio",
        "Av. Libertador N1331 2ndo A e/25 de Mayo y Bartolomé Mitre",
        "Ruta 33 s/n Villa Chacón",
        "qwerty",
        "Sarmiento N° 1100",
    ] {
        assert_eq!(plain.parse(address), cached.parse(address), "for {:?}", address);
    }
}
