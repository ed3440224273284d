use crate::address::{AddressData, AddressKind, DoorNumber};
use crate::chart::ParseTree;
use crate::grammar::Nonterminal;
use crate::token::Token;

/// Walks the winning skeleton depth-first against the current token
/// surfaces and assembles the result. Components are always contiguous
/// token runs joined by single spaces; nothing is reordered or invented.
pub(crate) fn project(tree: &ParseTree, tokens: &[Token]) -> AddressData {
    let kind = match tree.label() {
        Some(Nonterminal::Simple) => AddressKind::Simple,
        Some(Nonterminal::Intersection) => AddressKind::Intersection,
        Some(Nonterminal::Between) => AddressKind::Between,
        _ => return AddressData::unknown(),
    };

    let mut components = Components::default();
    collect(tree, tokens, &mut components);

    AddressData {
        kind: Some(kind),
        street_names: components.street_names,
        door_number: components
            .door_value
            .map(|value| DoorNumber {
                unit: components.door_unit,
                value,
            }),
        floor: components.floor,
    }
}

#[derive(Default)]
struct Components {
    street_names: Vec<String>,
    door_value: Option<String>,
    door_unit: Option<String>,
    floor: Option<String>,
}

fn collect(tree: &ParseTree, tokens: &[Token], components: &mut Components) {
    let children = match tree {
        ParseTree::Node { label, children } => {
            match label {
                Nonterminal::Street => {
                    components.street_names.push(surface(tree, tokens));
                    return;
                }
                Nonterminal::DoorNumberValue => {
                    components.door_value = Some(surface(tree, tokens));
                    return;
                }
                Nonterminal::DoorNumberUnit => {
                    components.door_unit = Some(surface(tree, tokens));
                    return;
                }
                Nonterminal::Floor => {
                    components.floor = Some(surface(tree, tokens));
                    return;
                }
                // the trailing locality has no exposed field
                Nonterminal::Location => return,
                _ => children,
            }
        }
        ParseTree::Leaf { .. } => return,
    };
    for child in children {
        collect(child, tokens, components);
    }
}

fn surface(tree: &ParseTree, tokens: &[Token]) -> String {
    tree.positions()
        .iter()
        .map(|&position| tokens[position].surface.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
