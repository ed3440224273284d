use crate::chart::ParseTree;
use crate::grammar::Nonterminal;

// Rank of a candidate tree, most significant component first: number of
// unnamed-street subtrees, door-number presence, kind preference. Higher is
// better.
type Rank = (usize, bool, u8);

/// Picks the best tree out of all complete parses, or nothing when two or
/// more trees share the maximal rank: that ambiguity is irresolvable and
/// gets reported as an unknown address.
pub(crate) fn disambiguate(mut trees: Vec<ParseTree>) -> Option<ParseTree> {
    if trees.len() <= 1 {
        return trees.pop();
    }

    let mut best: Option<(Rank, usize)> = None;
    let mut tied = false;
    for (index, tree) in trees.iter().enumerate() {
        let rank = rank(tree);
        match best {
            None => best = Some((rank, index)),
            Some((top, _)) => {
                if rank > top {
                    best = Some((rank, index));
                    tied = false;
                } else if rank == top {
                    tied = true;
                }
            }
        }
    }

    match best {
        Some((_, index)) if !tied => Some(trees.swap_remove(index)),
        _ => None,
    }
}

fn rank(tree: &ParseTree) -> Rank {
    let unnamed_streets = count_label(tree, Nonterminal::UnnamedStreet);
    let has_door_number = count_label(tree, Nonterminal::DoorNumber) > 0;

    // "Rosario 1003" should split into street and door number, so trees
    // carrying one outrank trees without. The kind preference flips between
    // intersection and simple depending on that same presence: with a door
    // number "Vicente Lopez y Planes 120" is one street, without one
    // "Mitre y Misiones" is two. A between tree always wins; its tri-street
    // shape rarely appears by accident.
    let kind = match tree.label() {
        Some(Nonterminal::Between) => 2,
        Some(Nonterminal::Simple) => {
            if has_door_number {
                1
            } else {
                0
            }
        }
        Some(Nonterminal::Intersection) => {
            if has_door_number {
                0
            } else {
                1
            }
        }
        _ => 0,
    };

    (unnamed_streets, has_door_number, kind)
}

fn count_label(tree: &ParseTree, label: Nonterminal) -> usize {
    match tree {
        ParseTree::Leaf { .. } => 0,
        ParseTree::Node {
            label: node_label,
            children,
        } => {
            let own = usize::from(*node_label == label);
            own + children
                .iter()
                .map(|child| count_label(child, label))
                .sum::<usize>()
        }
    }
}
