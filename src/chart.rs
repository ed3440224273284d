use crate::grammar::{Grammar, Nonterminal, Symbol};
use crate::token::TokenType;
use std::collections::{HashMap, HashSet};

/// A derivation of (part of) the token-category sequence. Leaves carry the
/// token position instead of any surface text, so a complete tree is a
/// skeleton that can be projected onto any token sequence with the same
/// categories, which is exactly what the parse cache stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTree {
    Node {
        label: Nonterminal,
        children: Vec<ParseTree>,
    },
    Leaf {
        category: TokenType,
        position: usize,
    },
}

impl ParseTree {
    pub fn label(&self) -> Option<Nonterminal> {
        match self {
            ParseTree::Node { label, .. } => Some(*label),
            ParseTree::Leaf { .. } => None,
        }
    }

    /// Token positions of the leaves, left to right. They are strictly
    /// increasing by construction.
    pub fn positions(&self) -> Vec<usize> {
        let mut positions = Vec::new();
        self.collect_positions(&mut positions);
        positions
    }

    fn collect_positions(&self, positions: &mut Vec<usize>) {
        match self {
            ParseTree::Leaf { position, .. } => positions.push(*position),
            ParseTree::Node { children, .. } => {
                for child in children {
                    child.collect_positions(positions);
                }
            }
        }
    }
}

// A dotted production with its origin set, the classic Earley item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Item {
    production: usize,
    dot: usize,
    origin: usize,
}

impl Item {
    fn advanced(self) -> Self {
        Item {
            dot: self.dot + 1,
            ..self
        }
    }
}

/// Runs the Earley recognizer over the category sequence and enumerates
/// every complete derivation of the start symbol. The vector is empty when
/// the input is not an address; enumeration order is fixed by production
/// order and ascending split points, which the disambiguator relies on.
pub(crate) fn parse_trees(grammar: &Grammar, input: &[TokenType]) -> Vec<ParseTree> {
    if input.is_empty() {
        return Vec::new();
    }
    let chart = build_chart(grammar, input);
    let spans = completed_spans(grammar, &chart);
    if !spans.contains_key(&(grammar.start, 0, input.len())) {
        return Vec::new();
    }
    let mut extractor = Extractor {
        grammar,
        input,
        spans,
        memo: HashMap::new(),
    };
    extractor.trees(grammar.start, 0, input.len())
}

fn push(row: &mut Vec<Item>, seen: &mut HashSet<Item>, item: Item) {
    if seen.insert(item) {
        row.push(item);
    }
}

fn build_chart(grammar: &Grammar, input: &[TokenType]) -> Vec<Vec<Item>> {
    let length = input.len();
    let mut chart: Vec<Vec<Item>> = vec![Vec::new(); length + 1];
    let mut seen: Vec<HashSet<Item>> = vec![HashSet::new(); length + 1];

    for (index, production) in grammar.productions.iter().enumerate() {
        if production.lhs == grammar.start {
            push(
                &mut chart[0],
                &mut seen[0],
                Item {
                    production: index,
                    dot: 0,
                    origin: 0,
                },
            );
        }
    }

    for position in 0..=length {
        let mut current = 0;
        while current < chart[position].len() {
            let item = chart[position][current];
            current += 1;
            let production = &grammar.productions[item.production];
            match production.rhs.get(item.dot) {
                Some(Symbol::Terminal(category)) => {
                    // scan
                    if position < length && input[position] == *category {
                        push(&mut chart[position + 1], &mut seen[position + 1], item.advanced());
                    }
                }
                Some(Symbol::Rule(rule)) => {
                    // predict
                    for (index, candidate) in grammar.productions.iter().enumerate() {
                        if candidate.lhs == *rule {
                            push(
                                &mut chart[position],
                                &mut seen[position],
                                Item {
                                    production: index,
                                    dot: 0,
                                    origin: position,
                                },
                            );
                        }
                    }
                }
                None => {
                    // complete: the grammar has no empty productions, so
                    // item.origin < position and that set is already final
                    let lhs = production.lhs;
                    let parents: Vec<Item> = chart[item.origin]
                        .iter()
                        .copied()
                        .filter(|parent| {
                            matches!(
                                grammar.productions[parent.production].rhs.get(parent.dot),
                                Some(Symbol::Rule(rule)) if *rule == lhs
                            )
                        })
                        .collect();
                    for parent in parents {
                        push(&mut chart[position], &mut seen[position], parent.advanced());
                    }
                }
            }
        }
    }

    chart
}

type Span = (Nonterminal, usize, usize);

// Every (rule, start, end) recognized by the chart, with the productions
// that derived it in grammar order.
fn completed_spans(grammar: &Grammar, chart: &[Vec<Item>]) -> HashMap<Span, Vec<usize>> {
    let mut spans: HashMap<Span, Vec<usize>> = HashMap::new();
    for (end, row) in chart.iter().enumerate() {
        for item in row {
            let production = &grammar.productions[item.production];
            if item.dot == production.rhs.len() {
                spans
                    .entry((production.lhs, item.origin, end))
                    .or_default()
                    .push(item.production);
            }
        }
    }
    for derivations in spans.values_mut() {
        derivations.sort_unstable();
        derivations.dedup();
    }
    spans
}

struct Extractor<'a> {
    grammar: &'a Grammar,
    input: &'a [TokenType],
    spans: HashMap<Span, Vec<usize>>,
    memo: HashMap<Span, Vec<ParseTree>>,
}

impl Extractor<'_> {
    // All derivations of `label` over [start, end). Terminates because
    // every recursion shrinks the span: no production is empty, and the
    // grammar has no unit cycles.
    fn trees(&mut self, label: Nonterminal, start: usize, end: usize) -> Vec<ParseTree> {
        if let Some(cached) = self.memo.get(&(label, start, end)) {
            return cached.clone();
        }
        let derivations = self
            .spans
            .get(&(label, start, end))
            .cloned()
            .unwrap_or_default();
        let mut result = Vec::new();
        for index in derivations {
            let rhs = self.grammar.productions[index].rhs.clone();
            for children in self.sequences(&rhs, start, end) {
                result.push(ParseTree::Node {
                    label,
                    children,
                });
            }
        }
        self.memo.insert((label, start, end), result.clone());
        result
    }

    // All ways to derive the symbol sequence over [start, end).
    fn sequences(&mut self, symbols: &[Symbol], start: usize, end: usize) -> Vec<Vec<ParseTree>> {
        let (first, rest) = match symbols.split_first() {
            Some(split) => split,
            None => {
                return if start == end {
                    vec![Vec::new()]
                } else {
                    Vec::new()
                };
            }
        };

        let mut result = Vec::new();
        match first {
            Symbol::Terminal(category) => {
                if start < end && self.input[start] == *category {
                    let leaf = ParseTree::Leaf {
                        category: *category,
                        position: start,
                    };
                    for tail in self.sequences(rest, start + 1, end) {
                        let mut children = Vec::with_capacity(tail.len() + 1);
                        children.push(leaf.clone());
                        children.extend(tail);
                        result.push(children);
                    }
                }
            }
            Symbol::Rule(rule) => {
                for split in (start + 1)..=end {
                    if !self.spans.contains_key(&(*rule, start, split)) {
                        continue;
                    }
                    let heads = self.trees(*rule, start, split);
                    let tails = self.sequences(rest, split, end);
                    for head in &heads {
                        for tail in &tails {
                            let mut children = Vec::with_capacity(tail.len() + 1);
                            children.push(head.clone());
                            children.extend(tail.iter().cloned());
                            result.push(children);
                        }
                    }
                }
            }
        }
        result
    }
}
