//! Component extraction for free-form Argentine street addresses, done
//! entirely with local text processing: a normalizer, a domain tokenizer,
//! a chart parser over a small address grammar, a tree-ranking
//! disambiguator and a projector that maps the winning parse back onto the
//! original surfaces.

mod address;
mod cache;
mod chart;
mod disambiguator;
mod grammar;
mod normalizer;
mod projector;
mod token;
mod tokenizer;

pub use crate::address::{AddressData, AddressKind, DoorNumber};
pub use crate::cache::{ParseCache, TreeCache};
pub use crate::chart::ParseTree;
pub use crate::grammar::Nonterminal;
pub use crate::token::{Token, TokenType};

use crate::grammar::Grammar;

pub struct AddressParser {
    grammar: Grammar,
    cache: Option<Box<dyn ParseCache>>,
}

impl AddressParser {
    pub fn new() -> Self {
        AddressParser {
            grammar: grammar::address_grammar(),
            cache: None,
        }
    }

    /// Same pipeline, but winning tree skeletons are looked up in and
    /// stored into `cache`, keyed by the token-category sequence. Two
    /// inputs with the same categories ("Tucumán 1000", "Córdoba 2000")
    /// share one entry; surfaces are re-projected per call.
    pub fn with_cache(cache: Box<dyn ParseCache>) -> Self {
        AddressParser {
            grammar: grammar::address_grammar(),
            cache: Some(cache),
        }
    }

    /// Extracts the components of one address line. Never fails: anything
    /// that cannot be read as an address comes back with a `None` kind and
    /// empty components.
    pub fn parse(&mut self, address: &str) -> AddressData {
        let normalized = normalizer::normalize(address);
        if normalized.is_empty() {
            return AddressData::unknown();
        }

        let tokens = match tokenizer::tokenize(&normalized) {
            Some(tokens) if !tokens.is_empty() => tokens,
            _ => return AddressData::unknown(),
        };

        let categories: Vec<TokenType> = tokens.iter().map(|token| token.category).collect();
        match self.winning_tree(&categories) {
            Some(tree) => projector::project(&tree, &tokens),
            None => AddressData::unknown(),
        }
    }

    fn winning_tree(&mut self, categories: &[TokenType]) -> Option<ParseTree> {
        if let Some(cache) = self.cache.as_mut() {
            if let Some(outcome) = cache.get(categories) {
                return outcome;
            }
        }
        let outcome = self.best_parse(categories);
        if let Some(cache) = self.cache.as_mut() {
            cache.put(categories.to_vec(), outcome.clone());
        }
        outcome
    }

    fn best_parse(&self, categories: &[TokenType]) -> Option<ParseTree> {
        let candidates: Vec<ParseTree> = chart::parse_trees(&self.grammar, categories)
            .into_iter()
            .filter_map(|tree| match tree {
                // drop the start-symbol wrapper; the kind node is the root
                // the ranking and projection stages care about
                ParseTree::Node { children, .. } => children.into_iter().next(),
                ParseTree::Leaf { .. } => None,
            })
            .collect();
        disambiguator::disambiguate(candidates)
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        AddressParser::new()
    }
}
