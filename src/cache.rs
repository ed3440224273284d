use crate::chart::ParseTree;
use crate::token::TokenType;
use std::collections::HashMap;

/// Associative storage for winning parse-tree skeletons, keyed by the
/// token-category sequence. `None` values memoize unknown outcomes so
/// repeated unparseable inputs stay fast. Implementations are free to
/// evict: a missing key just means not-yet-computed.
pub trait ParseCache {
    fn get(&mut self, key: &[TokenType]) -> Option<Option<ParseTree>>;
    fn put(&mut self, key: Vec<TokenType>, outcome: Option<ParseTree>);
}

/// The everyday cache: an unbounded map.
pub type TreeCache = HashMap<Vec<TokenType>, Option<ParseTree>>;

impl ParseCache for TreeCache {
    fn get(&mut self, key: &[TokenType]) -> Option<Option<ParseTree>> {
        HashMap::get(self, key).cloned()
    }

    fn put(&mut self, key: Vec<TokenType>, outcome: Option<ParseTree>) {
        self.insert(key, outcome);
    }
}
