//! Dynamically modifiable context-free grammar.
//!
//! The grammar is stored as a bipartite graph: symbol nodes and rule nodes.
//! A symbol links to the rules it expands (it is their lhs) and to the rules
//! that use it (it occurs in their rhs). Rule nodes carry a [`RuleId`] that
//! grows with every insertion and is never reused.
//!
//! A symbol that expands no rule is a terminal, everything else is a
//! nonterminal. Symbols are created implicitly by [`Grammar::add_rule`] and
//! disappear once no rule mentions them any more.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::BisonConfig;
use crate::error::{GrammarError, GrammarResult};
use crate::expansion::{all_combinations, Clause};
use crate::rule::Rule;
use crate::yacc;

/// Symbol inserted by bison to terminate the augmented start rule.
pub const YACC_END_SYMBOL: &str = "$end";

/// Start symbol of bison's augmented grammar.
pub const YACC_ACCEPT_SYMBOL: &str = "$accept";

/// Insertion-ordered identifier of a rule node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct RuleId(u64);

#[derive(Debug, Clone)]
struct RuleNode {
    lhs: String,
    rhs: Vec<String>,
}

impl RuleNode {
    fn to_rule(&self) -> Rule {
        Rule::new(self.lhs.as_str(), self.rhs.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default)]
struct SymbolLinks {
    /// Rules this symbol is the lhs of.
    expands: BTreeSet<RuleId>,
    /// Rules whose rhs mentions this symbol.
    used_by: BTreeSet<RuleId>,
}

impl SymbolLinks {
    fn is_orphan(&self) -> bool {
        self.expands.is_empty() && self.used_by.is_empty()
    }
}

/// A context-free grammar that can be edited rule by rule and symbol by
/// symbol, and whose sentences can be enumerated.
///
/// `Clone` produces an independent copy that keeps rule ids and the start
/// symbol.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    symbols: BTreeMap<String, SymbolLinks>,
    rules: BTreeMap<RuleId, RuleNode>,
    next_rule_id: u64,
    start_symbol: Option<String>,
}

impl Grammar {
    /// Create an empty grammar.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Rules ───────────────────────────────────────────────────────────

    /// All rules of the grammar.
    pub fn rules(&self) -> BTreeSet<Rule> {
        self.rules.values().map(RuleNode::to_rule).collect()
    }

    /// Rules that have `symbol` as their lhs or anywhere in their rhs.
    ///
    /// Returns an empty set for a symbol the grammar does not know.
    pub fn rules_containing(&self, symbol: &str) -> BTreeSet<Rule> {
        let Some(links) = self.symbols.get(symbol) else {
            return BTreeSet::new();
        };

        links
            .expands
            .union(&links.used_by)
            .map(|id| self.rules[id].to_rule())
            .collect()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains_rule(&self, rule: &Rule) -> bool {
        self.find_rule(rule.lhs(), rule.rhs()).is_some()
    }

    /// Add a rule, creating any symbol it mentions.
    ///
    /// Adding a rule that is already present does nothing. The first rule
    /// added to an empty grammar provides the start symbol unless one is set
    /// explicitly later.
    pub fn add_rule(&mut self, rule: Rule) {
        if self.contains_rule(&rule) {
            return;
        }

        let id = RuleId(self.next_rule_id);
        self.next_rule_id += 1;

        let (lhs, rhs) = rule.into_parts();
        self.symbols
            .entry(lhs.clone())
            .or_default()
            .expands
            .insert(id);
        for symbol in &rhs {
            self.symbols
                .entry(symbol.clone())
                .or_default()
                .used_by
                .insert(id);
        }

        debug!(rule_id = id.0, lhs = %lhs, rhs_len = rhs.len(), "rule added");
        self.rules.insert(id, RuleNode { lhs, rhs });
        self.refresh_start_symbol();
    }

    /// Remove a rule.
    ///
    /// Symbols mentioned by the rule that no other rule mentions are removed
    /// too. Returns [`GrammarError::RuleNotFound`] if no equal rule exists.
    pub fn remove_rule(&mut self, rule: &Rule) -> GrammarResult<()> {
        let id = self
            .find_rule(rule.lhs(), rule.rhs())
            .ok_or_else(|| GrammarError::RuleNotFound { rule: rule.clone() })?;

        self.remove_rule_by_id(id);
        self.refresh_start_symbol();
        Ok(())
    }

    // ── Symbols ─────────────────────────────────────────────────────────

    /// All symbols, terminals and nonterminals.
    pub fn symbols(&self) -> BTreeSet<String> {
        self.symbols.keys().cloned().collect()
    }

    /// Symbols that expand no rule.
    pub fn terminals(&self) -> BTreeSet<String> {
        self.symbols
            .iter()
            .filter(|(_, links)| links.expands.is_empty())
            .map(|(symbol, _)| symbol.clone())
            .collect()
    }

    /// Symbols that expand at least one rule.
    pub fn nonterminals(&self) -> BTreeSet<String> {
        self.symbols
            .iter()
            .filter(|(_, links)| !links.expands.is_empty())
            .map(|(symbol, _)| symbol.clone())
            .collect()
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.symbols.contains_key(symbol)
    }

    /// Whether `symbol` is a terminal.
    pub fn is_symbol_terminal(&self, symbol: &str) -> GrammarResult<bool> {
        Ok(self.links(symbol)?.expands.is_empty())
    }

    /// Turn `symbol` into a terminal by removing every rule it expands.
    ///
    /// Symbols orphaned by those removals are dropped, `symbol` included when
    /// nothing uses it.
    pub fn make_symbol_terminal(&mut self, symbol: &str) -> GrammarResult<()> {
        let expanded: Vec<RuleId> = self.links(symbol)?.expands.iter().copied().collect();

        debug!(symbol, rules = expanded.len(), "making symbol terminal");
        for id in expanded {
            self.remove_rule_by_id(id);
        }

        self.refresh_start_symbol();
        Ok(())
    }

    /// Remove `symbol` from the grammar.
    ///
    /// The rules it expands are removed, and every occurrence of it is
    /// deleted from the rhs of the rules using it. A rule that becomes equal
    /// to another rule this way is merged into the older one.
    pub fn remove_symbol(&mut self, symbol: &str) -> GrammarResult<()> {
        self.links(symbol)?;

        for id in self.symbols[symbol].expands.clone() {
            self.remove_rule_by_id(id);
        }

        if let Some(links) = self.symbols.remove(symbol) {
            for id in links.used_by {
                let Some(node) = self.rules.get_mut(&id) else {
                    continue;
                };
                node.rhs.retain(|s| s != symbol);

                if let Some(twin) = self.twin_of(id) {
                    debug!(symbol, rule_id = id.0, "merging duplicate rule");
                    self.remove_rule_by_id(id.max(twin));
                }
            }
        }

        debug!(symbol, "symbol removed");
        self.refresh_start_symbol();
        Ok(())
    }

    // ── Start symbol ────────────────────────────────────────────────────

    /// The symbol sentences are derived from.
    ///
    /// Unless set explicitly this is the lhs of the oldest rule. `None` for an
    /// empty grammar.
    pub fn start_symbol(&self) -> Option<&str> {
        self.start_symbol.as_deref()
    }

    pub fn set_start_symbol(&mut self, symbol: &str) -> GrammarResult<()> {
        self.links(symbol)?;
        self.start_symbol = Some(symbol.to_string());
        Ok(())
    }

    // ── Sentences ───────────────────────────────────────────────────────

    /// Whether no derivation from the start symbol can loop back into a
    /// symbol already on its own derivation path.
    ///
    /// A grammar without a start symbol is finite.
    pub fn is_finite(&self) -> bool {
        self.find_cycle().is_none()
    }

    /// A derivation loop reachable from the start symbol, if any.
    ///
    /// The returned path starts and ends with the same symbol.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let start = self.start_symbol()?;

        let mut done = HashSet::new();
        let mut path = Vec::new();
        if self.dfs_cycle(start, &mut done, &mut path) {
            Some(path.into_iter().map(str::to_string).collect())
        } else {
            None
        }
    }

    /// Every terminal string derivable from the start symbol.
    ///
    /// If the grammar is not finite, the sentences come from a copy whose
    /// derivation loops have been cut. The grammar itself is left untouched.
    pub fn sentences(&self) -> BTreeSet<Vec<String>> {
        let Some(start) = self.start_symbol() else {
            return BTreeSet::new();
        };

        if self.is_finite() {
            return self.expand_symbol(start).into_iter().collect();
        }

        warn!(start, "grammar is not finite, sentences come from a loop-free copy");
        let mut acyclic = self.clone();
        acyclic.break_cycles(start);
        acyclic.expand_symbol(start).into_iter().collect()
    }

    // ── Yacc import ─────────────────────────────────────────────────────

    /// Load the rules of a yacc file, using the bison configured in the
    /// environment (see [`BisonConfig::from_env`]).
    pub fn load_yacc_file(&mut self, path: impl AsRef<Path>) -> GrammarResult<()> {
        self.load_yacc_file_with(path, &BisonConfig::from_env())
    }

    /// Load the rules of a yacc file with an explicit bison configuration.
    ///
    /// bison's `$end` marker is removed and `$accept` becomes the start
    /// symbol.
    pub fn load_yacc_file_with(
        &mut self,
        path: impl AsRef<Path>,
        config: &BisonConfig,
    ) -> GrammarResult<()> {
        let path = path.as_ref();
        let rules = yacc::parse_with(path, config)?;
        let imported = rules.len();

        self.import_yacc_rules(rules)?;

        info!(path = %path.display(), rules = imported, "yacc file loaded");
        Ok(())
    }

    /// Add rules read from a bison report, drop the `$end` marker and make
    /// `$accept` the start symbol.
    pub fn import_yacc_rules(&mut self, rules: impl IntoIterator<Item = Rule>) -> GrammarResult<()> {
        self.extend(rules);

        if self.contains_symbol(YACC_END_SYMBOL) {
            self.remove_symbol(YACC_END_SYMBOL)?;
        }
        self.set_start_symbol(YACC_ACCEPT_SYMBOL)
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn links(&self, symbol: &str) -> GrammarResult<&SymbolLinks> {
        self.symbols
            .get(symbol)
            .ok_or_else(|| GrammarError::SymbolNotFound {
                symbol: symbol.to_string(),
            })
    }

    fn find_rule(&self, lhs: &str, rhs: &[String]) -> Option<RuleId> {
        self.symbols
            .get(lhs)?
            .expands
            .iter()
            .copied()
            .find(|id| self.rules[id].rhs == rhs)
    }

    /// Another rule with the same lhs and rhs as `id`.
    fn twin_of(&self, id: RuleId) -> Option<RuleId> {
        let node = self.rules.get(&id)?;
        self.symbols
            .get(&node.lhs)?
            .expands
            .iter()
            .copied()
            .find(|other| *other != id && self.rules[other].rhs == node.rhs)
    }

    fn remove_rule_by_id(&mut self, id: RuleId) {
        let Some(node) = self.rules.remove(&id) else {
            return;
        };

        if let Some(links) = self.symbols.get_mut(&node.lhs) {
            links.expands.remove(&id);
        }
        for symbol in &node.rhs {
            if let Some(links) = self.symbols.get_mut(symbol) {
                links.used_by.remove(&id);
            }
        }

        for symbol in std::iter::once(&node.lhs).chain(node.rhs.iter()) {
            if self.symbols.get(symbol).is_some_and(SymbolLinks::is_orphan) {
                self.symbols.remove(symbol);
            }
        }

        debug!(rule_id = id.0, lhs = %node.lhs, "rule removed");
    }

    /// Keep the start symbol pointing at a live symbol, falling back to the
    /// lhs of the oldest rule.
    fn refresh_start_symbol(&mut self) {
        if let Some(start) = &self.start_symbol {
            if self.symbols.contains_key(start) {
                return;
            }
        }
        self.start_symbol = self.rules.values().next().map(|node| node.lhs.clone());
    }

    fn dfs_cycle<'a>(
        &'a self,
        symbol: &'a str,
        done: &mut HashSet<&'a str>,
        path: &mut Vec<&'a str>,
    ) -> bool {
        if let Some(pos) = path.iter().position(|s| *s == symbol) {
            path.drain(..pos);
            path.push(symbol);
            return true;
        }
        if done.contains(symbol) {
            return false;
        }

        path.push(symbol);
        if let Some(links) = self.symbols.get(symbol) {
            for id in &links.expands {
                for next in &self.rules[id].rhs {
                    if self.dfs_cycle(next, done, path) {
                        return true;
                    }
                }
            }
        }
        path.pop();

        done.insert(symbol);
        false
    }

    /// Cut every rhs occurrence of a symbol that is already on the current
    /// derivation path, walking depth-first from `start`.
    fn break_cycles(&mut self, start: &str) {
        let mut path = HashSet::new();
        self.break_cycles_from(start.to_string(), &mut path);
    }

    fn break_cycles_from(&mut self, symbol: String, path: &mut HashSet<String>) {
        path.insert(symbol.clone());

        let expanded: Vec<RuleId> = self
            .symbols
            .get(&symbol)
            .map(|links| links.expands.iter().copied().collect())
            .unwrap_or_default();

        for id in expanded {
            let Some(node) = self.rules.get_mut(&id) else {
                continue;
            };

            let cut: Vec<String> = node
                .rhs
                .iter()
                .filter(|s| path.contains(*s))
                .cloned()
                .collect();
            node.rhs.retain(|s| !path.contains(s));
            let rhs = node.rhs.clone();

            for cut_symbol in cut {
                if let Some(links) = self.symbols.get_mut(&cut_symbol) {
                    links.used_by.remove(&id);
                }
            }

            let mut visited = HashSet::new();
            for next in rhs {
                if visited.insert(next.clone()) {
                    self.break_cycles_from(next, path);
                }
            }
        }

        path.remove(&symbol);
    }

    fn expand_symbol(&self, symbol: &str) -> Vec<Clause> {
        let Some(links) = self.symbols.get(symbol).filter(|l| !l.expands.is_empty()) else {
            return vec![vec![symbol.to_string()]];
        };

        let mut expansions = Vec::new();
        for id in &links.expands {
            let positions: Vec<Vec<Clause>> = self.rules[id]
                .rhs
                .iter()
                .map(|s| self.expand_symbol(s))
                .collect();
            expansions.extend(all_combinations(&positions));
        }
        expansions
    }
}

impl FromIterator<Rule> for Grammar {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut grammar = Grammar::new();
        grammar.extend(iter);
        grammar
    }
}

impl Extend<Rule> for Grammar {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        for rule in iter {
            self.add_rule(rule);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sentence(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Grammar {
        [
            Rule::new("NT_start", ["NT_1"]),
            Rule::new("NT_1", ["t_1", "t_2", "t_2"]),
            Rule::new("NT_1", ["t_3", "t_4", "NT_1"]),
            Rule::new("NT_1", ["t_5", "NT_2"]),
            Rule::empty("NT_1"),
            Rule::new("NT_2", ["t_6"]),
            Rule::new("NT_2", ["t_7"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_symbols() {
        let g = sample();
        assert_eq!(
            g.symbols(),
            set(&[
                "NT_start", "NT_1", "NT_2", "t_1", "t_2", "t_3", "t_4", "t_5", "t_6", "t_7"
            ])
        );
    }

    #[test]
    fn test_terminals_and_nonterminals() {
        let g = sample();
        assert_eq!(
            g.terminals(),
            set(&["t_1", "t_2", "t_3", "t_4", "t_5", "t_6", "t_7"])
        );
        assert_eq!(g.nonterminals(), set(&["NT_start", "NT_1", "NT_2"]));
    }

    #[test]
    fn test_rules() {
        let g = sample();
        assert_eq!(g.rule_count(), 7);
        assert!(g.rules().contains(&Rule::empty("NT_1")));
        assert!(g.rules().contains(&Rule::new("NT_1", ["t_3", "t_4", "NT_1"])));
    }

    #[test]
    fn test_rules_containing() {
        let g = sample();
        let expected: BTreeSet<Rule> = [
            Rule::new("NT_start", ["NT_1"]),
            Rule::new("NT_1", ["t_1", "t_2", "t_2"]),
            Rule::new("NT_1", ["t_3", "t_4", "NT_1"]),
            Rule::new("NT_1", ["t_5", "NT_2"]),
            Rule::empty("NT_1"),
        ]
        .into_iter()
        .collect();

        assert_eq!(g.rules_containing("NT_1"), expected);
        assert!(g.rules_containing("NT_99").is_empty());
    }

    #[test]
    fn test_add_rule() {
        let mut g = sample();
        g.add_rule(Rule::new("NT_1", ["foo"]));

        assert!(g.contains_rule(&Rule::new("NT_1", ["foo"])));
        assert!(g.is_symbol_terminal("foo").unwrap());
    }

    #[test]
    fn test_add_existing_rule_is_noop() {
        let mut g = sample();
        let before = g.rules();

        g.add_rule(Rule::new("NT_1", ["t_3", "t_4", "NT_1"]));

        assert_eq!(g.rules(), before);
        assert_eq!(g.rule_count(), 7);
    }

    #[test]
    fn test_remove_rule_drops_orphaned_symbols() {
        let mut g = sample();
        g.remove_rule(&Rule::new("NT_1", ["t_5", "NT_2"])).unwrap();

        assert!(!g.contains_symbol("t_5"));
        assert!(g.contains_symbol("NT_2"));
        assert_eq!(g.rule_count(), 6);
    }

    #[test]
    fn test_remove_rule_not_present() {
        let mut g = sample();
        let err = g.remove_rule(&Rule::empty("NT_2")).unwrap_err();
        assert!(matches!(err, GrammarError::RuleNotFound { .. }));
    }

    #[test]
    fn test_remove_symbol() {
        let mut g = sample();
        g.remove_symbol("NT_2").unwrap();

        assert_eq!(
            g.symbols(),
            set(&["NT_start", "NT_1", "t_1", "t_2", "t_3", "t_4", "t_5"])
        );
        let expected: BTreeSet<Rule> = [
            Rule::new("NT_start", ["NT_1"]),
            Rule::new("NT_1", ["t_1", "t_2", "t_2"]),
            Rule::new("NT_1", ["t_3", "t_4", "NT_1"]),
            Rule::new("NT_1", ["t_5"]),
            Rule::empty("NT_1"),
        ]
        .into_iter()
        .collect();
        assert_eq!(g.rules(), expected);
    }

    #[test]
    fn test_remove_symbol_merges_duplicate_rules() {
        let mut g: Grammar = [
            Rule::new("a", ["b", "x"]),
            Rule::new("a", ["b"]),
            Rule::new("a", ["b", "x", "x"]),
        ]
        .into_iter()
        .collect();

        g.remove_symbol("x").unwrap();

        assert_eq!(g.rule_count(), 1);
        assert_eq!(g.rules().into_iter().next(), Some(Rule::new("a", ["b"])));
    }

    #[test]
    fn test_remove_unused_start_symbol() {
        let mut g: Grammar = [Rule::new("a", ["b", "c", "d"])].into_iter().collect();
        g.remove_symbol("a").unwrap();

        assert!(g.is_empty());
        assert!(g.symbols().is_empty());
        assert_eq!(g.start_symbol(), None);
    }

    #[test]
    fn test_remove_symbol_not_present() {
        let mut g = sample();
        assert!(matches!(
            g.remove_symbol("NT_99"),
            Err(GrammarError::SymbolNotFound { .. })
        ));
    }

    #[test]
    fn test_make_symbol_terminal() {
        let mut g = sample();
        g.make_symbol_terminal("NT_1").unwrap();

        assert_eq!(g.symbols(), set(&["NT_start", "NT_1", "NT_2", "t_6", "t_7"]));
        let expected: BTreeSet<Rule> = [
            Rule::new("NT_start", ["NT_1"]),
            Rule::new("NT_2", ["t_6"]),
            Rule::new("NT_2", ["t_7"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(g.rules(), expected);
        assert!(g.is_symbol_terminal("NT_1").unwrap());
    }

    #[test]
    fn test_make_symbol_terminal_not_present() {
        let mut g = sample();
        assert!(g.make_symbol_terminal("NT_99").is_err());
    }

    #[test]
    fn test_is_symbol_terminal() {
        let g = sample();
        assert!(!g.is_symbol_terminal("NT_1").unwrap());
        assert!(g.is_symbol_terminal("t_1").unwrap());
        assert!(g.is_symbol_terminal("NT_99").is_err());
    }

    #[test]
    fn test_start_symbol_follows_oldest_rule() {
        let mut g = Grammar::new();
        assert_eq!(g.start_symbol(), None);

        let rule = Rule::new("NT_start", ["t_1", "t_2"]);
        g.add_rule(rule.clone());
        assert_eq!(g.start_symbol(), Some("NT_start"));

        g.remove_rule(&rule).unwrap();
        assert_eq!(g.start_symbol(), None);
    }

    #[test]
    fn test_set_start_symbol() {
        let mut g = sample();
        g.set_start_symbol("NT_1").unwrap();
        assert_eq!(g.start_symbol(), Some("NT_1"));

        assert!(g.set_start_symbol("NT_99").is_err());
        assert_eq!(g.start_symbol(), Some("NT_1"));
    }

    #[test]
    fn test_start_symbol_falls_back_when_removed() {
        let mut g = sample();
        g.set_start_symbol("NT_2").unwrap();
        g.remove_symbol("NT_2").unwrap();

        assert_eq!(g.start_symbol(), Some("NT_start"));
    }

    #[test]
    fn test_is_finite() {
        let mut g = sample();
        assert!(!g.is_finite());
        assert_eq!(
            g.find_cycle(),
            Some(vec!["NT_1".to_string(), "NT_1".to_string()])
        );

        g.remove_rule(&Rule::new("NT_1", ["t_3", "t_4", "NT_1"])).unwrap();
        assert!(g.is_finite());
    }

    #[test]
    fn test_shared_symbol_is_not_a_loop() {
        let g: Grammar = [
            Rule::new("s", ["a", "a"]),
            Rule::new("s", ["b"]),
            Rule::new("b", ["a"]),
            Rule::new("a", ["x"]),
        ]
        .into_iter()
        .collect();

        assert!(g.is_finite());
    }

    #[test]
    fn test_empty_grammar_is_finite() {
        assert!(Grammar::new().is_finite());
        assert!(Grammar::new().sentences().is_empty());
    }

    #[test]
    fn test_sentences_cut_loops() {
        let g = sample();
        let expected: BTreeSet<Vec<String>> = [
            sentence(&["t_1", "t_2", "t_2"]),
            sentence(&["t_3", "t_4"]),
            sentence(&["t_5", "t_6"]),
            sentence(&["t_5", "t_7"]),
            sentence(&[]),
        ]
        .into_iter()
        .collect();

        assert_eq!(g.sentences(), expected);
        // The loop is only cut in a copy.
        assert!(g.contains_rule(&Rule::new("NT_1", ["t_3", "t_4", "NT_1"])));
    }

    #[test]
    fn test_sentences_of_finite_grammar() {
        let g: Grammar = [
            Rule::new("a", ["b", "c", "d"]),
            Rule::new("c", ["x", "y", "z"]),
            Rule::new("c", ["1", "2", "3"]),
        ]
        .into_iter()
        .collect();

        let expected: BTreeSet<Vec<String>> = [
            sentence(&["b", "x", "y", "z", "d"]),
            sentence(&["b", "1", "2", "3", "d"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(g.sentences(), expected);
    }

    #[test]
    fn test_mutual_recursion_is_cut() {
        let g: Grammar = [
            Rule::new("s", ["a"]),
            Rule::new("a", ["x", "b"]),
            Rule::new("b", ["y", "a"]),
            Rule::new("b", ["z"]),
        ]
        .into_iter()
        .collect();

        assert!(!g.is_finite());
        let expected: BTreeSet<Vec<String>> =
            [sentence(&["x", "y"]), sentence(&["x", "z"])].into_iter().collect();
        assert_eq!(g.sentences(), expected);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut g = sample();
        let copied = g.clone();

        assert_eq!(copied.rules(), g.rules());
        assert_eq!(copied.symbols(), g.symbols());
        assert_eq!(copied.start_symbol(), g.start_symbol());

        let new_rule = Rule::new("NT_1", ["foo"]);
        g.add_rule(new_rule.clone());

        assert!(g.contains_rule(&new_rule));
        assert!(!copied.contains_rule(&new_rule));
    }
}
