//! neologism core library
//!
//! Dynamically modifiable context-free grammars: add and remove rules,
//! remove symbols or turn them into terminals, pick a start symbol and
//! enumerate the sentences the grammar derives. Grammars can be imported from
//! yacc files through bison.
//!
//! ```
//! use neologism_core::{Grammar, Rule};
//!
//! let mut grammar = Grammar::new();
//! grammar.add_rule(Rule::new("a", ["b", "c", "d"]));
//! grammar.add_rule(Rule::new("c", ["x", "y", "z"]));
//! grammar.add_rule(Rule::new("c", ["1", "2", "3"]));
//!
//! assert_eq!(grammar.start_symbol(), Some("a"));
//! assert_eq!(grammar.sentences().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod expansion;
pub mod grammar;
pub mod rule;
pub mod telemetry;
pub mod yacc;

pub use config::BisonConfig;
pub use error::{GrammarError, GrammarResult, YaccError, YaccResult};
pub use expansion::{all_combinations, Clause};
pub use grammar::{Grammar, YACC_ACCEPT_SYMBOL, YACC_END_SYMBOL};
pub use rule::Rule;
pub use telemetry::init_tracing;
pub use yacc::is_bison_available;

/// neologism version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
