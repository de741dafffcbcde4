//! Domain layer - Row transforms and the rule tables they use

pub mod classifier;
pub mod knowledge_base;
pub mod reconciler;
pub mod rules;
pub mod table;

pub use classifier::TagClassifier;
pub use knowledge_base::{KnowledgeBase, OrganisationRecord};
pub use reconciler::reconcile_table;
pub use rules::{Rule, RuleBook, RuleSet};
pub use table::{Record, Table};
