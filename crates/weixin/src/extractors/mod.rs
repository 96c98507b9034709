// ABOUTME: Field extraction for WeChat article pages.
// ABOUTME: Declarative selector chains evaluated over a lenient parse tree.

//! Field extraction module.
//!
//! Each article field is described by an ordered chain of CSS selectors tried
//! in sequence until one yields a non-empty match; fields are evaluated
//! independently of one another and a total miss is simply `None`.
//!
//! Submodules:
//! - `compiled`: thread-safe compiled-selector cache.
//! - `select`: selector-chain text extraction and whitespace normalization.
//! - `wechat`: the five WeChat field rules.

pub mod compiled;
pub mod select;
pub mod wechat;
