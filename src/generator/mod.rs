//! Feed generators.
//!
//! Two independent builders consume the same parsed catalog:
//!
//! - **Google**: RSS 2.0 document in the Merchant Center `g:` namespace
//! - **Yandex**: YML catalog document with a synthesized category taxonomy
//!
//! Both walk the pre-validated products in input order, build the document
//! in memory and serialize exactly once. They share no mutable state and
//! may run in parallel; each invocation starts from scratch.

pub mod categories;
pub mod google;
pub mod xml;
pub mod yandex;
