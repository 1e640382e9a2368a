#![doc(test(attr(deny(warnings))))]

//! Category Combo provides a searchable, single-select category picker with
//! inline creation, the transaction form that owns its selection, and a
//! terminal host that runs it interactively.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod form;
pub mod selector;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Category Combo tracing initialized.");
    });
}
