//! Judge split:
//! - run.rs: orchestration of one scoring call
//! - prompt.rs: fixed instructions and message assembly
//! - client.rs: the provider call

pub(crate) mod client;
pub(crate) mod prompt;
pub(crate) mod run;
