//! Upload local files as one gist and hand back its URL.
//!
//! - `loader`: concurrent file reads into a path → content map
//! - `gist`: request/response types and the HTTP client that creates the gist
//! - `credential`: bearer token lookup
//! - `cli`, `output`, `clipboard`: the command-line surface

pub mod cli;
pub mod clipboard;
pub mod constants;
pub mod credential;
pub mod gist;
pub mod loader;
pub mod logging;
pub mod output;
