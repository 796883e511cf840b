//! # emoji-client
//!
//! Typed client for the emoji catalog REST backend plus the session state
//! that remembers who is signed in.
//!
//! The crate runs in two environments:
//! - natively, over `reqwest`, with the token persisted to a file;
//! - in the browser (`wasm32` + feature `web`), over `fetch` via `gloo-net`,
//!   with the token persisted to `localStorage`.
//!
//! Callers read the token from [`state::session::SessionStore`], hand it to
//! [`net::api::ApiClient`] calls, and store the result of a login back into
//! the session.

pub mod config;
pub mod data;
pub mod net;
pub mod state;

pub use config::ClientConfig;
pub use net::api::{ApiClient, EmojiFeed};
pub use net::types::ApiError;
pub use state::session::{Session, SessionStore};
