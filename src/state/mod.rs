//! Client-side session state.
//!
//! DESIGN
//! ======
//! `storage` abstracts where the token is persisted; `session` owns the
//! in-memory session and keeps storage in step with it.

pub mod session;
pub mod storage;
