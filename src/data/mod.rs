//! Bundled static data.

pub mod mock_emojis;
