//! Offline emoji catalog served when the live list cannot be loaded.

use crate::net::types::{Emoji, EmojiPage};

/// Page size reported by the fallback envelope.
pub const FALLBACK_LIMIT: u32 = 50;

struct MockEmoji {
    id: i64,
    symbol: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    keywords: &'static [&'static str],
}

const MOCK_EMOJIS: &[MockEmoji] = &[
    MockEmoji {
        id: 1,
        symbol: "😀",
        title: "Grinning Face",
        description: "A classic smile conveying general happiness.",
        category: "Smileys",
        keywords: &["happy", "smile", "joy"],
    },
    MockEmoji {
        id: 2,
        symbol: "🚀",
        title: "Rocket",
        description: "Symbolizes fast progress or launching new ideas.",
        category: "Travel",
        keywords: &["launch", "startup", "space"],
    },
    MockEmoji {
        id: 3,
        symbol: "🎉",
        title: "Party Popper",
        description: "Used to celebrate special occasions and wins.",
        category: "Activities",
        keywords: &["celebration", "party", "congrats"],
    },
    MockEmoji {
        id: 4,
        symbol: "🤖",
        title: "Robot",
        description: "Represents technology, automation, or playful robotics.",
        category: "Objects",
        keywords: &["bot", "automation", "ai"],
    },
    MockEmoji {
        id: 5,
        symbol: "🌈",
        title: "Rainbow",
        description: "Often used for joy, hope, and inclusivity.",
        category: "Nature",
        keywords: &["hope", "color", "pride"],
    },
];

/// The bundled records, in catalog order.
#[must_use]
pub fn mock_emojis() -> Vec<Emoji> {
    MOCK_EMOJIS
        .iter()
        .map(|m| Emoji {
            id: m.id,
            symbol: m.symbol.to_owned(),
            title: m.title.to_owned(),
            description: Some(m.description.to_owned()),
            category: Some(m.category.to_owned()),
            keywords: m.keywords.iter().map(|k| (*k).to_owned()).collect(),
            submitter_email: None,
            can_delete: false,
        })
        .collect()
}

/// The bundled records wrapped as a first page.
#[must_use]
pub fn mock_page() -> EmojiPage {
    let items = mock_emojis();
    EmojiPage { total: items.len() as u64, items, limit: FALLBACK_LIMIT, offset: 0 }
}
