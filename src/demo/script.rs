//! The canned conversation replayed by the landing page demo.

use serde::Serialize;

/// Who is speaking in a demo turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn is_user(self) -> bool {
        matches!(self, Self::User)
    }
}

/// One scripted chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: &'static str,
}

pub const CONVERSATION: &[Turn] = &[
    Turn {
        role: Role::User,
        text: "Help me plan a beach wedding for 100 guests in June!",
    },
    Turn {
        role: Role::Bot,
        text: "I'd love to help! Let me put together a plan. For a June beach wedding with 100 guests, I'd recommend starting with these key areas:",
    },
    Turn {
        role: Role::Bot,
        text: "🏖️ Venue: Sunset Cove Beach — permits available for June\n💐 Florals: Tropical arrangements with coral peonies\n🍽️ Catering: Seafood buffet, ~$85/guest\n🎵 Music: Steel drum duo for ceremony, DJ for reception",
    },
    Turn {
        role: Role::User,
        text: "That sounds amazing! What about the budget?",
    },
    Turn {
        role: Role::Bot,
        text: "Based on your guest count, here's an estimated breakdown:\n\n📊 Total estimate: $28,500\n• Venue & permits: $4,200\n• Catering & bar: $9,800\n• Photography: $3,500\n• Decor & florals: $4,000\n• Entertainment: $2,800\n• Attire & beauty: $2,400\n• Misc & buffer: $1,800\n\nWant me to find vendors in your area?",
    },
];
