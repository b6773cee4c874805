//! Named action groups.
//!
//! The probability engine adjusts weights on groups of tool names rather
//! than single tools. Groups are shared between stimulus-specific rules,
//! trait preferences, and quirk effects; a tool may appear in several
//! groups and the deltas accumulate.

/// Escape and self-protection actions.
pub const ESCAPE: &[&str] = &["flee", "hide", "take_cover", "retreat"];

/// Direct confrontation actions.
pub const CONFRONT: &[&str] = &["attack", "threaten", "argue", "stun"];

/// Defensive-but-engaged actions.
pub const BRACE: &[&str] = &["defend", "take_cover", "flee", "attack"];

/// Outgoing social actions.
pub const OUTGOING: &[&str] = &["dialogue_response", "greet", "gossip", "join_group", "befriend"];

/// Withdrawal and avoidance actions.
pub const WITHDRAWN: &[&str] = &["avoid", "ignore", "leave_group", "hide"];

/// Volatile, unraveling reactions.
pub const VOLATILE: &[&str] = &["panic", "fidget", "show_confusion", "cry"];

/// Composed, deliberate actions.
pub const COMPOSED: &[&str] = &["focus_attention", "make_plan", "rest"];

/// Curiosity-driven actions.
pub const CURIOUS: &[&str] = &["investigate_anomaly", "examine_item", "ponder", "request_info"];

/// Methodical, orderly actions.
pub const METHODICAL: &[&str] = &["make_plan", "tidy_up", "focus_attention", "prepare_food_or_drink"];

/// Impulsive, scattered actions.
pub const IMPULSIVE: &[&str] = &["daydream", "create_distraction"];

/// Warm, cooperative actions.
pub const WARM: &[&str] = &["comfort", "offer_help", "apologize", "show_politeness"];

/// Abrasive, competitive actions.
pub const ABRASIVE: &[&str] = &["argue", "threaten", "deceive"];

/// Commanding, initiative-taking actions.
pub const COMMANDING: &[&str] = &["threaten", "persuade", "bargain", "show_impatience"];

/// Deferential, yielding actions.
pub const DEFERENTIAL: &[&str] = &["avoid", "apologize", "flee"];

/// Bold, exposure-seeking actions.
pub const DARING: &[&str] = &["attack", "approach", "create_distraction", "set_trap"];

/// Safety-seeking actions.
pub const SHELTERED: &[&str] = &["take_cover", "hide", "seek_shelter"];

/// Vigilance actions.
pub const VIGILANT: &[&str] = &["scan_for_threats", "glance"];

/// De-escalating responses to hostility.
pub const CONCILIATORY: &[&str] = &["dialogue_response", "show_politeness", "apologize"];

/// Expressive reactions to kindness.
pub const GRATIFIED: &[&str] = &["express_emotion", "laugh", "dialogue_response", "befriend"];

/// Helpful responses to a request.
pub const RESPONSIVE: &[&str] = &["dialogue_response", "offer_help", "advise"];

/// Inquisitive responses to the unexplained.
pub const INQUISITIVE: &[&str] = &["investigate_anomaly", "examine_item", "observe_environment", "ponder"];

/// Charmed responses to flirtation.
pub const CHARMED: &[&str] = &["befriend", "laugh", "dialogue_response", "show_politeness"];

/// Alarmed responses to an environmental threat.
pub const ALARMED: &[&str] = &["take_cover", "scan_for_threats", "seek_shelter"];

/// Heated responses to humiliation.
pub const INDIGNANT: &[&str] = &["argue", "threaten", "express_emotion", "dialogue_response"];

/// Low-mood expressions.
pub const DEJECTED: &[&str] = &["complain", "sigh", "avoid", "cry"];

/// High-mood expressions.
pub const BUOYANT: &[&str] = &["laugh", "greet", "offer_help", "befriend"];

/// Recuperative actions.
pub const RECUPERATIVE: &[&str] = &["rest", "daydream", "ponder"];
