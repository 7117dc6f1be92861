//! Training prompts layered over the rules engine: void tracking,
//! suit-count estimation, and the win-intent advisor.

pub mod voids;
pub mod win_intent;

pub use voids::{
    compute_actual_void, get_void_prompt_lead, should_prompt_suit_count, VoidGrid,
    VoidPromptScope, VoidTrainingConfig,
};
pub use win_intent::{
    can_be_beaten_by_honor, evaluate_win_intent, remaining_honors_in_suit,
    should_prompt_win_intent, WinIntentAssessment, WinIntentConfig, WinIntentWarning,
};
