//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render screen chrome and list items while reading shared
//! state from Leptos context providers; pages own route-scoped
//! orchestration and delegate rendering details here.

pub mod empty_state;
pub mod lesson_card;
pub mod page_header;
pub mod payment_row;
pub mod profile_card;
pub mod schedule_panel;
pub mod settings_panel;
pub mod stat_tile;
pub mod student_row;
pub mod tab_bar;
pub mod tutor_card;
