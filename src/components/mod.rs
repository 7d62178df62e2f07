//! UI component modules for the campaign page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and read shared state provided through
//! Leptos context; all remote traffic goes through `net::api`.

pub mod dialogs;
pub mod lucky_draw_panel;
pub mod participant_list;
pub mod winner_card;
