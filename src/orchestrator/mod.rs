//! Orchestrator: the public contract for presentation and challenges.
//!
//! Presentation calls in (`start_round`, `begin_selected_challenge`,
//! `report_outcome`, `continue_after_summary`, `return_to_menu`,
//! `on_enter_presentation`) and gets back the screen to load next.
//! Challenges only ever see their [`MicrogameTicket`](crate::microgame::MicrogameTicket).

mod coordinator;
mod presentation;

pub use coordinator::Orchestrator;
pub use presentation::{ChallengeLaunch, ScreenId};
