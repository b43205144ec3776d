//! Selection pool: draw-without-replacement over the challenge catalog.
//!
//! The pool holds the challenges not yet played this round. Every draw
//! removes what it returns, so no challenge is played twice in a round, and
//! every remaining challenge is equally likely to come next.

mod selection;

pub use selection::SelectionPool;
