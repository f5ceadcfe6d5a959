#![forbid(unsafe_code)]

//! Terminal program runtime: an Elm-style model/update/view loop with
//! thread-backed subscriptions for timers.
//!
//! Applications implement [`program::Model`] and hand it to
//! [`program::Program::run`]. Periodic work is declared through
//! [`subscription::Every`]; the runtime reconciles declared
//! subscriptions after every update and stops timers the model no
//! longer asks for.

pub mod program;
pub mod subscription;

pub use program::{Cmd, Frame, Model, Program, ProgramConfig};
pub use subscription::{Every, StopSignal, SubId, Subscription, SubscriptionManager};
