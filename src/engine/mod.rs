//! Scene graph engine - The host capability surface layouts call into.
//!
//! The engine manages the core data structures:
//! - Registry: Actor identity allocation and names
//! - Actor: Size negotiation/allocation/paint protocol and per-actor node state
//! - Handlers: Connect/disconnect/emit change notifications
//! - Paint: Paint and pick contexts with a translation stack
//! - Stage: Root actor list and the relayout/redraw cycle
//! - Container: The generic child-list protocol
//!
//! # Architecture
//!
//! Actors are trait objects behind `Rc`. Each owns an `ActorNode` that holds
//! what the host needs to know without downcasting:
//!
//! ```text
//! Stage (node #1)
//!   └─ BoxLayout (node #2, parent=#1, alloc=0,0 80x24, queued=REDRAW)
//!        ├─ Label (node #3, parent=#2, visible)
//!        └─ Rectangle (node #4, parent=#2, hidden)
//! ```
//!
//! Relayout and redraw requests are flags that bubble to the stage; the stage
//! turns them into passes on its next `update`.

mod registry;
mod actor;
mod container;
mod handlers;
mod paint;
mod stage;

pub use registry::*;
pub use actor::*;
pub use container::*;
pub use handlers::*;
pub use paint::*;
pub use stage::*;
