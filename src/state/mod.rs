//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `pointer`) and composed into the
//! owned `ui` view state, so effects and components depend on small models.

pub mod pointer;
pub mod theme;
pub mod ui;
