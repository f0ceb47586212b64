//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from plain values or signals handed in by the pages;
//! they never reach into context themselves.

pub mod link_list;
pub mod notice;
