//! Capability traits for UI components
//!
//! This module defines the contracts that panels implement. Containers
//! never know what concrete widget they hold; they render and route input
//! through these traits, and every handler reports whether it consumed
//! the event so dispatch can stop at the first taker.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Screen                               │
//! │  (owns the panel registry, routes frames and mouse events)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  slot order
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │  Root    │   │  NavBar  │   │  Active  │
//!        │  panels  │   │ (tabs)   │   │ tab's    │
//!        └──────────┘   └──────────┘   │ panels   │
//!                                      └──────────┘
//!                     Implement traits:
//!                 Element (+ ScrollContent hooks)
//! ```
//!
//! # Traits Overview
//!
//! - [`Element`] - Base trait: geometry, render, mouse handlers
//! - [`ScrollContent`] - Content hook rendered inside a scrollable panel
//! - [`Handled`] - Result of offering an event to a component

mod component;
mod interactive;
mod scrollable;

pub use component::{Capability, Element};
pub use interactive::{Handled, MouseButton};
pub use scrollable::{ScrollContent, ScrollView};
