//! # vt-core
//!
//! Core domain models and pure logic for Voluntar.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! masked numeric inputs (CNPJ / phone), the action filter engine, slide
//! pagination and the local notification inbox. Everything here is synchronous
//! and side-effect free; I/O lives behind the traits in [`ports`].

// Public module exports
pub mod actions;
pub mod config;
pub mod ids;
pub mod input;
pub mod notifications;
pub mod pagination;
pub mod ports;

// Re-export commonly used types at the crate root
pub use actions::{ActionLocation, ActionRecord, FilterCriteria, FilterField, FilterOptions};
pub use config::AppConfig;
pub use ids::{ActionId, NotificationId};
pub use input::{
    ChangeEvent, ChangeTarget, Key, KeyDecision, KeyInput, MaskKind, MaskedInput, MaskedValue,
    ValidityHint,
};
pub use notifications::{Notification, NotificationInbox};
pub use pagination::{CardsPerView, CarouselEvent, CarouselState, CarouselStateMachine};
