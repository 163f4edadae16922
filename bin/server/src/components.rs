//! Reusable UI components shared by the pages.

pub mod auth_card;
pub mod auth_widget;

pub use auth_card::AuthCard;
pub use auth_widget::AuthWidget;
