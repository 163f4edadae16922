//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route.

pub mod home;
pub mod sign_in;
pub mod sign_up;

// Re-export all page components for convenient access
pub use home::HomePage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
