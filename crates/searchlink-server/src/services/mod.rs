pub mod registration;

// Re-exports
pub use registration::RegistrationService;
