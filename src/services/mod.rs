pub mod health;
pub mod notifier;
