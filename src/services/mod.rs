pub mod availability;
pub mod email;
pub mod intake;
pub mod messaging;
pub mod notifier;
