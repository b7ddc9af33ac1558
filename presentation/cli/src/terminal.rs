pub mod dialogs;
pub mod notifier;
