mod notifier;

pub use notifier::{INotifier, StoreNotifier};
