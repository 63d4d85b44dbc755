// Dashboard state stores: explicit initial values and pure transitions for the
// state the web dashboard keeps between renders. Nothing here is persisted.

pub mod history;
pub mod notifications;
pub mod recording;
pub mod settings;
pub mod timeline;
