// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig. Geteilter Zustand läuft über
// die Statics in lib.rs (READINGS, CONNECTIVITY), nicht über Channels.

pub mod http;
pub mod sensor;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use http::http_server_task;
pub use sensor::sensor_task;
pub use wifi::{connection_task, net_task};
