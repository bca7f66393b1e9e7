pub mod admin;
pub mod data;
pub mod events;
pub mod new;
pub mod watch;
