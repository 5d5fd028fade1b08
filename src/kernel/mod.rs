pub mod annotation;
pub mod capability;
pub mod effect;
pub mod event;
pub mod machine;
pub mod pending;
pub mod reactor;
pub mod state;
pub mod telemetry;
pub mod time;
pub mod view;
