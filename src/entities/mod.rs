pub mod admin_configs;
pub mod participants;

pub use admin_configs as admin_config_entity;
pub use participants as participant_entity;
