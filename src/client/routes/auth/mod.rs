pub mod boss_status;
pub mod settings;

pub use boss_status::BossStatus;
pub use settings::Settings;
