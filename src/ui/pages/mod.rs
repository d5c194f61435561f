pub mod lookup;
pub mod settings;

pub use lookup::LookupPage;
pub use settings::SettingsPage;
