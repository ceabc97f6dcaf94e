pub mod events;
pub mod export;
pub mod houses;
pub mod results;
pub mod settings;
pub mod standings;
