mod character_client;

pub use character_client::CharacterClient;
