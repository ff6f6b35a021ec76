// HTTP side of the toolkit: the REST client and the smoke runner built on it
pub mod client;
pub mod smoke;
