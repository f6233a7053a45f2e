pub mod environment;
pub mod falling_body;
