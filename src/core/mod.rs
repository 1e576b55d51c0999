pub mod build_request;
pub mod display;
pub mod load_config;
pub mod manual_input;
pub mod parse_response;
pub mod prompt;
pub mod send_request;
pub mod session;
