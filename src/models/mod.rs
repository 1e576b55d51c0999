pub mod args;
pub mod endpoint_config;
pub mod http_response;
pub mod normalized_result;
pub mod resolved_request;
pub mod test_params;
