pub mod catalog_route;
pub mod special_ai_request;
pub mod special_ai_response;
pub mod special_ai_route;
