pub mod chatbot_request;
pub mod chatbot_response;
pub mod chatbot_route;
