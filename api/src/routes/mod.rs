pub mod chatbot;
pub mod color;
pub mod health_route;
pub mod special_ai;
