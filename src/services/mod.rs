pub mod chatbot;
pub mod connectivity;
