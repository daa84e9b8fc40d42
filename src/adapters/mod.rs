pub mod getresponse;
pub mod http;
