mod error;
mod timeout;
