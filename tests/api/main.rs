mod health_check;
mod login;
mod recipients;
