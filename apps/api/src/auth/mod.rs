// Account signup/login, HS256 bearer tokens, and the request extractor that
// resolves the current user on protected routes.

pub mod extractor;
pub mod handlers;
pub mod jwt;
pub mod password;
