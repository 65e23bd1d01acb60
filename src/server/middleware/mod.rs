//! Request guards and session helpers shared by all controllers.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
