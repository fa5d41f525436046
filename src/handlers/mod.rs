// Handlers are split by authentication tier:
// - auth: public token acquisition (/auth/*)
// - users: JWT-protected user resource operations (/users/*)
pub mod auth;
pub mod users;
