mod admin;
mod home;
mod login;
mod logout;
mod register;
mod router;

pub(crate) use router::router;
