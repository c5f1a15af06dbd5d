mod cabin;
mod destination;
mod event;
mod season;
mod user;
