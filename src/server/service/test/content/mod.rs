use super::*;

mod destination;
mod validation;
