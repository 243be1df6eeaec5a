//! Test fixture: tagged values mixed with declarations that are skipped.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status(&'static str);

pub const ACTIVE: Status = Status("A"); // json:"active"
pub const INACTIVE: Status = Status("I"); /* json:"inactive" */
pub const PENDING: Status = Status("P"); // pending review, json:"pending" for clients
pub const UNKNOWN: Status = Status("?"); // json:unknown
pub const ARCHIVED: Status = Status("X"); // archived

pub static DEFAULT: Status = ACTIVE; // json:"default"

const _: () = (); // json:"unit"

pub fn statuses() -> Vec<Status> {
    let (first, second) = (ACTIVE, INACTIVE); // json:"pair"
    let local = PENDING; // json:"local"
    vec![first, second, local]
}
