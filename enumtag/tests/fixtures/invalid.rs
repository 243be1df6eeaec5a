//! Test fixture: unbalanced syntax.

pub const RED: Color = Color(0); // json:"red"

pub fn broken() {
    let value = (1, 2;
