//! Test fixture: tagged color constants.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u8);

pub const RED: Color = Color(0); // json:"red"
pub const GREEN: Color = Color(1); // json:"green"
pub const BLUE: Color = Color(2); // json:"blue"

/// Not exposed over JSON.
pub const TRANSPARENT: Color = Color(3);
