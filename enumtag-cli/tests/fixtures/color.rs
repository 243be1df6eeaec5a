#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(pub u8);

pub const RED: Color = Color(0); // json:"red"
pub const BLUE: Color = Color(1); // json:"blue"
pub const GREEN: Color = Color(2); /* json:"green" */
pub const BLACK: Color = Color(3); // no tag
