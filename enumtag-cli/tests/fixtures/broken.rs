pub struct Color(pub u8);

pub const RED: Color = Color(0); // json:"red"
pub fn unfinished() {
    let x = (1, 2;
