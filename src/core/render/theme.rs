use crate::core::data::colour::Colour;

const BACKGROUND_COLOUR: u32 = 0x353535FF;
const CONTROL_POINT_COLOUR: u32 = 0xDA2C38FF;
const CURVE_COLOUR: u32 = 0x87C38FFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Colour,
    pub control_point: Colour,
    pub curve: Colour,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Colour::from_hex(BACKGROUND_COLOUR),
            control_point: Colour::from_hex(CONTROL_POINT_COLOUR),
            curve: Colour::from_hex(CURVE_COLOUR),
        }
    }
}
