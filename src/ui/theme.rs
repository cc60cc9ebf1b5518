use ratatui::style::Color;

pub const SKY_IDLE: Color = Color::Rgb(0xff, 0x98, 0x97);
pub const SKY_RUNNING: Color = Color::Rgb(0xea, 0x4d, 0x2c);
pub const GROUND: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const SUN: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const CLOCK_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const BUTTON_PRIMARY: Color = Color::Rgb(0x62, 0x00, 0xee);
pub const BUTTON_STOP: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const CHIP_BACKGROUND: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const CHIP_SELECTED: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_RUNNING: Color = Color::Rgb(0x22, 0xc5, 0x5e);
