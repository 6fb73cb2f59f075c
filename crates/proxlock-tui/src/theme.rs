use ratatui::style::Color;

/// Color palette for the landing page.
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Palette colors
    pub green: Color,
    pub blue: Color,
    pub yellow: Color,
    pub red: Color,

    // Semantic colors
    pub accent: Color,
    pub scramble: Color,
    pub link: Color,
    pub button_fg: Color,
    pub button_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Dark vault palette matching the web page
        Self {
            bg0: Color::Rgb(0x0d, 0x11, 0x17),
            bg1: Color::Rgb(0x16, 0x1b, 0x22),
            bg2: Color::Rgb(0x21, 0x26, 0x2d),
            fg0: Color::Rgb(0xe6, 0xed, 0xf3),
            fg1: Color::Rgb(0xc9, 0xd1, 0xd9),
            grey0: Color::Rgb(0x6e, 0x76, 0x81),
            grey1: Color::Rgb(0x8b, 0x94, 0x9e),
            green: Color::Rgb(0x3f, 0xb9, 0x50),
            blue: Color::Rgb(0x58, 0xa6, 0xff),
            yellow: Color::Rgb(0xd2, 0x99, 0x22),
            red: Color::Rgb(0xf8, 0x51, 0x49),
            accent: Color::Rgb(0x3f, 0xb9, 0x50),
            scramble: Color::Rgb(0x2e, 0xa0, 0x43),
            link: Color::Rgb(0x58, 0xa6, 0xff),
            button_fg: Color::Rgb(0x0d, 0x11, 0x17),
            button_bg: Color::Rgb(0x3f, 0xb9, 0x50),
        }
    }
}
